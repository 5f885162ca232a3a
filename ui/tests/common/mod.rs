use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long to let the mock server answer the startup fetch.
pub const NETWORK_WAIT_MS: u64 = 200;

/// Frames needed for queued actions to show up on screen.
pub const UI_PROPAGATION_FRAMES: usize = 5;

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    /// App against a mock API serving `users_body()`; nothing fetched yet.
    pub async fn new_app() -> Self {
        Self::new_app_with(ResponseTemplate::new(200).set_body_json(users_body())).await
    }

    pub async fn new_app_with(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// App with the startup fetch already applied.
    #[allow(unused)]
    pub async fn loaded() -> Self {
        let mut ctx = Self::new_app().await;
        wait_for_network(ctx.harness_mut()).await;
        ctx
    }
}

#[allow(unused)]
pub fn settle(harness: &mut Harness<'_, RosterApp>) {
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }
}

/// Runs a frame, lets the fetch task finish, then renders its result.
#[allow(unused)]
pub async fn wait_for_network(harness: &mut Harness<'_, RosterApp>) {
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(NETWORK_WAIT_MS)).await;
    settle(harness);
}

#[allow(unused)]
pub fn user_json(id: u64, first: &str, last: &str, gender: &str, city: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": first,
        "lastName": last,
        "username": format!("{}{}", first.to_lowercase(), id),
        "email": format!("{}.{}@x.dummyjson.com", first.to_lowercase(), last.to_lowercase()),
        "phone": format!("+1 555-01{id:02}"),
        "age": 20 + id,
        "birthDate": format!("199{}-{}-{}", id % 10, id % 12 + 1, id % 28 + 1),
        "gender": gender,
        "address": { "city": city },
        "company": { "name": format!("{last} Group") }
    })
}

/// Three users, one per city.
pub fn users_body() -> serde_json::Value {
    json!({
        "users": [
            user_json(1, "Emily", "Johnson", "female", "Phoenix"),
            user_json(2, "Michael", "Williams", "male", "Houston"),
            user_json(3, "Sophia", "Brown", "female", "Washington"),
        ],
        "total": 3,
        "skip": 0,
        "limit": 100
    })
}
