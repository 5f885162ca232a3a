use log::debug;
use roster_business::GridAction;
use roster_states::StateSyncStatus;

use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Fires the startup fetch once.
    fn ensure_fetch(&mut self, ctx: &egui::Context) {
        if self.state.fetch_spawned {
            return;
        }
        self.state.fetch_spawned = true;
        self.state.grid.dispatch(GridAction::FetchStarted);
        widgets::spawn_fetch(
            self.state.config.clone(),
            self.state.grid.dispatcher(),
            ctx.clone(),
        );
    }

    /// Applies work that arrived since the last frame: fetch results and a
    /// search query whose debounce has run out.
    fn sync(&mut self) {
        let state = &mut self.state;
        state.time.tick();
        state.grid.drain();
        if let Some(query) = state.search.poll(state.time.now()) {
            state.grid.dispatch(GridAction::SetSearch(query));
        }
        state
            .surface
            .sync(state.grid.state().surface_generation());
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_fetch(ctx);
        self.sync();

        let state = &mut self.state;
        ctx.set_theme(state.theme);

        let now = state.time.now();
        let grid = state.grid.state();
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            widgets::top_bar(ui, &mut state.theme);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::toolbar(ui, &mut state.search, grid.layout(), now, &mut actions);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} · You can drag rows and column headers.",
                    grid.summary()
                ));
                if grid.is_loading() {
                    ui.spinner();
                    ui.label("Loading users...");
                }
            });
            ui.add_space(4.0);

            let total = widgets::users_table(
                ui,
                grid,
                &mut state.surface,
                &mut state.pending_delete,
                &mut actions,
            );
            ui.separator();
            widgets::pagination_bar(ui, &mut state.surface, total);
        });

        widgets::delete_confirm(ctx, &mut state.pending_delete, &mut actions);

        if actions.iter().any(|action| *action == GridAction::GlobalReset) {
            state.pending_delete = None;
        }
        for action in actions {
            debug!("UI action: {action:?}");
            state.grid.dispatch(action);
        }
        state
            .surface
            .sync(state.grid.state().surface_generation());

        if state.grid.status() == StateSyncStatus::Dirty {
            state.grid.mark_clean();
            ctx.request_repaint();
        }
        if let Some(wait) = state.search.remaining(state.time.now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
