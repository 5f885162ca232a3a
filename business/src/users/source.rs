//! Read-only users endpoint.

use log::{error, info};
use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

use super::row::UserRow;
use crate::config::BusinessConfig;
use crate::http::{Client, HttpError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersPage {
    pub users: Vec<RemoteUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub gender: String,
    pub address: Option<RemoteAddress>,
    pub company: Option<RemoteCompany>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAddress {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCompany {
    pub name: Option<String>,
}

impl From<RemoteUser> for UserRow {
    fn from(user: RemoteUser) -> Self {
        Self {
            key: Ustr::from(user.id.to_string().as_str()),
            id: user.id,
            name: format!("{} {}", user.first_name, user.last_name),
            username: user.username,
            email: user.email,
            phone: user.phone,
            age: user.age,
            birth_date: user.birth_date,
            gender: user.gender,
            city: user.address.and_then(|a| a.city).unwrap_or_default(),
            company: user.company.and_then(|c| c.name).unwrap_or_default(),
        }
    }
}

/// Parses a users page body into grid rows.
pub fn parse_users(body: &[u8]) -> Result<Vec<UserRow>, SourceError> {
    let page: UsersPage =
        serde_json::from_slice(body).map_err(|err| SourceError::Parse(err.to_string()))?;
    Ok(page.users.into_iter().map(UserRow::from).collect())
}

/// Fetches the configured users page once. No retry.
pub async fn fetch_users(config: &BusinessConfig) -> Result<Vec<UserRow>, SourceError> {
    let url = config.users_url();
    info!("Fetching users from {url}");

    let response = Client::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .inspect_err(|err| error!("Failed to fetch users: {err}"))?;

    if !response.is_success() {
        error!("Users endpoint returned status {}", response.status);
        return Err(SourceError::Status(response.status));
    }

    let rows = parse_users(&response.body)
        .inspect_err(|err| error!("Failed to parse users: {err}"))?;
    info!("Fetched {} users", rows.len());
    Ok(rows)
}
