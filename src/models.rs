//! Frontend Models
//!
//! Data structures matching the backend's JSON shapes.

use serde::{Deserialize, Serialize};

/// A request URL and the URL it redirects to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectEntry {
    pub request_url: String,
    pub redirect_url: String,
}

impl RedirectEntry {
    pub fn new(request_url: impl Into<String>, redirect_url: impl Into<String>) -> Self {
        Self {
            request_url: request_url.into(),
            redirect_url: redirect_url.into(),
        }
    }
}

/// How the backend should locate an existing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKey {
    /// 1-based position in the unfiltered server list
    Position(u32),
    /// Request URL as it was before any local edit
    RequestUrl(String),
}

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/redirects`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action")]
pub enum RedirectAction {
    #[serde(rename = "add")]
    Add { request_url: String, redirect_url: String },
    #[serde(rename = "update")]
    UpdateAt { index: u32, request_url: String, redirect_url: String },
    #[serde(rename = "update")]
    UpdateByKey { init_request_url: String, request_url: String, redirect_url: String },
    #[serde(rename = "delete")]
    DeleteAt { index: u32 },
    #[serde(rename = "delete")]
    DeleteByKey { request_url: String },
}

impl RedirectAction {
    pub fn add(entry: RedirectEntry) -> Self {
        Self::Add {
            request_url: entry.request_url,
            redirect_url: entry.redirect_url,
        }
    }

    /// Replace the entry identified by `key` with `entry`
    pub fn update(key: EntryKey, entry: RedirectEntry) -> Self {
        match key {
            EntryKey::Position(index) => Self::UpdateAt {
                index,
                request_url: entry.request_url,
                redirect_url: entry.redirect_url,
            },
            EntryKey::RequestUrl(init_request_url) => Self::UpdateByKey {
                init_request_url,
                request_url: entry.request_url,
                redirect_url: entry.redirect_url,
            },
        }
    }

    pub fn delete(key: EntryKey) -> Self {
        match key {
            EntryKey::Position(index) => Self::DeleteAt { index },
            EntryKey::RequestUrl(request_url) => Self::DeleteByKey { request_url },
        }
    }

    /// Action name as sent on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::UpdateAt { .. } | Self::UpdateByKey { .. } => "update",
            Self::DeleteAt { .. } | Self::DeleteByKey { .. } => "delete",
        }
    }
}

/// Response of `POST /api/redirects`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// 1-based position of the affected entry; zero or negative means none
    #[serde(default)]
    pub index: Option<i64>,
}

impl MutationResponse {
    /// Position to scroll to, when the server named one
    pub fn scroll_position(&self) -> Option<u32> {
        self.index
            .filter(|index| *index > 0)
            .and_then(|index| u32::try_from(index).ok())
    }
}
