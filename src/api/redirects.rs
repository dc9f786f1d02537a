//! Redirect Endpoints
//!
//! Listing and mutating redirect entries.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{MutationResponse, RedirectAction, RedirectEntry};
use super::{get_json, post_json};

/// `GET /api/redirects`: the full list in server order
pub async fn list_redirects(config: &AppConfig) -> Result<Vec<RedirectEntry>, ApiError> {
    get_json(&config.redirects_url()).await
}

/// `POST /api/redirects` with one add/update/delete action
pub async fn mutate_redirect(config: &AppConfig, action: &RedirectAction) -> Result<MutationResponse, ApiError> {
    log::debug!("[API] {} -> {}", action.name(), config.redirects_url());
    post_json(&config.redirects_url(), action).await
}
