//! Auth Endpoints

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{LoginArgs, LoginResponse};
use super::post_json;

/// `POST /api/login`
pub async fn login(config: &AppConfig, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    log::debug!("[AUTH] login attempt for {}", username);
    post_json(&config.login_url(), &LoginArgs { username, password }).await
}
