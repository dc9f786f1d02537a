//! Backend API Wrappers
//!
//! Frontend bindings to the redirect service's REST endpoints, organized by domain.

mod auth;
mod redirects;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

// Re-export all public items
pub use auth::*;
pub use redirects::*;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await?;
    decode(url, response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(url).json(body)?.send().await?;
    decode(url, response).await
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    response.json::<T>().await.map_err(ApiError::from)
}
