use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::review::Review;
use gloo_net::http::Request;
use leptos::logging::{error, log, warn};

/// Fetches the review listing once. Nothing is retried.
pub async fn fetch_reviews(config: &ApiConfig) -> Result<Vec<Review>, FetchError> {
    let url = config.reviews_url();
    log!("[FETCH] GET {}", url);

    let outcome = request_reviews(&url).await;
    match &outcome {
        Ok(reviews) => log!("[FETCH] Received {} reviews from {}", reviews.len(), url),
        Err(err) => error!("[FETCH] Failed to load reviews from {}: {}", url, err),
    }
    outcome
}

async fn request_reviews(url: &str) -> Result<Vec<Review>, FetchError> {
    let response = Request::get(url).send().await?;
    // The body decides the outcome, whatever the status
    if !response.ok() {
        warn!("[FETCH] {} answered {} {}", url, response.status(), response.status_text());
    }
    let body = response.text().await?;
    decode_reviews(&body)
}

/// Parses a listing body. Anything other than a JSON array of reviews is
/// rejected.
pub fn decode_reviews(body: &str) -> Result<Vec<Review>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
