//! Status-code checks shared by geocoding requests.

use crate::error::GeoError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. 429 becomes
/// [`GeoError::RateLimited`] (the `Retry-After` header is parsed, falling back
/// to 60 s); any other non-success status becomes [`GeoError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GeoError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeoError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(GeoError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
