use reqwest::header::HeaderValue;
use reqwest::{Client, Response, StatusCode, header};
use thiserror::Error;

pub fn new_client(token: &str) -> Result<Client, UpstreamError> {
    let mut headers = header::HeaderMap::new();
    let mut authorization_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
    authorization_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization_value);

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

/// Turns a non-2xx response into an error carrying the response body.
pub async fn ensure_success(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(UpstreamError::Status { status, body })
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("prediction '{id}' ended with status '{status}': {}", .error.as_deref().unwrap_or("no error given"))]
    PredictionFailed { id: String, status: String, error: Option<String> },
    #[error("prediction did not finish in time")]
    PredictionTimedOut,
}
