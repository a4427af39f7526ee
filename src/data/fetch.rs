use gloo_net::http::Request;

use super::product::Product;
use crate::config;

/// Why the startup fetch failed. This is the only failure domain in the
/// whole app; callers degrade to `Product::fallback` and the error panels.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Network(String),
    Status(u16),
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Status(code) => write!(f, "unexpected HTTP status {code}"),
            Self::Parse(msg) => write!(f, "malformed product document: {msg}"),
        }
    }
}

/// Fetches the product document. Single attempt, no retry.
pub async fn load_product() -> Result<Product, LoadError> {
    let response = Request::get(config::SOFTWARE_DATA_PATH)
        .send()
        .await
        .map_err(|err| LoadError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| LoadError::Network(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| LoadError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_messages_name_the_cause() {
        assert_eq!(
            LoadError::Status(404).to_string(),
            "unexpected HTTP status 404"
        );
        assert!(LoadError::Parse("eof".to_string())
            .to_string()
            .contains("malformed"));
    }
}
