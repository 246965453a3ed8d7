use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FunnelError {
    #[error("failed to parse funnel config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid funnel config: {0}")]
    InvalidConfig(String),
    #[error("browser window is not available")]
    NoWindow,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
}

impl FunnelError {
    pub fn dom(err: JsValue) -> Self {
        FunnelError::Dom(js_to_string(&err))
    }
}

pub fn js_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_error_names_target_and_reason() {
        let err = FunnelError::Navigation {
            url: "https://pay.example/checkout".to_string(),
            reason: "SecurityError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "navigation to https://pay.example/checkout failed: SecurityError"
        );
    }

    #[test]
    fn invalid_config_carries_its_message() {
        let err = FunnelError::InvalidConfig("spots_start must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid funnel config: spots_start must be at least 1"
        );
    }
}
