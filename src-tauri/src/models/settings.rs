use serde::{Deserialize, Serialize};

/// Default base URL of the upload service.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
/// Default destination path template for the pre-upload existence check.
pub const DEFAULT_DESTINATION_TEMPLATE: &str = "{project_id}/{version}/{file_name}";

/// Application-level settings persisted to settings.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Base URL serving `/check-file` and `/upload`.
    pub server_url: String,
    /// Destination path template, see `services::destination`.
    pub destination_template: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            destination_template: DEFAULT_DESTINATION_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_camel_case_keys() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("serverUrl"), "got: {}", json);
        assert!(json.contains("destinationTemplate"), "got: {}", json);
        assert!(!json.contains("server_url"), "got: {}", json);
    }

    #[test]
    fn defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.server_url, "http://localhost:8080");
        assert_eq!(
            settings.destination_template,
            "{project_id}/{version}/{file_name}"
        );
    }

    #[test]
    fn partial_json_is_rejected() {
        // Stored settings must be complete; the store layer falls back to defaults.
        let parsed = serde_json::from_str::<AppSettings>(r#"{"serverUrl":"http://x"}"#);
        assert!(parsed.is_err());
    }
}
