use serde::{Deserialize, Serialize};

/// A partner project offered in the project picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: u64,
    pub name: String,
}

/// Shape of `partners.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnersConfig {
    #[serde(default)]
    pub partners: Vec<Partner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partners_file() {
        let cfg: PartnersConfig = serde_json::from_str(
            r#"{"partners":[{"id":42,"name":"Acme Bank"},{"id":7,"name":"Credit Union"}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.partners.len(), 2);
        assert_eq!(cfg.partners[0], Partner { id: 42, name: "Acme Bank".into() });
    }

    #[test]
    fn missing_partners_key_is_empty() {
        let cfg: PartnersConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.partners.is_empty());
    }
}
