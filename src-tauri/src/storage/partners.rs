//! Partner project list for the project picker.

use std::path::Path;

use crate::error::AppError;
use crate::models::partner::{Partner, PartnersConfig};

pub const PARTNERS_FILE: &str = "partners.json";

/// Load partners from `path`. A missing file means no partners are configured.
pub async fn load_partners(path: &Path) -> crate::error::Result<Vec<Partner>> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No partners file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let config: PartnersConfig = serde_json::from_str(&raw).map_err(|e| {
        AppError::Storage(format!(
            "Error parsing partners config {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(config.partners)
}
