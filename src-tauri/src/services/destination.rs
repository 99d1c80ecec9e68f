//! Destination path template for the pre-upload existence check.
//!
//! The server owns the layout of stored artifacts; the client only knows it
//! through a configured template with `{project_id}`, `{version}` and
//! `{file_name}` placeholders.

use regex::Regex;

use crate::error::AppError;

const PLACEHOLDERS: [&str; 3] = ["project_id", "version", "file_name"];

#[derive(Debug, Clone)]
pub struct DestinationTemplate {
    template: String,
}

impl DestinationTemplate {
    /// Parse a template, rejecting unknown placeholders and templates that
    /// omit any of the three required ones.
    pub fn new(template: &str) -> crate::error::Result<Self> {
        let re = Regex::new(r"\{([^{}]*)\}")
            .map_err(|e| AppError::Internal(format!("Regex compile error: {}", e)))?;
        let mut seen: Vec<&str> = Vec::new();
        for caps in re.captures_iter(template) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            if !PLACEHOLDERS.contains(&name) {
                return Err(AppError::Internal(format!(
                    "Unknown placeholder {{{}}} in destination template",
                    name
                )));
            }
            seen.push(name);
        }
        if let Some(missing) = PLACEHOLDERS.iter().find(|p| !seen.contains(*p)) {
            return Err(AppError::Internal(format!(
                "Destination template must contain {{{}}}",
                missing
            )));
        }
        Ok(Self {
            template: template.to_string(),
        })
    }

    pub fn render(&self, project_id: &str, version: &str, file_name: &str) -> String {
        self.template
            .replace("{project_id}", project_id)
            .replace("{version}", version)
            .replace("{file_name}", file_name)
    }
}
