//! Local persistence and configuration files.
//!
//! Settings live in a JSON key-value store (tauri-plugin-store) written to
//! disk on every save. The partner list is a read-only `partners.json`.

pub mod partners;
#[cfg(feature = "desktop")]
pub mod settings;
