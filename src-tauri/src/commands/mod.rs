//! Tauri IPC command handlers.
//!
//! This module is the entry point for frontend `invoke()` calls. Command handlers
//! perform parameter parsing and forward to the `services` layer for business logic.
//! Commands should not contain business logic directly. Path resolution in
//! `files` is shared with the window drag-and-drop hook and builds without the
//! desktop shell.

pub mod files;

#[cfg(feature = "desktop")]
pub mod config;
#[cfg(feature = "desktop")]
pub mod upload;
#[cfg(feature = "desktop")]
pub mod view;
