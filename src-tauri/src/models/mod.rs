//! Data models for the aar-uploader application.
//!
//! Shared data structure definitions used across the application: selected
//! files, upload form/request/result types, settings and the partner list.

pub mod file;
pub mod partner;
pub mod settings;
pub mod upload;
