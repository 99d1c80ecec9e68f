//! Business logic layer.
//!
//! This module contains the upload controller and the pieces it is built
//! from: selection formatting, validation, the destination template, the
//! existence check, overwrite confirmation and simulated progress. Called by
//! the `commands` layer; delegates HTTP interactions to the `api` layer and
//! rendering to an `UploadView`.

pub mod confirm;
pub mod destination;
pub mod existence;
pub mod progress;
pub mod selection;
pub mod upload_controller;
pub mod validation;
pub mod view;
