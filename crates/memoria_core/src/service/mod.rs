//! Archive use-case services.
//!
//! # Responsibility
//! - Turn UI mutation intents into whole-document writes.
//! - Keep the boundary layer decoupled from storage details.

pub mod archive_service;
