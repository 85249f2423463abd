//! Archive domain model.
//!
//! # Responsibility
//! - Define the canonical item shapes persisted in the archive document.
//! - Keep one flat, order-keyed item sequence for widgets and dividers.
//!
//! # Invariants
//! - Every item is identified by a stable, non-blank `ItemId`.
//! - Display order is defined only by the `order` field; storage position is
//!   used solely as the tie-break between equal `order` values.

pub mod item;
pub mod patch;
