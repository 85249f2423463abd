//! Ordering and sectioning over the flat item sequence.
//!
//! # Responsibility
//! - Derive divider-delimited sections for rendering.
//! - Compute insert positions and drag-and-drop renumbering.
//! - Track which divider is in view and index dividers for navigation.
//!
//! # Invariants
//! - Every consumer sorts by `order` with a stable sort, so items sharing an
//!   `order` keep their storage sequence.
//! - Functions here are pure over the item slice; none of them persist.

pub mod navigator;
pub mod reorder;
pub mod sections;
pub mod viewport;
