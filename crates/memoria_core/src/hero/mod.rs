//! Hero banner selection policies.
//!
//! # Responsibility
//! - Pick carousel widgets without repeats until every widget was shown.
//! - Rotate caption phrases over built-in and custom phrases.
//! - Project rich-text thoughts into short plain-text previews.
//!
//! # Invariants
//! - Selection state lives in explicit values owned by the caller.
//! - Randomness is injected through `rand::Rng`, so callers can seed it.

pub mod carousel;
pub mod phrases;
pub mod preview;
