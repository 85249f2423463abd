//! Core domain logic for the Memoria archive.
//! This crate is the single source of truth for ordering and section invariants.

pub mod hero;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use hero::carousel::CarouselPicker;
pub use hero::phrases::{all_phrases, PhraseRotator, DEFAULT_PHRASES};
pub use hero::preview::thought_preview;
pub use layout::navigator::{divider_index, DividerGroup, DividerIndex};
pub use layout::reorder::{drop_position, reorder_on_drop, DragState, DropPosition};
pub use layout::sections::{
    compute_insert_order, derive_sections, next_order, plan_insert, shift_for_insert,
    sorted_by_order, InsertPlan, Section,
};
pub use layout::viewport::{intersection_ratio, DividerRect, VisibleSectionTracker};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{
    new_item_id, AppData, DividerItem, Item, ItemId, ItemValidationError, MemoryWidget,
    ThoughtWidget, Widget,
};
pub use model::patch::ItemPatch;
pub use service::archive_service::{
    ArchiveError, ArchiveService, NewMemory, NewThought, DEFAULT_DIVIDER_LABEL,
};
pub use store::{DocumentStore, JsonFileStore, MemoryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
