//! Archive mutation service.
//!
//! # Responsibility
//! - Own the optimistic in-memory snapshot of the archive document.
//! - Apply add/update/delete/reorder/phrase intents and persist wholesale.
//!
//! # Invariants
//! - The snapshot is updated before the store write and is kept when the
//!   write fails; `refresh()` reconciles with storage.
//! - Every item write is validated first; invalid input never reaches the
//!   snapshot.
//! - Unknown ids are not errors: the intent reports `false` and nothing is
//!   written.

use crate::layout::reorder::{reorder_on_drop, DropPosition};
use crate::layout::sections::{derive_sections, next_order, plan_insert, Section};
use crate::model::item::{
    AppData, DividerItem, Item, ItemId, ItemValidationError, MemoryWidget, ThoughtWidget,
    WIDGET_MIN_HEIGHT, WIDGET_MIN_WIDTH,
};
use crate::model::patch::ItemPatch;
use crate::store::{DocumentStore, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Label used when a divider is created without one.
pub const DEFAULT_DIVIDER_LABEL: &str = "Новый раздел";

/// Errors from archive service operations.
#[derive(Debug)]
pub enum ArchiveError {
    /// Item failed validation; nothing was changed.
    Validation(ItemValidationError),
    /// An item with this id already exists.
    DuplicateId(ItemId),
    /// Phrase is empty after trim.
    BlankPhrase,
    /// Initial load or refresh failed.
    Load(StoreError),
    /// Snapshot changed but the store write failed.
    SaveFailed(StoreError),
}

impl Display for ArchiveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "item already exists: {id}"),
            Self::BlankPhrase => write!(f, "phrase must not be blank"),
            Self::Load(err) => write!(f, "load failed: {err}"),
            Self::SaveFailed(err) => write!(f, "save failed: {err}"),
        }
    }
}

impl Error for ArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Load(err) | Self::SaveFailed(err) => Some(err),
            Self::DuplicateId(_) | Self::BlankPhrase => None,
        }
    }
}

impl From<ItemValidationError> for ArchiveError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Input for a new photo memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMemory {
    pub image_data: String,
    pub caption: String,
}

/// Input for a new thought.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewThought {
    pub title: String,
    pub content: String,
    pub flavor_text: String,
}

/// Archive service facade over a document store.
pub struct ArchiveService<S: DocumentStore> {
    store: S,
    data: AppData,
}

impl<S: DocumentStore> ArchiveService<S> {
    /// Loads the current document from `store`.
    pub fn open(store: S) -> Result<Self, ArchiveError> {
        let data = store.load().map_err(ArchiveError::Load)?;
        Ok(Self { store, data })
    }

    /// Re-reads the stored document, discarding unsaved local changes.
    pub fn refresh(&mut self) -> Result<(), ArchiveError> {
        self.data = self.store.load().map_err(ArchiveError::Load)?;
        Ok(())
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sections(&self) -> Vec<Section<'_>> {
        derive_sections(&self.data.items)
    }

    /// Adds a memory into the section anchored at `visible_divider_id`.
    pub fn add_memory(
        &mut self,
        input: NewMemory,
        visible_divider_id: Option<&str>,
    ) -> Result<ItemId, ArchiveError> {
        let plan = plan_insert(&self.data.items, visible_divider_id);
        let memory = MemoryWidget::new(input.image_data, input.caption, plan.order);
        self.insert_planned(memory.into(), plan.shifted)
    }

    /// Adds a thought into the section anchored at `visible_divider_id`.
    pub fn add_thought(
        &mut self,
        input: NewThought,
        visible_divider_id: Option<&str>,
    ) -> Result<ItemId, ArchiveError> {
        let plan = plan_insert(&self.data.items, visible_divider_id);
        let thought = ThoughtWidget::new(input.title, input.content, input.flavor_text, plan.order);
        self.insert_planned(thought.into(), plan.shifted)
    }

    /// Appends a divider after every existing item.
    pub fn add_divider(&mut self, label: &str) -> Result<ItemId, ArchiveError> {
        let label = match label.trim() {
            "" => DEFAULT_DIVIDER_LABEL,
            _ => label,
        };
        let divider = DividerItem::new(label, next_order(&self.data.items));
        let id = divider.id.clone();
        self.add_item(divider.into())?;
        Ok(id)
    }

    /// Adds `item` as-is and keeps the storage sequence sorted by order.
    pub fn add_item(&mut self, item: Item) -> Result<(), ArchiveError> {
        item.validate()?;
        if self.data.find(item.id()).is_some() {
            return Err(ArchiveError::DuplicateId(item.id().to_string()));
        }

        info!(
            "event=item_add module=service status=start kind={} order={}",
            item.kind_name(),
            item.order()
        );
        self.data.items.push(item);
        self.data.items.sort_by_key(Item::order);
        self.persist("item_add")
    }

    /// Merges `patch` onto the item with `id`.
    ///
    /// Returns `Ok(false)` when no such item exists.
    pub fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Result<bool, ArchiveError> {
        let Some(current) = self.data.find(id) else {
            return Ok(false);
        };
        let mut updated = current.clone();
        patch.apply_to(&mut updated);
        updated.validate()?;

        if let Some(slot) = self.data.find_mut(id) {
            *slot = updated;
        }
        self.persist("item_update")?;
        Ok(true)
    }

    /// Resizes a widget, clamping to the minimum widget size.
    ///
    /// Returns `Ok(false)` for unknown ids and for dividers.
    pub fn resize_widget(
        &mut self,
        id: &str,
        width: u32,
        height: u32,
    ) -> Result<bool, ArchiveError> {
        match self.data.find(id) {
            Some(item) if !item.is_divider() => {}
            _ => return Ok(false),
        }
        let patch = ItemPatch {
            width: Some(width.max(WIDGET_MIN_WIDTH)),
            height: Some(height.max(WIDGET_MIN_HEIGHT)),
            ..ItemPatch::default()
        };
        self.update_item(id, &patch)
    }

    /// Flips the collapsed flag of a divider.
    ///
    /// Returns `Ok(false)` for unknown ids and for widgets.
    pub fn toggle_collapsed(&mut self, id: &str) -> Result<bool, ArchiveError> {
        let Some(collapsed) = self
            .data
            .find(id)
            .and_then(Item::as_divider)
            .map(|divider| divider.collapsed)
        else {
            return Ok(false);
        };
        let patch = ItemPatch {
            collapsed: Some(!collapsed),
            ..ItemPatch::default()
        };
        self.update_item(id, &patch)
    }

    /// Removes the item with `id`.
    ///
    /// Returns `Ok(false)` when no such item exists.
    pub fn delete_item(&mut self, id: &str) -> Result<bool, ArchiveError> {
        let before = self.data.items.len();
        self.data.items.retain(|item| item.id() != id);
        if self.data.items.len() == before {
            return Ok(false);
        }
        self.persist("item_delete")?;
        Ok(true)
    }

    /// Replaces the whole item sequence (bulk reorder).
    ///
    /// Items that differ from the snapshot only in `order` are taken as-is;
    /// new or otherwise edited items are validated.
    pub fn reorder_items(&mut self, items: Vec<Item>) -> Result<(), ArchiveError> {
        for item in &items {
            if !self.is_order_only_change(item) {
                item.validate()?;
            }
        }
        self.data.items = items;
        self.persist("items_reorder")
    }

    /// Applies a drop of `dragged_id` next to `target_id`.
    ///
    /// Returns `Ok(false)` when the drop is ignored.
    pub fn move_item(
        &mut self,
        dragged_id: &str,
        target_id: &str,
        position: DropPosition,
    ) -> Result<bool, ArchiveError> {
        let Some(reordered) = reorder_on_drop(&self.data.items, dragged_id, target_id, position)
        else {
            return Ok(false);
        };
        self.reorder_items(reordered)?;
        Ok(true)
    }

    /// Appends a trimmed custom phrase.
    pub fn add_phrase(&mut self, phrase: &str) -> Result<(), ArchiveError> {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            return Err(ArchiveError::BlankPhrase);
        }
        self.data.custom_phrases.push(trimmed.to_string());
        self.persist("phrase_add")
    }

    /// Removes the custom phrase at `index`.
    ///
    /// Returns `Ok(false)` when `index` is out of range.
    pub fn remove_phrase(&mut self, index: usize) -> Result<bool, ArchiveError> {
        if index >= self.data.custom_phrases.len() {
            return Ok(false);
        }
        self.data.custom_phrases.remove(index);
        self.persist("phrase_remove")?;
        Ok(true)
    }

    fn insert_planned(
        &mut self,
        item: Item,
        shifted: Option<Vec<Item>>,
    ) -> Result<ItemId, ArchiveError> {
        item.validate()?;
        let id = item.id().to_string();

        // Shift first so the new item never shares its order with a neighbour.
        if let Some(shifted) = shifted {
            self.reorder_items(shifted)?;
        }
        self.add_item(item)?;
        Ok(id)
    }

    fn is_order_only_change(&self, item: &Item) -> bool {
        let Some(stored) = self.data.find(item.id()) else {
            return false;
        };
        let mut reordered = stored.clone();
        reordered.set_order(item.order());
        reordered == *item
    }

    fn persist(&self, op: &'static str) -> Result<(), ArchiveError> {
        match self.store.save(&self.data) {
            Ok(()) => {
                info!(
                    "event=archive_save module=service status=ok op={} items={}",
                    op,
                    self.data.items.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=archive_save module=service status=error op={} error_code=save_failed error={}",
                    op, err
                );
                Err(ArchiveError::SaveFailed(err))
            }
        }
    }
}
