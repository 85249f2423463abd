//! Archive item model.
//!
//! # Responsibility
//! - Define memory/thought widgets, dividers and the persisted document root.
//! - Provide constructors that assign generated ids and creation timestamps.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - Widgets always carry positive display dimensions.
//! - Dividers have no dimensions and never appear inside a section's widgets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every archive item.
///
/// Kept as a plain string: stored documents may carry ids minted elsewhere.
pub type ItemId = String;

pub const MEMORY_DEFAULT_WIDTH: u32 = 300;
pub const MEMORY_DEFAULT_HEIGHT: u32 = 280;
pub const THOUGHT_DEFAULT_WIDTH: u32 = 280;
pub const THOUGHT_DEFAULT_HEIGHT: u32 = 220;
/// Smallest width a widget may be resized to.
pub const WIDGET_MIN_WIDTH: u32 = 200;
/// Smallest height a widget may be resized to.
pub const WIDGET_MIN_HEIGHT: u32 = 150;

fn memory_default_width() -> u32 {
    MEMORY_DEFAULT_WIDTH
}

fn memory_default_height() -> u32 {
    MEMORY_DEFAULT_HEIGHT
}

fn thought_default_width() -> u32 {
    THOUGHT_DEFAULT_WIDTH
}

fn thought_default_height() -> u32 {
    THOUGHT_DEFAULT_HEIGHT
}

/// Generates a fresh item id.
pub fn new_item_id() -> ItemId {
    Uuid::new_v4().simple().to_string()
}

/// Validation errors for archive items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Item id is empty or whitespace only.
    BlankId,
    /// Widget has a zero width or height.
    InvalidDimensions { id: ItemId, width: u32, height: u32 },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "item id must not be blank"),
            Self::InvalidDimensions { id, width, height } => write!(
                f,
                "widget {id} must have positive dimensions, got {width}x{height}"
            ),
        }
    }
}

impl Error for ItemValidationError {}

/// Photo memory with an opaque encoded image and a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryWidget {
    pub id: ItemId,
    /// Opaque encoded image (a data URL in practice). Never inspected.
    #[serde(default)]
    pub image_data: String,
    #[serde(default)]
    pub caption: String,
    /// Documents without a timestamp load as the Unix epoch.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default = "memory_default_width")]
    pub width: u32,
    #[serde(default = "memory_default_height")]
    pub height: u32,
    #[serde(default)]
    pub order: i64,
}

impl MemoryWidget {
    /// Creates a memory widget with a generated id and default dimensions.
    pub fn new(image_data: impl Into<String>, caption: impl Into<String>, order: i64) -> Self {
        Self {
            id: new_item_id(),
            image_data: image_data.into(),
            caption: caption.into(),
            created_at: Utc::now(),
            width: MEMORY_DEFAULT_WIDTH,
            height: MEMORY_DEFAULT_HEIGHT,
            order,
        }
    }
}

/// Short rich-text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtWidget {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    /// Opaque rich-text markup.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub flavor_text: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default = "thought_default_width")]
    pub width: u32,
    #[serde(default = "thought_default_height")]
    pub height: u32,
    #[serde(default)]
    pub order: i64,
}

impl ThoughtWidget {
    /// Creates a thought widget with a generated id and default dimensions.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        flavor_text: impl Into<String>,
        order: i64,
    ) -> Self {
        Self {
            id: new_item_id(),
            title: title.into(),
            content: content.into(),
            flavor_text: flavor_text.into(),
            created_at: Utc::now(),
            width: THOUGHT_DEFAULT_WIDTH,
            height: THOUGHT_DEFAULT_HEIGHT,
            order,
        }
    }
}

/// Labeled section divider. Collapsing hides the widgets of its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerItem {
    pub id: ItemId,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub order: i64,
}

impl DividerItem {
    /// Creates an expanded divider with a generated id.
    pub fn new(label: impl Into<String>, order: i64) -> Self {
        Self {
            id: new_item_id(),
            label: label.into(),
            collapsed: false,
            order,
        }
    }
}

/// Any entry in the archive.
///
/// Serialized with a `type` discriminator (`memory|thought|divider`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    Memory(MemoryWidget),
    Thought(ThoughtWidget),
    Divider(DividerItem),
}

/// Borrowed view of a non-divider item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget<'a> {
    Memory(&'a MemoryWidget),
    Thought(&'a ThoughtWidget),
}

impl<'a> Widget<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Self::Memory(memory) => memory.id.as_str(),
            Self::Thought(thought) => thought.id.as_str(),
        }
    }

    pub fn order(&self) -> i64 {
        match self {
            Self::Memory(memory) => memory.order,
            Self::Thought(thought) => thought.order,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Memory(memory) => memory.created_at,
            Self::Thought(thought) => thought.created_at,
        }
    }
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Self::Memory(memory) => memory.id.as_str(),
            Self::Thought(thought) => thought.id.as_str(),
            Self::Divider(divider) => divider.id.as_str(),
        }
    }

    pub fn order(&self) -> i64 {
        match self {
            Self::Memory(memory) => memory.order,
            Self::Thought(thought) => thought.order,
            Self::Divider(divider) => divider.order,
        }
    }

    pub fn set_order(&mut self, order: i64) {
        match self {
            Self::Memory(memory) => memory.order = order,
            Self::Thought(thought) => thought.order = order,
            Self::Divider(divider) => divider.order = order,
        }
    }

    /// Wire name of the variant, as written to the `type` field.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Thought(_) => "thought",
            Self::Divider(_) => "divider",
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider(_))
    }

    pub fn as_divider(&self) -> Option<&DividerItem> {
        match self {
            Self::Divider(divider) => Some(divider),
            _ => None,
        }
    }

    pub fn as_widget(&self) -> Option<Widget<'_>> {
        match self {
            Self::Memory(memory) => Some(Widget::Memory(memory)),
            Self::Thought(thought) => Some(Widget::Thought(thought)),
            Self::Divider(_) => None,
        }
    }

    /// Validates item invariants before a write.
    ///
    /// # Errors
    /// - `BlankId` when the id is empty after trim.
    /// - `InvalidDimensions` when a widget has zero width or height.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id().trim().is_empty() {
            return Err(ItemValidationError::BlankId);
        }
        let dimensions = match self {
            Self::Memory(memory) => Some((memory.width, memory.height)),
            Self::Thought(thought) => Some((thought.width, thought.height)),
            Self::Divider(_) => None,
        };
        if let Some((width, height)) = dimensions {
            if width == 0 || height == 0 {
                return Err(ItemValidationError::InvalidDimensions {
                    id: self.id().to_string(),
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}

impl From<MemoryWidget> for Item {
    fn from(value: MemoryWidget) -> Self {
        Self::Memory(value)
    }
}

impl From<ThoughtWidget> for Item {
    fn from(value: ThoughtWidget) -> Self {
        Self::Thought(value)
    }
}

impl From<DividerItem> for Item {
    fn from(value: DividerItem) -> Self {
        Self::Divider(value)
    }
}

/// Persisted document root, read and written wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    /// Storage sequence. Display order comes from each item's `order`.
    #[serde(default)]
    pub items: Vec<Item>,
    /// User phrases shown after the built-in hero captions.
    #[serde(default)]
    pub custom_phrases: Vec<String>,
}

impl AppData {
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Dividers in storage sequence.
    pub fn dividers(&self) -> impl Iterator<Item = &DividerItem> {
        self.items.iter().filter_map(Item::as_divider)
    }

    /// Widgets in storage sequence.
    pub fn widgets(&self) -> impl Iterator<Item = Widget<'_>> {
        self.items.iter().filter_map(Item::as_widget)
    }
}
