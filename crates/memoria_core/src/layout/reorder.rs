//! Drag-and-drop reordering.
//!
//! # Responsibility
//! - Turn a drop gesture into a fully renumbered item sequence.
//! - Hold the in-flight drag state (dragged item, hover target, side).
//!
//! # Invariants
//! - A successful drop always renumbers every item to `0..n-1`.
//! - Dropping an item onto itself never changes the sequence.

use super::sections::sorted_by_order;
use crate::model::item::{Item, ItemId};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Side of the target item the dragged item lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

impl Display for DropPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

impl FromStr for DropPosition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(format!(
                "unsupported drop position `{other}`; expected before|after"
            )),
        }
    }
}

/// Picks the drop side from the pointer's vertical position.
///
/// Above the target's vertical midpoint means `Before`.
pub fn drop_position(target_top: f64, target_height: f64, pointer_y: f64) -> DropPosition {
    if pointer_y < target_top + target_height / 2.0 {
        DropPosition::Before
    } else {
        DropPosition::After
    }
}

/// Moves `dragged_id` next to `target_id` and renumbers everything.
///
/// Returns `None` when the ids are equal or either id is unknown.
pub fn reorder_on_drop(
    items: &[Item],
    dragged_id: &str,
    target_id: &str,
    position: DropPosition,
) -> Option<Vec<Item>> {
    if dragged_id == target_id {
        return None;
    }

    let mut sorted: Vec<Item> = sorted_by_order(items).into_iter().cloned().collect();
    let dragged_index = sorted.iter().position(|item| item.id() == dragged_id)?;
    let target_index = sorted.iter().position(|item| item.id() == target_id)?;

    let dragged = sorted.remove(dragged_index);
    let mut insert_index = target_index;
    if dragged_index < target_index {
        insert_index -= 1;
    }
    if position == DropPosition::After {
        insert_index += 1;
    }
    sorted.insert(insert_index, dragged);

    for (index, item) in sorted.iter_mut().enumerate() {
        item.set_order(index as i64);
    }
    Some(sorted)
}

/// In-flight drag gesture.
///
/// Owned by the view that renders the canvas; nothing here is shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    dragged: Option<ItemId>,
    ghost: Option<(ItemId, DropPosition)>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, item_id: impl Into<ItemId>) {
        self.dragged = Some(item_id.into());
        self.ghost = None;
    }

    pub fn dragged(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    /// Current hover target and side, if any.
    pub fn ghost(&self) -> Option<(&str, DropPosition)> {
        self.ghost
            .as_ref()
            .map(|(target, position)| (target.as_str(), *position))
    }

    /// Records the pointer hovering over `target_id`.
    ///
    /// Hovering the dragged item itself clears the hover target.
    pub fn hover(&mut self, target_id: &str, target_top: f64, target_height: f64, pointer_y: f64) {
        let Some(dragged) = self.dragged.as_deref() else {
            return;
        };
        if dragged == target_id {
            self.ghost = None;
            return;
        }
        let position = drop_position(target_top, target_height, pointer_y);
        self.ghost = Some((target_id.to_string(), position));
    }

    /// Ends the gesture and returns the reordered sequence, if any.
    ///
    /// The state is cleared whether or not a reorder happened.
    pub fn finish(&mut self, items: &[Item]) -> Option<Vec<Item>> {
        let dragged = self.dragged.take();
        let ghost = self.ghost.take();
        match (dragged, ghost) {
            (Some(dragged), Some((target, position))) => {
                reorder_on_drop(items, &dragged, &target, position)
            }
            _ => None,
        }
    }
}
