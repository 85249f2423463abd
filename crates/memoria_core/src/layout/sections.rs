//! Section reducer.
//!
//! # Responsibility
//! - Group the sorted item sequence into divider-headed sections.
//! - Decide the `order` a new widget takes so it lands in the section in view.
//!
//! # Invariants
//! - `k` dividers always yield exactly `k + 1` sections.
//! - The leading section has no divider, even when it is empty.

use crate::model::item::{DividerItem, Item, Widget};

/// One divider and the widgets that follow it up to the next divider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// `None` for the implicit leading section.
    pub divider: Option<&'a DividerItem>,
    pub widgets: Vec<Widget<'a>>,
}

impl Section<'_> {
    /// Widgets are hidden when the heading divider is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.divider.is_some_and(|divider| divider.collapsed)
    }
}

/// Where a new widget goes, plus the renumbered sequence that makes room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertPlan {
    pub order: i64,
    /// `None` when no existing item sits at or after `order`.
    pub shifted: Option<Vec<Item>>,
}

/// Returns items sorted by `order`, ties kept in storage sequence.
pub fn sorted_by_order(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|item| item.order());
    sorted
}

/// Returns `max(order) + 1`, or `0` when there are no items.
pub fn next_order(items: &[Item]) -> i64 {
    items
        .iter()
        .map(Item::order)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Groups items into sections headed by dividers.
pub fn derive_sections(items: &[Item]) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut current = Section {
        divider: None,
        widgets: Vec::new(),
    };

    for item in sorted_by_order(items) {
        match item {
            Item::Divider(divider) => {
                let finished = std::mem::replace(
                    &mut current,
                    Section {
                        divider: Some(divider),
                        widgets: Vec::new(),
                    },
                );
                sections.push(finished);
            }
            Item::Memory(memory) => current.widgets.push(Widget::Memory(memory)),
            Item::Thought(thought) => current.widgets.push(Widget::Thought(thought)),
        }
    }
    sections.push(current);
    sections
}

/// Computes the `order` for a new widget in the section currently in view.
///
/// The result is the order of the divider that closes the visible section,
/// or `next_order(items)` when the visible section is the last one. With no
/// visible divider the new widget belongs before the first divider. Unknown
/// ids fall back to appending at the end.
pub fn compute_insert_order(items: &[Item], visible_divider_id: Option<&str>) -> i64 {
    let sorted = sorted_by_order(items);

    let Some(visible_id) = visible_divider_id else {
        return sorted
            .iter()
            .find(|item| item.is_divider())
            .map_or_else(|| next_order(items), |divider| divider.order());
    };

    let Some(anchor) = sorted.iter().position(|item| item.id() == visible_id) else {
        return next_order(items);
    };

    sorted[anchor + 1..]
        .iter()
        .find(|item| item.is_divider())
        .map_or_else(|| next_order(items), |divider| divider.order())
}

/// Bumps every item with `order >= insert_order` by one.
///
/// Returns `None` when nothing occupies `insert_order` or later. Otherwise
/// returns the full sequence, sorted by order, with the shifted values.
pub fn shift_for_insert(items: &[Item], insert_order: i64) -> Option<Vec<Item>> {
    if !items.iter().any(|item| item.order() >= insert_order) {
        return None;
    }

    let shifted = sorted_by_order(items)
        .into_iter()
        .map(|item| {
            let mut item = item.clone();
            if item.order() >= insert_order {
                item.set_order(item.order().saturating_add(1));
            }
            item
        })
        .collect();
    Some(shifted)
}

/// Pairs [`compute_insert_order`] with [`shift_for_insert`].
pub fn plan_insert(items: &[Item], visible_divider_id: Option<&str>) -> InsertPlan {
    let order = compute_insert_order(items, visible_divider_id);
    InsertPlan {
        order,
        shifted: shift_for_insert(items, order),
    }
}
