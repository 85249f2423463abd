//! Visible-section tracking.
//!
//! # Responsibility
//! - Decide which divider is "in view" as the canvas scrolls.
//! - Supply that divider id as the anchor for insert-order computation.
//!
//! # Invariants
//! - Read-only with respect to items; never mutates order.
//! - Observations for dividers that no longer exist are dropped on `retain`.

use super::sections::sorted_by_order;
use crate::model::item::{Item, ItemId};
use std::collections::HashSet;

/// Fraction of the viewport height ignored at the top and at the bottom.
pub const VIEWPORT_MARGIN_RATIO: f64 = 0.10;

/// Vertical extent of a rendered divider, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerRect {
    pub top: f64,
    pub bottom: f64,
}

impl DividerRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Share of `rect` inside the margin-reduced viewport, in `0.0..=1.0`.
pub fn intersection_ratio(rect: DividerRect, viewport_height: f64) -> f64 {
    let height = rect.height();
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let margin = viewport_height * VIEWPORT_MARGIN_RATIO;
    let visible_top = rect.top.max(margin);
    let visible_bottom = rect.bottom.min(viewport_height - margin);
    let overlap = (visible_bottom - visible_top).max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

/// Tracks intersecting dividers and resolves the current one.
#[derive(Debug, Clone, Default)]
pub struct VisibleSectionTracker {
    // Kept in first-observed order so equal ratios resolve deterministically.
    visible: Vec<(ItemId, f64)>,
}

impl VisibleSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one intersection change for a divider.
    pub fn observe(&mut self, divider_id: &str, ratio: f64, is_intersecting: bool) {
        let existing = self.visible.iter().position(|(id, _)| id == divider_id);
        match (existing, is_intersecting) {
            (Some(index), true) => self.visible[index].1 = ratio,
            (None, true) => self.visible.push((divider_id.to_string(), ratio)),
            (Some(index), false) => {
                self.visible.remove(index);
            }
            (None, false) => {}
        }
    }

    /// Recomputes observations for every divider from rendered geometry.
    ///
    /// Dividers without a rect are treated as not rendered.
    pub fn observe_layout<F>(&mut self, items: &[Item], rect_of: F, viewport_height: f64)
    where
        F: Fn(&str) -> Option<DividerRect>,
    {
        for divider in items.iter().filter_map(Item::as_divider) {
            let ratio = rect_of(divider.id.as_str())
                .map(|rect| intersection_ratio(rect, viewport_height))
                .unwrap_or(0.0);
            self.observe(divider.id.as_str(), ratio, ratio > 0.0);
        }
    }

    /// Drops observations for dividers absent from `items`.
    pub fn retain(&mut self, items: &[Item]) {
        let live: HashSet<&str> = items
            .iter()
            .filter(|item| item.is_divider())
            .map(Item::id)
            .collect();
        self.visible.retain(|(id, _)| live.contains(id.as_str()));
    }

    /// Resolves the divider considered in view.
    ///
    /// Picks the highest observed ratio. With nothing intersecting, falls
    /// back to the last divider (in order) whose bottom edge is above the
    /// viewport's vertical midpoint. `None` means above the first section.
    pub fn current<F>(&self, items: &[Item], rect_of: F, viewport_height: f64) -> Option<ItemId>
    where
        F: Fn(&str) -> Option<DividerRect>,
    {
        let mut best: Option<(&str, f64)> = None;
        for (id, ratio) in &self.visible {
            if best.map_or(true, |(_, best_ratio)| *ratio > best_ratio) {
                best = Some((id.as_str(), *ratio));
            }
        }
        if let Some((id, _)) = best {
            return Some(id.to_string());
        }

        let midpoint = viewport_height / 2.0;
        sorted_by_order(items)
            .into_iter()
            .filter(|item| item.is_divider())
            .filter_map(|item| rect_of(item.id()).map(|rect| (item.id(), rect)))
            .filter(|(_, rect)| rect.bottom < midpoint)
            .last()
            .map(|(id, _)| id.to_string())
    }
}
