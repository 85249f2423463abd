//! Section navigator index.
//!
//! Dividers filtered by a label query and grouped by initial letter.

use super::sections::sorted_by_order;
use crate::model::item::{DividerItem, Item};
use std::collections::BTreeMap;

/// Dividers sharing the same initial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerGroup<'a> {
    /// Uppercased first character of the trimmed label, `#` when blank.
    pub key: String,
    pub dividers: Vec<&'a DividerItem>,
}

/// Navigator listing with match counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerIndex<'a> {
    pub groups: Vec<DividerGroup<'a>>,
    pub matched: usize,
    pub total: usize,
}

/// Builds the navigator index for `query`.
///
/// A blank query keeps every divider. Matching is a case-insensitive
/// substring test against the label.
pub fn divider_index<'a>(items: &'a [Item], query: &str) -> DividerIndex<'a> {
    let dividers: Vec<&DividerItem> = sorted_by_order(items)
        .into_iter()
        .filter_map(Item::as_divider)
        .collect();
    let needle = query.trim().to_lowercase();

    let mut grouped: BTreeMap<String, Vec<&DividerItem>> = BTreeMap::new();
    let mut matched = 0;
    for divider in &dividers {
        if !needle.is_empty() && !divider.label.to_lowercase().contains(needle.as_str()) {
            continue;
        }
        matched += 1;
        grouped
            .entry(group_key(divider.label.as_str()))
            .or_default()
            .push(*divider);
    }

    DividerIndex {
        groups: grouped
            .into_iter()
            .map(|(key, dividers)| DividerGroup { key, dividers })
            .collect(),
        matched,
        total: dividers.len(),
    }
}

fn group_key(label: &str) -> String {
    match label.trim().chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "#".to_string(),
    }
}
