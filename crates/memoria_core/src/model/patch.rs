//! Partial item updates.
//!
//! # Responsibility
//! - Carry an optional value per editable field, merged onto one item.
//!
//! # Invariants
//! - Fields that do not exist on the target variant are ignored.
//! - `order` only changes when the patch explicitly carries it.

use super::item::Item;
use serde::{Deserialize, Serialize};

/// Field-level update merged onto an existing item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPatch {
    pub image_data: Option<String>,
    pub caption: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub flavor_text: Option<String>,
    pub label: Option<String>,
    pub collapsed: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub order: Option<i64>,
}

impl ItemPatch {
    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges present fields onto `item`.
    pub fn apply_to(&self, item: &mut Item) {
        match item {
            Item::Memory(memory) => {
                set_if_some(&mut memory.image_data, &self.image_data);
                set_if_some(&mut memory.caption, &self.caption);
                set_if_some(&mut memory.width, &self.width);
                set_if_some(&mut memory.height, &self.height);
            }
            Item::Thought(thought) => {
                set_if_some(&mut thought.title, &self.title);
                set_if_some(&mut thought.content, &self.content);
                set_if_some(&mut thought.flavor_text, &self.flavor_text);
                set_if_some(&mut thought.width, &self.width);
                set_if_some(&mut thought.height, &self.height);
            }
            Item::Divider(divider) => {
                set_if_some(&mut divider.label, &self.label);
                set_if_some(&mut divider.collapsed, &self.collapsed);
            }
        }
        if let Some(order) = self.order {
            item.set_order(order);
        }
    }
}

fn set_if_some<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::ItemPatch;
    use crate::model::item::{DividerItem, Item, MemoryWidget};

    #[test]
    fn apply_ignores_fields_foreign_to_variant() {
        let mut item = Item::from(DividerItem::new("Old", 4));
        let patch = ItemPatch {
            label: Some("New".to_string()),
            caption: Some("ignored".to_string()),
            width: Some(999),
            ..ItemPatch::default()
        };
        patch.apply_to(&mut item);

        let divider = item.as_divider().expect("still a divider");
        assert_eq!(divider.label, "New");
        assert_eq!(divider.order, 4);
    }

    #[test]
    fn apply_keeps_order_unless_present() {
        let mut item = Item::from(MemoryWidget::new("img", "cap", 7));
        ItemPatch {
            caption: Some("edited".to_string()),
            ..ItemPatch::default()
        }
        .apply_to(&mut item);
        assert_eq!(item.order(), 7);

        ItemPatch {
            order: Some(2),
            ..ItemPatch::default()
        }
        .apply_to(&mut item);
        assert_eq!(item.order(), 2);
        assert!(ItemPatch::default().is_empty());
    }
}
