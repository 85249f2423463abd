//! Carousel widget picker.

use crate::model::item::Widget;
use rand::Rng;
use std::collections::HashSet;

/// Random widget selection that avoids repeats until exhausted.
#[derive(Debug, Clone, Default)]
pub struct CarouselPicker {
    used: HashSet<usize>,
}

impl CarouselPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets shown widgets; call when the widget set changes.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Number of distinct widgets shown since the last reset.
    pub fn shown(&self) -> usize {
        self.used.len()
    }

    /// Picks the next widget to show.
    ///
    /// Returns `None` for an empty slice and the only widget for a single
    /// element slice. Otherwise picks uniformly among unused indices and
    /// starts a new round once every index was used.
    pub fn pick<'a, R: Rng + ?Sized>(
        &mut self,
        widgets: &[Widget<'a>],
        rng: &mut R,
    ) -> Option<Widget<'a>> {
        match widgets.len() {
            0 => return None,
            1 => return Some(widgets[0]),
            _ => {}
        }

        // Indices beyond the current slice belong to an older widget set.
        self.used.retain(|index| *index < widgets.len());
        if self.used.len() >= widgets.len() {
            self.used.clear();
        }

        let unused: Vec<usize> = (0..widgets.len())
            .filter(|index| !self.used.contains(index))
            .collect();
        let index = unused[rng.gen_range(0..unused.len())];
        self.used.insert(index);
        Some(widgets[index])
    }
}
