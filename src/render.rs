// =============================================================================
// Rendering lots as text
// =============================================================================

use colored::Colorize;
use itertools::Itertools;

use crate::car::Car;
use crate::lot::Lot;

/// Printed in place of a car that isn't there.
pub const NOTHING_TO_SHOW: &str = "nothing to show";

/// One display string per slot: the brand if occupied, the sentinel if not.
pub fn render(lot: &Lot) -> Vec<String> {
    lot.slots()
        .iter()
        .map(|slot| match slot.as_deref() {
            Some(car) => car.to_string(),
            None => NOTHING_TO_SHOW.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    use_colors: bool,
}

impl Renderer {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn should_use_colors() -> bool {
        std::env::var_os("NO_COLOR").is_none()
    }

    /// `street contains pointers to: [brand_b][brand_a]`
    pub fn lot_line(&self, lot: &Lot) -> String {
        let cars = lot
            .slots()
            .iter()
            .map(|slot| format!("[{}]", self.label(slot.as_deref())))
            .join("");
        format!("{} contains pointers to: {}", lot.name(), cars)
    }

    /// `garage[0] points to: brand_a`
    pub fn slot_line(&self, lot: &Lot, index: usize) -> String {
        format!(
            "{}[{}] points to: {}",
            lot.name(),
            index,
            self.label(lot.get(index))
        )
    }

    /// `car_ptr points to: brand_a`, for a car held outside any lot.
    pub fn holder_line(&self, holder: &str, car: Option<&Car>) -> String {
        format!("{} points to: {}", holder, self.label(car))
    }

    fn label(&self, car: Option<&Car>) -> String {
        match (car, self.use_colors) {
            (Some(car), true) => car.brand().cyan().bold().to_string(),
            (Some(car), false) => car.brand().to_string(),
            (None, true) => NOTHING_TO_SHOW.dimmed().to_string(),
            (None, false) => NOTHING_TO_SHOW.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
