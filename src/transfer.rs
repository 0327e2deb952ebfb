// ============================================================================
// Moving cars between lots
// ============================================================================

use std::mem;

use serde::Deserialize;
use tracing::{debug, info};

use crate::car::Car;
use crate::error::LotError;
use crate::lot::Lot;

/// How `transfer_all` empties the source lot. All three give the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStrategy {
    /// Take the front slot `len` times, with `len` read before the loop starts.
    Iterative,
    /// Move every car out of its slot in one pass, then clear the source.
    #[default]
    Bulk,
    /// One pass that splits the source into moved and retained slots.
    Partition,
}

impl TransferStrategy {
    pub const ALL: [TransferStrategy; 3] = [
        TransferStrategy::Iterative,
        TransferStrategy::Bulk,
        TransferStrategy::Partition,
    ];
}

/// Moves the car at `source[index]` to the end of `dest` and removes the
/// slot from `source`. Neither lot changes on error.
pub fn transfer_one(source: &mut Lot, index: usize, dest: &mut Lot) -> Result<(), LotError> {
    let car = source.remove(index)?;
    debug!(from = %source.name(), to = %dest.name(), index, brand = %car.brand(), "moving one car");
    dest.append(car);
    Ok(())
}

/// Moves every car from `source` to the end of `dest`, keeping their order,
/// and leaves `source` with no slots at all. Returns the number of cars moved.
pub fn transfer_all(source: &mut Lot, dest: &mut Lot, strategy: TransferStrategy) -> usize {
    let moved = match strategy {
        TransferStrategy::Iterative => {
            let count = source.len();
            let mut moved = 0;
            for _ in 0..count {
                if let Some(car) = source.pop_front_slot() {
                    dest.append(car);
                    moved += 1;
                }
            }
            moved
        }
        TransferStrategy::Bulk => {
            let cars: Vec<Box<Car>> = source
                .slots_mut()
                .iter_mut()
                .filter_map(Option::take)
                .collect();
            source.clear();
            let moved = cars.len();
            dest.extend(cars);
            moved
        }
        TransferStrategy::Partition => transfer_where(source, dest, |_| true),
    };

    info!(from = %source.name(), to = %dest.name(), moved, ?strategy, "lot emptied");
    moved
}

/// Moves the cars matching `predicate` to the end of `dest` in a single pass.
/// Cars that stay keep their relative order; vacant slots are dropped.
pub fn transfer_where<F>(source: &mut Lot, dest: &mut Lot, mut predicate: F) -> usize
where
    F: FnMut(&Car) -> bool,
{
    let slots = mem::take(source.slots_mut());
    let mut retained = Vec::with_capacity(slots.len());
    let mut moved = 0;

    for slot in slots {
        match slot {
            Some(car) if predicate(car.as_ref()) => {
                dest.append(car);
                moved += 1;
            }
            Some(car) => retained.push(Some(car)),
            None => {}
        }
    }

    *source.slots_mut() = retained;
    moved
}

// ============================================================================
// Tests
// ============================================================================
