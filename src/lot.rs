// ============================================================================
// Lot: an ordered row of owning slots
// ============================================================================

use std::ptr;

use tracing::debug;

use crate::car::Car;
use crate::error::LotError;

/// One position in a lot. `None` is a slot whose car was moved out and not
/// compacted away yet.
pub type Slot = Option<Box<Car>>;

/// A named, ordered sequence of slots. Every car in a lot is owned by exactly
/// one slot.
#[derive(Debug, Default)]
pub struct Lot {
    name: String,
    slots: Vec<Slot>,
}

impl Lot {
    pub fn new(name: impl Into<String>) -> Self {
        Lot {
            name: name.into(),
            slots: Vec::new(),
        }
    }

    pub fn street() -> Self {
        Lot::new("street")
    }

    pub fn garage() -> Self {
        Lot::new("garage")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of slots, vacant ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots that currently own a car.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Car> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Takes ownership of `car` and parks it in a new last slot.
    pub fn append(&mut self, car: Box<Car>) {
        debug!(lot = %self.name, brand = %car.brand(), index = self.slots.len(), "car appended");
        self.slots.push(Some(car));
    }

    /// Moves the car out of `index`, leaving the slot vacant.
    pub fn take(&mut self, index: usize) -> Result<Box<Car>, LotError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| LotError::out_of_range(&self.name, index, len))?;
        slot.take().ok_or_else(|| LotError::vacant(&self.name, index))
    }

    /// Fills a vacant slot. Hands the car back if the slot is missing or taken.
    pub fn put_back(&mut self, index: usize, car: Box<Car>) -> Result<(), Box<Car>> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(car);
                Ok(())
            }
            _ => Err(car),
        }
    }

    /// Removes the slot at `index` and returns its car. Later slots shift down
    /// by one and keep their order. A vacant slot is left where it is.
    pub fn remove(&mut self, index: usize) -> Result<Box<Car>, LotError> {
        let car = self.take(index)?;
        self.slots.remove(index);
        Ok(car)
    }

    /// Drops every vacant slot, keeping the order of the occupied ones.
    /// Returns how many slots were dropped.
    pub fn compact(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(Option::is_some);
        before - self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn position_of(&self, brand: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_deref().is_some_and(|car| car.brand() == brand))
    }

    /// Brands of the occupied slots, in order.
    pub fn brands(&self) -> Vec<&str> {
        self.slots.iter().flatten().map(|car| car.brand()).collect()
    }

    /// True if this exact car (by address) is owned by one of the slots.
    pub fn holds(&self, car: &Car) -> bool {
        self.slots.iter().flatten().any(|owned| ptr::eq(&**owned, car))
    }

    pub(crate) fn pop_front_slot(&mut self) -> Slot {
        if self.slots.is_empty() {
            None
        } else {
            self.slots.remove(0)
        }
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Vec<Slot> {
        &mut self.slots
    }
}

impl Extend<Box<Car>> for Lot {
    fn extend<I: IntoIterator<Item = Box<Car>>>(&mut self, iter: I) {
        for car in iter {
            self.append(car);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
