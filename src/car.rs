// ============================================================================
// Car: the owned entity
// ============================================================================

use std::fmt;

use tracing::trace;

/// An immutable, labeled car.
///
/// `Car` is not `Clone`; a second car can only come from `Car::new`, so one
/// car never sits in two lots.
#[derive(Debug, PartialEq, Eq)]
pub struct Car {
    brand: String,
}

impl Car {
    pub fn new(brand: impl Into<String>) -> Self {
        let brand = brand.into();
        trace!(brand = %brand, "car created");
        Car { brand }
    }

    /// Builds a car straight onto the heap, ready to be handed to a lot.
    pub fn boxed(brand: impl Into<String>) -> Box<Self> {
        Box::new(Car::new(brand))
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.brand)
    }
}

impl Drop for Car {
    fn drop(&mut self) {
        trace!(brand = %self.brand, "car dropped");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::Lot;
    use crate::transfer::{transfer_all, transfer_one, TransferStrategy};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts "car dropped" events.
    struct DropCounter {
        count: Arc<AtomicUsize>,
    }

    struct DropMessage(bool);

    impl Visit for DropMessage {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" && format!("{value:?}") == "car dropped" {
                self.0 = true;
            }
        }
    }

    impl<S: Subscriber> Layer<S> for DropCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = DropMessage(false);
            event.record(&mut visitor);
            if visitor.0 {
                self.count.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_display_is_brand() {
        let car = Car::new("brand_a");
        assert_eq!(car.to_string(), "brand_a");
        assert_eq!(car.brand(), "brand_a");
    }

    #[test]
    fn test_boxed_moves_into_new_owner() {
        let car_ptr = Car::boxed("brand_b");
        let address: *const Car = &*car_ptr;

        let owner = car_ptr; // car_ptr is MOVED to owner
        assert_eq!(owner.brand(), "brand_b");
        assert!(std::ptr::eq(address, &*owner));
    }

    #[test]
    fn test_take_empties_standalone_holder() {
        let mut car_ptr: Option<Box<Car>> = Some(Car::boxed("brand_a"));
        let moved = car_ptr.take();

        assert!(car_ptr.is_none());
        assert_eq!(moved.map(|c| c.to_string()), Some("brand_a".to_string()));
    }

    #[test]
    fn test_car_dropped_once_when_last_slot_cleared() {
        let drops = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(DropCounter {
            count: drops.clone(),
        });

        tracing::subscriber::with_default(subscriber, || {
            let mut street = Lot::street();
            let mut garage = Lot::garage();
            street.append(Car::boxed("brand_a"));

            transfer_one(&mut street, 0, &mut garage).unwrap();
            transfer_all(&mut garage, &mut street, TransferStrategy::Bulk);
            assert_eq!(drops.load(Ordering::SeqCst), 0);

            street.clear();
            assert_eq!(drops.load(Ordering::SeqCst), 1);

            drop(street);
            drop(garage);
        });

        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }
}
