//! # Street & Garage: Unique Ownership in Practice
//!
//! This crate moves heap-allocated cars between two lots, a `street` and a
//! `garage`, to show how exclusive ownership travels with a `Box<T>`.
//!
//! ## Patterns Covered
//!
//! 1. **Move-only handles** - `Box<Car>` is the only way to hold a car
//! 2. **Vacant slots** - `Option<Box<Car>>` models a slot that was moved out of
//! 3. **Stable removal** - taking one car out keeps the rest in order
//! 4. **Bulk relocation** - three equivalent ways to empty one lot into another
//! 5. **Safe rendering** - vacant slots print a sentinel, never garbage
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin street_garage
//! RUST_LOG=trace cargo run --bin street_garage   # watch cars being created and dropped
//! NO_COLOR=1 cargo run --bin street_garage
//! ```
//!
//! ## Quick Tour
//!
//! ```
//! use street_garage::{transfer_all, transfer_one, Car, Lot, TransferStrategy};
//!
//! let mut street = Lot::street();
//! let mut garage = Lot::garage();
//!
//! street.append(Car::boxed("brand_b"));
//! garage.append(Car::boxed("brand_a"));
//!
//! transfer_one(&mut garage, 0, &mut street).unwrap();
//! assert_eq!(street.brands(), vec!["brand_b", "brand_a"]);
//! assert!(garage.is_empty());
//!
//! transfer_all(&mut street, &mut garage, TransferStrategy::Bulk);
//! assert_eq!(garage.brands(), vec!["brand_b", "brand_a"]);
//! assert!(street.is_empty());
//! ```

pub mod car;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod lot;
pub mod render;
pub mod transfer;

pub use car::Car;
pub use config::DemoConfig;
pub use demo::{run_scenario, OwnershipDemo, Side};
pub use error::{ConfigError, LotError};
pub use lot::{Lot, Slot};
pub use render::{render, Renderer, NOTHING_TO_SHOW};
pub use transfer::{transfer_all, transfer_one, transfer_where, TransferStrategy};
