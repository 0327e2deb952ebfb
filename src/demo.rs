// ============================================================================
// The street/garage demo
// ============================================================================

use std::io::{self, Write};

use tracing::{info, warn};

use crate::car::Car;
use crate::config::DemoConfig;
use crate::error::LotError;
use crate::lot::Lot;
use crate::render::{self, Renderer};
use crate::transfer::{self, TransferStrategy};

const SEPARATOR: &str = "------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Street,
    Garage,
}

/// A street, a garage, and one hand that can hold a car outside both.
#[derive(Debug)]
pub struct OwnershipDemo {
    street: Lot,
    garage: Lot,
    standalone: Option<Box<Car>>,
}

impl Default for OwnershipDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnershipDemo {
    pub fn new() -> Self {
        Self {
            street: Lot::street(),
            garage: Lot::garage(),
            standalone: None,
        }
    }

    pub fn create(brand: impl Into<String>) -> Box<Car> {
        Car::boxed(brand)
    }

    pub fn lot(&self, side: Side) -> &Lot {
        match side {
            Side::Street => &self.street,
            Side::Garage => &self.garage,
        }
    }

    pub fn lot_mut(&mut self, side: Side) -> &mut Lot {
        match side {
            Side::Street => &mut self.street,
            Side::Garage => &mut self.garage,
        }
    }

    pub fn append(&mut self, side: Side, car: Box<Car>) {
        self.lot_mut(side).append(car);
    }

    /// Puts `car` in the standalone hand. Whatever was held before is dropped.
    pub fn hold(&mut self, car: Box<Car>) {
        self.standalone = Some(car);
    }

    pub fn standalone(&self) -> Option<&Car> {
        self.standalone.as_deref()
    }

    /// Moves the standalone car to the end of `side`. Returns `false` when the
    /// hand was already empty.
    pub fn park_standalone(&mut self, side: Side) -> bool {
        match self.standalone.take() {
            Some(car) => {
                self.append(side, car);
                true
            }
            None => false,
        }
    }

    pub fn transfer_one(&mut self, from: Side, index: usize) -> Result<(), LotError> {
        let (source, dest) = self.split(from);
        transfer::transfer_one(source, index, dest)
    }

    pub fn transfer_all(&mut self, from: Side, strategy: TransferStrategy) -> usize {
        let (source, dest) = self.split(from);
        transfer::transfer_all(source, dest, strategy)
    }

    pub fn render(&self, side: Side) -> Vec<String> {
        render::render(self.lot(side))
    }

    fn split(&mut self, from: Side) -> (&mut Lot, &mut Lot) {
        match from {
            Side::Street => (&mut self.street, &mut self.garage),
            Side::Garage => (&mut self.garage, &mut self.street),
        }
    }
}

/// Plays the whole demo and writes the transcript to `out`.
pub fn run_scenario<W: Write>(config: &DemoConfig, out: &mut W) -> io::Result<()> {
    let renderer = Renderer::new(config.colors);
    let mut demo = OwnershipDemo::new();

    // create a standalone car, then the street cars
    demo.hold(OwnershipDemo::create(config.standalone.as_str()));
    for brand in &config.street {
        demo.append(Side::Street, OwnershipDemo::create(brand.as_str()));
    }

    writeln!(out, "{}", renderer.holder_line("car_ptr", demo.standalone()))?;
    writeln!(out, "{}", renderer.slot_line(demo.lot(Side::Street), 0))?;
    writeln!(out, "{}", renderer.lot_line(demo.lot(Side::Street)))?;

    // the standalone hand gives up its car to the garage
    demo.park_standalone(Side::Garage);
    writeln!(out, "{}", renderer.slot_line(demo.lot(Side::Garage), 0))?;
    writeln!(out, "{}", renderer.lot_line(demo.lot(Side::Garage)))?;
    writeln!(out, "{}", renderer.holder_line("car_ptr", demo.standalone()))?;

    writeln!(out, "moving from `garage` to `street`:")?;
    if let Err(err) = demo.transfer_one(Side::Garage, 0) {
        warn!(%err, "nothing moved");
        writeln!(out, "nothing moved: {err}")?;
    }
    writeln!(out, "{}", renderer.lot_line(demo.lot(Side::Garage)))?;
    writeln!(out, "{}", renderer.lot_line(demo.lot(Side::Street)))?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "moving everything from `street` to `garage`:")?;
    let moved = demo.transfer_all(Side::Street, config.strategy);
    writeln!(out, "{}", renderer.lot_line(demo.lot(Side::Garage)))?;
    writeln!(out, "{}", renderer.lot_line(demo.lot(Side::Street)))?;

    info!(moved, garage = demo.lot(Side::Garage).occupied(), "demo finished");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
