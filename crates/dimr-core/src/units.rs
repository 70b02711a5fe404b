//! The unit catalog.
//!
//! To add a new unit, add an entry to the UNITS array; arithmetic and
//! formatting pick it up automatically. Quantities always store their value
//! in base (SI) units; catalog entries with a factor other than 1 attach a
//! display unit so they still print under their own name.

use crate::complex::Complex;
use crate::dimension::{Dimension, BASE_DIMENSIONS};
use crate::quantity::Quantity;
use crate::real::Real;

/// Unit metadata - single source of truth for each unit.
pub struct UnitDef {
    /// Catalog name, also used for parsing and display.
    pub name: &'static str,
    /// Integer exponents over the base dimensions, in
    /// (length, mass, time, current, temperature, amount, luminous) order.
    pub exponents: [i64; BASE_DIMENSIONS],
    /// Conversion factor to the SI-coherent representation, as a decimal
    /// literal.
    pub si_factor: &'static str,
}

/// SI base unit name for each base dimension, in dimension order. The
/// formatter uses these when rendering a dimension suffix.
pub static BASE_UNIT_NAMES: [&str; BASE_DIMENSIONS] = [
    "meter", "kilogram", "second", "ampere", "kelvin", "mole", "candela",
];

/// Complete registry of all supported units.
/// To add a new unit: add an entry here.
pub static UNITS: &[UnitDef] = &[
    // SI base units
    UnitDef { name: "meter", exponents: [1, 0, 0, 0, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "kilogram", exponents: [0, 1, 0, 0, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "second", exponents: [0, 0, 1, 0, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "ampere", exponents: [0, 0, 0, 1, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "kelvin", exponents: [0, 0, 0, 0, 1, 0, 0], si_factor: "1" },
    UnitDef { name: "mole", exponents: [0, 0, 0, 0, 0, 1, 0], si_factor: "1" },
    UnitDef { name: "candela", exponents: [0, 0, 0, 0, 0, 0, 1], si_factor: "1" },
    // SI-coherent derived units
    UnitDef { name: "newton", exponents: [1, 1, -2, 0, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "joule", exponents: [2, 1, -2, 0, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "watt", exponents: [2, 1, -3, 0, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "coulomb", exponents: [0, 0, 1, 1, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "volt", exponents: [2, 1, -3, -1, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "ohm", exponents: [2, 1, -3, -2, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "pascal", exponents: [-1, 1, -2, 0, 0, 0, 0], si_factor: "1" },
    UnitDef { name: "hertz", exponents: [0, 0, -1, 0, 0, 0, 0], si_factor: "1" },
    // accepted non-coherent units
    UnitDef { name: "gram", exponents: [0, 1, 0, 0, 0, 0, 0], si_factor: "0.001" },
    UnitDef { name: "liter", exponents: [3, 0, 0, 0, 0, 0, 0], si_factor: "0.001" },
];

impl UnitDef {
    /// The quantity "1 of this unit", stored in SI base units.
    pub fn quantity(&self) -> Quantity {
        let factor: Real = self
            .si_factor
            .parse()
            .expect("catalog factors are valid literals");
        let dimension = Dimension::from_exponents(self.exponents);
        let mut q = Quantity::with_dimension(Complex::real(factor.clone()), dimension);
        if self.si_factor != "1" {
            q.set_display_unit(factor, self.name);
        }
        q
    }
}

/// Look up a unit by catalog name.
pub fn lookup(name: &str) -> Option<Quantity> {
    UNITS
        .iter()
        .find(|def| def.name == name)
        .map(UnitDef::quantity)
}

/// All catalog names, for completion and highlighting layers.
pub fn all_names() -> impl Iterator<Item = &'static str> {
    UNITS.iter().map(|def| def.name)
}

fn unit(name: &str) -> Quantity {
    lookup(name).expect("unit is in the catalog")
}

pub fn meter() -> Quantity {
    unit("meter")
}

pub fn kilogram() -> Quantity {
    unit("kilogram")
}

pub fn second() -> Quantity {
    unit("second")
}

pub fn ampere() -> Quantity {
    unit("ampere")
}

pub fn kelvin() -> Quantity {
    unit("kelvin")
}

pub fn mole() -> Quantity {
    unit("mole")
}

pub fn candela() -> Quantity {
    unit("candela")
}

pub fn newton() -> Quantity {
    unit("newton")
}

pub fn joule() -> Quantity {
    unit("joule")
}

pub fn watt() -> Quantity {
    unit("watt")
}

pub fn coulomb() -> Quantity {
    unit("coulomb")
}

pub fn volt() -> Quantity {
    unit("volt")
}

pub fn ohm() -> Quantity {
    unit("ohm")
}

pub fn pascal() -> Quantity {
    unit("pascal")
}

pub fn hertz() -> Quantity {
    unit("hertz")
}

pub fn gram() -> Quantity {
    unit("gram")
}

pub fn liter() -> Quantity {
    unit("liter")
}
