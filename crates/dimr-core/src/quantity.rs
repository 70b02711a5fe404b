//! Quantities: a complex value tagged with a physical dimension.
//!
//! The numeric value is always stored in SI base units. An optional display
//! unit (factor + label) only affects rendering, never arithmetic.
//! Dimensional mismatches do not abort evaluation; they produce the NaN
//! quantity, which propagates through further operations and is reported
//! only at display time.

use std::cmp::Ordering;

use crate::complex::Complex;
use crate::dimension::Dimension;
use crate::rational::Rational;
use crate::real::Real;

/// Display override: rescale by `factor` and print `label` instead of the
/// dimension suffix.
#[derive(Clone, Debug)]
pub struct DisplayUnit {
    pub factor: Real,
    pub label: String,
}

/// A complex number with a physical dimension and optional display unit.
#[derive(Clone, Debug)]
pub struct Quantity {
    value: Complex,
    dimension: Dimension,
    display_unit: Option<DisplayUnit>,
}

impl Quantity {
    /// A dimensionless quantity.
    pub fn new(value: Complex) -> Quantity {
        Quantity {
            value,
            dimension: Dimension::NONE,
            display_unit: None,
        }
    }

    pub fn with_dimension(value: Complex, dimension: Dimension) -> Quantity {
        Quantity {
            value,
            dimension,
            display_unit: None,
        }
    }

    /// The undefined quantity: NaN value, dimensionless.
    pub fn nan() -> Quantity {
        Quantity::new(Complex::nan())
    }

    pub fn value(&self) -> &Complex {
        &self.value
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn display_unit(&self) -> Option<&DisplayUnit> {
        self.display_unit.as_ref()
    }

    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Record a display override. The stored value is untouched; only
    /// formatting divides by `factor` and prints `label`.
    pub fn set_display_unit(&mut self, factor: Real, label: &str) {
        self.display_unit = Some(DisplayUnit {
            factor,
            label: label.to_string(),
        });
    }

    pub fn clear_display_unit(&mut self) {
        self.display_unit = None;
    }

    /// Same value and dimension with no display unit; arithmetic results
    /// start from this.
    fn bare(value: Complex, dimension: Dimension) -> Quantity {
        Quantity {
            value,
            dimension,
            display_unit: None,
        }
    }

    pub(crate) fn map_value(&self, value: Complex) -> Quantity {
        Quantity::bare(value, self.dimension)
    }

    pub(crate) fn map_scaled(&self, value: Complex, scale: &Rational) -> Quantity {
        match self.dimension.scale(scale) {
            Some(dimension) => Quantity::bare(value, dimension),
            None => Quantity::nan(),
        }
    }
}

impl From<i64> for Quantity {
    fn from(v: i64) -> Quantity {
        Quantity::new(Complex::from(v))
    }
}

impl From<i32> for Quantity {
    fn from(v: i32) -> Quantity {
        Quantity::from(v as i64)
    }
}

impl From<Real> for Quantity {
    fn from(v: Real) -> Quantity {
        Quantity::new(Complex::real(v))
    }
}

impl From<Complex> for Quantity {
    fn from(v: Complex) -> Quantity {
        Quantity::new(v)
    }
}

impl std::ops::Add for &Quantity {
    type Output = Quantity;

    fn add(self, rhs: &Quantity) -> Quantity {
        if self.is_nan() || rhs.is_nan() || self.dimension != rhs.dimension {
            return Quantity::nan();
        }
        Quantity::bare(&self.value + &rhs.value, self.dimension)
    }
}

impl std::ops::Sub for &Quantity {
    type Output = Quantity;

    fn sub(self, rhs: &Quantity) -> Quantity {
        if self.is_nan() || rhs.is_nan() || self.dimension != rhs.dimension {
            return Quantity::nan();
        }
        Quantity::bare(&self.value - &rhs.value, self.dimension)
    }
}

impl std::ops::Mul for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        if self.is_nan() || rhs.is_nan() {
            return Quantity::nan();
        }
        match self.dimension.combine(&rhs.dimension) {
            Some(dimension) => Quantity::bare(&self.value * &rhs.value, dimension),
            None => Quantity::nan(),
        }
    }
}

impl std::ops::Div for &Quantity {
    type Output = Quantity;

    fn div(self, rhs: &Quantity) -> Quantity {
        if self.is_nan() || rhs.is_nan() {
            return Quantity::nan();
        }
        match self.dimension.combine(&rhs.dimension.invert()) {
            Some(dimension) => Quantity::bare(&self.value / &rhs.value, dimension),
            None => Quantity::nan(),
        }
    }
}

impl std::ops::Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::bare(-&self.value, self.dimension)
    }
}

impl std::ops::Add for Quantity {
    type Output = Quantity;
    fn add(self, rhs: Quantity) -> Quantity {
        &self + &rhs
    }
}

impl std::ops::Sub for Quantity {
    type Output = Quantity;
    fn sub(self, rhs: Quantity) -> Quantity {
        &self - &rhs
    }
}

impl std::ops::Mul for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        &self * &rhs
    }
}

impl std::ops::Div for Quantity {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        &self / &rhs
    }
}

impl std::ops::Neg for Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        -&self
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Quantity) -> bool {
        self.dimension == other.dimension && self.value == other.value
    }
}

impl PartialOrd for Quantity {
    /// Ordering is defined only for same-dimension quantities with real
    /// values; everything else is incomparable.
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        if self.dimension != other.dimension {
            return None;
        }
        if !self.value.is_real() || !other.value.is_real() {
            return None;
        }
        self.value.re().partial_cmp(other.value.re())
    }
}
