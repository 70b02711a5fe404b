//! Physical dimensions as a fixed vector of rational exponents.
//!
//! The seven SI base dimensions are closed: there is no registry to extend
//! at runtime. Every quantity carries one exponent per base dimension;
//! fractional exponents appear through roots (`sqrt` halves them).

use crate::rational::Rational;

/// Number of base dimensions.
pub const BASE_DIMENSIONS: usize = 7;

/// Index of each base dimension in the exponent vector.
///
/// The order is fixed and shared by the unit catalog and the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDimension {
    Length = 0,
    Mass = 1,
    Time = 2,
    Current = 3,
    Temperature = 4,
    Amount = 5,
    LuminousIntensity = 6,
}

/// A vector of rational exponents over the SI base dimensions.
///
/// The zero vector is "dimensionless"; two dimensions are equal iff all
/// seven components are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    exponents: [Rational; BASE_DIMENSIONS],
}

impl Dimension {
    /// The dimensionless (zero) vector.
    pub const NONE: Dimension = Dimension {
        exponents: [Rational::ZERO; BASE_DIMENSIONS],
    };

    /// A single base dimension raised to the first power.
    pub fn base(dim: BaseDimension) -> Dimension {
        let mut exponents = [Rational::ZERO; BASE_DIMENSIONS];
        exponents[dim as usize] = Rational::ONE;
        Dimension { exponents }
    }

    /// Build from integer exponents in base-dimension order.
    pub fn from_exponents(exps: [i64; BASE_DIMENSIONS]) -> Dimension {
        let mut exponents = [Rational::ZERO; BASE_DIMENSIONS];
        for (slot, e) in exponents.iter_mut().zip(exps) {
            *slot = Rational::integer(e);
        }
        Dimension { exponents }
    }

    /// Elementwise sum, the dimension of a product of quantities. `None`
    /// when a summed exponent is no longer representable.
    pub fn combine(&self, other: &Dimension) -> Option<Dimension> {
        let mut exponents = [Rational::ZERO; BASE_DIMENSIONS];
        for (i, slot) in exponents.iter_mut().enumerate() {
            *slot = self.exponents[i].add(&other.exponents[i])?;
        }
        Some(Dimension { exponents })
    }

    /// Elementwise negation, the dimension of a reciprocal.
    pub fn invert(&self) -> Dimension {
        let mut exponents = [Rational::ZERO; BASE_DIMENSIONS];
        for (i, slot) in exponents.iter_mut().enumerate() {
            *slot = self.exponents[i].neg();
        }
        Dimension { exponents }
    }

    /// Elementwise multiplication by `k`, the dimension of a power. `None`
    /// when a scaled exponent is no longer representable.
    pub fn scale(&self, k: &Rational) -> Option<Dimension> {
        let mut exponents = [Rational::ZERO; BASE_DIMENSIONS];
        for (i, slot) in exponents.iter_mut().enumerate() {
            *slot = self.exponents[i].mul(k)?;
        }
        Some(Dimension { exponents })
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(Rational::is_zero)
    }

    /// Exponents in base-dimension order, for suffix rendering.
    pub fn exponents(&self) -> &[Rational; BASE_DIMENSIONS] {
        &self.exponents
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::NONE
    }
}
