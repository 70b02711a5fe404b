//! The math façade: dimension-aware wrappers around the numeric layer.
//!
//! Every operation documents a dimensional policy; violating it yields the
//! NaN quantity instead of an error, so a whole expression can keep
//! evaluating and report "NaN" only at display time.
//!
//! Branch selection for fractional powers of negative bases is carried by
//! an explicit [`MathContext`] rather than process-wide state; callers that
//! need different behavior hold different contexts.

use crate::complex::Complex;
use crate::quantity::Quantity;
use crate::rational::Rational;
use crate::real::Real;

/// Evaluation context for the math operations.
///
/// `complex_mode` selects the full principal complex value (true) or the
/// real branch (false) for fractional powers of negative bases. The
/// default is false: real results, NaN where no real branch exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MathContext {
    pub complex_mode: bool,
}

impl MathContext {
    pub fn new() -> MathContext {
        MathContext::default()
    }

    /// A context that selects full principal complex values.
    pub fn complex() -> MathContext {
        MathContext { complex_mode: true }
    }

    /// Magnitude. Any dimension; the dimension is kept.
    pub fn abs(&self, q: &Quantity) -> Quantity {
        if q.is_nan() {
            return Quantity::nan();
        }
        q.map_value(Complex::real(q.value().magnitude()))
    }

    /// Real part. Any dimension; the dimension is kept.
    pub fn real(&self, q: &Quantity) -> Quantity {
        if q.is_nan() {
            return Quantity::nan();
        }
        q.map_value(Complex::real(q.value().re().clone()))
    }

    /// Imaginary part. Any dimension; the dimension is kept.
    pub fn imag(&self, q: &Quantity) -> Quantity {
        if q.is_nan() {
            return Quantity::nan();
        }
        q.map_value(Complex::real(q.value().im().clone()))
    }

    /// Round to `frac_digits` fractional digits. Dimensionless only.
    pub fn round(&self, q: &Quantity, frac_digits: i32) -> Quantity {
        if q.is_nan() || !q.is_dimensionless() {
            return Quantity::nan();
        }
        Quantity::new(q.value().round(frac_digits))
    }

    /// Truncate to `frac_digits` fractional digits. Dimensionless only.
    pub fn trunc(&self, q: &Quantity, frac_digits: i32) -> Quantity {
        if q.is_nan() || !q.is_dimensionless() {
            return Quantity::nan();
        }
        Quantity::new(q.value().trunc(frac_digits))
    }

    /// Square root: numeric root, dimension exponents halved.
    pub fn sqrt(&self, q: &Quantity) -> Quantity {
        if q.is_nan() {
            return Quantity::nan();
        }
        let value = q.value().sqrt(self.complex_mode);
        if value.is_nan() {
            return Quantity::nan();
        }
        q.map_scaled(value, &Rational::new(1, 2))
    }

    /// Cube root: numeric root, dimension exponents divided by three.
    pub fn cbrt(&self, q: &Quantity) -> Quantity {
        if q.is_nan() {
            return Quantity::nan();
        }
        let value = q.value().cbrt();
        if value.is_nan() {
            return Quantity::nan();
        }
        q.map_scaled(value, &Rational::new(1, 3))
    }

    /// Power. The exponent must be dimensionless; a dimensioned base
    /// additionally needs an exponent expressible as a simple fraction so
    /// the dimension vector can be scaled, otherwise the result is NaN.
    pub fn raise(&self, base: &Quantity, exponent: &Quantity) -> Quantity {
        if base.is_nan() || exponent.is_nan() || !exponent.is_dimensionless() {
            return Quantity::nan();
        }
        if base.is_dimensionless() {
            return Quantity::new(Complex::raise(
                base.value(),
                exponent.value(),
                self.complex_mode,
            ));
        }
        if !exponent.value().is_real() {
            return Quantity::nan();
        }
        let scale = match Rational::from_real(exponent.value().re()) {
            Some(scale) => scale,
            None => return Quantity::nan(),
        };
        let value = Complex::raise(base.value(), exponent.value(), self.complex_mode);
        if value.is_nan() {
            return Quantity::nan();
        }
        base.map_scaled(value, &scale)
    }

    /// The circle constant as a dimensionless quantity.
    pub fn pi(&self) -> Quantity {
        Quantity::from(Real::pi())
    }

    pub fn exp(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::exp)
    }

    pub fn ln(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::ln)
    }

    pub fn log10(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::log10)
    }

    pub fn sin(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::sin)
    }

    pub fn cos(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::cos)
    }

    pub fn tan(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::tan)
    }

    pub fn asin(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::asin)
    }

    pub fn acos(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::acos)
    }

    pub fn atan(&self, q: &Quantity) -> Quantity {
        self.real_only(q, Real::atan)
    }

    /// Shared policy of the transcendental family: dimensionless real
    /// input only, NaN otherwise.
    fn real_only(&self, q: &Quantity, f: impl Fn(&Real) -> Real) -> Quantity {
        if q.is_nan() || !q.is_dimensionless() || !q.value().is_real() {
            return Quantity::nan();
        }
        Quantity::from(f(q.value().re()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;
    use pretty_assertions::assert_eq;

    fn ctx() -> MathContext {
        MathContext::new()
    }

    fn quantity(s: &str) -> Quantity {
        Quantity::from(s.parse::<Complex>().unwrap())
    }

    #[test]
    fn test_abs_keeps_dimension() {
        let q = quantity("3+4j") * units::meter();
        let r = ctx().abs(&q);
        assert_eq!(*r.dimension(), *units::meter().dimension());
        assert_eq!(r.value().re().to_string(), "5");
    }

    #[test]
    fn test_round_rejects_dimensioned_input() {
        let q = quantity("1.234") * units::joule();
        assert!(ctx().round(&q, 0).is_nan());
        let plain = ctx().round(&quantity("1.234"), 1);
        assert_eq!(plain.value().re().to_string(), "1.2");
    }

    #[test]
    fn test_sqrt_scales_dimension() {
        let q = quantity("36") * units::second();
        let r = ctx().sqrt(&q);
        assert_eq!(
            *r.dimension(),
            units::second().dimension().scale(&Rational::new(1, 2)).unwrap()
        );
        assert_eq!(r.value().re().to_string(), "6");
    }

    #[test]
    fn test_raise_dimensionless() {
        let r = ctx().raise(&quantity("2"), &ctx().pi());
        assert!(r.is_dimensionless());
        assert_eq!(r.value().re().to_fixed(20), "8.82497782707628762386");
    }

    #[test]
    fn test_raise_dimensioned_needs_simple_fraction() {
        let base = quantity("2") * units::ampere();
        assert!(ctx().raise(&base, &ctx().pi()).is_nan());
        let ok = ctx().raise(&base, &quantity("2"));
        assert_eq!(
            *ok.dimension(),
            units::ampere().dimension().scale(&Rational::integer(2)).unwrap()
        );
    }

    #[test]
    fn test_raise_rejects_unrepresentable_exponent_growth() {
        let stretched = Quantity::with_dimension(
            Complex::one(),
            crate::dimension::Dimension::from_exponents([i64::MAX, 0, 0, 0, 0, 0, 0]),
        );
        assert!(ctx().raise(&stretched, &quantity("2")).is_nan());
    }

    #[test]
    fn test_raise_negative_base_branches() {
        let base = quantity("-2") * units::ampere();
        let exp = quantity("0.6");
        let real_branch = ctx().raise(&base, &exp);
        assert_eq!(
            real_branch.value().re().to_string(),
            "-1.51571656651039808235"
        );
        assert_eq!(
            *real_branch.dimension(),
            units::ampere().dimension().scale(&Rational::new(3, 5)).unwrap()
        );
        let full = MathContext::complex().raise(&base, &exp);
        assert!(!full.value().is_real());
        // no real root for an even reduced denominator
        assert!(ctx().raise(&base, &quantity("1.5")).is_nan());
    }

    #[test]
    fn test_transcendentals_are_dimensionless_only() {
        assert!(ctx().sin(&units::meter()).is_nan());
        let zero = ctx().sin(&ctx().pi());
        assert_eq!(zero.value().re().to_fixed(-1), "0");
    }

    #[test]
    fn test_nan_propagates() {
        let bad = units::candela() + units::second();
        assert!(ctx().sqrt(&bad).is_nan());
        assert!(ctx().raise(&bad, &quantity("2")).is_nan());
    }
}
