//! Exact small rationals, used for dimension exponents.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::real::Real;

/// Largest denominator accepted when recovering a fraction from a decimal
/// exponent. Anything needing more is not a "simple" fraction.
const MAX_DENOMINATOR: i64 = 10_000;

/// An exact rational number with a small numerator and denominator.
///
/// Always stored reduced with a positive denominator, so derived equality
/// is structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Build a reduced rational. `den` must be nonzero.
    pub fn new(num: i64, den: i64) -> Rational {
        debug_assert!(den != 0, "rational with zero denominator");
        let g = num.gcd(&den);
        let (mut num, mut den) = if g == 0 { (0, 1) } else { (num / g, den / g) };
        if den < 0 {
            num = -num;
            den = -den;
        }
        Rational { num, den }
    }

    pub const fn integer(n: i64) -> Rational {
        Rational { num: n, den: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Reduce an `i128` ratio and convert back; `None` when the reduced
    /// terms no longer fit in `i64`.
    fn from_i128(num: i128, den: i128) -> Option<Rational> {
        debug_assert!(den != 0, "rational with zero denominator");
        let g = num.gcd(&den);
        let (mut num, mut den) = if g == 0 { (0, 1) } else { (num / g, den / g) };
        if den < 0 {
            num = -num;
            den = -den;
        }
        Some(Rational {
            num: i64::try_from(num).ok()?,
            den: i64::try_from(den).ok()?,
        })
    }

    /// Sum; `None` when the reduced result is not representable.
    pub fn add(&self, other: &Rational) -> Option<Rational> {
        Rational::from_i128(
            self.num as i128 * other.den as i128 + other.num as i128 * self.den as i128,
            self.den as i128 * other.den as i128,
        )
    }

    pub fn neg(&self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }

    /// Product; `None` when the reduced result is not representable.
    pub fn mul(&self, other: &Rational) -> Option<Rational> {
        Rational::from_i128(
            self.num as i128 * other.num as i128,
            self.den as i128 * other.den as i128,
        )
    }

    /// Recover a simple fraction from an exact decimal value.
    ///
    /// Accepts the result only when the reduced denominator stays within
    /// [`MAX_DENOMINATOR`] and the fraction reproduces the input to within
    /// 1e-50, so `0.6` becomes `3/5` and a long `0.333…` tail becomes `1/3`,
    /// while an 80-digit approximation of pi is rejected.
    pub fn from_real(value: &Real) -> Option<Rational> {
        let (mant, exp) = value.decimal_parts()?;
        if mant.is_zero() {
            return Some(Rational::ZERO);
        }
        // A positive exponent past 18 means an integer of at least 10^19,
        // beyond i64. Far below that window the value (at most 80 mantissa
        // digits) sits under the acceptance tolerance and collapses to
        // zero. Both gates run before any 10^|exp| is materialized.
        if exp > 18 {
            return None;
        }
        if exp < -130 {
            return Some(Rational::ZERO);
        }
        let (num0, den0) = if exp >= 0 {
            (mant * BigInt::from(10u32).pow(exp as u32), BigInt::from(1))
        } else {
            (mant.clone(), BigInt::from(10u32).pow((-exp) as u32))
        };

        // Exact reduction first: decimal denominators are 2^a * 5^b.
        let g = num0.gcd(&den0);
        let (num_red, den_red) = (&num0 / &g, &den0 / &g);
        if let (Some(n), Some(d)) = (num_red.to_i64(), den_red.to_i64()) {
            if d <= MAX_DENOMINATOR {
                return Some(Rational { num: n, den: d });
            }
        }

        // Otherwise walk the continued-fraction convergents of num0/den0.
        let mut a = num0.clone();
        let mut b = den0.clone();
        let mut p_prev = BigInt::from(1);
        let mut p = a.div_floor(&b);
        let mut q_prev = BigInt::from(0);
        let mut q = BigInt::from(1);
        let mut rem = &a - &p * &b;
        while !rem.is_zero() {
            a = b;
            b = rem;
            let digit = a.div_floor(&b);
            rem = &a - &digit * &b;
            let p_next = &digit * &p + &p_prev;
            let q_next = &digit * &q + &q_prev;
            if q_next > BigInt::from(MAX_DENOMINATOR) {
                break;
            }
            p_prev = p;
            p = p_next;
            q_prev = q;
            q = q_next;
        }

        // |num0/den0 - p/q| <= 1e-50, checked without division:
        // |num0*q - p*den0| * 10^50 <= den0 * q.
        let err = (&num0 * &q - &p * &den0).abs();
        let tol = BigInt::from(10u32).pow(50);
        if &err * tol <= &den0 * &q {
            Some(Rational::new(p.to_i64()?, q.to_i64()?))
        } else {
            None
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
