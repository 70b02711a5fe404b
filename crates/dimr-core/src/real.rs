//! Arbitrary-precision decimal reals.
//!
//! A [`Real`] is `mantissa * 10^exponent` with a `BigInt` mantissa, plus the
//! special states `NaN` and `±Inf`. Every operation rounds its result to
//! [`WORKING_DIGITS`] significant decimal digits (half away from zero);
//! display precision is a separate, smaller concern handled at format time.
//!
//! NaN is the designated "undefined" value: division by exact zero, even
//! roots of negatives, logs of non-positives, and any operation touching a
//! NaN operand all yield NaN instead of a fault.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::ParseError;

/// Significant decimal digits kept by every arithmetic result.
pub const WORKING_DIGITS: u64 = 80;

/// Fractional digits shown by the "auto" fixed-point display.
pub(crate) const AUTO_FRAC_DIGITS: u32 = 20;

/// Exponent magnitude beyond which results saturate to ±Inf / 0.
const EXP_LIMIT: i64 = 400_000_000;

/// `exp` arguments beyond this saturate without running the series.
const EXP_ARG_LIMIT: i64 = 8;

const PI_LITERAL: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679821480865";
const LN10_LITERAL: &str = "2.3025850929940456840179914546843642076011014886287729760333279009675726096773524802359972050895982983419677840";

#[derive(Clone, Debug)]
enum Repr {
    Finite { mant: BigInt, exp: i64 },
    NaN,
    PosInf,
    NegInf,
}

/// An arbitrary-precision decimal real number.
#[derive(Clone, Debug)]
pub struct Real(Repr);

fn pow10(n: u64) -> BigInt {
    BigInt::from(10u32).pow(n as u32)
}

/// Decimal digit count of `m`'s magnitude; 0 for zero.
fn dec_len(m: &BigInt) -> u64 {
    if m.is_zero() {
        0
    } else {
        m.magnitude().to_str_radix(10).len() as u64
    }
}

/// `m / 10^shift`, rounded half away from zero.
fn shift_round(m: &BigInt, shift: u64) -> BigInt {
    if shift == 0 {
        return m.clone();
    }
    let p = pow10(shift);
    let (q, r) = m.abs().div_rem(&p);
    let q = if &r + &r >= p { q + 1 } else { q };
    if m.is_negative() {
        -q
    } else {
        q
    }
}

/// `m / 10^shift`, truncated toward zero.
fn shift_trunc(m: &BigInt, shift: u64) -> BigInt {
    if shift == 0 {
        return m.clone();
    }
    let q = m.abs() / pow10(shift);
    if m.is_negative() {
        -q
    } else {
        q
    }
}

/// Floor square root by Newton iteration. `n` must be non-negative.
fn isqrt(n: &BigInt) -> BigInt {
    if n.is_zero() {
        return BigInt::zero();
    }
    let mut x = BigInt::from(1) << (n.bits() / 2 + 1);
    loop {
        let y = (&x + n / &x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Floor cube root by Newton iteration. `n` must be non-negative.
fn icbrt(n: &BigInt) -> BigInt {
    if n.is_zero() {
        return BigInt::zero();
    }
    let mut x = BigInt::from(1) << (n.bits() / 3 + 1);
    loop {
        let y = (&x + &x + n / (&x * &x)) / 3;
        if y >= x {
            return x;
        }
        x = y;
    }
}

impl Real {
    fn make(mut mant: BigInt, mut exp: i64) -> Real {
        if mant.is_zero() {
            return Real(Repr::Finite {
                mant,
                exp: 0,
            });
        }
        let len = dec_len(&mant);
        if len > WORKING_DIGITS {
            let shift = len - WORKING_DIGITS;
            mant = shift_round(&mant, shift);
            exp += shift as i64;
        }
        let ten = BigInt::from(10u32);
        loop {
            let (q, r) = mant.div_rem(&ten);
            if r.is_zero() && !q.is_zero() {
                mant = q;
                exp += 1;
            } else if r.is_zero() && q.is_zero() {
                // the mantissa was exactly zero after rounding
                return Real(Repr::Finite {
                    mant: BigInt::zero(),
                    exp: 0,
                });
            } else {
                break;
            }
        }
        let order = dec_len(&mant) as i64 + exp;
        if order > EXP_LIMIT {
            return if mant.is_negative() {
                Real(Repr::NegInf)
            } else {
                Real(Repr::PosInf)
            };
        }
        if order < -EXP_LIMIT {
            return Real::zero();
        }
        Real(Repr::Finite { mant, exp })
    }

    pub fn nan() -> Real {
        Real(Repr::NaN)
    }

    pub fn infinity() -> Real {
        Real(Repr::PosInf)
    }

    pub fn neg_infinity() -> Real {
        Real(Repr::NegInf)
    }

    pub fn zero() -> Real {
        Real::make(BigInt::zero(), 0)
    }

    pub fn one() -> Real {
        Real::from(1)
    }

    /// The circle constant at working precision.
    pub fn pi() -> Real {
        static PI: OnceLock<Real> = OnceLock::new();
        PI.get_or_init(|| PI_LITERAL.parse().expect("pi literal"))
            .clone()
    }

    pub(crate) fn ln10() -> Real {
        static LN10: OnceLock<Real> = OnceLock::new();
        LN10.get_or_init(|| LN10_LITERAL.parse().expect("ln10 literal"))
            .clone()
    }

    pub fn is_nan(&self) -> bool {
        matches!(self.0, Repr::NaN)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self.0, Repr::Finite { .. })
    }

    pub fn is_zero(&self) -> bool {
        matches!(&self.0, Repr::Finite { mant, .. } if mant.is_zero())
    }

    pub fn is_negative(&self) -> bool {
        match &self.0 {
            Repr::Finite { mant, .. } => mant.is_negative(),
            Repr::NegInf => true,
            _ => false,
        }
    }

    /// True for finite values with no fractional part (including zero).
    pub fn is_integer(&self) -> bool {
        match &self.0 {
            Repr::Finite { mant, exp } => mant.is_zero() || *exp >= 0,
            _ => false,
        }
    }

    /// Mantissa and exponent of a finite value (`self = mant * 10^exp`).
    pub(crate) fn decimal_parts(&self) -> Option<(&BigInt, i64)> {
        match &self.0 {
            Repr::Finite { mant, exp } => Some((mant, *exp)),
            _ => None,
        }
    }

    /// Exponent of the leading digit: the value's magnitude lies in
    /// `[10^(order-1), 10^order)`. Finite nonzero values only.
    pub(crate) fn order(&self) -> i64 {
        match &self.0 {
            Repr::Finite { mant, exp } => dec_len(mant) as i64 + exp,
            _ => 0,
        }
    }

    pub fn abs(&self) -> Real {
        match &self.0 {
            Repr::Finite { mant, exp } => Real(Repr::Finite {
                mant: mant.abs(),
                exp: *exp,
            }),
            Repr::NaN => Real::nan(),
            Repr::PosInf | Repr::NegInf => Real::infinity(),
        }
    }

    /// Exact integer value, when there is one and it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let (mant, exp) = self.decimal_parts()?;
        if mant.is_zero() {
            return Some(0);
        }
        if exp < 0 || exp > 18 {
            return None;
        }
        (mant * pow10(exp as u64)).to_i64()
    }

    /// Shift the decimal exponent by `k` (multiply by `10^k`).
    pub(crate) fn mul_pow10(&self, k: i64) -> Real {
        match &self.0 {
            Repr::Finite { mant, exp } => Real::make(mant.clone(), exp + k),
            _ => self.clone(),
        }
    }

    /// Round to `frac_digits` fractional digits, half away from zero.
    pub fn round(&self, frac_digits: i32) -> Real {
        match &self.0 {
            Repr::Finite { mant, exp } => {
                let target = -(frac_digits as i64);
                if *exp >= target {
                    self.clone()
                } else {
                    Real::make(shift_round(mant, (target - exp) as u64), target)
                }
            }
            _ => self.clone(),
        }
    }

    /// Truncate to `frac_digits` fractional digits, toward zero.
    pub fn trunc(&self, frac_digits: i32) -> Real {
        match &self.0 {
            Repr::Finite { mant, exp } => {
                let target = -(frac_digits as i64);
                if *exp >= target {
                    self.clone()
                } else {
                    Real::make(shift_trunc(mant, (target - exp) as u64), target)
                }
            }
            _ => self.clone(),
        }
    }

    /// Largest integer not greater than `self`.
    pub fn floor(&self) -> Real {
        match &self.0 {
            Repr::Finite { mant, exp } => {
                if *exp >= 0 {
                    self.clone()
                } else {
                    let q = mant.div_floor(&pow10((-exp) as u64));
                    Real::make(q, 0)
                }
            }
            _ => self.clone(),
        }
    }

    fn add_impl(&self, other: &Real) -> Real {
        match (&self.0, &other.0) {
            (Repr::NaN, _) | (_, Repr::NaN) => Real::nan(),
            (Repr::PosInf, Repr::NegInf) | (Repr::NegInf, Repr::PosInf) => Real::nan(),
            (Repr::PosInf, _) | (_, Repr::PosInf) => Real::infinity(),
            (Repr::NegInf, _) | (_, Repr::NegInf) => Real::neg_infinity(),
            (Repr::Finite { mant: ma, exp: ea }, Repr::Finite { mant: mb, exp: eb }) => {
                if ma.is_zero() {
                    return other.clone();
                }
                if mb.is_zero() {
                    return self.clone();
                }
                let (oa, ob) = (self.order(), other.order());
                let margin = WORKING_DIGITS as i64 + 2;
                if oa - ob > margin {
                    return self.clone();
                }
                if ob - oa > margin {
                    return other.clone();
                }
                let e = (*ea).min(*eb);
                let sa = (*ea - e) as u64;
                let sb = (*eb - e) as u64;
                Real::make(ma * pow10(sa) + mb * pow10(sb), e)
            }
        }
    }

    fn mul_impl(&self, other: &Real) -> Real {
        match (&self.0, &other.0) {
            (Repr::NaN, _) | (_, Repr::NaN) => Real::nan(),
            (Repr::Finite { mant, .. }, inf @ (Repr::PosInf | Repr::NegInf))
            | (inf @ (Repr::PosInf | Repr::NegInf), Repr::Finite { mant, .. }) => {
                if mant.is_zero() {
                    Real::nan()
                } else if mant.is_negative() == matches!(inf, Repr::NegInf) {
                    Real::infinity()
                } else {
                    Real::neg_infinity()
                }
            }
            (Repr::PosInf, Repr::PosInf) | (Repr::NegInf, Repr::NegInf) => Real::infinity(),
            (Repr::PosInf, Repr::NegInf) | (Repr::NegInf, Repr::PosInf) => Real::neg_infinity(),
            (Repr::Finite { mant: ma, exp: ea }, Repr::Finite { mant: mb, exp: eb }) => {
                Real::make(ma * mb, ea + eb)
            }
        }
    }

    fn div_impl(&self, other: &Real) -> Real {
        match (&self.0, &other.0) {
            (Repr::NaN, _) | (_, Repr::NaN) => Real::nan(),
            (Repr::PosInf | Repr::NegInf, Repr::PosInf | Repr::NegInf) => Real::nan(),
            (Repr::Finite { .. }, Repr::PosInf | Repr::NegInf) => Real::zero(),
            (inf @ (Repr::PosInf | Repr::NegInf), Repr::Finite { mant, .. }) => {
                if matches!(inf, Repr::NegInf) != mant.is_negative() {
                    Real::neg_infinity()
                } else {
                    Real::infinity()
                }
            }
            (Repr::Finite { mant: ma, exp: ea }, Repr::Finite { mant: mb, exp: eb }) => {
                if mb.is_zero() {
                    return Real::nan();
                }
                if ma.is_zero() {
                    return Real::zero();
                }
                let scale = (WORKING_DIGITS as i64 + 2 + dec_len(mb) as i64 - dec_len(ma) as i64)
                    .max(0) as u64;
                let num = ma.abs() * pow10(scale);
                let den = mb.abs();
                let (q, r) = num.div_rem(&den);
                let q = if &r + &r >= den { q + 1 } else { q };
                let q = if ma.is_negative() != mb.is_negative() {
                    -q
                } else {
                    q
                };
                Real::make(q, ea - eb - scale as i64)
            }
        }
    }

    /// Square root; NaN for negative input.
    pub fn sqrt(&self) -> Real {
        match &self.0 {
            Repr::NaN | Repr::NegInf => Real::nan(),
            Repr::PosInf => Real::infinity(),
            Repr::Finite { mant, exp } => {
                if mant.is_negative() {
                    return Real::nan();
                }
                if mant.is_zero() {
                    return Real::zero();
                }
                let mut s = 2 * (WORKING_DIGITS as i64 + 2);
                if (exp - s).rem_euclid(2) != 0 {
                    s += 1;
                }
                let r = isqrt(&(mant * pow10(s as u64)));
                Real::make(r, (exp - s) / 2)
            }
        }
    }

    /// Cube root; defined for negatives (the real root).
    pub fn cbrt(&self) -> Real {
        match &self.0 {
            Repr::NaN => Real::nan(),
            Repr::PosInf => Real::infinity(),
            Repr::NegInf => Real::neg_infinity(),
            Repr::Finite { mant, exp } => {
                if mant.is_zero() {
                    return Real::zero();
                }
                let mut s = 3 * (WORKING_DIGITS as i64 + 2);
                while (exp - s).rem_euclid(3) != 0 {
                    s += 1;
                }
                let r = icbrt(&(mant.abs() * pow10(s as u64)));
                let r = if mant.is_negative() { -r } else { r };
                Real::make(r, (exp - s) / 3)
            }
        }
    }

    /// Natural exponential. Saturates to `+Inf` / `0` far outside the
    /// representable range.
    pub fn exp(&self) -> Real {
        match &self.0 {
            Repr::NaN => Real::nan(),
            Repr::PosInf => Real::infinity(),
            Repr::NegInf => Real::zero(),
            Repr::Finite { mant, .. } => {
                if mant.is_zero() {
                    return Real::one();
                }
                if !mant.is_negative() && self.order() > EXP_ARG_LIMIT {
                    return Real::infinity();
                }
                if mant.is_negative() && self.order() > EXP_ARG_LIMIT {
                    return Real::zero();
                }
                let ln10 = Real::ln10();
                let k = (self / &ln10).floor().to_i64().unwrap_or(0);
                let r = self - &(&Real::from(k) * &ln10);
                // r in [0, ln 10); halve 12 times so the series converges fast
                let t = &r / &Real::from(1i64 << 12);
                let mut sum = &Real::one() + &t;
                let mut term = t.clone();
                let mut n = 2i64;
                loop {
                    term = &(&term * &t) / &Real::from(n);
                    if term.is_zero() || term.order() < -(WORKING_DIGITS as i64 + 6) {
                        break;
                    }
                    sum = &sum + &term;
                    n += 1;
                }
                for _ in 0..12 {
                    sum = &sum * &sum;
                }
                sum.mul_pow10(k)
            }
        }
    }

    /// Natural logarithm; NaN for non-positive input.
    pub fn ln(&self) -> Real {
        match &self.0 {
            Repr::NaN | Repr::NegInf => Real::nan(),
            Repr::PosInf => Real::infinity(),
            Repr::Finite { mant, .. } => {
                if mant.is_zero() || mant.is_negative() {
                    return Real::nan();
                }
                let k = self.order() - 1;
                let mut f = self.mul_pow10(-k); // f in [1, 10)
                // 13 square roots pull f close to 1
                for _ in 0..13 {
                    f = f.sqrt();
                }
                let u = &(&f - &Real::one()) / &(&f + &Real::one());
                let u2 = &u * &u;
                let mut term = u.clone();
                let mut sum = u;
                let mut n = 3i64;
                loop {
                    term = &term * &u2;
                    let contrib = &term / &Real::from(n);
                    if contrib.is_zero() || contrib.order() < -(WORKING_DIGITS as i64 + 6) {
                        break;
                    }
                    sum = &sum + &contrib;
                    n += 2;
                }
                let ln_f = &Real::from(2i64 << 13) * &sum;
                &ln_f + &(&Real::from(k) * &Real::ln10())
            }
        }
    }

    /// Base-10 logarithm.
    pub fn log10(&self) -> Real {
        &self.ln() / &Real::ln10()
    }

    fn powi(&self, n: i64) -> Real {
        if n == 0 {
            return if self.is_zero() || self.is_nan() {
                Real::nan()
            } else {
                Real::one()
            };
        }
        if self.is_nan() {
            return Real::nan();
        }
        if !self.is_finite() {
            let neg_result = self.is_negative() && n % 2 != 0;
            return match (n > 0, neg_result) {
                (true, false) => Real::infinity(),
                (true, true) => Real::neg_infinity(),
                (false, _) => Real::zero(),
            };
        }
        if self.is_zero() {
            return if n > 0 { Real::zero() } else { Real::nan() };
        }
        let mut result = Real::one();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();
        while k > 0 {
            if k & 1 == 1 {
                result = &result * &base;
            }
            k >>= 1;
            if k > 0 {
                base = &base * &base;
            }
        }
        if n < 0 {
            &Real::one() / &result
        } else {
            result
        }
    }

    /// Real power. Integer exponents work for any base (sign by parity);
    /// fractional exponents require a positive base, otherwise NaN. The
    /// complex layer owns the negative-base branch rules.
    pub fn pow(&self, exponent: &Real) -> Real {
        if self.is_nan() || exponent.is_nan() {
            return Real::nan();
        }
        if exponent.is_zero() {
            return if self.is_zero() || !self.is_finite() {
                Real::nan()
            } else {
                Real::one()
            };
        }
        if let Some(n) = exponent.to_i64() {
            return self.powi(n);
        }
        if self.is_zero() {
            return if exponent.is_negative() {
                Real::nan()
            } else {
                Real::zero()
            };
        }
        if self.is_negative() {
            return Real::nan();
        }
        (&exponent.mul_impl(&self.ln())).exp()
    }

    /// Reduce into `[0, 2*pi)` and return `(quadrant, remainder)` where the
    /// remainder lies in `[0, pi/2)` up to rounding noise.
    fn trig_reduce(&self) -> (i64, Real) {
        let two_pi = &Real::pi() * &Real::from(2);
        let n = (self / &two_pi).floor();
        let y = self - &(&n * &two_pi);
        let half_pi = &Real::pi() / &Real::from(2);
        let q = (&y / &half_pi).floor().to_i64().unwrap_or(0);
        let t = &y - &(&Real::from(q) * &half_pi);
        (q.rem_euclid(4), t)
    }

    fn sin_series(t: &Real) -> Real {
        let t2 = t * t;
        let mut term = t.clone();
        let mut sum = t.clone();
        let mut n = 1i64;
        loop {
            term = &(&term * &t2) / &Real::from(-(2 * n) * (2 * n + 1));
            if term.is_zero() || term.order() < -(WORKING_DIGITS as i64 + 6) {
                break;
            }
            sum = &sum + &term;
            n += 1;
        }
        sum
    }

    fn cos_series(t: &Real) -> Real {
        let t2 = t * t;
        let mut term = Real::one();
        let mut sum = Real::one();
        let mut n = 1i64;
        loop {
            term = &(&term * &t2) / &Real::from(-(2 * n - 1) * (2 * n));
            if term.is_zero() || term.order() < -(WORKING_DIGITS as i64 + 6) {
                break;
            }
            sum = &sum + &term;
            n += 1;
        }
        sum
    }

    pub fn sin(&self) -> Real {
        if !self.is_finite() {
            return Real::nan();
        }
        let (q, t) = self.trig_reduce();
        match q {
            0 => Real::sin_series(&t),
            1 => Real::cos_series(&t),
            2 => -&Real::sin_series(&t),
            _ => -&Real::cos_series(&t),
        }
    }

    pub fn cos(&self) -> Real {
        if !self.is_finite() {
            return Real::nan();
        }
        let (q, t) = self.trig_reduce();
        match q {
            0 => Real::cos_series(&t),
            1 => -&Real::sin_series(&t),
            2 => -&Real::cos_series(&t),
            _ => Real::sin_series(&t),
        }
    }

    pub fn tan(&self) -> Real {
        &self.sin() / &self.cos()
    }

    pub fn atan(&self) -> Real {
        match &self.0 {
            Repr::NaN => Real::nan(),
            Repr::PosInf => &Real::pi() / &Real::from(2),
            Repr::NegInf => -&(&Real::pi() / &Real::from(2)),
            Repr::Finite { mant, .. } => {
                if mant.is_zero() {
                    return Real::zero();
                }
                let negative = mant.is_negative();
                let mut t = self.abs();
                // four angle halvings: atan(x) = 2 atan(x / (1 + sqrt(1 + x^2)))
                for _ in 0..4 {
                    let hyp = (&Real::one() + &(&t * &t)).sqrt();
                    t = &t / &(&Real::one() + &hyp);
                }
                let t2 = &t * &t;
                let mut power = t.clone();
                let mut sum = t.clone();
                let mut n = 3i64;
                loop {
                    power = -&(&power * &t2);
                    let contrib = &power / &Real::from(n);
                    if contrib.is_zero() || contrib.order() < -(WORKING_DIGITS as i64 + 6) {
                        break;
                    }
                    sum = &sum + &contrib;
                    n += 2;
                }
                let result = &Real::from(16) * &sum;
                if negative {
                    -&result
                } else {
                    result
                }
            }
        }
    }

    pub fn asin(&self) -> Real {
        if self.is_nan() || !self.is_finite() {
            return Real::nan();
        }
        let one = Real::one();
        match self.abs().partial_cmp(&one) {
            Some(Ordering::Greater) | None => Real::nan(),
            Some(Ordering::Equal) => {
                let half_pi = &Real::pi() / &Real::from(2);
                if self.is_negative() {
                    -&half_pi
                } else {
                    half_pi
                }
            }
            Some(Ordering::Less) => {
                let denom = (&one - &(self * self)).sqrt();
                (&(self / &denom)).atan()
            }
        }
    }

    pub fn acos(&self) -> Real {
        &(&Real::pi() / &Real::from(2)) - &self.asin()
    }

    /// Angle of the point `(x, y)`, in `(-pi, pi]`.
    pub(crate) fn atan2(y: &Real, x: &Real) -> Real {
        if y.is_nan() || x.is_nan() {
            return Real::nan();
        }
        if x.is_zero() && y.is_zero() {
            return Real::zero();
        }
        if x.is_zero() {
            let half_pi = &Real::pi() / &Real::from(2);
            return if y.is_negative() { -&half_pi } else { half_pi };
        }
        let base = (&(y / x)).atan();
        if x.is_negative() {
            if y.is_negative() {
                &base - &Real::pi()
            } else {
                &base + &Real::pi()
            }
        } else {
            base
        }
    }

    /// Fixed-point decimal rendering. A negative `precision` means "auto":
    /// round at [`AUTO_FRAC_DIGITS`] fractional digits and trim trailing
    /// zeros; otherwise exactly `precision` fractional digits are emitted.
    pub fn to_fixed(&self, precision: i32) -> String {
        match &self.0 {
            Repr::NaN => "NaN".to_string(),
            Repr::PosInf => "inf".to_string(),
            Repr::NegInf => "-inf".to_string(),
            Repr::Finite { .. } => {
                let auto = precision < 0;
                let p = if auto {
                    AUTO_FRAC_DIGITS
                } else {
                    precision as u32
                };
                let rounded = self.round(p as i32);
                let (mant, exp) = rounded
                    .decimal_parts()
                    .expect("round keeps finite values finite");
                if mant.is_zero() {
                    return if auto || p == 0 {
                        "0".to_string()
                    } else {
                        format!("0.{}", "0".repeat(p as usize))
                    };
                }
                let negative = mant.is_negative();
                let mag = mant.abs();
                let (int_part, mut frac) = if exp >= 0 {
                    ((mag * pow10(exp as u64)).to_string(), String::new())
                } else {
                    let shift = (-exp) as u64;
                    let (q, r) = mag.div_rem(&pow10(shift));
                    let digits = r.to_string();
                    let mut frac = "0".repeat(shift as usize - digits.len());
                    frac.push_str(&digits);
                    (q.to_string(), frac)
                };
                if auto {
                    while frac.ends_with('0') {
                        frac.pop();
                    }
                } else {
                    while frac.len() < p as usize {
                        frac.push('0');
                    }
                }
                let mut out = String::new();
                if negative {
                    out.push('-');
                }
                out.push_str(&int_part);
                if !frac.is_empty() {
                    out.push('.');
                    out.push_str(&frac);
                }
                out
            }
        }
    }

    /// Digits of this value in `radix`, with `frac_digits` fractional
    /// digits (rounded half away from zero). No radix prefix is added.
    /// Non-finite values render as their decimal spellings.
    pub fn to_radix_string(&self, radix: u32, frac_digits: u32) -> String {
        let (mant, exp) = match self.decimal_parts() {
            Some(parts) => parts,
            None => return self.to_fixed(-1),
        };
        let negative = mant.is_negative();
        let mag = mant.abs();
        let (num, den) = if exp >= 0 {
            (mag * pow10(exp as u64), BigInt::from(1))
        } else {
            (mag, pow10((-exp) as u64))
        };
        let (mut int_part, rem) = num.div_rem(&den);
        let scale = BigInt::from(radix).pow(frac_digits);
        let t = &rem * &scale;
        let (mut frac_part, r2) = t.div_rem(&den);
        if &r2 + &r2 >= den {
            frac_part += 1;
        }
        if frac_part >= scale {
            frac_part -= &scale;
            int_part += 1;
        }
        let mut out = String::new();
        if negative && !(int_part.is_zero() && frac_part.is_zero()) {
            out.push('-');
        }
        out.push_str(&int_part.magnitude().to_str_radix(radix));
        if frac_digits > 0 {
            let digits = frac_part.magnitude().to_str_radix(radix);
            out.push('.');
            out.push_str(&"0".repeat(frac_digits as usize - digits.len()));
            out.push_str(&digits);
        }
        out
    }

    /// Parse digits in an arbitrary radix: optional sign, integer digits,
    /// optional fraction. No exponent notation outside radix 10.
    pub fn parse_radix(s: &str, radix: u32) -> Result<Real, ParseError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseError::InvalidRadix(radix));
        }
        let s = s.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let mut int_acc = BigInt::zero();
        let mut frac_acc = BigInt::zero();
        let mut frac_len = 0u32;
        let mut seen_digit = false;
        let mut in_fraction = false;
        for c in rest.chars() {
            if c == '.' {
                if in_fraction {
                    return Err(ParseError::Malformed(s.to_string()));
                }
                in_fraction = true;
                continue;
            }
            let digit = c
                .to_digit(radix)
                .ok_or(ParseError::InvalidChar(c))?;
            seen_digit = true;
            if in_fraction {
                frac_acc = frac_acc * radix + digit;
                frac_len += 1;
            } else {
                int_acc = int_acc * radix + digit;
            }
        }
        if !seen_digit {
            return Err(ParseError::Empty);
        }
        let mut value = Real::make(int_acc, 0);
        if frac_len > 0 {
            let den = Real::make(BigInt::from(radix).pow(frac_len), 0);
            value = &value + &(&Real::make(frac_acc, 0) / &den);
        }
        if negative {
            value = -&value;
        }
        Ok(value)
    }
}

impl FromStr for Real {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Real, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let mut chars = s.chars().peekable();
        let mut negative = false;
        if let Some(&c) = chars.peek() {
            if c == '+' || c == '-' {
                negative = c == '-';
                chars.next();
            }
        }
        let mut digits = String::new();
        let mut frac_len: i64 = 0;
        let mut seen_digit = false;
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                seen_digit = true;
                chars.next();
            } else {
                break;
            }
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    digits.push(c);
                    frac_len += 1;
                    seen_digit = true;
                    chars.next();
                } else {
                    break;
                }
            }
        }
        if !seen_digit {
            return Err(ParseError::Empty);
        }
        let mut exp_val: i64 = 0;
        if matches!(chars.peek(), Some(&'e') | Some(&'E')) {
            chars.next();
            let mut exp_negative = false;
            if let Some(&c) = chars.peek() {
                if c == '+' || c == '-' {
                    exp_negative = c == '-';
                    chars.next();
                }
            }
            let mut exp_digits = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    exp_digits.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            if exp_digits.is_empty() {
                return Err(ParseError::Malformed(s.to_string()));
            }
            exp_val = exp_digits
                .parse::<i64>()
                .map_err(|_| ParseError::Malformed(s.to_string()))?;
            if exp_negative {
                exp_val = -exp_val;
            }
        }
        if let Some(&c) = chars.peek() {
            return Err(ParseError::InvalidChar(c));
        }
        let mut mant = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| ParseError::Malformed(s.to_string()))?;
        if negative {
            mant = -mant;
        }
        Ok(Real::make(mant, exp_val - frac_len))
    }
}

impl From<i64> for Real {
    fn from(v: i64) -> Real {
        Real::make(BigInt::from(v), 0)
    }
}

impl From<i32> for Real {
    fn from(v: i32) -> Real {
        Real::from(v as i64)
    }
}

impl From<u32> for Real {
    fn from(v: u32) -> Real {
        Real::from(v as i64)
    }
}

impl std::ops::Add for &Real {
    type Output = Real;
    fn add(self, rhs: &Real) -> Real {
        self.add_impl(rhs)
    }
}

impl std::ops::Sub for &Real {
    type Output = Real;
    fn sub(self, rhs: &Real) -> Real {
        self.add_impl(&-rhs)
    }
}

impl std::ops::Mul for &Real {
    type Output = Real;
    fn mul(self, rhs: &Real) -> Real {
        self.mul_impl(rhs)
    }
}

impl std::ops::Div for &Real {
    type Output = Real;
    fn div(self, rhs: &Real) -> Real {
        self.div_impl(rhs)
    }
}

impl std::ops::Neg for &Real {
    type Output = Real;
    fn neg(self) -> Real {
        match &self.0 {
            Repr::Finite { mant, exp } => Real(Repr::Finite {
                mant: -mant,
                exp: *exp,
            }),
            Repr::NaN => Real::nan(),
            Repr::PosInf => Real::neg_infinity(),
            Repr::NegInf => Real::infinity(),
        }
    }
}

impl std::ops::Add for Real {
    type Output = Real;
    fn add(self, rhs: Real) -> Real {
        &self + &rhs
    }
}

impl std::ops::Sub for Real {
    type Output = Real;
    fn sub(self, rhs: Real) -> Real {
        &self - &rhs
    }
}

impl std::ops::Mul for Real {
    type Output = Real;
    fn mul(self, rhs: Real) -> Real {
        &self * &rhs
    }
}

impl std::ops::Div for Real {
    type Output = Real;
    fn div(self, rhs: Real) -> Real {
        &self / &rhs
    }
}

impl std::ops::Neg for Real {
    type Output = Real;
    fn neg(self) -> Real {
        -&self
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Real) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Real) -> Option<Ordering> {
        match (&self.0, &other.0) {
            (Repr::NaN, _) | (_, Repr::NaN) => None,
            (Repr::PosInf, Repr::PosInf) | (Repr::NegInf, Repr::NegInf) => Some(Ordering::Equal),
            (Repr::PosInf, _) => Some(Ordering::Greater),
            (_, Repr::PosInf) => Some(Ordering::Less),
            (Repr::NegInf, _) => Some(Ordering::Less),
            (_, Repr::NegInf) => Some(Ordering::Greater),
            (Repr::Finite { .. }, Repr::Finite { .. }) => {
                let d = self - other;
                if d.is_zero() {
                    Some(Ordering::Equal)
                } else if d.is_negative() {
                    Some(Ordering::Less)
                } else {
                    Some(Ordering::Greater)
                }
            }
        }
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fixed(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn real(s: &str) -> Real {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(real("123.45").to_string(), "123.45");
        assert_eq!(real("-0.5").to_string(), "-0.5");
        assert_eq!(real("1e3").to_string(), "1000");
        assert_eq!(real("2.5e-2").to_string(), "0.025");
        assert_eq!(real("+7").to_string(), "7");
        assert!("".parse::<Real>().is_err());
        assert!("1.2.3".parse::<Real>().is_err());
        assert!("12x".parse::<Real>().is_err());
        assert!("1e".parse::<Real>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = real("3") * real("2.5");
        assert_eq!(a.to_string(), "7.5");
        assert_eq!((real("1") / real("8")).to_string(), "0.125");
        assert_eq!((real("0.1") + real("0.2")).to_string(), "0.3");
        assert_eq!((real("1") - real("3")).to_string(), "-2");
    }

    #[test]
    fn test_division_by_zero_is_nan() {
        assert!((real("1") / real("0")).is_nan());
        assert!((real("0") / real("0")).is_nan());
        assert_eq!((real("1") / real("0")).to_fixed(-1), "NaN");
    }

    #[test]
    fn test_nan_propagates() {
        let nan = Real::nan();
        assert!((&nan + &real("1")).is_nan());
        assert!((&nan * &real("0")).is_nan());
        assert!(nan.sqrt().is_nan());
        assert!(nan.partial_cmp(&real("1")).is_none());
        assert_ne!(nan, Real::nan());
    }

    #[test]
    fn test_comparison() {
        assert!(real("1.5") > real("1.4999"));
        assert!(real("-2") < real("-1"));
        assert_eq!(real("2.0"), real("2"));
        assert!(Real::infinity() > real("1e100"));
        assert!(Real::neg_infinity() < real("-1e100"));
    }

    #[test]
    fn test_round_and_trunc() {
        assert_eq!(real("1.234").round(1).to_string(), "1.2");
        assert_eq!(real("1.25").round(1).to_string(), "1.3");
        assert_eq!(real("-1.25").round(1).to_string(), "-1.3");
        assert_eq!(real("1.274").trunc(1).to_string(), "1.2");
        assert_eq!(real("-1.29").trunc(1).to_string(), "-1.2");
        assert_eq!(real("7.7").trunc(0).to_string(), "7");
    }

    #[test]
    fn test_floor() {
        assert_eq!(real("2.7").floor().to_string(), "2");
        assert_eq!(real("-2.1").floor().to_string(), "-3");
        assert_eq!(real("5").floor().to_string(), "5");
    }

    #[test]
    fn test_sqrt_cbrt() {
        assert_eq!(real("36").sqrt().to_string(), "6");
        assert_eq!(real("125").cbrt().to_string(), "5");
        assert_eq!(real("-8").cbrt().to_string(), "-2");
        assert!(real("-1").sqrt().is_nan());
        assert_eq!(
            real("2").sqrt().to_fixed(24),
            "1.414213562373095048801689"
        );
    }

    #[test]
    fn test_transcendentals() {
        assert_eq!(real("1").exp().to_fixed(24), "2.718281828459045235360287");
        assert_eq!(real("2").ln().to_fixed(25), "0.6931471805599453094172321");
        assert_eq!(real("2").log10().to_fixed(25), "0.3010299956639811952137389");
        assert_eq!(real("1").sin().to_fixed(25), "0.8414709848078965066525023");
        assert_eq!(real("1").cos().to_fixed(25), "0.5403023058681397174009366");
        assert_eq!((real("1").atan() * real("4")).to_fixed(24), Real::pi().to_fixed(24));
        assert!(real("0").ln().is_nan());
        assert!(real("-3").ln().is_nan());
        assert!(real("2").asin().is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(real("2").pow(&real("10")).to_string(), "1024");
        assert_eq!(real("-2").pow(&real("3")).to_string(), "-8");
        assert_eq!(real("2").pow(&real("-2")).to_string(), "0.25");
        assert_eq!(
            real("2").pow(&real("0.5")).to_fixed(24),
            "1.414213562373095048801689"
        );
        assert_eq!(
            real("10").pow(&(real("1") / real("3"))).to_fixed(24),
            "2.154434690031883721759294"
        );
        assert!(real("-2").pow(&real("0.5")).is_nan());
        assert!(real("0").pow(&real("0")).is_nan());
    }

    #[test]
    fn test_pow_of_pi_exponent() {
        let v = real("2").pow(&Real::pi());
        assert_eq!(v.to_fixed(20), "8.82497782707628762386");
    }

    #[test]
    fn test_sin_of_pi_is_zero_at_display_precision() {
        assert_eq!(Real::pi().sin().to_fixed(-1), "0");
    }

    #[test]
    fn test_to_fixed_padding_and_trim() {
        assert_eq!(real("0.5").to_fixed(-1), "0.5");
        assert_eq!(real("0.5").to_fixed(3), "0.500");
        assert_eq!(real("410").to_fixed(-1), "410");
        assert_eq!(real("410").to_fixed(0), "410");
        assert_eq!(real("-0.0000000000000000000001").to_fixed(-1), "0");
        assert_eq!(real("0").to_fixed(2), "0.00");
    }

    #[test]
    fn test_radix_round_trip() {
        let v = real("10.625");
        assert_eq!(v.to_radix_string(2, 4), "1010.1010");
        assert_eq!(v.to_radix_string(16, 4), "a.a000");
        let back = Real::parse_radix("1010.1010", 2).unwrap();
        assert_eq!(back, v);
        assert_eq!(Real::parse_radix("ff", 16).unwrap().to_string(), "255");
        assert!(Real::parse_radix("12", 1).is_err());
        assert!(Real::parse_radix("102", 2).is_err());
    }

    #[test]
    fn test_radix_rounding_carries() {
        // 0.96875 = 0.11111b; two fractional bits round up into the integer
        assert_eq!(real("0.96875").to_radix_string(2, 2), "1.00");
    }

    #[test]
    fn test_parse_radix_sign() {
        assert_eq!(Real::parse_radix("-11", 2).unwrap().to_string(), "-3");
    }
}
