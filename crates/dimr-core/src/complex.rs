//! Complex numbers over [`Real`].
//!
//! A value is "real" iff its imaginary part is exactly zero; formatting and
//! several unary operations branch on that test. NaN in either component
//! marks the whole value undefined.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::rational::Rational;
use crate::real::Real;

/// A complex number: a pair of arbitrary-precision reals.
#[derive(Clone, Debug)]
pub struct Complex {
    re: Real,
    im: Real,
}

impl Complex {
    pub fn new(re: Real, im: Real) -> Complex {
        Complex { re, im }
    }

    pub fn real(re: Real) -> Complex {
        Complex {
            re,
            im: Real::zero(),
        }
    }

    pub fn imaginary(im: Real) -> Complex {
        Complex {
            re: Real::zero(),
            im,
        }
    }

    pub fn zero() -> Complex {
        Complex::real(Real::zero())
    }

    pub fn one() -> Complex {
        Complex::real(Real::one())
    }

    pub fn nan() -> Complex {
        Complex {
            re: Real::nan(),
            im: Real::nan(),
        }
    }

    pub fn re(&self) -> &Real {
        &self.re
    }

    pub fn im(&self) -> &Real {
        &self.im
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True when the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    pub fn conjugate(&self) -> Complex {
        Complex {
            re: self.re.clone(),
            im: -&self.im,
        }
    }

    /// Magnitude, a real number.
    pub fn magnitude(&self) -> Real {
        if self.is_nan() {
            return Real::nan();
        }
        if self.is_real() {
            return self.re.abs();
        }
        (&(&self.re * &self.re) + &(&self.im * &self.im)).sqrt()
    }

    /// Principal argument, in `(-pi, pi]`.
    pub fn argument(&self) -> Real {
        Real::atan2(&self.im, &self.re)
    }

    fn mul_impl(&self, rhs: &Complex) -> Complex {
        let re = &(&self.re * &rhs.re) - &(&self.im * &rhs.im);
        let im = &(&self.re * &rhs.im) + &(&self.im * &rhs.re);
        Complex { re, im }
    }

    fn div_impl(&self, rhs: &Complex) -> Complex {
        if rhs.is_zero() {
            return Complex::nan();
        }
        let den = &(&rhs.re * &rhs.re) + &(&rhs.im * &rhs.im);
        let re = &(&(&self.re * &rhs.re) + &(&self.im * &rhs.im)) / &den;
        let im = &(&(&self.im * &rhs.re) - &(&self.re * &rhs.im)) / &den;
        Complex { re, im }
    }

    fn powi(&self, n: i64) -> Complex {
        if self.is_nan() {
            return Complex::nan();
        }
        if n == 0 {
            return if self.is_zero() {
                Complex::nan()
            } else {
                Complex::one()
            };
        }
        if self.is_zero() {
            return if n > 0 { Complex::zero() } else { Complex::nan() };
        }
        if self.is_real() {
            return Complex::real(self.re.pow(&Real::from(n)));
        }
        let mut result = Complex::one();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();
        while k > 0 {
            if k & 1 == 1 {
                result = result.mul_impl(&base);
            }
            k >>= 1;
            if k > 0 {
                base = base.mul_impl(&base);
            }
        }
        if n < 0 {
            Complex::one().div_impl(&result)
        } else {
            result
        }
    }

    /// `modulus * (cos(angle) + i sin(angle))`.
    fn from_polar(modulus: &Real, angle: &Real) -> Complex {
        Complex {
            re: modulus * &angle.cos(),
            im: modulus * &angle.sin(),
        }
    }

    /// Complex power with explicit branch policy.
    ///
    /// Integer real exponents use repeated multiplication; everything else
    /// goes through the polar/log-exp identity. For a negative real base
    /// and a non-integer real exponent the result depends on
    /// `complex_mode`: when false only exponents that reduce to a simple
    /// fraction with odd denominator have a (signed) real root, every other
    /// case is NaN; when true the full principal value is returned.
    pub fn raise(base: &Complex, exponent: &Complex, complex_mode: bool) -> Complex {
        if base.is_nan() || exponent.is_nan() {
            return Complex::nan();
        }
        if exponent.is_real() {
            if let Some(n) = exponent.re.to_i64() {
                return base.powi(n);
            }
            let e = &exponent.re;
            if base.is_real() {
                let b = &base.re;
                if b.is_zero() {
                    return if e.is_negative() {
                        Complex::nan()
                    } else {
                        Complex::zero()
                    };
                }
                if !b.is_negative() {
                    return Complex::real(b.pow(e));
                }
                // negative real base, fractional real exponent
                let magnitude = b.abs().pow(e);
                if complex_mode {
                    let angle = e * &Real::pi();
                    return Complex::from_polar(&magnitude, &angle);
                }
                return match Rational::from_real(e) {
                    Some(frac) if frac.denominator() % 2 == 1 => {
                        if frac.numerator() % 2 == 0 {
                            Complex::real(magnitude)
                        } else {
                            Complex::real(-&magnitude)
                        }
                    }
                    _ => Complex::nan(),
                };
            }
            // complex base, real exponent: principal value
            let ln_r = base.magnitude().ln();
            let theta = base.argument();
            let modulus = (&(e * &ln_r)).exp();
            let angle = e * &theta;
            return Complex::from_polar(&modulus, &angle);
        }
        // complex exponent: principal value, complex mode only
        if !complex_mode {
            return Complex::nan();
        }
        if base.is_zero() {
            return Complex::nan();
        }
        let ln_r = base.magnitude().ln();
        let theta = base.argument();
        let x = &exponent.re;
        let y = &exponent.im;
        let modulus = (&(&(x * &ln_r) - &(y * &theta))).exp();
        let angle = &(x * &theta) + &(y * &ln_r);
        Complex::from_polar(&modulus, &angle)
    }

    /// Square root. A negative real yields the imaginary root only in
    /// complex mode; a truly complex input always takes the principal root.
    pub fn sqrt(&self, complex_mode: bool) -> Complex {
        if self.is_nan() {
            return Complex::nan();
        }
        if self.is_real() {
            if !self.re.is_negative() {
                return Complex::real(self.re.sqrt());
            }
            if complex_mode {
                return Complex::imaginary(self.re.abs().sqrt());
            }
            return Complex::nan();
        }
        let modulus = self.magnitude().sqrt();
        let angle = &self.argument() / &Real::from(2);
        Complex::from_polar(&modulus, &angle)
    }

    /// Cube root. Negative reals keep their real root in both modes.
    pub fn cbrt(&self) -> Complex {
        if self.is_nan() {
            return Complex::nan();
        }
        if self.is_real() {
            return Complex::real(self.re.cbrt());
        }
        let modulus = self.magnitude().cbrt();
        let angle = &self.argument() / &Real::from(3);
        Complex::from_polar(&modulus, &angle)
    }

    /// Round both components to `frac_digits` fractional digits.
    pub fn round(&self, frac_digits: i32) -> Complex {
        Complex {
            re: self.re.round(frac_digits),
            im: self.im.round(frac_digits),
        }
    }

    /// Truncate both components to `frac_digits` fractional digits.
    pub fn trunc(&self, frac_digits: i32) -> Complex {
        Complex {
            re: self.re.trunc(frac_digits),
            im: self.im.trunc(frac_digits),
        }
    }
}

/// Index of the sign that separates the real and imaginary terms of a
/// composite literal, skipping leading signs and exponent signs.
fn split_point(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if b == b'+' || b == b'-' {
            let prev = bytes[i - 1];
            if prev != b'e' && prev != b'E' {
                return Some(i);
            }
        }
    }
    None
}

impl FromStr for Complex {
    type Err = ParseError;

    /// Accepts `<real>`, `<real>j`, and `<real><sign><real>j`.
    fn from_str(s: &str) -> Result<Complex, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        match s.strip_suffix('j') {
            None => Ok(Complex::real(s.parse()?)),
            Some(body) => match split_point(body) {
                Some(i) => Ok(Complex::new(body[..i].parse()?, body[i..].parse()?)),
                None => Ok(Complex::imaginary(body.parse()?)),
            },
        }
    }
}

impl std::ops::Add for &Complex {
    type Output = Complex;
    fn add(self, rhs: &Complex) -> Complex {
        Complex {
            re: &self.re + &rhs.re,
            im: &self.im + &rhs.im,
        }
    }
}

impl std::ops::Sub for &Complex {
    type Output = Complex;
    fn sub(self, rhs: &Complex) -> Complex {
        Complex {
            re: &self.re - &rhs.re,
            im: &self.im - &rhs.im,
        }
    }
}

impl std::ops::Mul for &Complex {
    type Output = Complex;
    fn mul(self, rhs: &Complex) -> Complex {
        self.mul_impl(rhs)
    }
}

impl std::ops::Div for &Complex {
    type Output = Complex;
    fn div(self, rhs: &Complex) -> Complex {
        self.div_impl(rhs)
    }
}

impl std::ops::Neg for &Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex {
            re: -&self.re,
            im: -&self.im,
        }
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Complex) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl From<i64> for Complex {
    fn from(v: i64) -> Complex {
        Complex::real(Real::from(v))
    }
}

impl From<Real> for Complex {
    fn from(v: Real) -> Complex {
        Complex::real(v)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.is_real() {
            return write!(f, "{}", self.re);
        }
        if self.re.is_zero() {
            return write!(f, "{}j", self.im);
        }
        if self.im.is_negative() {
            write!(f, "{}-{}j", self.re, self.im.abs())
        } else {
            write!(f, "{}+{}j", self.re, self.im)
        }
    }
}
