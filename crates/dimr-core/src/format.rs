//! Rendering quantities to text.
//!
//! The format entry point takes a format character and a precision and is
//! the one place where display preferences (radix, digit count, display
//! unit) meet the stored SI value. Out-of-range requests are rejected here,
//! at the boundary; NaN values render as the literal "NaN".

use crate::complex::Complex;
use crate::dimension::Dimension;
use crate::error::FormatError;
use crate::quantity::Quantity;
use crate::real::{Real, AUTO_FRAC_DIGITS};
use crate::units::{BASE_UNIT_NAMES, UNITS};

/// Largest accepted display precision, in fractional digits.
pub const MAX_PRECISION: i32 = 75;

/// Render a quantity using a format character:
///
/// - `'f'`: fixed-point decimal; negative precision means "auto" (round at
///   20 fractional digits, trim trailing zeros)
/// - `'b'`, `'o'`, `'h'`/`'x'`: binary / octal / hexadecimal digits with a
///   `0b` / `0o` / `0x` prefix
///
/// Radix modes always show full working precision scaled to the radix
/// (67 fractional digits in binary); the precision argument is validated
/// but otherwise ignored there.
pub fn format(q: &Quantity, format: char, precision: i32) -> Result<String, FormatError> {
    check_precision(precision)?;
    match format {
        'f' => Ok(render(q, &|r: &Real| r.to_fixed(precision))),
        'b' => Ok(render_radix(q, 2, "0b")),
        'o' => Ok(render_radix(q, 8, "0o")),
        'h' | 'x' => Ok(render_radix(q, 16, "0x")),
        other => Err(FormatError::UnknownFormat(other)),
    }
}

/// Render with an arbitrary radix in 2..=36 and no prefix.
pub fn format_radix(q: &Quantity, radix: u32, precision: i32) -> Result<String, FormatError> {
    check_precision(precision)?;
    if !(2..=36).contains(&radix) {
        return Err(FormatError::RadixOutOfRange(radix));
    }
    if radix == 10 {
        return Ok(render(q, &|r: &Real| r.to_fixed(precision)));
    }
    Ok(render_radix(q, radix, ""))
}

fn check_precision(precision: i32) -> Result<(), FormatError> {
    if precision > MAX_PRECISION {
        return Err(FormatError::PrecisionOverflow(precision, MAX_PRECISION));
    }
    Ok(())
}

/// Fractional digits carrying the same information as 20 decimal digits.
fn radix_frac_digits(radix: u32) -> u32 {
    let scale = 10f64.ln() / (radix as f64).ln();
    (AUTO_FRAC_DIGITS as f64 * scale).ceil() as u32
}

fn render_radix(q: &Quantity, radix: u32, prefix: &str) -> String {
    let digits = radix_frac_digits(radix);
    render(q, &|r: &Real| {
        let s = r.to_radix_string(radix, digits);
        match s.strip_prefix('-') {
            Some(rest) => format!("-{prefix}{rest}"),
            None => format!("{prefix}{s}"),
        }
    })
}

fn render(q: &Quantity, render_real: &dyn Fn(&Real) -> String) -> String {
    if q.is_nan() {
        return "NaN".to_string();
    }
    let (value, suffix) = match q.display_unit() {
        Some(display) => (
            q.value() / &Complex::real(display.factor.clone()),
            format!(" {}", display.label),
        ),
        None => (q.value().clone(), dimension_suffix(q.dimension())),
    };
    let mut out = render_value(&value, render_real, !suffix.is_empty());
    out.push_str(&suffix);
    out
}

fn render_value(value: &Complex, render_real: &dyn Fn(&Real) -> String, parenthesize: bool) -> String {
    if value.is_real() {
        return render_real(value.re());
    }
    let body = if value.re().is_zero() {
        format!("{}j", render_real(value.im()))
    } else if value.im().is_negative() {
        format!("{}-{}j", render_real(value.re()), render_real(&value.im().abs()))
    } else {
        format!("{}+{}j", render_real(value.re()), render_real(value.im()))
    };
    if parenthesize {
        format!("({body})")
    } else {
        body
    }
}

/// Suffix for a dimension vector. A dimension matching a factor-1 catalog
/// unit prints under that unit's name (second·ampere is a coulomb);
/// otherwise one SI base unit name per nonzero exponent, with superscripts
/// for squares and cubes, `^n` for other integers, and `^(p/q)` for
/// fractional exponents.
fn dimension_suffix(dimension: &Dimension) -> String {
    if let Some(def) = UNITS.iter().find(|def| {
        def.si_factor == "1" && Dimension::from_exponents(def.exponents) == *dimension
    }) {
        return format!(" {}", def.name);
    }
    let mut out = String::new();
    for (name, exponent) in BASE_UNIT_NAMES.iter().zip(dimension.exponents()) {
        if exponent.is_zero() {
            continue;
        }
        out.push(' ');
        out.push_str(name);
        if exponent.is_integer() {
            match exponent.numerator() {
                1 => {}
                2 => out.push('²'),
                3 => out.push('³'),
                n => {
                    out.push('^');
                    out.push_str(&n.to_string());
                }
            }
        } else {
            out.push_str(&format!("^({exponent})"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::MathContext;
    use crate::units;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_format_char() {
        assert_eq!(
            format(&Quantity::from(1), 'z', -1),
            Err(FormatError::UnknownFormat('z'))
        );
    }

    #[test]
    fn test_precision_overflow() {
        assert_eq!(
            format(&Quantity::from(1), 'f', 76),
            Err(FormatError::PrecisionOverflow(76, MAX_PRECISION))
        );
    }

    #[test]
    fn test_radix_range() {
        assert_eq!(
            format_radix(&Quantity::from(1), 37, -1),
            Err(FormatError::RadixOutOfRange(37))
        );
        assert_eq!(
            format_radix(&Quantity::from(255), 16, -1).unwrap(),
            "ff.00000000000000000"
        );
    }

    #[test]
    fn test_superscript_exponents() {
        let volume = units::meter() * units::meter() * units::meter();
        assert_eq!(format(&volume, 'f', -1).unwrap(), "1 meter³");
        let quartic = MathContext::new().raise(&units::meter(), &Quantity::from(4));
        assert_eq!(format(&quartic, 'f', -1).unwrap(), "1 meter^4");
    }

    #[test]
    fn test_derived_unit_name_wins_over_expansion() {
        let charge = units::second() * units::ampere();
        assert_eq!(format(&charge, 'f', -1).unwrap(), "1 coulomb");
        let power = units::volt() * units::ampere();
        assert_eq!(format(&power, 'f', -1).unwrap(), "1 watt");
        // no factor-1 catalog entry matches: fall back to the expansion
        let rate = units::kilogram() / units::second();
        assert_eq!(format(&rate, 'f', -1).unwrap(), "1 kilogram second^-1");
    }

    #[test]
    fn test_fractional_exponent_suffix() {
        let ctx = MathContext::new();
        let q = ctx.sqrt(&(Quantity::from(36) * units::second()));
        assert_eq!(format(&q, 'f', -1).unwrap(), "6 second^(1/2)");
    }

    #[test]
    fn test_nan_renders_in_every_mode() {
        let bad = units::candela() + units::second();
        assert_eq!(format(&bad, 'f', 10).unwrap(), "NaN");
        assert_eq!(format(&bad, 'b', 10).unwrap(), "NaN");
        assert_eq!(format_radix(&bad, 7, -1).unwrap(), "NaN");
    }

    #[test]
    fn test_negative_radix_value_keeps_sign_outside_prefix() {
        let q = Quantity::from(-5);
        let s = format(&q, 'b', -1).unwrap();
        assert!(s.starts_with("-0b101."), "got {s}");
    }
}
