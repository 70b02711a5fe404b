//! Display-layer behavior across format characters, radices, precisions,
//! and display units, plus the invariants that tie storage to rendering.

use dimr_core::{format, format_radix, units, Complex, FormatError, Quantity, Real, MAX_PRECISION};
use pretty_assertions::assert_eq;

fn real(s: &str) -> Real {
    s.parse().unwrap()
}

fn num(s: &str) -> Quantity {
    Quantity::from(real(s))
}

#[test]
fn test_fixed_precision_pads_and_rounds() {
    assert_eq!(format(&num("1.5"), 'f', 3).unwrap(), "1.500");
    assert_eq!(format(&num("1.2345"), 'f', 2).unwrap(), "1.23");
    assert_eq!(format(&num("1.235"), 'f', 2).unwrap(), "1.24");
    assert_eq!(format(&num("-1.235"), 'f', 2).unwrap(), "-1.24");
}

#[test]
fn test_auto_precision_trims_trailing_zeros() {
    assert_eq!(format(&num("2.5000"), 'f', -1).unwrap(), "2.5");
    assert_eq!(format(&num("42"), 'f', -1).unwrap(), "42");
    // any negative precision means auto
    assert_eq!(format(&num("2.5000"), 'f', -7).unwrap(), "2.5");
}

#[test]
fn test_precision_bounds() {
    assert_eq!(format(&num("1"), 'f', MAX_PRECISION).unwrap().len(), 2 + 75);
    assert_eq!(
        format(&num("1"), 'f', MAX_PRECISION + 1),
        Err(FormatError::PrecisionOverflow(76, MAX_PRECISION))
    );
    assert_eq!(
        format_radix(&num("1"), 2, MAX_PRECISION + 1),
        Err(FormatError::PrecisionOverflow(76, MAX_PRECISION))
    );
}

#[test]
fn test_radix_prefixes_and_widths() {
    // hex carries 17 fractional digits, octal 23, regardless of precision
    assert_eq!(
        format(&num("255"), 'h', 2).unwrap(),
        "0xff.00000000000000000"
    );
    assert_eq!(format(&num("255"), 'x', 2).unwrap(), format(&num("255"), 'h', 2).unwrap());
    assert_eq!(
        format(&num("8"), 'o', -1).unwrap(),
        "0o10.00000000000000000000000"
    );
    assert_eq!(format(&num("-5"), 'b', -1).unwrap(), format!("-0b101.{}", "0".repeat(67)));
}

#[test]
fn test_format_radix_no_prefix() {
    assert_eq!(format_radix(&num("35"), 36, -1).unwrap(), "z.0000000000000");
    assert_eq!(
        format_radix(&num("255"), 16, -1).unwrap(),
        "ff.00000000000000000"
    );
    assert_eq!(
        format_radix(&num("1"), 1, -1),
        Err(FormatError::RadixOutOfRange(1))
    );
    // radix 10 is plain fixed-point
    assert_eq!(format_radix(&num("1.25"), 10, -1).unwrap(), "1.25");
}

#[test]
fn test_unknown_format_char() {
    assert_eq!(
        format(&num("1"), 'q', -1),
        Err(FormatError::UnknownFormat('q'))
    );
}

#[test]
fn test_radix_round_trip_stays_within_shown_digits() {
    let eps = real("0.0000000000000000001");
    for s in ["123.456", "-0.1", "0.3333333333", "1048576.000001"] {
        let v = real(s);
        for radix in [2u32, 8, 16, 36] {
            let shown = format_radix(&Quantity::from(v.clone()), radix, -1).unwrap();
            let back = Real::parse_radix(&shown, radix).unwrap();
            let diff = (&v - &back).abs();
            assert!(diff < eps, "radix {radix}: {s} -> {shown} -> off by {diff}");
        }
    }
}

#[test]
fn test_complex_value_parenthesized_before_unit() {
    let q = "3+4j".parse::<Complex>().map(Quantity::from).unwrap() * units::meter();
    assert_eq!(format(&q, 'f', -1).unwrap(), "(3+4j) meter");
    // no unit, no parentheses
    let plain = Quantity::from("3-4j".parse::<Complex>().unwrap());
    assert_eq!(format(&plain, 'f', -1).unwrap(), "3-4j");
    let pure = Quantity::from("2j".parse::<Complex>().unwrap());
    assert_eq!(format(&pure, 'f', -1).unwrap(), "2j");
}

#[test]
fn test_display_unit_rendering_only() {
    let mut q = Quantity::from(123) * units::meter();
    q.set_display_unit(real("0.3"), "foot");
    // stored value is untouched; only rendering divides by the factor
    assert_eq!(q.value().re().to_string(), "123");
    assert_eq!(format(&q, 'f', -1).unwrap(), "410 foot");

    q.clear_display_unit();
    assert_eq!(format(&q, 'f', -1).unwrap(), "123 meter");
}

#[test]
fn test_arithmetic_drops_display_unit() {
    let mut a = Quantity::from(3) * units::meter();
    a.set_display_unit(real("0.3"), "foot");
    let sum = a + Quantity::from(2) * units::meter();
    assert_eq!(format(&sum, 'f', -1).unwrap(), "5 meter");
}

#[test]
fn test_derived_unit_quantities_carry_their_factor() {
    // gram and liter store SI values scaled by their factor
    let g = units::gram();
    assert_eq!(g.value().re().to_string(), "0.001");
    assert_eq!(format(&g, 'f', -1).unwrap(), "1 gram");
    let sum = units::gram() + units::kilogram();
    assert_eq!(format(&sum, 'f', -1).unwrap(), "1.001 kilogram");
}

#[test]
fn test_dimension_suffix_shapes() {
    let meter = units::meter();
    assert_eq!(format(&(meter.clone() * meter.clone()), 'f', -1).unwrap(), "1 meter²");
    assert_eq!(
        format(&(meter.clone() * meter.clone() * meter.clone()), 'f', -1).unwrap(),
        "1 meter³"
    );
    assert_eq!(
        format(&(Quantity::from(1) / meter), 'f', -1).unwrap(),
        "1 meter^-1"
    );
    let accel = units::meter() / (units::second() * units::second());
    assert_eq!(format(&accel, 'f', -1).unwrap(), "1 meter second^-2");
}

#[test]
fn test_nan_wins_in_every_mode() {
    let bad = units::candela() + units::second();
    for mode in ['f', 'b', 'o', 'h', 'x'] {
        assert_eq!(format(&bad, mode, -1).unwrap(), "NaN");
    }
    assert_eq!(format_radix(&bad, 12, -1).unwrap(), "NaN");
    // invalid requests still fail before the NaN short-circuit
    assert_eq!(
        format(&bad, 'f', 200),
        Err(FormatError::PrecisionOverflow(200, MAX_PRECISION))
    );
}
