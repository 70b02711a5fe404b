//! End-to-end checks of quantity construction, arithmetic, the math
//! façade, and display, driven through the public `format` entry point.

use dimr_core::{format, units, Complex, MathContext, Quantity, Real};
use pretty_assertions::assert_eq;

fn fmt(q: &Quantity) -> String {
    format(q, 'f', -1).unwrap()
}

fn cnum(s: &str) -> Quantity {
    Quantity::from(s.parse::<Complex>().unwrap())
}

#[test]
fn test_create() {
    assert_eq!(fmt(&units::meter()), "1 meter");
    assert_eq!(fmt(&cnum("123.45+654j")), "123.45+654j");
    assert_eq!(fmt(&Quantity::from("123.45".parse::<Real>().unwrap())), "123.45");
}

#[test]
fn test_basic() {
    assert_eq!(fmt(&units::meter()), "1 meter");
    assert_eq!(fmt(&(Quantity::from(5) * units::meter())), "5 meter");
    assert_eq!(fmt(&(units::candela() + units::second())), "NaN");
    assert_eq!(
        fmt(&(Quantity::from(3) * units::mole() - cnum("2.5") * units::mole())),
        "0.5 mole"
    );
    assert_eq!(
        fmt(&(units::kilogram() / units::second())),
        "1 kilogram second^-1"
    );
    assert_eq!(fmt(&(units::meter() * units::meter())), "1 meter²");
    assert_eq!(fmt(&(-(Quantity::from(5) * units::meter()))), "-5 meter");

    let mut a = Quantity::from(123) * units::meter();
    a.set_display_unit("0.3".parse().unwrap(), "foot");
    assert_eq!(fmt(&a), "410 foot");
}

#[test]
fn test_functions() {
    let ctx = MathContext::new();

    assert_eq!(fmt(&ctx.abs(&(cnum("3+4j") * units::meter()))), "5 meter");
    assert_eq!(fmt(&ctx.round(&cnum("1.234"), 1)), "1.2");
    assert_eq!(fmt(&ctx.round(&(cnum("1.234") * units::joule()), 0)), "NaN");

    assert_eq!(fmt(&ctx.trunc(&cnum("1.274"), 1)), "1.2");
    assert_eq!(fmt(&ctx.trunc(&(cnum("1.234") * units::joule()), 0)), "NaN");

    assert_eq!(fmt(&ctx.real(&(cnum("3+4j") * units::meter()))), "3 meter");
    assert_eq!(fmt(&ctx.imag(&(cnum("3+4j") * units::meter()))), "4 meter");

    assert_eq!(
        fmt(&ctx.sqrt(&(cnum("36") * units::second()))),
        "6 second^(1/2)"
    );
    assert_eq!(
        fmt(&ctx.cbrt(&(cnum("125") * units::second()))),
        "5 second^(1/3)"
    );

    assert_eq!(
        fmt(&ctx.raise(&cnum("2"), &ctx.pi())),
        "8.82497782707628762386"
    );
    assert_eq!(fmt(&ctx.raise(&(cnum("2") * units::ampere()), &ctx.pi())), "NaN");
    assert_eq!(
        fmt(&ctx.raise(&(cnum("-2") * units::ampere()), &cnum("1.5"))),
        "NaN"
    );

    assert_eq!(
        fmt(&ctx.raise(&(cnum("-2") * units::ampere()), &cnum("0.6"))),
        "-1.51571656651039808235 ampere^(3/5)"
    );
    let complex_ctx = MathContext::complex();
    assert_eq!(
        fmt(&complex_ctx.raise(&(cnum("-2") * units::ampere()), &cnum("0.6"))),
        "(-0.46838217770735830743+1.44153211743623063689j) ampere^(3/5)"
    );

    // the same wall applies to every function that rejects dimensions
    assert_eq!(fmt(&ctx.sin(&ctx.pi())), "0");
    assert_eq!(fmt(&ctx.sin(&units::meter())), "NaN");
}

#[test]
fn test_format() {
    let a = Quantity::from("12365234.45647".parse::<Real>().unwrap());
    assert_eq!(
        format(&a, 'b', 10).unwrap(),
        "0b101111001010110110110010.0111010011011011001101111100100110011010111010010010010011110010001"
    );

    let a = a * units::coulomb();
    assert_eq!(
        format(&a, 'b', 10).unwrap(),
        "0b101111001010110110110010.0111010011011011001101111100100110011010111010010010010011110010001 coulomb"
    );
}
