//! [`Poly`] → text.

use core::fmt::{self, Write};

use crate::structures::poly::Poly;

/// Format a polynomial in its canonical text encoding.
///
/// Terms are written in ascending order of exponent. A coefficient of `1`
/// (or `-1`) before `x` is left implicit, and an exponent of `1` is omitted.
/// Coefficients are written with `f64`'s `Display`, which is the shortest
/// decimal that reads back to the same value and has no fractional part
/// for whole numbers. The zero polynomial formats as `0`.
///
/// Non-finite coefficients, which only the numeric constructors can produce,
/// are written as `inf`, `-inf` and `NaN` with the usual `+` separator. The
/// parser does not accept them back.
///
/// # Example
///
/// ```
/// use sparsepoly::{codec, Poly};
///
/// let p = Poly::new(vec![6.0, 0.0, 0.0, 5.0]);
/// assert_eq!(codec::format(&p), "6+5x3");
///
/// let q = Poly::from_terms([(1, -1.0), (2, 0.5)]);
/// assert_eq!(codec::format(&q), "-x+0.5x2");
/// ```
pub fn format(poly: &Poly) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_poly(&mut out, poly);
    out
}

pub(crate) fn write_poly<W: Write>(w: &mut W, poly: &Poly) -> fmt::Result {
    let mut first = true;
    for term in poly {
        let c = term.coefficient;
        if c == 0.0 {
            continue;
        }
        // Negative values carry their own sign
        if !first && (c > 0.0 || c.is_nan()) {
            w.write_char('+')?;
        }
        first = false;

        if term.exponent == 0 {
            write!(w, "{}", c)?;
            continue;
        }

        if c == -1.0 {
            w.write_char('-')?;
        } else if c != 1.0 {
            write!(w, "{}", c)?;
        }
        w.write_char('x')?;
        if term.exponent != 1 {
            write!(w, "{}", term.exponent)?;
        }
    }

    if first {
        w.write_char('0')?;
    }
    Ok(())
}
