//! Text → [`Poly`].

use tracing::{debug, trace};

use crate::codec::error::ParsePolyError;
use crate::structures::poly::{Poly, Term};
use crate::utils::{is_digits, is_real_literal};

/// Parse a polynomial from its text encoding, e.g. `6+5x3-2x-9x4`.
///
/// Terms have the form `[coefficient][x[exponent]]` and are delimited by
/// their own `+` or `-` sign. A missing coefficient means `1` (`-` alone
/// means `-1`) and a bare `x` means `x^1`. Terms may come in any order and
/// repeat an exponent; the result is canonical. Blank input gives the zero
/// polynomial.
///
/// # Errors
///
/// Returns [`ParsePolyError`] naming the first term that is not well formed.
///
/// # Example
///
/// ```
/// use sparsepoly::{codec, Poly};
///
/// let p = codec::parse("6+5x3-2x-9x4").unwrap();
/// assert_eq!(p, Poly::new(vec![6.0, -2.0, 0.0, 5.0, -9.0]));
///
/// assert!(codec::parse("").unwrap().is_zero());
/// assert!(codec::parse("5+").is_err());
/// ```
pub fn parse(text: &str) -> Result<Poly, ParsePolyError> {
    let expr = text.trim_start();
    let base = text.len() - expr.len();
    let expr = expr.trim_end();

    let mut terms = Vec::new();
    for (offset, fragment) in Fragments::new(expr) {
        let term = parse_term(fragment, base + offset).map_err(|err| {
            debug!(%err, "polynomial parse failed");
            err
        })?;
        trace!(
            fragment,
            offset = base + offset,
            exponent = term.exponent,
            coefficient = term.coefficient,
            "parsed term"
        );
        if term.coefficient != 0.0 {
            terms.push(term);
        }
    }

    let poly = Poly::from_terms(terms);
    debug!(
        input_len = text.len(),
        terms = poly.num_terms(),
        "parsed polynomial"
    );
    Ok(poly)
}

/// Splits an expression before every `+` or `-` that is not its first byte.
///
/// Yields `(offset, fragment)` pairs; each fragment keeps its leading sign.
struct Fragments<'a> {
    expr: &'a str,
    pos: usize,
}

impl<'a> Fragments<'a> {
    fn new(expr: &'a str) -> Self {
        Self { expr, pos: 0 }
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.expr.len() {
            return None;
        }
        let start = self.pos;
        let end = self.expr[start..]
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '+' || c == '-')
            .map_or(self.expr.len(), |(i, _)| start + i);
        self.pos = end;
        Some((start, &self.expr[start..end]))
    }
}

fn parse_term(fragment: &str, offset: usize) -> Result<Term, ParsePolyError> {
    let owned = || fragment.to_string();

    if matches!(fragment, "+" | "-") {
        return Err(ParsePolyError::EmptyTerm {
            fragment: owned(),
            offset,
        });
    }

    let Some((coeff, exp)) = fragment.split_once('x') else {
        let coefficient = parse_coefficient(fragment, fragment, offset)?;
        return Ok(Term::new(0, coefficient));
    };

    let coefficient = match coeff {
        "" | "+" => 1.0,
        "-" => -1.0,
        literal => parse_coefficient(literal, fragment, offset)?,
    };

    let exponent = if exp.is_empty() {
        1
    } else if is_digits(exp) {
        exp.parse::<u32>()
            .map_err(|_| ParsePolyError::ExponentOverflow {
                fragment: owned(),
                offset,
            })?
    } else {
        return Err(ParsePolyError::MalformedExponent {
            fragment: owned(),
            offset,
        });
    };

    Ok(Term::new(exponent, coefficient))
}

/// Parse a coefficient literal; the value must be a finite `f64`.
fn parse_coefficient(
    literal: &str,
    fragment: &str,
    offset: usize,
) -> Result<f64, ParsePolyError> {
    let value = if is_real_literal(literal) {
        literal.parse::<f64>().ok()
    } else {
        None
    };
    match value {
        Some(c) if c.is_finite() => Ok(c),
        Some(_) => Err(ParsePolyError::CoefficientOverflow {
            fragment: fragment.to_string(),
            offset,
        }),
        None => Err(ParsePolyError::MalformedCoefficient {
            fragment: fragment.to_string(),
            offset,
        }),
    }
}
