//! Compact one-line text encoding of polynomials.
//!
//! The encoding concatenates signed terms with no separator other than the
//! sign itself: `6+5x3-2x-9x4` is `6 + 5x^3 - 2x - 9x^4`. Formatting always
//! produces ascending exponents, so `parse(format(p)) == p` for finite
//! coefficients.

mod error;
mod format;
mod parse;

use core::fmt;
use core::str::FromStr;

use crate::structures::poly::Poly;

pub use error::ParsePolyError;
pub use format::format;
pub use parse::parse;

impl FromStr for Poly {
    type Err = ParsePolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_poly(f, self)
    }
}
