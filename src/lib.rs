//! Sparse single-variable polynomials with `f64` coefficients.
//!
//! A [`Poly`] stores only its non-zero terms, sorted by exponent, and can be
//! read from and written to a compact text form such as `6+5x3-2x-9x4`.
//!
//! ```
//! use sparsepoly::Poly;
//!
//! let p: Poly = "6+5x3".parse().unwrap();
//! let q: Poly = "-2x-9x4".parse().unwrap();
//!
//! let s = &p + &q;
//! assert_eq!(s.to_string(), "6-2x+5x3-9x4");
//! assert!(s.has_root(1.0));
//!
//! assert_eq!((p * q).to_string(), "-12x-64x4-45x7");
//! ```

pub mod codec;
pub mod structures;
mod utils;

pub use codec::{format, parse, ParsePolyError};
pub use structures::poly::{Poly, Term};
