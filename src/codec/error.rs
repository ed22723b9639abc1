use thiserror::Error;

/// Error returned when text cannot be parsed into a [`Poly`](crate::Poly).
///
/// Every variant carries the offending term fragment, sign included, and the
/// byte offset where it starts in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePolyError {
    /// The coefficient is not a plain decimal real literal.
    #[error("malformed coefficient in term `{fragment}` at byte {offset}")]
    MalformedCoefficient { fragment: String, offset: usize },
    /// The coefficient is too large to be represented as a finite `f64`.
    #[error("coefficient out of range in term `{fragment}` at byte {offset}")]
    CoefficientOverflow { fragment: String, offset: usize },
    /// The text after `x` is not a run of digits.
    #[error("malformed exponent in term `{fragment}` at byte {offset}")]
    MalformedExponent { fragment: String, offset: usize },
    /// The exponent does not fit in a `u32`.
    #[error("exponent out of range in term `{fragment}` at byte {offset}")]
    ExponentOverflow { fragment: String, offset: usize },
    /// A sign with nothing after it, as in `5+` or `5++3`.
    #[error("missing term after `{fragment}` at byte {offset}")]
    EmptyTerm { fragment: String, offset: usize },
}

impl ParsePolyError {
    /// The term fragment that failed to parse.
    pub fn fragment(&self) -> &str {
        match self {
            Self::MalformedCoefficient { fragment, .. }
            | Self::CoefficientOverflow { fragment, .. }
            | Self::MalformedExponent { fragment, .. }
            | Self::ExponentOverflow { fragment, .. }
            | Self::EmptyTerm { fragment, .. } => fragment,
        }
    }

    /// Byte offset of the fragment in the input.
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedCoefficient { offset, .. }
            | Self::CoefficientOverflow { offset, .. }
            | Self::MalformedExponent { offset, .. }
            | Self::ExponentOverflow { offset, .. }
            | Self::EmptyTerm { offset, .. } => *offset,
        }
    }
}
