use core::fmt;

/// A single term `coefficient * x^exponent`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Term {
    pub exponent: u32,
    pub coefficient: f64,
}

impl Term {
    pub const fn new(exponent: u32, coefficient: f64) -> Self {
        Self {
            exponent,
            coefficient,
        }
    }
}

impl From<(u32, f64)> for Term {
    fn from((exponent, coefficient): (u32, f64)) -> Self {
        Self::new(exponent, coefficient)
    }
}

/// Sparse polynomial in one variable with `f64` coefficients.
///
/// Terms are stored in strictly ascending order of exponent and no stored
/// coefficient is `0.0`. The one exception is the zero polynomial, which is
/// stored as the single term `0 * x^0` so that a `Poly` always has at least
/// one term.
///
/// Every constructor yields this canonical form, so two polynomials with the
/// same value compare equal term for term.
///
/// Exponents are `u32`. Multiplying two polynomials whose exponents sum past
/// `u32::MAX` panics; every other operation is total.
#[derive(Clone, PartialEq)]
pub struct Poly {
    terms: Vec<Term>,
}

const ZERO_TERM: Term = Term::new(0, 0.0);

impl Poly {
    /// Create a polynomial from dense coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. Zero entries are dropped; an
    /// empty or all-zero vector gives the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsepoly::Poly;
    ///
    /// // 6 + 5x^3
    /// let p = Poly::new(vec![6.0, 0.0, 0.0, 5.0]);
    /// assert_eq!(p.degree(), Some(3));
    /// assert_eq!(p.num_terms(), 2);
    /// ```
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self::from_dense(&coeffs)
    }

    /// Create a polynomial from a dense coefficient slice.
    ///
    /// Same as [`Poly::new`] without taking ownership.
    pub fn from_dense(coeffs: &[f64]) -> Self {
        let mut out = Compactor::with_capacity(coeffs.len());
        for (exponent, &coefficient) in (0u32..).zip(coeffs) {
            out.push(exponent, coefficient);
        }
        out.finish()
    }

    /// Create a polynomial from arbitrary `(exponent, coefficient)` pairs.
    ///
    /// The pairs may come in any order and may repeat an exponent. They are
    /// sorted, like exponents are summed, and zero sums are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsepoly::Poly;
    ///
    /// // x^2 + 3 + 2x^2 - 3  ==  3x^2
    /// let p = Poly::from_terms([(2, 1.0), (0, 3.0), (2, 2.0), (0, -3.0)]);
    /// assert_eq!(p, Poly::monomial(3.0, 2));
    /// ```
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        let mut terms: Vec<Term> = terms.into_iter().map(Into::into).collect();
        terms.sort_by_key(|t| t.exponent);

        let mut out = Compactor::with_capacity(terms.len());
        for t in terms {
            out.push(t.exponent, t.coefficient);
        }
        out.finish()
    }

    /// Wrap terms that are already canonical.
    ///
    /// Only arithmetic that produces canonical output by construction may call
    /// this; the invariant is checked in debug builds only.
    pub(crate) fn from_sparse(terms: Vec<Term>) -> Self {
        debug_assert!(is_canonical(&terms), "non-canonical terms: {:?}", terms);
        Self { terms }
    }

    /// Create the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsepoly::Poly;
    ///
    /// let zero = Poly::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.degree(), None);
    /// assert_eq!(zero.to_string(), "0");
    /// ```
    pub fn zero() -> Self {
        Self {
            terms: vec![ZERO_TERM],
        }
    }

    /// Create the constant polynomial `1`.
    pub fn one() -> Self {
        Self {
            terms: vec![Term::new(0, 1.0)],
        }
    }

    /// Create a constant polynomial.
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self {
            terms: vec![Term::new(1, 1.0)],
        }
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsepoly::Poly;
    ///
    /// let m = Poly::monomial(3.0, 2); // 3x^2
    /// assert_eq!(m.degree(), Some(2));
    /// assert_eq!(m.eval(2.0), 12.0);
    /// ```
    pub fn monomial(c: f64, n: u32) -> Self {
        if c == 0.0 {
            return Self::zero();
        }
        Self {
            terms: vec![Term::new(n, c)],
        }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].coefficient == 0.0
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        if self.is_zero() {
            None
        } else {
            self.terms.last().map(|t| t.exponent)
        }
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<f64> {
        if self.is_zero() {
            None
        } else {
            self.terms.last().map(|t| t.coefficient)
        }
    }

    /// Get the coefficient of `x^exponent`, or `0.0` if there is no such term.
    pub fn coeff(&self, exponent: u32) -> f64 {
        self.terms
            .binary_search_by_key(&exponent, |t| t.exponent)
            .map_or(0.0, |i| self.terms[i].coefficient)
    }

    /// Number of stored terms. The zero polynomial has one.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Stored terms in ascending order of exponent.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterate over the stored terms in ascending order of exponent.
    pub fn iter(&self) -> core::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Expand into dense coefficients, `result[i]` being the coefficient of `x^i`.
    ///
    /// The zero polynomial gives `[0.0]`. The result has `degree + 1`
    /// entries, so this is only sensible for moderate degrees.
    pub fn to_dense(&self) -> Vec<f64> {
        let len = self.terms.last().map_or(1, |t| t.exponent as usize + 1);
        let mut dense = vec![0.0; len];
        for t in &self.terms {
            dense[t.exponent as usize] = t.coefficient;
        }
        dense
    }

    /// Generate a random polynomial of degree at most `max_degree`.
    ///
    /// Each power of `x` is present with probability 1/2 and gets a small
    /// integer coefficient in `-9..=9`.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(rng: &mut R, max_degree: u32) -> Self {
        let mut out = Compactor::with_capacity(max_degree as usize / 2 + 1);
        for exponent in 0..=max_degree {
            if rng.gen_bool(0.5) {
                out.push(exponent, f64::from(rng.gen_range(-9i32..=9)));
            }
        }
        out.finish()
    }
}

impl<'a> IntoIterator for &'a Poly {
    type Item = &'a Term;
    type IntoIter = core::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Check the canonical-form invariant on a term slice.
pub(crate) fn is_canonical(terms: &[Term]) -> bool {
    match terms {
        [] => false,
        [only] if only.coefficient == 0.0 => only.exponent == 0,
        _ => {
            terms.iter().all(|t| t.coefficient != 0.0)
                && terms.windows(2).all(|w| w[0].exponent < w[1].exponent)
        }
    }
}

/// Accumulates terms in ascending exponent order into canonical form.
///
/// A pushed term with the same exponent as the last one is merged into it,
/// a merge that sums to zero removes the term, and zero coefficients are never
/// stored. Finishing with no terms gives the zero polynomial.
pub(crate) struct Compactor {
    terms: Vec<Term>,
}

impl Compactor {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, exponent: u32, coefficient: f64) {
        match self.terms.last_mut() {
            Some(last) if last.exponent == exponent => {
                last.coefficient += coefficient;
                if last.coefficient == 0.0 {
                    self.terms.pop();
                }
            }
            last => {
                debug_assert!(
                    last.map_or(true, |t| t.exponent < exponent),
                    "terms pushed out of order"
                );
                if coefficient != 0.0 {
                    self.terms.push(Term::new(exponent, coefficient));
                }
            }
        }
    }

    pub(crate) fn finish(self) -> Poly {
        if self.terms.is_empty() {
            Poly::zero()
        } else {
            Poly::from_sparse(self.terms)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Term {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.exponent, self.coefficient).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Term {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <(u32, f64)>::deserialize(deserializer).map(Term::from)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as a sequence of [exponent, coefficient] pairs
        serializer.collect_seq(&self.terms)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let terms = Vec::<Term>::deserialize(deserializer)?;
        Ok(Self::from_terms(terms))
    }
}
