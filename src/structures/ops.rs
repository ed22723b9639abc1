use core::cmp::Ordering;
use core::iter::{Product, Sum};
use core::ops::{Add, Mul, Neg, Sub};

use tracing::trace;

use crate::structures::poly::{Compactor, Poly, Term};

impl Poly {
    /// Evaluate the polynomial at a point.
    ///
    /// Sums `c * x^e` over the stored terms using `f64::powf` for every
    /// power, so `x^0 == 1` even at `x == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsepoly::Poly;
    ///
    /// // p(x) = 6 + 5x^3
    /// let p = Poly::new(vec![6.0, 0.0, 0.0, 5.0]);
    /// assert_eq!(p.eval(1.0), 11.0);
    /// assert_eq!(p.eval(0.0), 6.0);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        self.iter()
            .map(|t| t.coefficient * x.powf(f64::from(t.exponent)))
            .sum()
    }

    /// Check whether `x` is a root, i.e. `self.eval(x) == 0.0`.
    ///
    /// The comparison is exact. There is no tolerance, so a root that is
    /// not exactly representable will usually not be detected.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsepoly::Poly;
    ///
    /// // 6 - 2x + 5x^3 - 9x^4 vanishes at 1
    /// let s: Poly = "6-2x+5x3-9x4".parse().unwrap();
    /// assert!(s.has_root(1.0));
    /// assert!(!s.has_root(0.1));
    /// ```
    pub fn has_root(&self, x: f64) -> bool {
        self.eval(x) == 0.0
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    ///
    /// An empty slice gives the constant `1`.
    pub fn from_roots(roots: &[f64]) -> Self {
        roots
            .iter()
            .map(|&r| Self::from_terms([(0, -r), (1, 1.0)]))
            .product()
    }

    /// Formal derivative.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsepoly::Poly;
    ///
    /// let p: Poly = "6+5x3-2x".parse().unwrap();
    /// assert_eq!(p.derivative().to_string(), "-2+15x2");
    /// ```
    pub fn derivative(&self) -> Self {
        let mut out = Compactor::with_capacity(self.num_terms());
        for t in self.iter().filter(|t| t.exponent > 0) {
            out.push(t.exponent - 1, t.coefficient * f64::from(t.exponent));
        }
        out.finish()
    }
}

/// Merge two canonical term sequences, summing equal exponents.
///
/// Linear in the combined number of terms.
fn merge_add(lhs: &Poly, rhs: &Poly) -> Poly {
    let (a, b) = (lhs.terms(), rhs.terms());
    let mut out = Compactor::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (s, t) = (a[i], b[j]);
        match s.exponent.cmp(&t.exponent) {
            Ordering::Less => {
                out.push(s.exponent, s.coefficient);
                i += 1;
            }
            Ordering::Greater => {
                out.push(t.exponent, t.coefficient);
                j += 1;
            }
            Ordering::Equal => {
                out.push(s.exponent, s.coefficient + t.coefficient);
                i += 1;
                j += 1;
            }
        }
    }

    // At most one side has terms left
    for t in a[i..].iter().chain(&b[j..]) {
        out.push(t.exponent, t.coefficient);
    }

    out.finish()
}

/// Distribute every term pair and fold each product into an accumulator.
///
/// O(n*m) products, each merged with a full `merge_add`.
fn distribute_mul(lhs: &Poly, rhs: &Poly) -> Poly {
    trace!(
        lhs_terms = lhs.num_terms(),
        rhs_terms = rhs.num_terms(),
        "multiplying polynomials"
    );

    let mut acc = Poly::zero();
    for s in lhs {
        for t in rhs {
            let coefficient = s.coefficient * t.coefficient;
            if coefficient == 0.0 {
                continue;
            }
            let Some(exponent) = s.exponent.checked_add(t.exponent) else {
                panic!(
                    "exponent overflow multiplying x^{} by x^{}",
                    s.exponent, t.exponent
                );
            };
            let product = Poly::from_sparse(vec![Term::new(exponent, coefficient)]);
            acc = merge_add(&acc, &product);
        }
    }
    acc
}

fn negate(p: &Poly) -> Poly {
    if p.is_zero() {
        return Poly::zero();
    }
    let terms = p
        .iter()
        .map(|t| Term::new(t.exponent, -t.coefficient))
        .collect();
    Poly::from_sparse(terms)
}

fn scale(p: &Poly, c: f64) -> Poly {
    if c == 0.0 {
        return Poly::zero();
    }
    let mut out = Compactor::with_capacity(p.num_terms());
    for t in p {
        out.push(t.exponent, t.coefficient * c);
    }
    out.finish()
}

/* ---- Arithmetic operators ---- */

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        merge_add(&self, &rhs)
    }
}

impl Add<&Poly> for Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        merge_add(&self, rhs)
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        merge_add(self, rhs)
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        negate(&self)
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        negate(self)
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        merge_add(&self, &negate(&rhs))
    }
}

impl Sub<&Poly> for Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        merge_add(&self, &negate(rhs))
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        merge_add(self, &negate(rhs))
    }
}

impl Mul for Poly {
    type Output = Poly;

    /// Polynomial multiplication.
    ///
    /// # Panics
    ///
    /// Panics if the sum of two exponents overflows `u32`.
    fn mul(self, rhs: Poly) -> Poly {
        distribute_mul(&self, &rhs)
    }
}

impl Mul<&Poly> for Poly {
    type Output = Poly;

    /// # Panics
    ///
    /// Panics if the sum of two exponents overflows `u32`.
    fn mul(self, rhs: &Poly) -> Poly {
        distribute_mul(&self, rhs)
    }
}

impl Mul for &Poly {
    type Output = Poly;

    /// # Panics
    ///
    /// Panics if the sum of two exponents overflows `u32`.
    fn mul(self, rhs: &Poly) -> Poly {
        distribute_mul(self, rhs)
    }
}

/// Scalar multiplication: polynomial * f64
impl Mul<f64> for Poly {
    type Output = Poly;

    fn mul(self, rhs: f64) -> Poly {
        scale(&self, rhs)
    }
}

impl Mul<f64> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: f64) -> Poly {
        scale(self, rhs)
    }
}

impl Sum for Poly {
    fn sum<I: Iterator<Item = Poly>>(iter: I) -> Poly {
        iter.fold(Poly::zero(), |acc, p| merge_add(&acc, &p))
    }
}

impl<'a> Sum<&'a Poly> for Poly {
    fn sum<I: Iterator<Item = &'a Poly>>(iter: I) -> Poly {
        iter.fold(Poly::zero(), |acc, p| merge_add(&acc, p))
    }
}

impl Product for Poly {
    fn product<I: Iterator<Item = Poly>>(iter: I) -> Poly {
        iter.fold(Poly::one(), |acc, p| distribute_mul(&acc, &p))
    }
}

impl<'a> Product<&'a Poly> for Poly {
    fn product<I: Iterator<Item = &'a Poly>>(iter: I) -> Poly {
        iter.fold(Poly::one(), |acc, p| distribute_mul(&acc, p))
    }
}
