use std::collections::HashSet;
use ark_ff::PrimeField;
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;
use crate::config::Interpolation;
use crate::error::{KzgError, Result};
use crate::poly_utils::{checked_inverse, interpolate_by_determinants};

/// A claimed evaluation `P(x) = y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationPoint<F: PrimeField> {
    pub x: F,
    pub y: F,
}

impl<F: PrimeField> EvaluationPoint<F> {
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    pub fn at_index(index: usize, y: F) -> Self {
        Self::new(F::from(index as u64), y)
    }
}

/// Fixed-length coefficient vector, `coeffs[i]` multiplies `x^i`.
///
/// Unlike [`DensePolynomial`] trailing zero coefficients are kept: the length is part
/// of the value and has to line up with the trusted setup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial<F: PrimeField> {
    coeffs: Vec<F>,
}

impl<F: PrimeField> Polynomial<F> {
    pub fn new(coeffs: Vec<F>) -> Self {
        Self { coeffs }
    }

    pub fn zero(len: usize) -> Self {
        Self::new(vec![F::zero(); len])
    }

    /// Pads `poly` with zero coefficients up to `len`.
    pub fn from_dense(poly: &DensePolynomial<F>, len: usize) -> Result<Self> {
        if poly.coeffs.len() > len {
            return Err(KzgError::SizeMismatch { expected: len, got: poly.coeffs.len() });
        }

        let mut coeffs = poly.coeffs.clone();
        coeffs.resize(len, F::zero());

        Ok(Self::new(coeffs))
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<F> {
        self.coeffs
    }

    /// Copy without trailing zero coefficients; the zero polynomial becomes empty.
    pub fn trimmed(&self) -> Self {
        let len = self.coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(0, |i| i + 1);

        Self::new(self.coeffs[..len].to_vec())
    }

    pub fn evaluate(&self, x: &F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |acc, c| acc * x + c)
    }

    /// `P(X) - value`, leaving `self` untouched.
    pub fn sub_constant(&self, value: &F) -> Self {
        let mut coeffs = self.coeffs.clone();
        match coeffs.first_mut() {
            Some(c0) => *c0 -= value,
            None => coeffs.push(-*value),
        }

        Self::new(coeffs)
    }

    /// Synthetic division by `(X - root)`.
    ///
    /// Returns a quotient one coefficient shorter together with the remainder `P(root)`.
    pub fn divide_by_linear(&self, root: &F) -> (Self, F) {
        let n = self.coeffs.len();
        if n == 0 {
            return (Self::zero(0), F::zero());
        }

        let mut quotient = vec![F::zero(); n - 1];
        let mut carry = F::zero();
        for i in (1..n).rev() {
            carry = self.coeffs[i] + carry * root;
            quotient[i - 1] = carry;
        }
        let remainder = self.coeffs[0] + carry * root;

        (Self::new(quotient), remainder)
    }

    /// Lagrange interpolation through `points`; the result has `points.len()` coefficients.
    pub fn interpolate(points: &[EvaluationPoint<F>]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(points.len());
        if !points.iter().all(|p| seen.insert(p.x)) {
            return Err(KzgError::SingularInterpolation);
        }

        let mut master = vec![F::one()];
        for p in points {
            let mut next = vec![F::zero(); master.len() + 1];
            for (k, c) in master.iter().enumerate() {
                next[k + 1] += c;
                next[k] -= *c * p.x;
            }
            master = next;
        }
        let master = Self::new(master);

        let mut coeffs = vec![F::zero(); points.len()];
        for p in points {
            let (basis, _) = master.divide_by_linear(&p.x);
            let scale = checked_inverse(basis.evaluate(&p.x))
                .map_err(|_| KzgError::SingularInterpolation)?
                * p.y;

            for (c, b) in coeffs.iter_mut().zip(basis.coeffs()) {
                *c += *b * scale;
            }
        }

        Ok(Self::new(coeffs))
    }

    pub fn interpolate_with(points: &[EvaluationPoint<F>], method: Interpolation) -> Result<Self> {
        match method {
            Interpolation::Lagrange => Self::interpolate(points),
            Interpolation::Determinant => {
                let xs = points.iter().map(|p| p.x).collect::<Vec<_>>();
                let ys = points.iter().map(|p| p.y).collect::<Vec<_>>();

                interpolate_by_determinants(&xs, &ys).map(Self::new)
            }
        }
    }
}

impl<F: PrimeField> From<Polynomial<F>> for DensePolynomial<F> {
    fn from(poly: Polynomial<F>) -> Self {
        DensePolynomial::from_coefficients_vec(poly.coeffs)
    }
}
