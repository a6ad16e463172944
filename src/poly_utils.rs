use ark_ff::Field;
use ark_std::rand::Rng;
use ark_std::UniformRand;
use crate::error::{KzgError, Result};

pub fn random_scalar<F: UniformRand, R: Rng + ?Sized>(rng: &mut R) -> F {
    F::rand(rng)
}

/// Inverse modulo the field order; fails for zero, the only non-unit of a prime field.
pub fn checked_inverse<F: Field>(value: F) -> Result<F> {
    value.inverse().ok_or(KzgError::NotInvertible)
}

/// Fraction-free (Bareiss) determinant of a square matrix.
///
/// Rows are swapped when a pivot vanishes. A column without any nonzero pivot
/// candidate means the matrix is singular and `0` is returned.
pub fn determinant<F: Field>(matrix: &[Vec<F>]) -> F {
    let n = matrix.len();
    if n == 0 {
        return F::one();
    }

    let mut m = matrix.to_vec();
    let mut negate = false;
    let mut prev = F::one();

    for i in 0..n - 1 {
        if m[i][i].is_zero() {
            match (i + 1..n).find(|&j| !m[j][i].is_zero()) {
                Some(j) => {
                    m.swap(i, j);
                    negate = !negate;
                }
                None => return F::zero(),
            }
        }

        // prev is always a former pivot, hence nonzero
        let Some(prev_inv) = prev.inverse() else {
            return F::zero();
        };

        for j in i + 1..n {
            for k in i + 1..n {
                m[j][k] = (m[j][k] * m[i][i] - m[j][i] * m[i][k]) * prev_inv;
            }
        }

        prev = m[i][i];
    }

    let det = m[n - 1][n - 1];
    if negate { -det } else { det }
}

/// Interpolates `(xs[i], ys[i])` with Cramer's rule.
///
/// Builds `M[i][j] = xs[j]^i * (-1)^(i*n)` and takes the determinants of the `n + 1`
/// windows of `M ++ [ys] ++ M`. The first one is the (signed) Vandermonde determinant and
/// normalises the rest into coefficients.
pub fn interpolate_by_determinants<F: Field>(xs: &[F], ys: &[F]) -> Result<Vec<F>> {
    let n = xs.len();
    if ys.len() != n {
        return Err(KzgError::SizeMismatch { expected: n, got: ys.len() });
    }

    let m = (0..n)
        .map(|i| {
            xs.iter()
                .map(|x| {
                    let v = x.pow([i as u64]);
                    if (i * n) % 2 == 1 { -v } else { v }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut stacked = m.clone();
    stacked.push(ys.to_vec());
    stacked.extend(m);

    let dets = (0..=n)
        .map(|d| determinant(&stacked[d..d + n]))
        .collect::<Vec<_>>();

    let c0 = if (n + 1) % 2 == 1 { -dets[0] } else { dets[0] };
    let fac = checked_inverse(c0).map_err(|_| KzgError::SingularInterpolation)?;

    Ok(dets[1..].iter().map(|c| *c * fac).collect())
}

#[cfg(test)]
pub fn to_f<F: Field>(values: Vec<u64>) -> Vec<F> {
    values.into_iter().map(F::from).collect()
}
