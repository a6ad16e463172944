mod append_only;
mod setup;

use ark_ec::pairing::Pairing;
use ark_ec::{CurveGroup, PrimeGroup};
use ark_std::cfg_iter;
use ark_std::Zero;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};
use crate::error::{KzgError, Result};
use crate::polynomial::{EvaluationPoint, Polynomial};

pub use append_only::*;
pub use setup::*;

pub type Commitment<P> = <P as Pairing>::G1;
pub type Proof<P> = <P as Pairing>::G1;

/// KZG commitments over a borrowed [`TrustedSetup`].
pub struct Kzg<'a, P: Pairing> {
    setup: &'a TrustedSetup<P>,
}

impl<'a, P: Pairing> Kzg<'a, P> {
    pub fn new(setup: &'a TrustedSetup<P>) -> Self {
        Self { setup }
    }

    pub fn setup(&self) -> &'a TrustedSetup<P> {
        self.setup
    }

    /// `sum(coeff_i * s^i * G1)`, i.e. `P(s) * G1`. The polynomial must be exactly as long
    /// as the setup.
    #[instrument(level = "debug", skip_all, fields(len = poly.len()))]
    pub fn commit(&self, poly: &Polynomial<P::ScalarField>) -> Result<Commitment<P>> {
        let srs = self.setup.g1_powers();
        if poly.len() != srs.len() {
            debug!(expected = srs.len(), got = poly.len(), "polynomial is not setup sized");
            return Err(KzgError::SizeMismatch { expected: srs.len(), got: poly.len() });
        }

        Ok(msm(poly.coeffs(), srs))
    }

    /// Commits to `(P(X) - y) / (X - x)`.
    ///
    /// The division only comes out even when `P(x) = y`, anything else is
    /// [`KzgError::PointNotOnPolynomial`]. Trailing zero coefficients are ignored, only
    /// `degree(P) < setup length` is required.
    #[instrument(level = "debug", skip_all, fields(len = poly.len(), x = %point.x))]
    pub fn prove(
        &self,
        poly: &Polynomial<P::ScalarField>,
        point: &EvaluationPoint<P::ScalarField>,
    ) -> Result<Proof<P>> {
        let srs = self.setup.g1_powers();
        let trimmed = poly.trimmed();
        if trimmed.len() > srs.len() {
            debug!(expected = srs.len(), got = trimmed.len(), "polynomial degree exceeds setup");
            return Err(KzgError::SizeMismatch { expected: srs.len(), got: trimmed.len() });
        }

        let (quotient, remainder) = trimmed
            .sub_constant(&point.y)
            .divide_by_linear(&point.x);

        if !remainder.is_zero() {
            debug!("claimed evaluation does not match polynomial");
            return Err(KzgError::PointNotOnPolynomial);
        }

        Ok(msm(quotient.coeffs(), &srs[..quotient.len()]))
    }

    /// Evaluates `poly` at `x` and proves that evaluation.
    pub fn open(
        &self,
        poly: &Polynomial<P::ScalarField>,
        x: P::ScalarField,
    ) -> Result<(EvaluationPoint<P::ScalarField>, Proof<P>)> {
        let point = EvaluationPoint::new(x, poly.evaluate(&x));
        let proof = self.prove(poly, &point)?;

        Ok((point, proof))
    }

    /// Checks `e(proof, s*G2 - x*G2) == e(commitment - y*G1, G2)`.
    #[instrument(level = "debug", skip_all, fields(x = %point.x))]
    pub fn verify(
        &self,
        commitment: &Commitment<P>,
        proof: &Proof<P>,
        point: &EvaluationPoint<P::ScalarField>,
    ) -> bool {
        let g1 = P::G1::generator();
        let g2 = P::G2::generator();

        let is_valid = P::pairing(
            *proof,
            *self.setup.g2_secret() - g2 * point.x,
        ) == P::pairing(
            *commitment - g1 * point.y,
            g2,
        );

        debug!(is_valid, "evaluation proof checked");
        is_valid
    }
}

/// Multi-scalar multiplication; the terms are independent and summed in any order.
fn msm<G: CurveGroup>(scalars: &[G::ScalarField], bases: &[G]) -> G {
    if scalars.is_empty() {
        return G::zero();
    }

    cfg_iter!(scalars)
        .zip(bases)
        .map(|(s, b)| *b * s)
        .sum()
}
