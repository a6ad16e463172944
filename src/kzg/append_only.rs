use ark_ec::pairing::Pairing;
use ark_std::Zero;
use tracing::{debug, instrument};
use crate::error::{KzgError, Result};
use crate::kzg::{Commitment, Kzg, Proof};
use crate::polynomial::{EvaluationPoint, Polynomial};

/// Commitment to `new - old` for an update that only rewrites the last coefficient.
pub struct DiffCommitment<P: Pairing> {
    pub commitment: Commitment<P>,
    pub difference: Polynomial<P::ScalarField>,
}

/// Everything a verifier needs besides the two commitments.
pub struct AppendOnlyProof<P: Pairing> {
    pub diff_commitment: Commitment<P>,
    pub diff_proof: Proof<P>,
    pub point: EvaluationPoint<P::ScalarField>,
}

impl<'a, P: Pairing> Kzg<'a, P> {
    /// The difference has a single nonzero term, so its commitment is just
    /// `(new[last] - old[last]) * s^last * G1`.
    #[instrument(level = "debug", skip_all, fields(len = new.len()))]
    pub fn commit_diff(
        &self,
        old: &Polynomial<P::ScalarField>,
        new: &Polynomial<P::ScalarField>,
    ) -> Result<DiffCommitment<P>> {
        let srs = self.setup().g1_powers();
        for poly in [old, new] {
            if poly.len() != srs.len() {
                debug!(expected = srs.len(), got = poly.len(), "polynomial is not setup sized");
                return Err(KzgError::SizeMismatch { expected: srs.len(), got: poly.len() });
            }
        }

        let difference = Polynomial::new(
            old.coeffs()
                .iter()
                .zip(new.coeffs())
                .map(|(a, b)| *b - a)
                .collect(),
        );

        let head = difference.len().saturating_sub(1);
        if let Some(index) = difference.coeffs()[..head].iter().position(|c| !c.is_zero()) {
            debug!(index, "update touches more than the trailing coefficient");
            return Err(KzgError::InvalidAppendOnlyUpdate { index });
        }

        let commitment = match (difference.coeffs().last(), srs.last()) {
            (Some(c), Some(g)) => *g * c,
            _ => P::G1::zero(),
        };

        Ok(DiffCommitment { commitment, difference })
    }

    /// [`Self::commit_diff`] plus an opening of the difference polynomial at `x`.
    pub fn prove_append_only(
        &self,
        old: &Polynomial<P::ScalarField>,
        new: &Polynomial<P::ScalarField>,
        x: P::ScalarField,
    ) -> Result<AppendOnlyProof<P>> {
        let DiffCommitment { commitment, difference } = self.commit_diff(old, new)?;
        let (point, diff_proof) = self.open(&difference, x)?;

        Ok(AppendOnlyProof {
            diff_commitment: commitment,
            diff_proof,
            point,
        })
    }

    /// `commitment_2 - commitment_1` must equal the diff commitment, which in turn must open
    /// to `point`.
    #[instrument(level = "debug", skip_all, fields(x = %point.x))]
    pub fn verify_append_only(
        &self,
        commitment_1: &Commitment<P>,
        commitment_2: &Commitment<P>,
        diff_commitment: &Commitment<P>,
        diff_proof: &Proof<P>,
        point: &EvaluationPoint<P::ScalarField>,
    ) -> bool {
        if *commitment_2 - *commitment_1 != *diff_commitment {
            debug!("diff commitment does not bridge the two commitments");
            return false;
        }

        self.verify(diff_commitment, diff_proof, point)
    }
}

#[cfg(test)]
mod tests {
    use ark_ec::PrimeGroup;
    use ark_std::rand::Rng;
    use ark_std::{UniformRand, Zero};
    use ark_test_curves::bls12_381::{Bls12_381, Fr, G1Projective as G1};
    use crate::error::KzgError;
    use crate::kzg::{Kzg, TrustedSetup};
    use crate::polynomial::{EvaluationPoint, Polynomial};

    struct TestData {
        setup: TrustedSetup<Bls12_381>,
        old: Polynomial<Fr>,
        new: Polynomial<Fr>,
    }

    // 15 random coefficients and an empty trailing slot, then the slot gets filled
    fn test_setup() -> TestData {
        let rng = &mut ark_std::test_rng();
        let setup = TrustedSetup::<Bls12_381>::generate(16, rng);

        let mut coeffs = (0..15).map(|_| Fr::rand(rng)).collect::<Vec<_>>();
        coeffs.push(Fr::zero());
        let old = Polynomial::new(coeffs.clone());

        coeffs[15] = Fr::rand(rng);
        let new = Polynomial::new(coeffs);

        TestData { setup, old, new }
    }

    #[test]
    pub fn test_append_only() {
        let TestData { setup, old, new } = test_setup();
        let kzg = Kzg::new(&setup);
        let commitment_1 = kzg.commit(&old).unwrap();
        let commitment_2 = kzg.commit(&new).unwrap();

        let x = Fr::from(ark_std::test_rng().gen_range(0..16u64));
        let proof = kzg.prove_append_only(&old, &new, x).unwrap();

        assert_eq!(proof.diff_commitment, commitment_2 - commitment_1);
        assert!(kzg.verify_append_only(
            &commitment_1,
            &commitment_2,
            &proof.diff_commitment,
            &proof.diff_proof,
            &proof.point,
        ));
    }

    #[test]
    pub fn test_commit_diff() {
        let TestData { setup, old, new } = test_setup();
        let kzg = Kzg::new(&setup);

        let diff = kzg.commit_diff(&old, &new).unwrap();

        assert!(diff.difference.coeffs()[..15].iter().all(|c| c.is_zero()));
        assert_eq!(diff.difference.coeffs()[15], new.coeffs()[15]);
        assert_eq!(diff.commitment, kzg.commit(&diff.difference).unwrap());
        assert_eq!(diff.commitment, kzg.commit(&new).unwrap() - kzg.commit(&old).unwrap());
    }

    #[test]
    pub fn test_commit_diff_rejects_rewrites() {
        let TestData { setup, old, new } = test_setup();
        let kzg = Kzg::new(&setup);

        let mut coeffs = new.into_coeffs();
        coeffs[3] += Fr::from(1);
        let rewritten = Polynomial::new(coeffs);

        assert!(matches!(
            kzg.commit_diff(&old, &rewritten),
            Err(KzgError::InvalidAppendOnlyUpdate { index: 3 }),
        ));
        assert!(matches!(
            kzg.prove_append_only(&old, &rewritten, Fr::from(2)),
            Err(KzgError::InvalidAppendOnlyUpdate { index: 3 }),
        ));
    }

    #[test]
    pub fn test_commit_diff_size_mismatch() {
        let TestData { setup, old, .. } = test_setup();
        let kzg = Kzg::new(&setup);

        assert!(matches!(
            kzg.commit_diff(&old, &Polynomial::zero(15)),
            Err(KzgError::SizeMismatch { expected: 16, got: 15 }),
        ));
    }

    #[test]
    pub fn test_verify_append_only_rejects_unrelated_commitments() {
        let TestData { setup, old, new } = test_setup();
        let kzg = Kzg::new(&setup);
        let commitment_1 = kzg.commit(&old).unwrap();
        let commitment_2 = kzg.commit(&new).unwrap();
        let proof = kzg.prove_append_only(&old, &new, Fr::from(5)).unwrap();

        assert!(!kzg.verify_append_only(
            &(commitment_1 + G1::generator()),
            &commitment_2,
            &proof.diff_commitment,
            &proof.diff_proof,
            &proof.point,
        ));

        let wrong_point = EvaluationPoint::new(proof.point.x, proof.point.y + Fr::from(1));
        assert!(!kzg.verify_append_only(
            &commitment_1,
            &commitment_2,
            &proof.diff_commitment,
            &proof.diff_proof,
            &wrong_point,
        ));
    }

    #[test]
    pub fn test_identical_polynomials() {
        let TestData { setup, old, .. } = test_setup();
        let kzg = Kzg::new(&setup);

        let diff = kzg.commit_diff(&old, &old).unwrap();

        assert!(diff.commitment.is_zero());
        assert!(diff.difference.coeffs().iter().all(|c| c.is_zero()));
    }
}
