use ark_ec::pairing::Pairing;
use ark_ec::PrimeGroup;
use ark_ff::One;
use ark_std::rand::Rng;
use tracing::{debug, instrument};
use crate::poly_utils::random_scalar;

/// Public parameters: `[G1, s*G1, ..., s^(n-1)*G1]` and `s*G2`.
///
/// The secret `s` never leaves the constructor. Setups built from different secrets are
/// unrelated: commitments and proofs do not carry over between them.
pub struct TrustedSetup<P: Pairing> {
    g1_powers: Vec<P::G1>,
    g2_secret: P::G2,
}

impl<P: Pairing> TrustedSetup<P> {
    /// Production callers should pass a cryptographically secure source such as `OsRng`.
    #[instrument(level = "debug", skip_all, fields(length = length))]
    pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let setup = Self::from_toxic_waste(length, random_scalar(rng));
        debug!("trusted setup generated, toxic waste discarded");

        setup
    }

    pub(crate) fn from_toxic_waste(length: usize, toxic_waste: P::ScalarField) -> Self {
        let g1 = P::G1::generator();

        let mut g1_powers = Vec::with_capacity(length);
        let mut power = P::ScalarField::one();
        for _ in 0..length {
            g1_powers.push(g1 * power);
            power *= toxic_waste;
        }

        Self {
            g1_powers,
            g2_secret: P::G2::generator() * toxic_waste,
        }
    }

    pub fn len(&self) -> usize {
        self.g1_powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1_powers.is_empty()
    }

    pub fn g1_powers(&self) -> &[P::G1] {
        &self.g1_powers
    }

    pub fn g2_secret(&self) -> &P::G2 {
        &self.g2_secret
    }
}
