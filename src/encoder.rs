use std::marker::PhantomData;
use ark_ff::PrimeField;
use tracing::{debug, instrument};
use crate::config::EncoderConfig;
use crate::error::{KzgError, Result};
use crate::polynomial::{EvaluationPoint, Polynomial};

/// Evaluations `(i, chunk_i)` together with the polynomial passing through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData<F: PrimeField> {
    pub points: Vec<EvaluationPoint<F>>,
    pub polynomial: Polynomial<F>,
}

/// Maps byte buffers to polynomials: the buffer is zero padded to `length * chunk_width`
/// bytes and chunk `i`, read as a big-endian integer, becomes the evaluation at `x = i`.
#[derive(Debug, Clone)]
pub struct Encoder<F: PrimeField> {
    config: EncoderConfig,
    phantom: PhantomData<F>,
}

impl<F: PrimeField> Default for Encoder<F> {
    fn default() -> Self {
        Self {
            config: EncoderConfig::default(),
            phantom: PhantomData,
        }
    }
}

impl<F: PrimeField> Encoder<F> {
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate::<F>()?;

        Ok(Self {
            config,
            phantom: PhantomData,
        })
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    #[instrument(level = "debug", skip_all, fields(len = data.as_ref().len()))]
    pub fn encode(&self, data: impl AsRef<[u8]>) -> Result<EncodedData<F>> {
        let data = data.as_ref();
        let capacity = self.config.capacity();
        if data.len() > capacity {
            debug!(len = data.len(), capacity, "input does not fit into one polynomial");
            return Err(KzgError::InputTooLarge { len: data.len(), capacity });
        }

        let mut padded = data.to_vec();
        padded.resize(capacity, 0);

        let points = padded
            .chunks(self.config.chunk_width)
            .enumerate()
            .map(|(i, chunk)| EvaluationPoint::at_index(i, F::from_be_bytes_mod_order(chunk)))
            .collect::<Vec<_>>();

        let polynomial = Polynomial::interpolate_with(&points, self.config.interpolation)?;

        Ok(EncodedData { points, polynomial })
    }
}

#[cfg(test)]
mod tests {
    use ark_ff::{PrimeField, Zero};
    use ark_test_curves::bls12_381::Fr;
    use crate::config::{EncoderConfig, Interpolation};
    use crate::encoder::Encoder;
    use crate::error::KzgError;

    #[test]
    pub fn test_encode_default() {
        let encoder = Encoder::<Fr>::default();
        let data = vec![0x99u8; 460];

        let encoded = encoder.encode(&data).unwrap();

        assert_eq!(encoded.points.len(), 16);
        assert_eq!(encoded.polynomial.len(), 16);

        // 460 = 14 * 31 + 26
        assert_eq!(encoded.points[0].y, Fr::from_be_bytes_mod_order(&[0x99; 31]));
        let mut partial = [0u8; 31];
        partial[..26].copy_from_slice(&[0x99; 26]);
        assert_eq!(encoded.points[14].y, Fr::from_be_bytes_mod_order(&partial));
        assert!(encoded.points[15].y.is_zero());

        for p in &encoded.points {
            assert_eq!(encoded.polynomial.evaluate(&p.x), p.y);
        }
    }

    #[test]
    pub fn test_encode_is_big_endian() {
        let encoder = Encoder::<Fr>::new(EncoderConfig::default().with_length(2).with_chunk_width(2)).unwrap();

        let encoded = encoder.encode([0x01u8, 0x02, 0x03]).unwrap();

        assert_eq!(encoded.points[0].y, Fr::from(0x0102));
        assert_eq!(encoded.points[1].y, Fr::from(0x0300));
    }

    #[test]
    pub fn test_encode_accepts_str() {
        let encoder = Encoder::<Fr>::default();

        assert_eq!(encoder.encode("abc").unwrap(), encoder.encode(b"abc").unwrap());
    }

    #[test]
    pub fn test_encode_full_capacity() {
        let encoder = Encoder::<Fr>::default();

        assert!(encoder.encode(vec![0xffu8; 496]).is_ok());
        assert_eq!(
            encoder.encode(vec![0xffu8; 497]),
            Err(KzgError::InputTooLarge { len: 497, capacity: 496 }),
        );
    }

    #[test]
    pub fn test_encode_methods_agree() {
        let data = (0..200u32).map(|i| (i * 37 % 251) as u8).collect::<Vec<_>>();
        let config = EncoderConfig::default().with_length(8);

        let lagrange = Encoder::<Fr>::new(config).unwrap().encode(&data).unwrap();
        let determinant = Encoder::<Fr>::new(config.with_interpolation(Interpolation::Determinant))
            .unwrap()
            .encode(&data)
            .unwrap();

        assert_eq!(lagrange, determinant);
    }

    #[test]
    pub fn test_invalid_config() {
        assert!(matches!(
            Encoder::<Fr>::new(EncoderConfig::default().with_length(0)),
            Err(KzgError::InvalidConfig(_)),
        ));
    }
}
