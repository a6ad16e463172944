use ark_ff::PrimeField;
use tracing::warn;
use crate::error::{KzgError, Result};

/// Number of polynomial coefficients (and trusted setup powers) per commitment.
pub const DEFAULT_LENGTH: usize = 16;

/// Bytes per chunk; 31 bytes stay below any 255-bit scalar field order.
pub const DEFAULT_CHUNK_WIDTH: usize = 31;

/// Interpolation algorithm used by the encoder. Both yield the same coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Master-polynomial Lagrange interpolation, O(n^2).
    #[default]
    Lagrange,
    /// Cramer's rule over Bareiss determinants, O(n^4).
    Determinant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    pub length: usize,
    pub chunk_width: usize,
    pub interpolation: Interpolation,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            chunk_width: DEFAULT_CHUNK_WIDTH,
            interpolation: Interpolation::default(),
        }
    }
}

impl EncoderConfig {
    pub fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    pub fn with_chunk_width(self, chunk_width: usize) -> Self {
        Self { chunk_width, ..self }
    }

    pub fn with_interpolation(self, interpolation: Interpolation) -> Self {
        Self { interpolation, ..self }
    }

    /// Largest payload in bytes a single polynomial can hold. Saturates for shapes that
    /// [`Self::validate`] rejects.
    pub fn capacity(&self) -> usize {
        self.length.saturating_mul(self.chunk_width)
    }

    pub fn validate<F: PrimeField>(&self) -> Result<()> {
        if self.length == 0 {
            return Err(KzgError::InvalidConfig("polynomial length must be positive"));
        }
        if self.chunk_width == 0 {
            return Err(KzgError::InvalidConfig("chunk width must be positive"));
        }
        if self.length.checked_mul(self.chunk_width).is_none() {
            return Err(KzgError::InvalidConfig("capacity overflows usize"));
        }
        let chunk_bits = self
            .chunk_width
            .checked_mul(8)
            .ok_or(KzgError::InvalidConfig("chunk width overflows usize"))?;

        if chunk_bits >= F::MODULUS_BIT_SIZE as usize {
            warn!(
                chunk_width = self.chunk_width,
                modulus_bits = F::MODULUS_BIT_SIZE,
                "chunk values may exceed the field order and will be reduced",
            );
        }

        Ok(())
    }
}
