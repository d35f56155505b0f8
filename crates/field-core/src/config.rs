use crate::constants::{DEFAULT_PARTICLE_COUNT, LAYOUT_BUFFER};
use crate::error::FieldError;

/// Construction parameters for a [`FieldEngine`](crate::FieldEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub buffer: f32,
    /// Fixed seed for layout noise, traits and jitter. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            buffer: LAYOUT_BUFFER,
            seed: None,
        }
    }
}

impl FieldParams {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.particle_count == 0 {
            return Err(FieldError::EmptyField);
        }
        if !self.buffer.is_finite() || self.buffer < 0.0 {
            return Err(FieldError::InvalidBuffer(self.buffer));
        }
        Ok(())
    }
}

pub(crate) fn validate_viewport(width: f32, height: f32) -> Result<(), FieldError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(FieldError::InvalidViewport { width, height })
    }
}
