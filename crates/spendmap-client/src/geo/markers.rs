/// Default visual range for ZIP cluster markers, in pixels.
pub const MIN_MARKER_SIZE: f64 = 4.0;
pub const MAX_MARKER_SIZE: f64 = 22.0;

/// Square-root scaling from magnitude to marker size, so visual area
/// tracks magnitude instead of radius. The `max(…, 1.0)` floor keeps the
/// divisor alive when every magnitude is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerScale {
    min_size: f64,
    max_size: f64,
    sqrt_max_magnitude: f64,
}

impl MarkerScale {
    pub fn fit(magnitudes: &[f64], min_size: f64, max_size: f64) -> Self {
        let max_magnitude = magnitudes
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);

        Self {
            min_size,
            max_size,
            sqrt_max_magnitude: max_magnitude.max(1.0).sqrt(),
        }
    }

    pub fn size_for(&self, magnitude: f64) -> f64 {
        let clamped = magnitude.max(0.0);
        let size = self.min_size
            + (self.max_size - self.min_size) * clamped.sqrt() / self.sqrt_max_magnitude;
        size.min(self.max_size)
    }
}
