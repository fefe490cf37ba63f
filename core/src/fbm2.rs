use crate::SeededNoise;

// Multi-octave fractal height synthesis (fractal Brownian motion) over a
// seeded noise primitive. `frequency` is a wavelength divisor: octave 0
// samples at spatial frequency 1/frequency, each further octave doubles
// the frequency while `persistence` decays its amplitude.
pub struct Fbm2D<'a> {
    pub source: &'a dyn SeededNoise,
    pub frequency: f64,
    pub persistence: f64,
    pub octaves: usize,
}

impl<'a> Fbm2D<'a> {
    pub fn new(source: &'a dyn SeededNoise, frequency: f64, persistence: f64, octaves: usize) -> Self {
        assert!(frequency > 0.0, "frequency must be positive");
        assert!(octaves >= 1, "need at least one octave");

        Self {
            source,
            frequency,
            persistence,
            octaves,
        }
    }

    // Normalized fractal height at (x, y) for a seed offset.
    // The octave sum is divided by the largest value it could reach given
    // the amplitude decay, so the result stays roughly in [-1, 1] for any
    // octave count and persistence.
    pub fn height(&self, x: f64, y: f64, seed: f64) -> f64 {
        let mut amplitude = 1.0; // Weight of the current octave
        let mut freq = 1.0 / self.frequency; // Spatial frequency of the current octave
        let mut total = 0.0; // Accumulated noise value
        let mut max_amp = 0.0; // Maximum possible amplitude, for normalization

        for _ in 0..self.octaves {
            total += self.source.sample(x * freq, y * freq, seed) * amplitude;
            max_amp += amplitude;
            amplitude *= self.persistence;
            freq *= 2.0;
        }

        total / max_amp
    }
}

#[cfg(test)]
mod tests {
    use crate::{SeededNoise, Simplex3D};

    use super::Fbm2D;

    // Stub primitives for pinning the synthesis math
    struct Zero;
    impl SeededNoise for Zero {
        fn sample(&self, _x: f64, _y: f64, _seed: f64) -> f64 {
            0.0
        }
    }

    struct Constant(f64);
    impl SeededNoise for Constant {
        fn sample(&self, _x: f64, _y: f64, _seed: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn fbm2_zero_source_gives_zero_everywhere() {
        // 0 divided by any positive amplitude sum is 0, whatever the
        // octave count or persistence
        for &(persistence, octaves) in &[(0.2, 1), (0.5, 4), (0.9, 12)] {
            let fbm = Fbm2D::new(&Zero, 640.0, persistence, octaves);
            for &(x, y) in &[(0.0, 0.0), (13.0, 200.0), (511.0, 511.0)] {
                assert_eq!(fbm.height(x, y, 42.0), 0.0);
            }
        }
    }

    #[test]
    fn fbm2_constant_source_is_normalized_away() {
        // Every octave contributes amplitude × 1, so the normalized sum
        // is exactly 1 no matter how many octaves run
        for octaves in [1, 3, 8] {
            let fbm = Fbm2D::new(&Constant(1.0), 320.0, 0.6, octaves);
            let v = fbm.height(100.0, 100.0, 0.0);
            assert!((v - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn fbm2_stays_in_unit_range() {
        let noise = Simplex3D::new(2025);
        let fbm = Fbm2D::new(&noise, 640.0, 0.6, 8);
        for &(x, y) in &[(0.0, 0.0), (17.0, 311.0), (255.5, 255.5), (511.0, 0.0)] {
            let v = fbm.height(x, y, 1234.0);
            assert!(v >= -1.0 - 1e-6 && v <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn fbm2_determinism() {
        let noise = Simplex3D::new(7);
        let f1 = Fbm2D::new(&noise, 640.0, 0.6, 8);
        let f2 = Fbm2D::new(&noise, 640.0, 0.6, 8);
        let a = f1.height(10.5, 3.7, 99.0);
        let b = f2.height(10.5, 3.7, 99.0);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn fbm2_single_octave_matches_source() {
        // One octave is just the primitive at 1/frequency scale
        let noise = Simplex3D::new(11);
        let fbm = Fbm2D::new(&noise, 64.0, 0.6, 1);
        let direct = noise.sample(20.0 / 64.0, 30.0 / 64.0, 5.0);
        assert!((fbm.height(20.0, 30.0, 5.0) - direct).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn fbm2_zero_frequency_rejected() {
        // Would divide by zero in the octave-0 wavelength
        let _ = Fbm2D::new(&Zero, 0.0, 0.5, 4);
    }
}
