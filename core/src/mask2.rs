// Radial edge attenuation: pulls heights toward a configured edge value
// with distance from the grid centre, so a landmass sinks into deep
// water (or, with `from_centre` unset, rises out of it) before reaching
// the border.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskMode {
    None,
    Linear,
    Cosine,
    SmoothStep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskConfig {
    pub mode: MaskMode,
    // Value heights are pulled toward at the grid edge
    pub edge_value: f32,
    // true: attenuate outward from the centre; false: swap the
    // interpolation endpoints
    pub from_centre: bool,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mode: MaskMode::Linear,
            edge_value: -1.0,
            from_centre: true,
        }
    }
}

// Linear interpolation
#[inline]
pub fn lerp(from: f32, to: f32, mu: f32) -> f32 {
    from + (to - from) * mu
}

// Cosine-eased interpolation
#[inline]
pub fn cosine_interpolate(from: f32, to: f32, mu: f32) -> f32 {
    let mu2 = (1.0 - (mu * std::f32::consts::PI).cos()) / 2.0;
    from * (1.0 - mu2) + to * mu2
}

// Cubic Hermite ease (3t² − 2t³) between the endpoints
#[inline]
pub fn smooth_step(from: f32, to: f32, mu: f32) -> f32 {
    let t = mu.clamp(0.0, 1.0);
    let t = t * t * (3.0 - 2.0 * t);
    from * (1.0 - t) + to * t
}

// Per-generation mask context: the grid centre and the normalizing
// distance are fixed once, then every cell is attenuated against them.
#[derive(Debug, Clone, Copy)]
pub struct RadialMask2D {
    mode: MaskMode,
    edge_value: f32,
    from_centre: bool,
    half_width: f32,
    half_height: f32,
    // Half-diagonal: distance from the centre to the farthest corner
    ref_dist: f32,
}

impl RadialMask2D {
    pub fn new(config: &MaskConfig, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "mask needs a non-empty grid");

        let half_width = width as f32 / 2.0;
        let half_height = height as f32 / 2.0;
        let ref_dist = (half_width * half_width + half_height * half_height).sqrt();

        Self {
            mode: config.mode,
            edge_value: config.edge_value,
            from_centre: config.from_centre,
            half_width,
            half_height,
            ref_dist,
        }
    }

    // Attenuate `height` at cell (x, y). `amt` runs from 0 at the centre
    // to 1 at the farthest corner.
    pub fn apply(&self, height: f32, x: f32, y: f32) -> f32 {
        if self.mode == MaskMode::None {
            return height;
        }

        let dx = self.half_width - x;
        let dy = self.half_height - y;
        let amt = (dx * dx + dy * dy).sqrt() / self.ref_dist;

        let (from, to) = if self.from_centre {
            (height, self.edge_value)
        } else {
            (self.edge_value, height)
        };

        match self.mode {
            MaskMode::Linear => lerp(from, to, amt),
            MaskMode::Cosine => cosine_interpolate(from, to, amt),
            MaskMode::SmoothStep => smooth_step(from, to, amt),
            MaskMode::None => height,
        }
    }
}
