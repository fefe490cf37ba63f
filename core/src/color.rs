use palette::LinSrgb;

// Height-to-color classification. Two policies share the sea/beach
// thresholds: fixed biome bands, or a continuous gradient that blends
// water into sand across a tide band around the waterline.

// Linear remap of `x` from [a0, b0] onto [a1, b1]. Deliberately not
// clamped, so heights outside the source range extrapolate. A zero-width
// source range divides by zero and yields a non-finite value rather than
// a structured error.
#[inline]
pub fn scale(x: f32, a0: f32, b0: f32, a1: f32, b1: f32) -> f32 {
    a1 + (x - a0) * (b1 - a1) / (b0 - a0)
}

// Linearly interpolate two colors channel by channel. `t` is not
// clamped: progress past [0, 1] extrapolates instead of saturating.
#[inline]
pub fn lerp_color(a: LinSrgb, b: LinSrgb, t: f32) -> LinSrgb {
    LinSrgb::new(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorScheme {
    // Four fixed bands split by the thresholds
    Bands {
        deep_water: LinSrgb,
        water: LinSrgb,
        sand: LinSrgb,
        land: LinSrgb,
    },
    // Continuous tide-aware gradient
    Gradient {
        water_deepest: LinSrgb,
        water_shallowest: LinSrgb,
        land_lowest: LinSrgb,
        land_highest: LinSrgb,
        sand: LinSrgb,
        // Flatten the tide and beach segments to plain sand
        sand_as_border: bool,
    },
}

impl ColorScheme {
    pub fn bands() -> Self {
        ColorScheme::Bands {
            deep_water: LinSrgb::new(0.0, 0.0, 1.0),
            water: LinSrgb::new(0.0, 0.2, 0.8),
            sand: LinSrgb::new(0.82, 0.78, 0.63),
            land: LinSrgb::new(0.0, 1.0, 0.0),
        }
    }

    pub fn gradient() -> Self {
        ColorScheme::Gradient {
            water_deepest: LinSrgb::new(0.0, 0.0, 1.0),
            water_shallowest: LinSrgb::new(0.0, 0.3, 0.7),
            land_lowest: LinSrgb::new(0.0, 0.36, 0.0),
            land_highest: LinSrgb::new(0.0, 0.65, 0.0),
            sand: LinSrgb::new(0.82, 0.78, 0.63),
            sand_as_border: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConfig {
    pub sea_level: f32,
    // Offset below sea level where water turns deep (negative)
    pub deep_sea_level: f32,
    // Height span of the beach above sea level
    pub beach_extent: f32,
    // Fraction of the beach extent that blends across the waterline
    pub tide_percentage: f32,
    pub scheme: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            sea_level: 0.0,
            deep_sea_level: -0.2,
            beach_extent: 0.02,
            tide_percentage: 0.25,
            scheme: ColorScheme::gradient(),
        }
    }
}

impl ColorConfig {
    // Map a height in roughly [-1, 1] to its color under the configured
    // scheme
    pub fn color_at(&self, height: f32) -> LinSrgb {
        match &self.scheme {
            ColorScheme::Bands {
                deep_water,
                water,
                sand,
                land,
            } => {
                // Strict `<` at every threshold: a height exactly on a
                // boundary falls into the band above it
                if height < self.sea_level + self.deep_sea_level {
                    *deep_water
                } else if height < self.sea_level {
                    *water
                } else if height < self.sea_level + self.beach_extent {
                    *sand
                } else {
                    *land
                }
            }
            ColorScheme::Gradient {
                water_deepest,
                water_shallowest,
                land_lowest,
                land_highest,
                sand,
                sand_as_border,
            } => {
                let tide_extent = self.beach_extent * self.tide_percentage;
                if height < self.sea_level - tide_extent {
                    // Open water: deepest at −1 up to the waterline
                    let prog = scale(height, -1.0, self.sea_level, 0.0, 1.0);
                    lerp_color(*water_deepest, *water_shallowest, prog)
                } else if height < self.sea_level + tide_extent {
                    // Tide band straddling the waterline
                    if *sand_as_border {
                        *sand
                    } else {
                        let prog = scale(
                            height,
                            self.sea_level - tide_extent,
                            self.sea_level + tide_extent,
                            0.0,
                            1.0,
                        );
                        lerp_color(*water_shallowest, *sand, prog)
                    }
                } else if height < self.sea_level + self.beach_extent {
                    // Dry beach up to the lowest land
                    if *sand_as_border {
                        *sand
                    } else {
                        let prog = scale(
                            height,
                            self.sea_level,
                            self.sea_level + self.beach_extent,
                            0.0,
                            1.0,
                        );
                        lerp_color(*sand, *land_lowest, prog)
                    }
                } else {
                    // Land: lowest at the beach line, highest at +1
                    let prog = scale(height, self.sea_level + self.beach_extent, 1.0, 0.0, 1.0);
                    lerp_color(*land_lowest, *land_highest, prog)
                }
            }
        }
    }
}
