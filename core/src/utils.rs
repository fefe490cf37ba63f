use palette::LinSrgb;

// Row-major color grid produced by one generation
// Replaced wholesale on regeneration; the pipeline writes each cell once
// access as `grid.get(x, y)`
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    pixels: Vec<LinSrgb>,
}

impl ColorGrid {
    // Black grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![LinSrgb::new(0.0, 0.0, 0.0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> LinSrgb {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, color: LinSrgb) {
        self.pixels[y * self.width + x] = color;
    }

    // Flat row-major view for display surfaces
    pub fn pixels(&self) -> &[LinSrgb] {
        &self.pixels
    }

    // Flatten into an RGB byte buffer (8 bits per channel)
    // For writing to an image file or uploading as a texture
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.pixels.len() * 3);
        for &c in &self.pixels {
            let rgb = c.into_format::<u8>();
            buf.extend_from_slice(&[rgb.red, rgb.green, rgb.blue]);
        }
        buf
    }
}
