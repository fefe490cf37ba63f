use crate::SeededNoise;

// 3D Perlin noise sampled at (x, y, seed): the classic unit-cube
// gradient lattice, with the generation seed on the third axis.
// Alternative primitive to Simplex3D.
pub struct Perlin3D {
    table_seed: u64,
    perm: [u8; 512],
}

impl Perlin3D {
    pub fn new(table_seed: u64) -> Self {
        // Build the permutation table exactly as in Simplex3D
        let mut p: Vec<u8> = (0..256).map(|i| i as u8).collect();
        let mut x = table_seed ^ 0xAABB_CCDD_EEFF_1122_u64;
        let mut rng = || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x & 0xFF) as u8
        };
        for i in (1..256).rev() {
            let j = (rng() as usize) % (i + 1);
            p.swap(i, j);
        }
        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
        }

        Self { table_seed, perm }
    }

    // Fade function as defined by Ken Perlin: 6t^5 − 15t^4 + 10t^3
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    // Gradient function for 3D: the hashed value picks one of 12 directions
    #[inline]
    fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
        let h = (hash & 0xF) as usize;
        let u = if h < 8 { x } else { y };
        let v = if h < 4 {
            y
        } else if h == 12 || h == 14 {
            x
        } else {
            z
        };
        let sign_u = if (h & 1) == 0 { u } else { -u };
        let sign_v = if (h & 2) == 0 { v } else { -v };
        sign_u + sign_v
    }

    // Chained permutation lookup for one lattice corner
    #[inline]
    fn hash(&self, xi: usize, yi: usize, zi: usize) -> u8 {
        let h = self.perm[xi & 255] as usize;
        let h = self.perm[(h + yi) & 255] as usize;
        self.perm[(h + zi) & 255]
    }

    // Raw single-octave Perlin noise at (x, y, z)
    fn raw_noise(&self, x: f64, y: f64, z: f64) -> f64 {
        // Find the unit cube that contains the point
        let xi = (x.floor() as i32 & 255) as usize;
        let yi = (y.floor() as i32 & 255) as usize;
        let zi = (z.floor() as i32 & 255) as usize;
        // Relative coordinates within the cube
        let xf = x - x.floor();
        let yf = y - y.floor();
        let zf = z - z.floor();
        // Fade curves for smooth interpolation
        let u = Self::fade(xf);
        let v = Self::fade(yf);
        let w = Self::fade(zf);

        // Hash the eight cube corners
        let aaa = self.hash(xi, yi, zi);
        let aba = self.hash(xi, yi + 1, zi);
        let aab = self.hash(xi, yi, zi + 1);
        let abb = self.hash(xi, yi + 1, zi + 1);
        let baa = self.hash(xi + 1, yi, zi);
        let bba = self.hash(xi + 1, yi + 1, zi);
        let bab = self.hash(xi + 1, yi, zi + 1);
        let bbb = self.hash(xi + 1, yi + 1, zi + 1);

        // Blend the gradient contributions along x, then y, then z
        let x1 = Self::lerp(
            Self::grad(aaa, xf, yf, zf),
            Self::grad(baa, xf - 1.0, yf, zf),
            u,
        );
        let x2 = Self::lerp(
            Self::grad(aba, xf, yf - 1.0, zf),
            Self::grad(bba, xf - 1.0, yf - 1.0, zf),
            u,
        );
        let y1 = Self::lerp(x1, x2, v);

        let x3 = Self::lerp(
            Self::grad(aab, xf, yf, zf - 1.0),
            Self::grad(bab, xf - 1.0, yf, zf - 1.0),
            u,
        );
        let x4 = Self::lerp(
            Self::grad(abb, xf, yf - 1.0, zf - 1.0),
            Self::grad(bbb, xf - 1.0, yf - 1.0, zf - 1.0),
            u,
        );
        let y2 = Self::lerp(x3, x4, v);

        Self::lerp(y1, y2, w)
    }

    pub fn table_seed(&self) -> u64 {
        self.table_seed
    }
}

impl SeededNoise for Perlin3D {
    fn sample(&self, x: f64, y: f64, seed: f64) -> f64 {
        self.raw_noise(x, y, seed)
    }
}
