use crate::SeededNoise;

// 3D Simplex noise sampled at (x, y, seed)
// The generation seed rides the third axis, so nearby seeds slide the
// landmass through a continuous family of noise fields.
// Based on Ken Perlin's Simplex algorithm
pub struct Simplex3D {
    table_seed: u64,
    perm: [u8; 512],
    // In 3D the simplex is a tetrahedron; gradients point at the twelve
    // cube edge midpoints
    grad3: [(i8, i8, i8); 12],
}

impl Simplex3D {
    pub fn new(table_seed: u64) -> Self {
        // Build a pseudorandom permutation table of size 256, duplicated into 512
        let mut p: Vec<u8> = (0..256).map(|i| i as u8).collect();
        // Simple xorshift RNG for reproducible shuffling
        let mut x = table_seed ^ 0x1234_5678_9ABC_DEF0_u64;
        let mut rng = || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x & 0xFF) as u8
        };
        // Fisher–Yates shuffle p[0..256]
        for i in (1..256).rev() {
            let j = (rng() as usize) % (i + 1);
            p.swap(i, j);
        }
        // Duplicate into an array of length 512 to avoid modulo on lookups
        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
        }

        let grad3 = [
            (1, 1, 0),
            (-1, 1, 0),
            (1, -1, 0),
            (-1, -1, 0),
            (1, 0, 1),
            (-1, 0, 1),
            (1, 0, -1),
            (-1, 0, -1),
            (0, 1, 1),
            (0, -1, 1),
            (0, 1, -1),
            (0, -1, -1),
        ];

        Self {
            table_seed,
            perm,
            grad3,
        }
    }

    // Dot product helper; the gradient comes from grad3[hash % 12]
    #[inline]
    fn dot(g: (i8, i8, i8), x: f64, y: f64, z: f64) -> f64 {
        (g.0 as f64) * x + (g.1 as f64) * y + (g.2 as f64) * z
    }

    // Raw 3D Simplex noise at (xin, yin, zin)
    // Returns in range [−1.0, +1.0], roughly
    fn raw_noise(&self, xin: f64, yin: f64, zin: f64) -> f64 {
        // Skewing/unskewing factors for 3D simplex
        const F3: f64 = 1.0 / 3.0; // squashes the cube so it tiles into tetrahedra
        const G3: f64 = 1.0 / 6.0; // reverses the skewing

        // Skew input space to determine the simplex cell
        let s = (xin + yin + zin) * F3;
        let i = (xin + s).floor() as i32;
        let j = (yin + s).floor() as i32;
        let k = (zin + s).floor() as i32;

        // Unskew back to get the relative position to the origin corner
        let t = (i + j + k) as f64 * G3;
        let x0 = xin - (i as f64 - t);
        let y0 = yin - (j as f64 - t);
        let z0 = zin - (k as f64 - t);

        // The skewed cube splits into six tetrahedra; ranking the local
        // coordinates picks the one containing the point. (i1,j1,k1) and
        // (i2,j2,k2) are the offsets of the second and third corner.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0) // x > y > z
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1) // x > z > y
            } else {
                (0, 0, 1, 1, 0, 1) // z > x > y
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1) // z > y > x
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1) // y > z > x
        } else {
            (0, 1, 0, 1, 1, 0) // y > x > z
        };

        // Offsets for the remaining corners in unskewed space
        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        // Hash the four simplex corners into gradient indices
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;
        let gi0 =
            (self.perm[ii + self.perm[jj + self.perm[kk] as usize] as usize] as usize) % 12;
        let gi1 = (self.perm
            [ii + i1 + self.perm[jj + j1 + self.perm[kk + k1] as usize] as usize]
            as usize)
            % 12;
        let gi2 = (self.perm
            [ii + i2 + self.perm[jj + j2 + self.perm[kk + k2] as usize] as usize]
            as usize)
            % 12;
        let gi3 = (self.perm[ii + 1 + self.perm[jj + 1 + self.perm[kk + 1] as usize] as usize]
            as usize)
            % 12;

        // Contribution from each corner, windowed by squared distance
        let mut n0 = 0.0;
        let t0 = 0.6 - x0 * x0 - y0 * y0 - z0 * z0;
        if t0 > 0.0 {
            let t0_sq = t0 * t0;
            n0 = t0_sq * t0_sq * Self::dot(self.grad3[gi0], x0, y0, z0);
        }
        let mut n1 = 0.0;
        let t1 = 0.6 - x1 * x1 - y1 * y1 - z1 * z1;
        if t1 > 0.0 {
            let t1_sq = t1 * t1;
            n1 = t1_sq * t1_sq * Self::dot(self.grad3[gi1], x1, y1, z1);
        }
        let mut n2 = 0.0;
        let t2 = 0.6 - x2 * x2 - y2 * y2 - z2 * z2;
        if t2 > 0.0 {
            let t2_sq = t2 * t2;
            n2 = t2_sq * t2_sq * Self::dot(self.grad3[gi2], x2, y2, z2);
        }
        let mut n3 = 0.0;
        let t3 = 0.6 - x3 * x3 - y3 * y3 - z3 * z3;
        if t3 > 0.0 {
            let t3_sq = t3 * t3;
            n3 = t3_sq * t3_sq * Self::dot(self.grad3[gi3], x3, y3, z3);
        }

        // The result is scaled to return roughly [-1,1] to make it consistent
        32.0 * (n0 + n1 + n2 + n3)
    }

    pub fn table_seed(&self) -> u64 {
        self.table_seed
    }
}

impl SeededNoise for Simplex3D {
    fn sample(&self, x: f64, y: f64, seed: f64) -> f64 {
        self.raw_noise(x, y, seed)
    }
}
