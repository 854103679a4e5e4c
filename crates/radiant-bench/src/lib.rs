//! Scene-shaped inputs for the radiant benchmarks, drawn from a fixed seed.

use radiant::{Bounds3f, Float, Point3f, Ray, Vector3f};

/// xoshiro256** generator. Benchmarks only need reproducibility, not quality.
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // splitmix64 seeding
        let mut z = seed;
        let s = core::array::from_fn(|_| {
            z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            x ^ (x >> 31)
        });
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.s;
        let out = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *s1 << 17;
        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);
        out
    }

    /// Uniform in `[0, 1]` from the top 53 bits (f32 rounding can reach 1).
    pub fn unit(&mut self) -> Float {
        ((self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)) as Float
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: Float, hi: Float) -> Float {
        lo + (hi - lo) * self.unit()
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0x5EED_0F_7A11_ACE5)
}

pub fn random_points(n: usize, extent: Float) -> Vec<Point3f> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            Point3f::new(
                rng.range(-extent, extent),
                rng.range(-extent, extent),
                rng.range(-extent, extent),
            )
        })
        .collect()
}

/// Directions on the cube shell `[-1, 1]^3`, never near zero length.
pub fn random_dirs(n: usize) -> Vec<Vector3f> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| loop {
            let v = Vector3f::new(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0), rng.range(-1.0, 1.0));
            if v.length_squared() > 1.0e-2 {
                break v;
            }
        })
        .collect()
}

/// Small boxes scattered through a scene of half-width `extent`, like leaf primitives of a BVH.
pub fn random_bounds(n: usize, extent: Float) -> Vec<Bounds3f> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let c = Point3f::new(
                rng.range(-extent, extent),
                rng.range(-extent, extent),
                rng.range(-extent, extent),
            );
            let h = Vector3f::new(rng.unit(), rng.unit(), rng.unit());
            Bounds3f::new(c - h, c + h)
        })
        .collect()
}

pub fn random_rays(n: usize) -> Vec<Ray<'static>> {
    random_points(n, 10.0)
        .into_iter()
        .zip(random_dirs(n))
        .map(|(o, d)| Ray::new(o, d.normalize()))
        .collect()
}
