//! Property tests over the geometric invariants, with a pinned seed so a
//! failure reproduces identically on every machine.
//!
//! Override locally with `PROPTEST_SEED=<64 hex digits>` or edit `SEED_BYTES`.

use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use radiant::{
    Bounds2, Bounds3, Float, Normal3, Point2, Point3, Point3f, Ray, RayDifferential, Vector3,
    Vector3f,
};

const SEED_BYTES: [u8; 32] = [
    0x52, 0x41, 0x44, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,
];

fn pinned_runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn coord() -> impl Strategy<Value = f64> + Clone {
    -1.0e3..1.0e3f64
}

fn vec3() -> impl Strategy<Value = Vector3<f64>> + Clone {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn nonzero_vec3() -> impl Strategy<Value = Vector3<f64>> + Clone {
    vec3().prop_filter("away from zero", |v| v.length_squared() > 1.0e-6)
}

fn point3() -> impl Strategy<Value = Point3<f64>> + Clone {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn bounds3() -> impl Strategy<Value = Bounds3<f64>> + Clone {
    (point3(), point3()).prop_map(|(a, b)| Bounds3::new(a, b))
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn normalized_vectors_have_unit_length() {
    pinned_runner()
        .run(&nonzero_vec3(), |v| {
            prop_assert!((v.normalize().length() - 1.0).abs() < 1.0e-12);
            Ok(())
        })
        .unwrap();
}

#[test]
fn coordinate_system_is_orthonormal() {
    pinned_runner()
        .run(&nonzero_vec3(), |v| {
            let v1 = v.normalize();
            let (v2, v3) = v1.coordinate_system();
            prop_assert!((v2.length() - 1.0).abs() < 1.0e-9);
            prop_assert!((v3.length() - 1.0).abs() < 1.0e-9);
            prop_assert!(v1.dot(v2).abs() < 1.0e-9);
            prop_assert!(v1.dot(v3).abs() < 1.0e-9);
            prop_assert!(v2.dot(v3).abs() < 1.0e-9);
            Ok(())
        })
        .unwrap();
}

#[test]
fn cross_is_anticommutative() {
    pinned_runner()
        .run(&(vec3(), vec3()), |(a, b)| {
            prop_assert_eq!(a.cross(b), -b.cross(a));
            Ok(())
        })
        .unwrap();
}

#[test]
fn cross_is_exact_for_f32_inputs() {
    // small integers: every product and difference is exact in f64 and fits an f32 mantissa
    let small = -2048i32..2048;
    let strat = prop::array::uniform6(small);
    pinned_runner()
        .run(&strat, |[ax, ay, az, bx, by, bz]| {
            let a = Vector3::new(ax as f32, ay as f32, az as f32);
            let b = Vector3::new(bx as f32, by as f32, bz as f32);
            let c = a.cross(b);
            let exact = Vector3::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx);
            prop_assert_eq!(c.cast::<i32>(), exact);
            Ok(())
        })
        .unwrap();
}

#[test]
fn point_difference_round_trips() {
    pinned_runner()
        .run(&(point3(), point3()), |(p, q)| {
            let back = (p - q) + q.to_vec();
            prop_assert!(close(back.x, p.x, 1.0e-12));
            prop_assert!(close(back.y, p.y, 1.0e-12));
            prop_assert!(close(back.z, p.z, 1.0e-12));
            let moved = q + (p - q);
            prop_assert!(close(moved.z, p.z, 1.0e-12));
            Ok(())
        })
        .unwrap();
}

#[test]
fn distance_is_symmetric() {
    pinned_runner()
        .run(&(point3(), point3()), |(p, q)| {
            prop_assert_eq!(p.distance(q), q.distance(p));
            let d = p.distance(q);
            prop_assert!(close(p.distance_squared(q), d * d, 1.0e-12));
            Ok(())
        })
        .unwrap();
}

#[test]
fn empty_bounds_union_point() {
    pinned_runner()
        .run(&point3(), |p| {
            let b = Bounds3::default().union_point(p);
            prop_assert_eq!(b.min, p);
            prop_assert_eq!(b.max, p);
            prop_assert!(b.contains(p));
            prop_assert!(!b.is_empty());
            Ok(())
        })
        .unwrap();
}

#[test]
fn union_encloses_and_intersect_is_enclosed() {
    pinned_runner()
        .run(&(bounds3(), bounds3()), |(a, b)| {
            let u = a.union(&b);
            for i in 0..8 {
                prop_assert!(u.contains(a.corner(i)));
                prop_assert!(u.contains(b.corner(i)));
            }
            if a.overlaps(&b) {
                let i = a.intersect(&b);
                prop_assert!(!i.is_empty());
                prop_assert!(a.contains(i.min) && a.contains(i.max));
                prop_assert!(b.contains(i.min) && b.contains(i.max));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn disjoint_bounds_do_not_overlap() {
    let strat = (bounds3(), 0usize..3, 1.0e-3..10.0f64);
    pinned_runner()
        .run(&strat, |(a, axis, gap)| {
            // slide a copy of `a` past its own max face on one axis
            let mut shift = Vector3::zero();
            shift[axis] = a.diagonal()[axis] + gap;
            let b = Bounds3::new(a.min + shift, a.max + shift);
            prop_assert!(!a.overlaps(&b));
            prop_assert!(!b.overlaps(&a));
            let i = a.intersect(&b);
            prop_assert!(i.min[axis] > i.max[axis]);
            prop_assert!(i.is_empty());
            Ok(())
        })
        .unwrap();
}

#[test]
fn face_forward_lands_in_reference_hemisphere() {
    pinned_runner()
        .run(&(vec3(), vec3()), |(n, v)| {
            let n = Normal3::from_vector(n);
            prop_assert!(n.face_forward(v).dot(v) >= 0.0);
            prop_assert!(v.face_forward(n).dot(n) >= 0.0);
            Ok(())
        })
        .unwrap();
}

#[test]
fn zero_scale_collapses_differentials() {
    let coords = prop::array::uniform6(-100.0..100.0 as Float);
    let strat = (coords.clone(), coords);
    pinned_runner()
        .run(&strat, |(o, d)| {
            let origin = Point3f::new(o[0], o[1], o[2]);
            let dir = Vector3f::new(d[0], d[1], d[2]);
            let aux_o = Point3f::new(o[3], o[4], o[5]);
            let aux_d = Vector3f::new(d[3], d[4], d[5]);
            let mut rd = RayDifferential::from(Ray::new(origin, dir))
                .with_differentials(aux_o, aux_d, aux_o, aux_d);
            rd.scale_differentials(0.0);
            prop_assert_eq!(rd.rx_origin, origin);
            prop_assert_eq!(rd.ry_origin, origin);
            prop_assert_eq!(rd.rx_dir, dir);
            prop_assert_eq!(rd.ry_dir, dir);
            Ok(())
        })
        .unwrap();
}

#[test]
fn pixel_iteration_matches_exclusive_containment() {
    let corner = (-8i32..8, -8i32..8).prop_map(|(x, y)| Point2::new(x, y));
    pinned_runner()
        .run(&(corner.clone(), corner), |(a, b)| {
            let bounds = Bounds2::new(a, b);
            let mut visited = 0usize;
            let mut prev: Option<Point2<i32>> = None;
            for p in bounds.iter() {
                prop_assert!(bounds.contains_exclusive(p));
                if let Some(q) = prev {
                    // row-major, x fastest, so strictly increasing (y, x)
                    prop_assert!((q.y, q.x) < (p.y, p.x));
                }
                prev = Some(p);
                visited += 1;
            }
            let mut expected = 0usize;
            for y in -10..10 {
                for x in -10..10 {
                    if bounds.contains_exclusive(Point2::new(x, y)) {
                        expected += 1;
                    }
                }
            }
            prop_assert_eq!(visited, expected);
            Ok(())
        })
        .unwrap();
}
