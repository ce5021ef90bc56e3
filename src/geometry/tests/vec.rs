use crate::error::GeometryError;
use crate::geometry::Vector;
use assert_approx_eq::assert_approx_eq;
use std::f64::consts::{FRAC_PI_2, PI};

const SAMPLES: [(f64, f64); 8] = [
    (1.0, 0.0),
    (0.0, -1.0),
    (3.0, 4.0),
    (-83.27705, 79.29129),
    (0.001, 0.002),
    (1e4, -2.5e3),
    (-0.5, -0.5),
    (60.06347, -37.23738),
];

#[test]
fn vector_zero_constructor() {
    let v = Vector::<f32>::zero();
    assert_eq!(v.x, 0.0);
    assert_eq!(v.y, 0.0);
    let d = Vector::<i32>::default();
    assert_eq!(d.x, 0);
    assert_eq!(d.y, 0);
}

#[test]
fn vector_components_constructor() {
    let v = Vector::<f32>::new(1.0, 0.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 0.0);
}

#[test]
fn vector_mixed_components_constructor() {
    let v = Vector::<f64>::new(2_u8, -1.5_f32);
    assert_eq!(v.x, 2.0);
    assert_eq!(v.y, -1.5);
}

#[test]
fn vector_from_different_type() {
    let v = Vector::<i32>::new(3, 4);
    let converted = Vector::<f64>::from_vector(&v);
    assert_eq!(converted.x, 3.0);
    assert_eq!(converted.y, 4.0);
    let back = converted.cast::<i32>();
    assert_eq!(back.x, 3);
    assert_eq!(back.y, 4);
}

#[test]
fn vector_narrowing_conversion_truncates() {
    let v = Vector::<f64>::new(2.9, -2.9);
    let narrowed = Vector::<i16>::from_vector(&v);
    assert_eq!(narrowed.x, 2);
    assert_eq!(narrowed.y, -2);
}

#[test]
fn vector_assign() {
    let mut v = Vector::<f32>::new(1.0, 1.0);
    v.assign(&Vector::<i64>::new(-7, 9));
    assert_eq!(v.x, -7.0);
    assert_eq!(v.y, 9.0);
}

#[test]
fn vector_copy() {
    let v = Vector::<f32>::new(-83.27705, 79.29129);
    let v2 = v;
    assert_eq!(v.x, v2.x);
    assert_eq!(v.y, v2.y);
}

#[test]
fn vector_length() {
    let v = Vector::<f32>::new(-15.0, -2.0);
    assert_approx_eq!(v.length(), 15.132745, 1e-5);

    let v1 = Vector::<f32>::new(-3.0, 2.0);
    assert_approx_eq!(v1.length2(), 13.0);
    assert_approx_eq!(v1.length() * v1.length(), v1.length2(), 1e-5);

    assert_eq!(Vector::<f32>::zero().length(), 0.0);
    assert_eq!(Vector::<i32>::new(3, 4).length(), 5);
    assert_eq!(Vector::<f64>::new(3.0, 4.0).length(), 5.0);
}

#[test]
fn vector_integer_length_truncated() {
    let v = Vector::<u32>::new(1, 1);
    assert_eq!(v.length(), 1);
}

#[test]
fn vector_dot() {
    let v = Vector::<f32>::new(1.0, 2.0);
    let v2 = Vector::<f32>::new(4.0, -5.0);
    assert_eq!(v.dot(&v2), -6.0);

    let v3 = Vector::<f32>::new(6.0, -1.0);
    let v4 = Vector::<f32>::new(4.0, 24.0);
    assert_eq!(v3.dot(&v4), 0.0);
}

#[test]
fn vector_dot_receiver_type() {
    let v = Vector::<i32>::new(2, 3);
    let v2 = Vector::<f64>::new(1.5, 1.5);
    // 1.5 is converted to 1 before the product
    let dot: i32 = v.dot(&v2);
    assert_eq!(dot, 5);
}

#[test]
fn vector_dot_commutative() {
    for &(ax, ay) in SAMPLES.iter() {
        for &(bx, by) in SAMPLES.iter() {
            let a = Vector::<f64>::new(ax, ay);
            let b = Vector::<f64>::new(bx, by);
            assert_approx_eq!(a.dot(&b), b.dot(&a));
        }
    }
}

#[test]
fn vector_cross_component_product() {
    let v = Vector::<f32>::new(3.0, -3.0);
    let v2 = Vector::<f32>::new(4.0, 9.0);
    let cross = v.cross(&v2);
    assert_eq!(cross.x, 27.0);
    assert_eq!(cross.y, -12.0);
}

#[test]
fn vector_perp_dot() {
    let v = Vector::<f32>::new(3.0, -3.0);
    let v2 = Vector::<f32>::new(4.0, 9.0);
    assert_eq!(v.perp_dot(&v2), 39.0);
    assert_eq!(v2.perp_dot(&v), -39.0);
    assert_eq!(v.perp_dot(&v), 0.0);
}

#[test]
fn vector_perp_dot_unsigned() {
    let x = Vector::<u32>::new(1, 0);
    let y = Vector::<u32>::new(0, 1);
    assert_eq!(x.perp_dot(&y), 1.0);
    assert_eq!(y.perp_dot(&x), -1.0);
    let w = Vector::<f32>::new(0.5, 2.0);
    assert_eq!(x.perp_dot(&w), 2.0);
    assert_eq!(w.perp_dot(&x), -2.0);
}

#[test]
fn vector_distance() {
    let v0 = Vector::<f32>::new(1.0, 2.0);
    let v1 = Vector::<f32>::new(4.0, 5.0);
    assert_approx_eq!(v0.distance(&v1), 4.242641);
    let unsigned0 = Vector::<u8>::new(0, 3);
    let unsigned1 = Vector::<u8>::new(4, 0);
    assert_eq!(unsigned0.distance(&unsigned1), 5);
}

#[test]
fn vector_distance_symmetric() {
    for &(ax, ay) in SAMPLES.iter() {
        for &(bx, by) in SAMPLES.iter() {
            let a = Vector::<f64>::new(ax, ay);
            let b = Vector::<f64>::new(bx, by);
            assert_eq!(a.distance(&b), b.distance(&a));
        }
    }
}

#[test]
fn vector_normalize() {
    let mut v1 = Vector::<f32>::new(3.0, 1.0);
    assert_approx_eq!(v1.length(), 3.162277, 1e-5);
    assert!(!v1.is_normalized());

    v1.normalize();
    assert_approx_eq!(v1.x, 0.948683);
    assert_approx_eq!(v1.y, 0.316228);
    assert!(v1.is_normalized());
}

#[test]
fn vector_normalize_unit_length() {
    for &(x, y) in SAMPLES.iter() {
        let mut v = Vector::<f64>::new(x, y);
        v.normalize();
        assert_approx_eq!(v.length(), 1.0);
    }
}

#[test]
fn vector_normalize_zero() {
    let mut v = Vector::<f32>::zero();
    v.normalize();
    assert_eq!(v.x, 0.0);
    assert_eq!(v.y, 0.0);
}

#[test]
fn vector_normalized_does_not_modify() {
    let v = Vector::<f64>::new(0.0, 8.0);
    let normalized = v.normalized();
    assert_eq!(v.y, 8.0);
    assert_eq!(normalized.y, 1.0);
}

#[test]
fn vector_try_normalize() {
    let mut v = Vector::<f32>::new(0.0, -2.0);
    assert!(v.try_normalize().is_ok());
    assert_eq!(v.y, -1.0);

    let mut zero = Vector::<f32>::zero();
    assert_eq!(
        zero.try_normalize().err(),
        Some(GeometryError::DegenerateVector)
    );
}

#[test]
fn vector_rotate() {
    let mut v = Vector::<f64>::new(1.0, 0.0);
    v.rotate(FRAC_PI_2);
    assert_approx_eq!(v.x, 0.0);
    assert_approx_eq!(v.y, 1.0);

    let mut v2 = Vector::<f64>::new(1.0, 1.0);
    v2.rotate(PI);
    assert_approx_eq!(v2.x, -1.0);
    assert_approx_eq!(v2.y, -1.0);
}

#[test]
fn vector_rotate_keeps_length() {
    let mut v = Vector::<f32>::new(3.0, 4.0);
    v.rotate(0.7_f32);
    assert_approx_eq!(v.length(), 5.0, 1e-5);
}

#[test]
fn vector_rotate_round_trip() {
    let angles = [0.0, 0.3, -1.2, FRAC_PI_2, PI, 4.0, -7.5];
    for &(x, y) in SAMPLES.iter() {
        for &theta in angles.iter() {
            let original = Vector::<f64>::new(x, y);
            let mut v = original;
            v.rotate(theta).rotate(-theta);
            assert_approx_eq!(v.x, original.x, 1e-9);
            assert_approx_eq!(v.y, original.y, 1e-9);
        }
    }
}

#[test]
fn vector_rotated_does_not_modify() {
    let v = Vector::<f64>::new(0.0, 2.0);
    let rotated = v.rotated(-FRAC_PI_2);
    assert_eq!(v.x, 0.0);
    assert_approx_eq!(rotated.x, 2.0);
    assert_approx_eq!(rotated.y, 0.0);
}

#[test]
fn vector_chained_in_place() {
    let mut v = Vector::<f64>::new(0.0, 5.0);
    v.normalize().rotate(-FRAC_PI_2);
    assert_approx_eq!(v.x, 1.0);
    assert_approx_eq!(v.y, 0.0);
}

#[test]
fn vector_equality() {
    let v = Vector::<f32>::new(1.0, 2.0);
    assert_eq!(v, Vector::<f32>::new(1.0, 2.0));
    assert_eq!(v, Vector::<i32>::new(1, 2));
    assert_ne!(v, Vector::<f32>::new(1.0, 2.5));
    assert_ne!(v, Vector::<f32>::new(1.5, 2.0));
    assert_ne!(v, Vector::<f32>::new(-1.0, -2.0));
    assert_eq!(
        Vector::<f32>::new(0.1 + 0.2, 0.0),
        Vector::<f32>::new(0.3, 0.0)
    );
}

#[test]
fn vector_equality_symmetric() {
    let int = Vector::<i32>::new(1, 2);
    let float = Vector::<f32>::new(1.5, 2.0);
    assert_ne!(int, float);
    assert_ne!(float, int);
    let unsigned = Vector::<u8>::new(255, 0);
    let signed = Vector::<i32>::new(-1, 0);
    assert_ne!(unsigned, signed);
    assert_ne!(signed, unsigned);
    assert_eq!(int == float, float == int);
    assert_eq!(Vector::<f64>::new(1.0, 2.0), int);
    assert_eq!(int, Vector::<f64>::new(1.0, 2.0));
}

#[test]
fn vector_sum_vector() {
    let v1 = Vector::<f32>::new(1.0, 2.0);
    let v2 = Vector::<f32>::new(4.0, -5.0);
    let res = v1 + v2;
    assert_eq!(res.x, 5.0);
    assert_eq!(res.y, -3.0);
    let by_ref = &v1 + &v2;
    assert_eq!(by_ref.x, 5.0);
    assert_eq!(by_ref.y, -3.0);
}

#[test]
fn vector_sum_mixed_types() {
    let v1 = Vector::<i32>::new(1, 2);
    let v2 = Vector::<f64>::new(0.9, 0.9);
    let res = v1 + v2;
    assert_eq!(res.x, 1);
    assert_eq!(res.y, 2);
    let res2 = v2 + v1;
    assert_approx_eq!(res2.x, 1.9);
    assert_approx_eq!(res2.y, 2.9);
}

#[test]
fn vector_sum_assign() {
    let mut v1 = Vector::<f32>::new(1.0, 2.0);
    v1 += Vector::<i8>::new(4, -5);
    assert_eq!(v1.x, 5.0);
    assert_eq!(v1.y, -3.0);
    v1 += &Vector::<f32>::new(1.0, 1.0);
    assert_eq!(v1.x, 6.0);
    assert_eq!(v1.y, -2.0);
}

#[test]
fn vector_sub_vector() {
    let v1 = Vector::<f32>::new(1.0, 2.0);
    let v2 = Vector::<f32>::new(4.0, -5.0);
    let res = v1 - v2;
    assert_eq!(res.x, -3.0);
    assert_eq!(res.y, 7.0);
}

#[test]
fn vector_sub_assign() {
    let mut v1 = Vector::<f32>::new(1.0, 2.0);
    v1 -= Vector::<f32>::new(4.0, -5.0);
    assert_eq!(v1.x, -3.0);
    assert_eq!(v1.y, 7.0);
}

#[test]
fn vector_mul_scalar() {
    let v = Vector::<f32>::new(1.0, -2.0);
    let res = v * 3;
    assert_eq!(res.x, 3.0);
    assert_eq!(res.y, -6.0);
    let by_ref = &v * 0.5;
    assert_eq!(by_ref.x, 0.5);
    assert_eq!(by_ref.y, -1.0);
}

#[test]
fn vector_mul_assign() {
    let mut v = Vector::<i32>::new(1, -2);
    v *= 2.9;
    assert_eq!(v.x, 2);
    assert_eq!(v.y, -4);
}

#[test]
fn vector_div_scalar() {
    let v = Vector::<f64>::new(3.0, -6.0);
    let res = v / 2;
    assert_eq!(res.x, 1.5);
    assert_eq!(res.y, -3.0);
}

#[test]
fn vector_div_assign() {
    let mut v = Vector::<f64>::new(3.0, -6.0);
    v /= 3.0;
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, -2.0);
}

#[test]
fn vector_div_zero_float() {
    let v = Vector::<f32>::new(1.0, -1.0);
    let res = v / 0.0;
    assert!(res.x.is_infinite() && res.x > 0.0);
    assert!(res.y.is_infinite() && res.y < 0.0);
}

#[test]
fn vector_checked_div() {
    let v = Vector::<i32>::new(4, 8);
    let half = v.checked_div(2).unwrap();
    assert_eq!(half.x, 2);
    assert_eq!(half.y, 4);
    assert_eq!(v.checked_div(0).err(), Some(GeometryError::DivisionByZero));
    // 0.5 truncates to zero when converted to the receiver type
    assert_eq!(v.checked_div(0.5).err(), Some(GeometryError::DivisionByZero));
}

#[test]
fn vector_neg() {
    let v = Vector::<f32>::new(1.0, -2.0);
    let res = -v;
    assert_eq!(res.x, -1.0);
    assert_eq!(res.y, 2.0);
    let by_ref = -&v;
    assert_eq!(by_ref.x, -1.0);
}

#[test]
fn vector_display() {
    let v = Vector::<i32>::new(3, -4);
    assert_eq!(format!("{}", v), "Vector[3, -4]");
}
