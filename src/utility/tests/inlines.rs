use crate::utility::{abs, abs_diff, approx_eq, deg, float_eq, pi, rad, sqr};
use assert_approx_eq::assert_approx_eq;
use std::f64::consts::PI;

#[test]
fn inlines_pi() {
    assert_eq!(pi::<f64>(), PI);
    assert_eq!(pi::<f32>(), std::f32::consts::PI);
    assert_eq!(pi::<i32>(), 3);
    assert_eq!(pi::<u8>(), 3);
}

#[test]
fn inlines_abs() {
    assert_eq!(abs(-5), 5);
    assert_eq!(abs(5), 5);
    assert_eq!(abs(-0.25), 0.25);
    assert_eq!(abs(0.0_f32), 0.0);
    assert_eq!(abs(200_u8), 200);
    assert_eq!(abs(i64::MIN + 1), i64::MAX);
}

#[test]
fn inlines_abs_diff() {
    assert_eq!(abs_diff(3, 10), 7);
    assert_eq!(abs_diff(10, 3), 7);
    assert_eq!(abs_diff(3_u32, 10_u32), 7);
    assert_eq!(abs_diff(-2.5, 2.5), 5.0);
}

#[test]
fn inlines_sqr() {
    assert_eq!(sqr(3), 9);
    assert_eq!(sqr(-3), 9);
    assert_eq!(sqr(0.5), 0.25);
}

#[test]
fn inlines_rad() {
    let r: f64 = rad(180);
    assert_eq!(r, PI);
    let r: f32 = rad(90.0_f64);
    assert_approx_eq!(r, std::f32::consts::FRAC_PI_2);
    let r: f64 = rad(0_u8);
    assert_eq!(r, 0.0);
}

#[test]
fn inlines_deg() {
    let d: f64 = deg(PI);
    assert_eq!(d, 180.0);
    let d: i32 = deg(std::f64::consts::FRAC_PI_2);
    assert_eq!(d, 90);
    let d: f32 = deg(-PI);
    assert_eq!(d, -180.0);
}

#[test]
fn inlines_deg_rad_round_trip() {
    let values = [0.0, 1.0, -1.0, 45.0, 90.0, 359.99, -720.5, 1e6, 0.001];
    for &value in values.iter() {
        let there: f64 = rad(value);
        let back: f64 = deg(there);
        assert_approx_eq!(back, value, 1e-6);
        let there: f64 = deg(value);
        let back: f64 = rad(there);
        assert_approx_eq!(back, value, 1e-6);
    }
}

#[test]
fn inlines_float_eq_exact() {
    assert!(float_eq(0.0, 0.0, 1E-5));
}

#[test]
fn inlines_float_eq_inexact() {
    let a = 0.3_f32;
    let errored = a + f32::EPSILON;
    assert_ne!(a, errored);
    assert!(float_eq(a, errored, 1E-5));
    assert!(!float_eq(a, errored, 1E-16));
}

#[test]
fn inlines_float_eq_negative_epsilon() {
    assert!(!float_eq(1.0, 1.0, -1.0));
}

#[test]
fn inlines_approx_eq_mixed_types() {
    assert!(approx_eq(3_i32, 3.0_f64));
    assert!(approx_eq(3.0_f64, 3_i32));
    assert!(!approx_eq(1_i32, 1.5_f32));
    assert!(!approx_eq(1.5_f32, 1_i32));
    assert!(!approx_eq(255_u8, -1_i32));
    assert!(!approx_eq(-1_i32, 255_u8));
    assert!(approx_eq(0.1_f32 + 0.2_f32, 0.3_f64));
    assert!(!approx_eq(0.1_f64, 0.1001_f64));
}
