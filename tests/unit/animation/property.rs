use super::*;

fn linear_0_to_100() -> Property<i64> {
    let mut p = Property::new(0);
    p.keyframe_with(0, 0, Interp::Linear).unwrap();
    p.keyframe(100, 10);
    p
}

#[test]
fn zero_keyframes_evaluate_to_default() {
    let p = Property::new(42.5f64);
    for f in [-1000, -1, 0, 1, 7, 1_000_000] {
        assert_eq!(p.evaluate(f), 42.5);
    }
}

#[test]
fn linear_example_matches_expected_values() {
    let p = linear_0_to_100();
    assert_eq!(p.evaluate(5), 50);
    assert_eq!(p.evaluate(-5), 0);
    assert_eq!(p.evaluate(15), 100);
    assert_eq!(p.evaluate(0), 0);
    assert_eq!(p.evaluate(10), 100);
}

#[test]
fn clamps_outside_keyed_range() {
    let mut p = Property::new(-1.0f64);
    p.keyframe(3.0, 20).keyframe(9.0, 40);
    assert_eq!(p.evaluate(i64::MIN / 2), 3.0);
    assert_eq!(p.evaluate(20), 3.0);
    assert_eq!(p.evaluate(40), 9.0);
    assert_eq!(p.evaluate(41), 9.0);
}

#[test]
fn linear_is_monotonic_between_keys() {
    let mut p = Property::new(0.0f64);
    p.keyframe(10.0, 0).keyframe(-30.0, 17);
    let mut prev = p.evaluate(0);
    for f in 1..=17 {
        let v = p.evaluate(f);
        assert!(v <= prev);
        prev = v;
    }
    assert_eq!(prev, -30.0);
}

#[test]
fn constant_is_a_step_function() {
    let mut p = Property::new(0i64);
    p.keyframe_with(5, 10, Interp::Constant).unwrap();
    p.keyframe(50, 16);
    for n in 0..6 {
        assert_eq!(p.evaluate(10 + n), 5);
    }
    assert_eq!(p.evaluate(16), 50);
}

#[test]
fn integer_results_truncate() {
    let mut p = Property::new(0i64);
    p.keyframe(0, 0).keyframe(10, 3);
    // 10 * 1/3 = 3.33 -> 3
    assert_eq!(p.evaluate(1), 3);
    assert_eq!(p.evaluate(2), 6);

    let mut n = Property::new(0i64);
    n.keyframe(0, 0).keyframe(-10, 3);
    assert_eq!(n.evaluate(1), -3);
}

#[test]
fn parabolic_eases_between_keys() {
    let mut p = Property::new(0.0f64);
    p.keyframe_with(0.0, 0, Interp::Parabolic).unwrap();
    p.keyframe(100.0, 100);
    assert!(p.evaluate(10) < 10.0);
    assert!((p.evaluate(50) - 50.0).abs() < 1e-9);
    assert!(p.evaluate(90) > 90.0);
}

#[test]
fn disallowed_interpolation_fails_at_keyframe_time() {
    let mut b = Property::new(true);
    let err = b.keyframe_with(false, 3, Interp::Linear).unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
    assert!(b.keyframes().is_empty());

    let mut s = Property::new("a".to_string());
    assert!(s.keyframe_with("b".to_string(), 0, Interp::Parabolic).is_err());
    assert!(s.keyframe_with("b".to_string(), 0, Interp::Constant).is_ok());
}

#[test]
fn discrete_kinds_hold_values() {
    let mut b = Property::new(true);
    b.keyframe(false, 10).keyframe(true, 20);
    assert!(!b.evaluate(0));
    assert!(!b.evaluate(19));
    assert!(b.evaluate(20));

    let mut s = Property::new(String::from("idle"));
    s.keyframe("go".to_string(), 5);
    assert_eq!(s.evaluate(4), "go");
    assert_eq!(s.evaluate(100), "go");
}

#[test]
fn keyframes_stay_sorted_and_replace_same_frame() {
    let mut p = Property::new(0i64);
    p.keyframe(3, 30).keyframe(1, 10).keyframe(2, 20).keyframe(9, 10);
    let frames: Vec<i64> = p.keyframes().iter().map(|k| k.frame).collect();
    assert_eq!(frames, vec![10, 20, 30]);
    assert_eq!(p.evaluate(10), 9);
}

#[test]
fn evaluation_is_idempotent() {
    let p = linear_0_to_100();
    for f in -3..14 {
        assert_eq!(p.evaluate(f), p.evaluate(f));
    }
}

#[test]
fn keyframe_values_beyond_f64_precision_are_exact() {
    let big = (1i64 << 53) + 1;
    let mut p = Property::new(0i64);
    p.keyframe(big, 0).keyframe(0, 10).keyframe(5, 20);
    assert_eq!(p.evaluate(0), big);
    assert_eq!(p.evaluate(-3), big);
    assert_eq!(p.evaluate(10), 0);
    assert_eq!(p.evaluate(20), 5);

    let mut q = Property::new(0i64);
    q.keyframe_with(0, 0, Interp::Parabolic).unwrap();
    q.keyframe(big, 10);
    assert_eq!(q.evaluate(10), big);
}
