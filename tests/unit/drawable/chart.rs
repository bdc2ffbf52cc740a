use super::*;

#[test]
fn mismatched_lengths_are_rejected() {
    let err = BarGraph::new([0, 0], [400, 300], &["a", "b"], &[1, 2, 3], None).unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));

    let colors = [[255, 0, 0, 255]];
    let err = BarGraph::new([0, 0], [400, 300], &["a", "b"], &[1, 2], Some(&colors)).unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));

    assert!(BarGraph::new([0, 0], [400, 300], &[], &[], None).is_err());
}

#[test]
fn generated_colors_are_stable_and_opaque() {
    let a = category_color("apples");
    assert_eq!(a, category_color("apples"));
    assert_eq!(a[3], 255);

    let g = BarGraph::new([0, 0], [400, 300], &["apples", "pears"], &[10, 20], None).unwrap();
    assert_eq!(g.colors[0].evaluate_rgba8(0), a);
}

#[test]
fn one_fill_per_nonzero_bar_plus_axes() {
    let mut g = BarGraph::new([0, 0], [400, 300], &["a", "b", "c"], &[10, 0, 30], None).unwrap();
    assert_eq!(g.fills(0).len(), 4);

    g.values[1].keyframe(0, 0).keyframe(50, 10);
    assert_eq!(g.fills(10).len(), 5);

    g.axis_width = Property::new(0);
    assert_eq!(g.fills(10).len(), 3);
}
