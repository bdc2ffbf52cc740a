use super::*;

fn res() -> Resolution {
    Resolution::new(8, 8).unwrap()
}

fn square() -> Drawable {
    Drawable::new(Rect::new([0, 0], [8, 8], [255, 255, 255, 255]))
}

#[test]
fn hidden_drawable_is_transparent_at_full_size() {
    let mut d = square();
    d.visible.keyframe(false, 5);
    assert!(d.visible_at(0));
    assert!(!d.visible_at(5));

    let out = d.render(res(), 5).unwrap();
    assert_eq!(out, FrameRGBA::transparent(res()));
}

#[test]
fn modifiers_apply_in_order_and_respect_enabled() {
    let mut dim = Modifier::hsva(0.0, 1.0, 0.5, 1.0);
    dim.enabled.keyframe(false, 3);
    let d = square().with_modifier(dim).with_modifier(Modifier::hsva(0.0, 1.0, 1.0, 0.5));

    let on = d.render(res(), 0).unwrap();
    assert_eq!(on.pixel(0, 0), Some([64, 64, 64, 128]));

    let off = d.render(res(), 3).unwrap();
    assert_eq!(off.pixel(0, 0), Some([128, 128, 128, 128]));
}

#[test]
fn every_kind_converts_into_a_drawable() {
    let d: Drawable = Line::new([0, 0], [7, 7], 1, [1, 2, 3, 255]).into();
    assert!(matches!(d.kind, DrawableKind::Line(_)));
    assert_eq!(d.kind.name(), "line");
    let d: Drawable = CircularArc::new([4, 4], 3, 0.0, 90.0, 1, [1, 2, 3, 255]).into();
    assert!(matches!(d.kind, DrawableKind::Arc(_)));
}
