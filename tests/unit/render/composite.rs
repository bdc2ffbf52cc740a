use super::*;

#[test]
fn over_opaque_src_replaces_dst() {
    let out = over([10, 20, 30, 255], [1, 2, 3, 255], 1.0);
    assert_eq!(out, [1, 2, 3, 255]);
}

#[test]
fn over_transparent_src_keeps_dst() {
    let out = over([10, 20, 30, 255], [0, 0, 0, 0], 1.0);
    assert_eq!(out, [10, 20, 30, 255]);
    let out = over([10, 20, 30, 255], [200, 200, 200, 255], 0.0);
    assert_eq!(out, [10, 20, 30, 255]);
}

#[test]
fn over_half_opacity_blends() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 255], 0.5);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 128).abs() <= 1);
}

#[test]
fn later_layers_paint_over_earlier() {
    let res = Resolution::new(1, 1).unwrap();
    let mut dst = FrameRGBA::transparent(res);
    paint_over(&mut dst, &FrameRGBA::filled(res, [255, 0, 0, 255]), 1.0).unwrap();
    paint_over(&mut dst, &FrameRGBA::filled(res, [0, 0, 255, 255]), 1.0).unwrap();
    assert_eq!(dst.pixel(0, 0), Some([0, 0, 255, 255]));
}

#[test]
fn paint_over_rejects_size_mismatch() {
    let mut dst = FrameRGBA::transparent(Resolution::new(2, 2).unwrap());
    let src = FrameRGBA::transparent(Resolution::new(1, 1).unwrap());
    assert!(paint_over(&mut dst, &src, 1.0).is_err());
}

#[test]
fn place_scaled_identity_size_translates() {
    let res = Resolution::new(4, 4).unwrap();
    let mut src = FrameRGBA::transparent(res);
    src.data[0..4].copy_from_slice(&[9, 9, 9, 255]);
    let out = place_scaled(&src, res, 1, 2, 4, 4).unwrap();
    assert_eq!(out.pixel(1, 2), Some([9, 9, 9, 255]));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn place_scaled_shrinks_into_rect_and_clips() {
    let res = Resolution::new(8, 8).unwrap();
    let src = FrameRGBA::filled(res, [0, 255, 0, 255]);
    let out = place_scaled(&src, res, 6, 6, 4, 4).unwrap();
    assert_eq!(out.pixel(7, 7), Some([0, 255, 0, 255]));
    assert_eq!(out.pixel(5, 5), Some([0, 0, 0, 0]));

    let empty = place_scaled(&src, res, 0, 0, 0, 5).unwrap();
    assert!(empty.is_fully_transparent());
}

#[test]
fn place_scaled_upscales_small_source_onto_larger_canvas() {
    let small = FrameRGBA::filled(Resolution::new(2, 2).unwrap(), [255, 255, 255, 255]);
    let out = place_scaled(&small, Resolution::new(10, 10).unwrap(), 2, 2, 6, 6).unwrap();
    assert_eq!(out.width, 10);
    assert_eq!(out.pixel(4, 4), Some([255, 255, 255, 255]));
    assert_eq!(out.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(out.pixel(8, 8), Some([0, 0, 0, 0]));
}
