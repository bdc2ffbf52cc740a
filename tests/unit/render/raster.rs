use super::*;

fn res(w: u32, h: u32) -> Resolution {
    Resolution::new(w, h).unwrap()
}

#[test]
fn empty_fill_list_is_transparent() {
    let out = rasterize(res(8, 8), &[]).unwrap();
    assert!(out.is_fully_transparent());
}

#[test]
fn rect_fill_covers_its_interior_only() {
    let rect = kurbo::Rect::new(2.0, 2.0, 6.0, 6.0);
    let out = rasterize(res(8, 8), &[PathFill::shape(&rect, [255, 0, 0, 255])]).unwrap();
    assert_eq!(out.pixel(3, 3), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(out.pixel(7, 7), Some([0, 0, 0, 0]));
}

#[test]
fn later_fills_win() {
    let rect = kurbo::Rect::new(0.0, 0.0, 4.0, 4.0);
    let out = rasterize(
        res(4, 4),
        &[
            PathFill::shape(&rect, [255, 0, 0, 255]),
            PathFill::shape(&rect, [0, 0, 255, 255]),
        ],
    )
    .unwrap();
    assert_eq!(out.pixel(1, 1), Some([0, 0, 255, 255]));
}

#[test]
fn stroke_produces_visible_outline() {
    let mut line = BezPath::new();
    line.move_to((0.0, 5.0));
    line.line_to((10.0, 5.0));
    let out = rasterize(res(10, 10), &[PathFill::stroke(&line, 4.0, [0, 255, 0, 255])]).unwrap();
    assert_eq!(out.pixel(5, 5).map(|p| p[1]), Some(255));
    assert_eq!(out.pixel(5, 0), Some([0, 0, 0, 0]));
}

#[test]
fn oversized_canvas_is_rejected() {
    assert!(matches!(
        rasterize(res(70_000, 1), &[]),
        Err(MotionError::Render(_))
    ));
}
