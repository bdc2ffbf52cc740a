use kurbo::{BezPath, Shape};
use tracing::trace;

use crate::foundation::core::{Resolution, Rgba8};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::frame::FrameRGBA;

const STROKE_TOLERANCE: f64 = 0.1;
const SHAPE_TOLERANCE: f64 = 0.1;

/// One filled path in device pixels.
#[derive(Clone, Debug)]
pub struct PathFill {
    pub path: BezPath,
    pub color: Rgba8,
}

impl PathFill {
    pub fn new(path: BezPath, color: Rgba8) -> Self {
        Self { path, color }
    }

    pub fn shape(shape: &impl Shape, color: Rgba8) -> Self {
        Self::new(shape.to_path(SHAPE_TOLERANCE), color)
    }

    /// Outline of `path` stroked with `width` pixels, as a fillable path.
    pub fn stroke(path: &BezPath, width: f64, color: Rgba8) -> Self {
        let style = kurbo::Stroke::new(width.max(0.0));
        let outline = kurbo::stroke(
            path.iter(),
            &style,
            &kurbo::StrokeOpts::default(),
            STROKE_TOLERANCE,
        );
        Self::new(outline, color)
    }
}

/// Fill `fills` in order onto a transparent canvas.
pub fn rasterize(res: Resolution, fills: &[PathFill]) -> MotionResult<FrameRGBA> {
    let (w, h) = dims_u16(res)?;
    if fills.is_empty() {
        return Ok(FrameRGBA::transparent(res));
    }

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.reset();
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    for fill in fills {
        if fill.color[3] == 0 {
            continue;
        }
        let [r, g, b, a] = fill.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_path(&bezpath_to_cpu(&fill.path));
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    trace!(fills = fills.len(), width = w, height = h, "rasterized paths");
    FrameRGBA::from_premul_bytes(res, pixmap.data_as_u8_slice().to_vec())
}

fn dims_u16(res: Resolution) -> MotionResult<(u16, u16)> {
    let w: u16 = res
        .width
        .try_into()
        .map_err(|_| MotionError::render("canvas width exceeds u16"))?;
    let h: u16 = res
        .height
        .try_into()
        .map_err(|_| MotionError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3))
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
