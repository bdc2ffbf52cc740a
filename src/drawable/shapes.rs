use kurbo::{BezPath, Circle as KCircle, Ellipse as KEllipse, Point, Rect as KRect, Vec2};

use crate::animation::property::Property;
use crate::animation::vector::{ColorProperty, Vec2Property};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::raster::PathFill;

/// Fill color plus an optional outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    /// Border width in pixels; `<= 0` draws no border.
    pub width: Property<i64>,
    pub color: ColorProperty,
}

impl Outline {
    pub fn none() -> Self {
        Self {
            width: Property::new(0),
            color: ColorProperty::from_rgba8([0, 0, 0, 255]),
        }
    }

    pub fn new(width: i64, color: Rgba8) -> Self {
        Self {
            width: Property::new(width),
            color: ColorProperty::from_rgba8(color),
        }
    }

    fn push(&self, frame: i64, path: &BezPath, out: &mut Vec<PathFill>) {
        let width = self.width.evaluate(frame);
        if width > 0 {
            out.push(PathFill::stroke(
                path,
                width as f64,
                self.color.evaluate_rgba8(frame),
            ));
        }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub loc: Vec2Property,
    pub size: Vec2Property,
    pub color: ColorProperty,
    pub border: Outline,
}

impl Rect {
    pub fn new(loc: [i64; 2], size: [i64; 2], color: Rgba8) -> Self {
        Self {
            loc: Vec2Property::new(loc),
            size: Vec2Property::new(size),
            color: ColorProperty::from_rgba8(color),
            border: Outline::none(),
        }
    }

    pub fn with_border(mut self, border: Outline) -> Self {
        self.border = border;
        self
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let [x, y] = self.loc.evaluate(frame);
        let [w, h] = self.size.evaluate(frame);
        if w <= 0 || h <= 0 {
            return Vec::new();
        }
        let rect = KRect::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64);
        let mut out = vec![PathFill::shape(&rect, self.color.evaluate_rgba8(frame))];
        self.border.push(frame, &kurbo::Shape::to_path(&rect, 0.1), &mut out);
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2Property,
    pub radius: Property<i64>,
    pub color: ColorProperty,
    pub border: Outline,
}

impl Circle {
    pub fn new(center: [i64; 2], radius: i64, color: Rgba8) -> Self {
        Self {
            center: Vec2Property::new(center),
            radius: Property::new(radius),
            color: ColorProperty::from_rgba8(color),
            border: Outline::none(),
        }
    }

    pub fn with_border(mut self, border: Outline) -> Self {
        self.border = border;
        self
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let radius = self.radius.evaluate(frame);
        if radius <= 0 {
            return Vec::new();
        }
        let circle = KCircle::new(point(self.center.evaluate(frame)), radius as f64);
        let mut out = vec![PathFill::shape(&circle, self.color.evaluate_rgba8(frame))];
        self.border.push(frame, &kurbo::Shape::to_path(&circle, 0.1), &mut out);
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Vec2Property,
    /// Horizontal and vertical radii.
    pub radii: Vec2Property,
    pub color: ColorProperty,
    pub border: Outline,
}

impl Ellipse {
    pub fn new(center: [i64; 2], radii: [i64; 2], color: Rgba8) -> Self {
        Self {
            center: Vec2Property::new(center),
            radii: Vec2Property::new(radii),
            color: ColorProperty::from_rgba8(color),
            border: Outline::none(),
        }
    }

    pub fn with_border(mut self, border: Outline) -> Self {
        self.border = border;
        self
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let [rx, ry] = self.radii.evaluate(frame);
        if rx <= 0 || ry <= 0 {
            return Vec::new();
        }
        let ellipse = KEllipse::new(
            point(self.center.evaluate(frame)),
            Vec2::new(rx as f64, ry as f64),
            0.0,
        );
        let mut out = vec![PathFill::shape(&ellipse, self.color.evaluate_rgba8(frame))];
        self.border
            .push(frame, &kurbo::Shape::to_path(&ellipse, 0.1), &mut out);
        out
    }
}

/// Closed polygon; every vertex is animated independently and shifted by `offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub verts: Vec<Vec2Property>,
    pub offset: Vec2Property,
    pub color: ColorProperty,
    pub border: Outline,
}

impl Polygon {
    pub fn new(verts: &[[i64; 2]], color: Rgba8) -> MotionResult<Self> {
        if verts.len() < 3 {
            return Err(MotionError::validation(format!(
                "polygon needs at least 3 vertices, got {}",
                verts.len()
            )));
        }
        Ok(Self {
            verts: verts.iter().map(|&v| Vec2Property::new(v)).collect(),
            offset: Vec2Property::new([0, 0]),
            color: ColorProperty::from_rgba8(color),
            border: Outline::none(),
        })
    }

    pub fn with_border(mut self, border: Outline) -> Self {
        self.border = border;
        self
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let [ox, oy] = self.offset.evaluate(frame);
        let mut path = BezPath::new();
        for (i, v) in self.verts.iter().enumerate() {
            let [x, y] = v.evaluate(frame);
            let p = Point::new((x + ox) as f64, (y + oy) as f64);
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path.close_path();
        let mut out = vec![PathFill::new(path.clone(), self.color.evaluate_rgba8(frame))];
        self.border.push(frame, &path, &mut out);
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Vec2Property,
    pub end: Vec2Property,
    pub thickness: Property<i64>,
    pub color: ColorProperty,
}

impl Line {
    pub fn new(start: [i64; 2], end: [i64; 2], thickness: i64, color: Rgba8) -> Self {
        Self {
            start: Vec2Property::new(start),
            end: Vec2Property::new(end),
            thickness: Property::new(thickness),
            color: ColorProperty::from_rgba8(color),
        }
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let thickness = self.thickness.evaluate(frame);
        if thickness <= 0 {
            return Vec::new();
        }
        let mut path = BezPath::new();
        path.move_to(point(self.start.evaluate(frame)));
        path.line_to(point(self.end.evaluate(frame)));
        vec![PathFill::stroke(
            &path,
            thickness as f64,
            self.color.evaluate_rgba8(frame),
        )]
    }
}

/// Stroked circular arc. Angles are in degrees, clockwise from the positive x axis.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularArc {
    pub center: Vec2Property,
    pub radius: Property<i64>,
    pub start_angle: Property<f64>,
    pub sweep_angle: Property<f64>,
    pub thickness: Property<i64>,
    pub color: ColorProperty,
}

impl CircularArc {
    pub fn new(
        center: [i64; 2],
        radius: i64,
        start_angle: f64,
        sweep_angle: f64,
        thickness: i64,
        color: Rgba8,
    ) -> Self {
        Self {
            center: Vec2Property::new(center),
            radius: Property::new(radius),
            start_angle: Property::new(start_angle),
            sweep_angle: Property::new(sweep_angle),
            thickness: Property::new(thickness),
            color: ColorProperty::from_rgba8(color),
        }
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let radius = self.radius.evaluate(frame);
        let thickness = self.thickness.evaluate(frame);
        let sweep = self.sweep_angle.evaluate(frame);
        if radius <= 0 || thickness <= 0 || sweep == 0.0 {
            return Vec::new();
        }
        let r = radius as f64;
        let arc = kurbo::Arc::new(
            point(self.center.evaluate(frame)),
            Vec2::new(r, r),
            self.start_angle.evaluate(frame).to_radians(),
            sweep.to_radians(),
            0.0,
        );
        let path = kurbo::Shape::to_path(&arc, 0.1);
        vec![PathFill::stroke(
            &path,
            thickness as f64,
            self.color.evaluate_rgba8(frame),
        )]
    }
}

/// Line with a filled triangular head at `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub start: Vec2Property,
    pub end: Vec2Property,
    pub thickness: Property<i64>,
    /// Head length and width in pixels.
    pub head_size: Property<i64>,
    pub color: ColorProperty,
}

impl Arrow {
    pub fn new(start: [i64; 2], end: [i64; 2], thickness: i64, color: Rgba8) -> Self {
        Self {
            start: Vec2Property::new(start),
            end: Vec2Property::new(end),
            thickness: Property::new(thickness),
            head_size: Property::new(thickness.saturating_mul(4)),
            color: ColorProperty::from_rgba8(color),
        }
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let start = point(self.start.evaluate(frame));
        let end = point(self.end.evaluate(frame));
        let thickness = self.thickness.evaluate(frame);
        let head = self.head_size.evaluate(frame).max(0) as f64;
        let color = self.color.evaluate_rgba8(frame);

        let dir = end - start;
        let len = dir.hypot();
        if len == 0.0 {
            return Vec::new();
        }
        let unit = dir / len;
        let normal = Vec2::new(-unit.y, unit.x);
        let head = head.min(len);
        let base = end - unit * head;

        let mut out = Vec::new();
        if thickness > 0 && head < len {
            let mut shaft = BezPath::new();
            shaft.move_to(start);
            shaft.line_to(base);
            out.push(PathFill::stroke(&shaft, thickness as f64, color));
        }
        if head > 0.0 {
            let half = head / 2.0;
            let mut tip = BezPath::new();
            tip.move_to(end);
            tip.line_to(base + normal * half);
            tip.line_to(base - normal * half);
            tip.close_path();
            out.push(PathFill::new(tip, color));
        }
        out
    }
}

fn point([x, y]: [i64; 2]) -> Point {
    Point::new(x as f64, y as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/shapes.rs"]
mod tests;
