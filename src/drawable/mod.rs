//! Everything a scene can draw, plus the modifiers applied to it.

pub mod chart;
pub mod group;
pub mod media;
pub mod modifier;
pub mod shapes;
pub mod title;

use tracing::trace;

use crate::animation::property::Property;
use crate::foundation::core::Resolution;
use crate::foundation::error::MotionResult;
use crate::render::frame::FrameRGBA;
use crate::render::raster::{PathFill, rasterize};

pub use chart::BarGraph;
pub use group::{Group, Placement};
pub use media::{Image, RasterImage, RasterRequest, RasterSource, SharedRasterSource, Text, Video};
pub use modifier::{Modifier, ModifierKind};
pub use shapes::{Arrow, Circle, CircularArc, Ellipse, Line, Outline, Polygon, Rect};
pub use title::HorizontalTitle;

#[derive(Clone, Debug)]
pub enum DrawableKind {
    Rect(Rect),
    Circle(Circle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Line(Line),
    Arc(CircularArc),
    Arrow(Arrow),
    BarGraph(BarGraph),
    Text(Text),
    Image(Image),
    Video(Video),
    Group(Group),
}

impl DrawableKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Polygon(_) => "polygon",
            Self::Line(_) => "line",
            Self::Arc(_) => "arc",
            Self::Arrow(_) => "arrow",
            Self::BarGraph(_) => "bar_graph",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Video(_) => "video",
            Self::Group(_) => "group",
        }
    }

    fn vector_fills(&self, frame: i64) -> Option<Vec<PathFill>> {
        Some(match self {
            Self::Rect(s) => s.fills(frame),
            Self::Circle(s) => s.fills(frame),
            Self::Ellipse(s) => s.fills(frame),
            Self::Polygon(s) => s.fills(frame),
            Self::Line(s) => s.fills(frame),
            Self::Arc(s) => s.fills(frame),
            Self::Arrow(s) => s.fills(frame),
            Self::BarGraph(s) => s.fills(frame),
            Self::Text(_) | Self::Image(_) | Self::Video(_) | Self::Group(_) => return None,
        })
    }
}

/// A renderable element: visibility, modifier chain and the thing itself.
#[derive(Clone, Debug)]
pub struct Drawable {
    pub visible: Property<bool>,
    pub modifiers: Vec<Modifier>,
    pub kind: DrawableKind,
}

impl Drawable {
    pub fn new(kind: impl Into<DrawableKind>) -> Self {
        Self {
            visible: Property::new(true),
            modifiers: Vec::new(),
            kind: kind.into(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn add_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn visible_at(&self, frame: i64) -> bool {
        self.visible.evaluate(frame)
    }

    /// Render at `frame` into a `res`-sized premultiplied buffer.
    ///
    /// Hidden drawables yield a fully transparent buffer.
    pub fn render(&self, res: Resolution, frame: i64) -> MotionResult<FrameRGBA> {
        if !self.visible_at(frame) {
            return Ok(FrameRGBA::transparent(res));
        }

        let mut buf = match &self.kind {
            DrawableKind::Text(t) => t.render(res, frame)?,
            DrawableKind::Image(i) => i.render(res, frame)?,
            DrawableKind::Video(v) => v.render(res, frame)?,
            DrawableKind::Group(g) => g.compose(res, frame)?,
            kind => {
                let fills = kind.vector_fills(frame).unwrap_or_default();
                rasterize(res, &fills)?
            }
        };

        for modifier in &self.modifiers {
            if modifier.enabled_at(frame) {
                buf = modifier.apply(buf, frame)?;
            }
        }

        if let DrawableKind::Group(g) = &self.kind {
            buf = g.place(buf, frame)?;
        }
        trace!(kind = self.kind.name(), frame, "rendered drawable");
        Ok(buf)
    }
}

macro_rules! impl_into_drawable {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DrawableKind {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }

            impl From<$ty> for Drawable {
                fn from(v: $ty) -> Self {
                    Drawable::new(v)
                }
            }
        )*
    };
}

impl_into_drawable!(
    Rect => Rect,
    Circle => Circle,
    Ellipse => Ellipse,
    Polygon => Polygon,
    Line => Line,
    CircularArc => Arc,
    Arrow => Arrow,
    BarGraph => BarGraph,
    Text => Text,
    Image => Image,
    Video => Video,
    Group => Group,
);

#[cfg(test)]
#[path = "../../tests/unit/drawable/drawable.rs"]
mod tests;
