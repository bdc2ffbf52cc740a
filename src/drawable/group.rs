use crate::animation::vector::Vec2Property;
use crate::drawable::Drawable;
use crate::foundation::core::Resolution;
use crate::foundation::error::MotionResult;
use crate::render::composite::{paint_over, place_scaled};
use crate::render::frame::FrameRGBA;

/// Where a group's composed canvas lands in the output.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub loc: Vec2Property,
    pub size: Vec2Property,
}

/// Children rendered back to front onto one canvas.
///
/// Children are owned, so a group can never contain itself.
#[derive(Clone, Debug, Default)]
pub struct Group {
    children: Vec<Drawable>,
    /// `None` pastes the canvas unscaled at the origin.
    pub placement: Option<Placement>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: impl IntoIterator<Item = Drawable>) -> Self {
        Self {
            children: children.into_iter().collect(),
            placement: None,
        }
    }

    pub fn placed(mut self, loc: [i64; 2], size: [i64; 2]) -> Self {
        self.placement = Some(Placement {
            loc: Vec2Property::new(loc),
            size: Vec2Property::new(size),
        });
        self
    }

    pub fn push(&mut self, child: impl Into<Drawable>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Drawable] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Drawable] {
        &mut self.children
    }

    /// Composite every visible child onto a transparent canvas.
    pub(crate) fn compose(&self, res: Resolution, frame: i64) -> MotionResult<FrameRGBA> {
        let mut canvas = FrameRGBA::transparent(res);
        for child in &self.children {
            if !child.visible_at(frame) {
                continue;
            }
            let layer = child.render(res, frame)?;
            paint_over(&mut canvas, &layer, 1.0)?;
        }
        Ok(canvas)
    }

    /// Scale an already composed (and modified) canvas into the placement rectangle.
    pub(crate) fn place(&self, canvas: FrameRGBA, frame: i64) -> MotionResult<FrameRGBA> {
        let Some(placement) = &self.placement else {
            return Ok(canvas);
        };
        let [x, y] = placement.loc.evaluate(frame);
        let [w, h] = placement.size.evaluate(frame);
        place_scaled(&canvas, canvas.resolution(), x, y, w, h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/group.rs"]
mod tests;
