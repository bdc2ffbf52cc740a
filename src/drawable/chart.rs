use kurbo::Rect as KRect;

use crate::animation::property::Property;
use crate::animation::vector::{ColorProperty, Vec2Property};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::Fnv1a64;
use crate::render::raster::PathFill;

/// Space reserved left of and below the plot area.
const AXIS_MARGIN: i64 = 100;
const BAR_SPACING: i64 = 5;

/// Vertical bar chart; one bar per category, heights in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGraph {
    /// Top-left corner of the chart area.
    pub loc: Vec2Property,
    pub size: Vec2Property,
    pub categories: Vec<Property<String>>,
    pub values: Vec<Property<i64>>,
    pub colors: Vec<ColorProperty>,
    /// Axis line width in pixels.
    pub axis_width: Property<i64>,
    pub axis_color: ColorProperty,
}

impl BarGraph {
    /// Build a chart. `colors = None` derives one stable color per category name.
    pub fn new(
        loc: [i64; 2],
        size: [i64; 2],
        categories: &[&str],
        values: &[i64],
        colors: Option<&[Rgba8]>,
    ) -> MotionResult<Self> {
        let colors: Vec<Rgba8> = match colors {
            Some(c) => c.to_vec(),
            None => categories.iter().map(|c| category_color(c)).collect(),
        };
        if categories.len() != values.len() || values.len() != colors.len() {
            return Err(MotionError::validation(format!(
                "bar graph needs equal lengths: {} categories, {} values, {} colors",
                categories.len(),
                values.len(),
                colors.len()
            )));
        }
        if categories.is_empty() {
            return Err(MotionError::validation("bar graph needs at least one category"));
        }

        Ok(Self {
            loc: Vec2Property::new(loc),
            size: Vec2Property::new(size),
            categories: categories
                .iter()
                .map(|c| Property::new((*c).to_string()))
                .collect(),
            values: values.iter().map(|&v| Property::new(v)).collect(),
            colors: colors.into_iter().map(ColorProperty::from_rgba8).collect(),
            axis_width: Property::new(4),
            axis_color: ColorProperty::from_rgba8([0, 0, 0, 255]),
        })
    }

    pub(crate) fn fills(&self, frame: i64) -> Vec<PathFill> {
        let [bx, by] = self.loc.evaluate(frame);
        let [width, height] = self.size.evaluate(frame);
        let n = self.values.len() as i64;
        let bar_w = (width - AXIS_MARGIN - n * BAR_SPACING) / n;
        let baseline = by + height - AXIS_MARGIN - BAR_SPACING;

        let mut out = Vec::with_capacity(self.values.len() + 2);
        if bar_w > 0 {
            for (i, (value, color)) in self.values.iter().zip(&self.colors).enumerate() {
                let v = value.evaluate(frame).max(0);
                if v == 0 {
                    continue;
                }
                let i = i as i64;
                let x = bx + AXIS_MARGIN + BAR_SPACING + i * (bar_w + BAR_SPACING);
                let bar = rect(x, baseline - v, bar_w, v);
                out.push(PathFill::shape(&bar, color.evaluate_rgba8(frame)));
            }
        }

        let axis = self.axis_width.evaluate(frame);
        if axis > 0 {
            let color = self.axis_color.evaluate_rgba8(frame);
            let y_axis = rect(bx + AXIS_MARGIN, by, axis, height - AXIS_MARGIN);
            let x_axis = rect(bx + AXIS_MARGIN, baseline, width - AXIS_MARGIN, axis);
            out.push(PathFill::shape(&y_axis, color));
            out.push(PathFill::shape(&x_axis, color));
        }
        out
    }
}

fn rect(x: i64, y: i64, w: i64, h: i64) -> KRect {
    KRect::new(x as f64, y as f64, (x + w.max(0)) as f64, (y + h.max(0)) as f64)
}

/// Opaque color derived from a category name; equal names give equal colors.
pub fn category_color(name: &str) -> Rgba8 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(name.as_bytes());
    let [r, g, b, ..] = h.finish().to_le_bytes();
    [r, g, b, 255]
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/chart.rs"]
mod tests;
