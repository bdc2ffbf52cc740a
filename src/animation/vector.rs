use crate::animation::interp::Interp;
use crate::animation::property::{PropValue, Property, check_interp};
use crate::foundation::error::{MotionError, MotionResult};

/// `N` same-kind properties keyframed together as one composite attribute.
///
/// Keyframes always land on every component at once.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorProperty<T, const N: usize> {
    components: [Property<T>; N],
}

/// Integer 2D point or size.
pub type Vec2Property = VectorProperty<i64, 2>;
/// Straight-alpha RGBA color with integer channels.
pub type ColorProperty = VectorProperty<i64, 4>;

impl<T: PropValue, const N: usize> VectorProperty<T, N> {
    pub fn new(defaults: [T; N]) -> Self {
        Self {
            components: defaults.map(Property::new),
        }
    }

    pub fn components(&self) -> &[Property<T>; N] {
        &self.components
    }

    pub fn keyframe(&mut self, values: [T; N], frame: i64) -> &mut Self {
        for (p, v) in self.components.iter_mut().zip(values) {
            p.keyframe(v, frame);
        }
        self
    }

    pub fn keyframe_with(
        &mut self,
        values: [T; N],
        frame: i64,
        interp: Interp,
    ) -> MotionResult<&mut Self> {
        check_interp::<T>(interp)?;
        for (p, v) in self.components.iter_mut().zip(values) {
            p.keyframe_with(v, frame, interp)?;
        }
        Ok(self)
    }

    /// Keyframe from a runtime-sized slice; the arity must equal `N`.
    pub fn keyframe_slice(
        &mut self,
        values: &[T],
        frame: i64,
        interp: Interp,
    ) -> MotionResult<&mut Self> {
        let values: [T; N] = values.to_vec().try_into().map_err(|v: Vec<T>| {
            MotionError::validation(format!(
                "vector property expects {N} components, got {}",
                v.len()
            ))
        })?;
        self.keyframe_with(values, frame, interp)
    }

    pub fn evaluate(&self, frame: i64) -> [T; N] {
        std::array::from_fn(|i| self.components[i].evaluate(frame))
    }
}

impl ColorProperty {
    /// Color property from a straight-alpha RGBA8 default.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(rgba.map(i64::from))
    }

    /// Evaluated color with channels clamped into `0..=255`.
    pub fn evaluate_rgba8(&self, frame: i64) -> [u8; 4] {
        self.evaluate(frame).map(crate::foundation::core::channel_u8)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/vector.rs"]
mod tests;
