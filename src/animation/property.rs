use crate::animation::interp::Interp;
use crate::foundation::error::{MotionError, MotionResult};

/// Value kinds a [`Property`] can hold.
///
/// Each kind declares which interpolations it accepts; anything else is rejected when the keyframe
/// is inserted.
pub trait PropValue: Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable kind name used in validation messages.
    const KIND: &'static str;

    /// Interpolations accepted by [`Property::keyframe_with`].
    fn allowed_interps() -> &'static [Interp];

    /// Interpolation used by [`Property::keyframe`].
    fn default_interp() -> Interp;

    /// Blend `a` toward `b` with eased progress `t` and cast back to this kind.
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self;
}

const NUMERIC_INTERPS: &[Interp] = &[Interp::Constant, Interp::Linear, Interp::Parabolic];
const DISCRETE_INTERPS: &[Interp] = &[Interp::Constant];

impl PropValue for bool {
    const KIND: &'static str = "bool";

    fn allowed_interps() -> &'static [Interp] {
        DISCRETE_INTERPS
    }

    fn default_interp() -> Interp {
        Interp::Constant
    }

    fn interpolate(a: &Self, _b: &Self, _t: f64) -> Self {
        *a
    }
}

impl PropValue for String {
    const KIND: &'static str = "string";

    fn allowed_interps() -> &'static [Interp] {
        DISCRETE_INTERPS
    }

    fn default_interp() -> Interp {
        Interp::Constant
    }

    fn interpolate(a: &Self, _b: &Self, _t: f64) -> Self {
        a.clone()
    }
}

impl PropValue for i64 {
    const KIND: &'static str = "int";

    fn allowed_interps() -> &'static [Interp] {
        NUMERIC_INTERPS
    }

    fn default_interp() -> Interp {
        Interp::Linear
    }

    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        let a = *a as f64;
        let b = *b as f64;
        // Truncation toward zero.
        (a + (b - a) * t) as i64
    }
}

impl PropValue for f64 {
    const KIND: &'static str = "float";

    fn allowed_interps() -> &'static [Interp] {
        NUMERIC_INTERPS
    }

    fn default_interp() -> Interp {
        Interp::Linear
    }

    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// One anchor on a property timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub frame: i64,
    pub value: T,
    /// Interpolation toward the next keyframe.
    pub interp: Interp,
}

/// A time-varying attribute evaluated from sparse keyframes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Property<T> {
    default: T,
    keys: Vec<Keyframe<T>>, // sorted by frame, unique frames
}

impl<T: PropValue> Property<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            keys: Vec::new(),
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// Insert (or replace) a keyframe using the kind's default interpolation.
    pub fn keyframe(&mut self, value: T, frame: i64) -> &mut Self {
        self.insert(Keyframe {
            frame,
            value,
            interp: T::default_interp(),
        });
        self
    }

    /// Insert (or replace) a keyframe with an explicit interpolation.
    pub fn keyframe_with(
        &mut self,
        value: T,
        frame: i64,
        interp: Interp,
    ) -> MotionResult<&mut Self> {
        check_interp::<T>(interp)?;
        self.insert(Keyframe {
            frame,
            value,
            interp,
        });
        Ok(self)
    }

    fn insert(&mut self, key: Keyframe<T>) {
        match self.keys.binary_search_by_key(&key.frame, |k| k.frame) {
            Ok(i) => self.keys[i] = key,
            Err(i) => self.keys.insert(i, key),
        }
    }

    /// Value at `frame`, clamped to the first/last keyframe outside the keyed range.
    pub fn evaluate(&self, frame: i64) -> T {
        let Some(first) = self.keys.first() else {
            return self.default.clone();
        };
        let idx = self.keys.partition_point(|k| k.frame <= frame);

        if idx == 0 {
            return first.value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        if a.interp == Interp::Constant || frame == a.frame {
            return a.value.clone();
        }

        let span = (b.frame - a.frame) as f64;
        let t = ((frame - a.frame) as f64) / span;
        T::interpolate(&a.value, &b.value, a.interp.apply(t))
    }
}

pub(crate) fn check_interp<T: PropValue>(interp: Interp) -> MotionResult<()> {
    if T::allowed_interps().contains(&interp) {
        Ok(())
    } else {
        Err(MotionError::validation(format!(
            "interpolation {interp:?} is not allowed for {} properties",
            T::KIND
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/property.rs"]
mod tests;
