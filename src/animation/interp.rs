/// Maximum slope of the parabolic ease, reached at `t = 0.5`.
///
/// `1.0` degenerates to linear; `2.0` is the steepest curve whose branches stay monotonic.
pub const PARABOLIC_MAX_SLOPE: f64 = 2.0;

/// Interpolation applied from a keyframe toward the next keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interp {
    /// Hold the keyframe value until the next keyframe.
    Constant,
    /// Straight-line interpolation.
    Linear,
    /// Symmetric ease-in/ease-out built from two quadratic branches.
    Parabolic,
}

impl Interp {
    /// Map normalized progress `t` in `[0, 1]` through this curve.
    ///
    /// `Constant` maps everything before the next keyframe to `0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Constant => 0.0,
            Self::Linear => t,
            Self::Parabolic => parabolic(t, PARABOLIC_MAX_SLOPE),
        }
    }
}

/// Two-branch quadratic ease with maximum slope `max_slope` (clamped to `[1, 2]`).
///
/// The rising branch `a*t^2 + b*t` covers `[0, 0.5]`; the falling branch mirrors it through
/// `(0.5, 0.5)`.
pub fn parabolic(t: f64, max_slope: f64) -> f64 {
    let m = max_slope.clamp(1.0, 2.0);
    let b = 2.0 - m;
    let a = 2.0 * m - 2.0;
    let rise = |u: f64| a * u * u + b * u;

    let t = t.clamp(0.0, 1.0);
    if t < 0.5 { rise(t) } else { 1.0 - rise(1.0 - t) }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
