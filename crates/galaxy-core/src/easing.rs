/// Quadratic ease-out: fast start, decelerating into 1.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - clamp01(t);
    1.0 - inv * inv
}

#[inline]
pub fn clamp01(t: f32) -> f32 {
    // NaN collapses to 0 rather than propagating into positions
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
