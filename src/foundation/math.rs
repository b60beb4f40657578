use crate::foundation::core::Rgba8;

/// Lightens `c` toward white by `factor` (0 = unchanged, 1 = white). Alpha is kept.
pub fn blend(c: Rgba8, factor: f64) -> Rgba8 {
    c.map_rgb(|v| {
        let v = f64::from(v);
        (v + (255.0 - v) * factor).clamp(0.0, 255.0) as u8
    })
}

/// Linear interpolation between two channels, truncated toward zero.
pub fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) * (1.0 - t) + f64::from(b) * t).clamp(0.0, 255.0) as u8
}

pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// `trunc(v * factor)`; the shape math truncates every float product toward zero.
pub fn scale(v: i32, factor: f64) -> i32 {
    (f64::from(v) * factor) as i32
}

// Platform `f64::{sin,cos}` may differ in the last ulp across targets; libm does not.
pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

pub fn cos(x: f64) -> f64 {
    libm::cos(x)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
