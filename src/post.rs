//! Whole-canvas passes that run after every feature layer.

use crate::canvas::Canvas;
use crate::foundation::core::Point;
use crate::foundation::math::clamp_channel;
use crate::seed::stream::ByteStream;

/// Darkens pixels farther than `radius` from `center`, capped at 60%. Alpha is kept.
pub fn vignette(canvas: &mut Canvas, center: Point, radius: i32) {
    let radius = f64::from(radius);
    canvas.for_each_mut(|x, y, px| {
        let dx = f64::from(x - center.x);
        let dy = f64::from(y - center.y);
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > radius {
            let keep = 1.0 - ((dist - radius) / radius).min(0.6);
            *px = px.map_rgb(|v| (f64::from(v) * keep) as u8);
        }
    });
}

/// `intensity²` single-pixel nudges of `[-2, 2]` on RGB, three draws each.
pub fn noise(canvas: &mut Canvas, stream: &mut ByteStream, intensity: i32) {
    if intensity <= 0 {
        return;
    }
    let side = canvas.side_i32();
    for _ in 0..intensity * intensity {
        let x = stream.next_bounded(side);
        let y = stream.next_bounded(side);
        let shift = stream.next_bounded(5) - 2;
        canvas.update(x, y, |px| px.map_rgb(|v| clamp_channel(i32::from(v) + shift)));
    }
}
