use crate::canvas::Canvas;
use crate::foundation::core::Point;
use crate::foundation::math::{blend, scale};
use crate::layers::Portrait;
use crate::raster::shapes::block;
use crate::seed::stream::ByteStream;

/// Upper band of a disk centered half a radius above the head center.
pub fn hair_cap(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let (c, r) = (p.center, p.radius);
    let height = scale(r, 0.55 + 0.1 * f64::from(stream.next_bounded(3)));
    let top = c.y - r;
    let cap_y = c.y - r / 2;
    for y in top..top + height {
        for x in c.x - r..=c.x + r {
            let (dx, dy) = (x - c.x, y - cap_y);
            if dx * dx + dy * dy <= r * r {
                canvas.set(x, y, p.traits.hair);
            }
        }
    }
}

/// Short vertical streaks in a lighter hair tone. Three draws per streak: x, y, length.
pub fn hair_strands(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let (c, r) = (p.center, p.radius);
    let color = blend(p.traits.hair, 0.2);
    let count = 8 + stream.next_bounded(6);
    for _ in 0..count {
        let x = c.x - r + stream.next_bounded(r * 2);
        let y = c.y - r + stream.next_bounded(r / 2);
        let length = r / 2 + stream.next_bounded(r / 2);
        for dy in 0..length {
            canvas.set(x, y + dy, color);
        }
    }
}

pub fn sideburns(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let (c, r) = (p.center, p.radius);
    let (width, height) = (r / 6, r / 2);
    let top = c.y - r / 4;
    let left_x = c.x - r + width;
    let right_x = c.x + r - width;
    block(canvas, Point::new(left_x, top), width, height, p.traits.hair);
    block(canvas, Point::new(right_x - width, top), width, height, p.traits.hair);
}

/// Elliptical tint over everything already painted (alpha != 0).
pub fn hood(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let (c, r) = (p.center, p.radius);
    let width = r * 2;
    let height = r + r / 2;
    let top = c.y - r;
    let tint = blend(p.traits.hood, 0.05);
    let rx2 = f64::from(width * width) / 4.0;
    let ry2 = f64::from(height * height) / 4.0;
    let hood_y = c.y - r / 3;
    for y in top..top + height {
        for x in c.x - width / 2..=c.x + width / 2 {
            let dx = f64::from(x - c.x);
            let dy = f64::from(y - hood_y);
            if (dx * dx) / rx2 + (dy * dy) / ry2 <= 1.0 {
                canvas.update(x, y, |px| if px.a != 0 { tint } else { px });
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/hair.rs"]
mod tests;
