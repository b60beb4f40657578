//! The accessory slot: exactly one variant per avatar, chosen by one draw.

use crate::canvas::Canvas;
use crate::foundation::math::blend;
use crate::layers::Portrait;
use crate::raster::shapes::{filled_circle, rect_outline, span};
use crate::seed::stream::ByteStream;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accessory {
    Glasses,
    Hat,
    Earrings,
    Freckles,
    Beard,
}

impl Accessory {
    /// Draw index → variant. Each entry has probability 1/5.
    pub const TABLE: [Accessory; 5] = [
        Accessory::Glasses,
        Accessory::Hat,
        Accessory::Earrings,
        Accessory::Freckles,
        Accessory::Beard,
    ];

    pub fn draw(stream: &mut ByteStream) -> Self {
        Self::TABLE[stream.next_bounded(Self::TABLE.len() as i32) as usize]
    }

    pub fn paint(self, canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
        match self {
            Accessory::Glasses => glasses(canvas, p, stream),
            Accessory::Hat => hat(canvas, p, stream),
            Accessory::Earrings => earrings(canvas, p),
            Accessory::Freckles => freckles(canvas, p, stream),
            Accessory::Beard => beard(canvas, p, stream),
        }
    }
}

pub fn accessory(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let variant = Accessory::draw(stream);
    tracing::debug!(?variant, "accessory");
    variant.paint(canvas, p, stream);
}

fn glasses(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let r = p.radius;
    let (lens_w, lens_h) = (r / 2, r / 3);
    let bridge = r / 8;
    let thickness = 2 + stream.next_bounded(2);
    let left = p.at(-r / 2, -r / 5);
    let right = p.at(r / 2, -r / 5);
    let frame = p.traits.accessory;

    rect_outline(canvas, left, lens_w, lens_h, thickness, frame);
    rect_outline(canvas, right, lens_w, lens_h, thickness, frame);
    let bridge_x = left.x + lens_w / 2;
    for x in bridge_x..bridge_x + bridge {
        for t in -thickness..=thickness {
            canvas.set(x, left.y + t, frame);
        }
    }
}

/// Dome on top of the head plus a flat brim.
fn hat(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let (c, r) = (p.center, p.radius);
    let height = r / 2 + stream.next_bounded(r / 4);
    let top = c.y - r - height / 3;
    let crown_y = c.y - r;
    for y in top..top + height {
        for x in c.x - r..=c.x + r {
            let (dx, dy) = (x - c.x, y - crown_y);
            if dx * dx + dy * dy <= r * r {
                canvas.set(x, y, p.traits.accessory);
            }
        }
    }

    let brim_w = r + r / 2;
    for y in crown_y..crown_y + r / 10 {
        span(
            canvas,
            y,
            c.x - brim_w / 2,
            c.x + brim_w / 2,
            p.traits.accessory,
        );
    }
}

fn earrings(canvas: &mut Canvas, p: &Portrait) {
    let r = p.radius;
    let (dx, dy) = (r * 5 / 6, r / 10);
    filled_circle(canvas, p.at(-dx, dy), r / 8, p.traits.accessory);
    filled_circle(canvas, p.at(dx, dy), r / 8, p.traits.accessory);
}

fn freckles(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let (c, r) = (p.center, p.radius);
    let color = blend(p.traits.skin, 0.4);
    let count = 6 + stream.next_bounded(8);
    for _ in 0..count {
        let x = c.x - r / 2 + stream.next_bounded(r);
        let y = c.y + stream.next_bounded(r / 3);
        canvas.set(x, y, color);
    }
}

fn beard(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let (c, r) = (p.center, p.radius);
    let height = r / 2 + stream.next_bounded(r / 4);
    let top = c.y + r / 4;
    let jaw_y = c.y + r / 3;
    for y in top..top + height {
        for x in c.x - r / 2..=c.x + r / 2 {
            let (dx, dy) = (x - c.x, y - jaw_y);
            if dx * dx + dy * dy <= r * r / 2 {
                canvas.set(x, y, p.traits.accessory);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/accessory.rs"]
mod tests;
