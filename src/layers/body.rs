use crate::canvas::Canvas;
use crate::foundation::core::Point;
use crate::layers::Portrait;
use crate::raster::shapes::{block, chevron, span, stripe};
use crate::seed::stream::ByteStream;

pub fn neck(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    let (width, height) = (r / 2, r / 2);
    let origin = Point::new(p.center.x - width / 2, p.center.y + r / 2);
    block(canvas, origin, width, height, p.traits.neck);
}

/// Trapezoid below the shoulders, widening by one pixel per side every two rows.
pub fn cape(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    let (width, height) = (r * 2, r);
    let start_y = p.center.y + r + r / 4;
    for y in start_y..start_y + height {
        let offset = (y - start_y) / 2;
        span(
            canvas,
            y,
            p.center.x - width / 2 - offset,
            p.center.x + width / 2 + offset,
            p.traits.cape,
        );
    }
}

/// Pattern drawn on the chest in the accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trim {
    Chevron,
    Stripe,
}

impl Trim {
    pub const TABLE: [Trim; 2] = [Trim::Chevron, Trim::Stripe];

    pub fn draw(stream: &mut ByteStream) -> Self {
        Self::TABLE[stream.next_bounded(Self::TABLE.len() as i32) as usize]
    }
}

pub fn shoulders(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let r = p.radius;
    let (width, height) = (r * 2, r / 2);
    let start_y = p.center.y + r;
    for y in start_y..start_y + height {
        span(
            canvas,
            y,
            p.center.x - width / 2,
            p.center.x + width / 2,
            p.traits.clothing,
        );
    }

    let at = Point::new(p.center.x, start_y + height / 3);
    match Trim::draw(stream) {
        Trim::Chevron => chevron(canvas, at, width / 2, height / 3, p.traits.accent),
        Trim::Stripe => stripe(canvas, at, width / 2, height / 3, p.traits.accent),
    }
}
