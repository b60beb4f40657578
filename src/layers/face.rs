use crate::canvas::Canvas;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{blend, scale};
use crate::layers::Portrait;
use crate::raster::shapes::{diamond, filled_circle, slanted_rect, span};
use crate::seed::stream::ByteStream;

pub const EYE_WHITE: Rgba8 = Rgba8::opaque(248, 248, 248);
pub const NOSE: Rgba8 = Rgba8::opaque(180, 120, 90);

pub fn head(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    filled_circle(canvas, p.center, p.radius, p.traits.skin);
}

pub fn head_highlight(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    filled_circle(canvas, p.at(-r / 3, r / 5), r / 6, p.traits.skin_highlight);
}

pub fn mask(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    let width = scale(r, 1.4);
    let height = r / 2;
    let start_y = p.center.y + r / 4;
    let (x0, x1) = (p.center.x - width / 2, p.center.x + width / 2);
    for y in start_y..start_y + height {
        span(canvas, y, x0, x1, p.traits.mask);
    }
    span(
        canvas,
        start_y + height / 2,
        x0,
        x1,
        blend(p.traits.mask, 0.15),
    );
}

/// White disks with pupils; one horizontal jitter shared by both eyes.
pub fn eyes(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let r = p.radius;
    let eye_radius = scale(r, 0.12);
    let pupil_radius = scale(eye_radius, 0.6);
    let shift = stream.next_bounded(3) - 1;

    let left = p.at(-r / 2 + shift, -r / 5);
    let right = p.at(r / 2 + shift, -r / 5);
    filled_circle(canvas, left, eye_radius, EYE_WHITE);
    filled_circle(canvas, right, eye_radius, EYE_WHITE);
    filled_circle(canvas, left, pupil_radius, p.traits.eye);
    filled_circle(canvas, right, pupil_radius, p.traits.eye);
}

pub fn iris_highlights(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let r = p.radius;
    let shift = stream.next_bounded(2);
    for side in [-1, 1] {
        let at = p.at(side * (r / 2) + shift, -r / 5 - shift);
        filled_circle(canvas, at, r / 12, p.traits.iris_highlight);
    }
}

/// Mirrored tilt: the right brow uses the negated slope.
pub fn eyebrows(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let r = p.radius;
    let tilt = stream.next_bounded(5) - 2;
    let (width, height) = (r / 2, r / 10);
    slanted_rect(canvas, p.at(-r / 2, -r / 3), width, height, tilt, p.traits.brow);
    slanted_rect(canvas, p.at(r / 2, -r / 3), width, height, -tilt, p.traits.brow);
}

pub fn nose(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let height = scale(p.radius, 0.25);
    for y in 0..height {
        let half = scale(height - y, 0.3);
        span(
            canvas,
            p.center.y + y / 2,
            p.center.x - half,
            p.center.x + half,
            NOSE,
        );
    }
}

pub fn blush(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    filled_circle(canvas, p.at(-r / 2, r / 6), r / 6, p.traits.blush);
    filled_circle(canvas, p.at(r / 2, r / 6), r / 6, p.traits.blush);
}

pub fn scar(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let r = p.radius;
    let length = r / 2;
    let start = p.at(-length / 2, -r / 6);
    let angle = f64::from(stream.next_bounded(5) - 2) * 0.2;
    for i in 0..length {
        canvas.set(start.x + i, start.y + scale(i, angle), p.traits.scar);
    }
}

/// A band bent along `curve * xf² * 1.2r`, `xf` in `[-1, 1]` across the mouth.
pub fn mouth(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let r = p.radius;
    let width = scale(r, 0.7);
    let curve = f64::from(stream.next_bounded(6) - 2) / 10.0;
    let base_y = f64::from(p.center.y) + f64::from(r) / 3.0;
    let thickness = scale(r, 0.08);
    let half = width / 2;

    for x in -half..=half {
        let xf = f64::from(x) / f64::from(half);
        let y = (base_y + curve * (xf * xf) * f64::from(r) * 1.2) as i32;
        for t in -thickness..=thickness {
            canvas.set(p.center.x + x, y + t, p.traits.mouth);
        }
    }
}

pub fn lip_shine(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    let (width, height) = (r / 3, r / 20);
    let start_y = p.center.y + r / 3;
    for y in 0..height {
        span(
            canvas,
            start_y + y,
            p.center.x - width / 2,
            p.center.x + width / 2,
            p.traits.lip,
        );
    }
}

/// Two wings with a one-pixel part at the center column.
pub fn mustache(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    let (width, height) = (r / 2, r / 8);
    let start_y = p.center.y + r / 6;
    for y in 0..height {
        for x in (-width..=width).filter(|&x| x != 0) {
            canvas.set(p.center.x + x, start_y + y, p.traits.hair);
        }
    }
}

/// Lower half-disk under the chin.
pub fn chin_shadow(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    let (width, height) = (r / 2, r / 4);
    let start_y = p.center.y + r / 2;
    for y in 0..height {
        for x in -width..=width {
            if x * x + y * y <= width * width {
                canvas.set(p.center.x + x, start_y + y, p.traits.shadow);
            }
        }
    }
}

pub fn forehead_mark(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let r = p.radius;
    diamond(canvas, Point::new(p.center.x, p.center.y - r / 2), r / 6, p.traits.mark);
}

#[cfg(test)]
#[path = "../../tests/unit/layers/face.rs"]
mod tests;
