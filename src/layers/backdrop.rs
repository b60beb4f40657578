//! Background gradient, the background accent slot and the frame border.

use std::f64::consts::PI;

use crate::canvas::Canvas;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{blend, cos, lerp_channel, sin};
use crate::layers::{Odds, Portrait};
use crate::raster::shapes::{filled_circle, hexagon_outline, line};
use crate::seed::stream::ByteStream;

const CORNER_TICK: i32 = 6;
const HEX_CELL: Odds = Odds::one_in(4);

/// Top-to-bottom blend from the background color to the accent, fully opaque.
pub fn gradient(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let (base, accent) = (p.traits.background, p.traits.accent);
    let side = canvas.side_i32();
    for y in 0..side {
        let t = f64::from(y) / f64::from(side);
        let row = Rgba8::opaque(
            lerp_channel(base.r, accent.r, t),
            lerp_channel(base.g, accent.g, t),
            lerp_channel(base.b, accent.b, t),
        );
        for x in 0..side {
            canvas.set(x, y, row);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropAccent {
    OrbitRings,
    Stars,
    HexGrid,
    CircuitTrace,
    Constellation,
    Aurora,
}

impl BackdropAccent {
    pub const TABLE: [BackdropAccent; 6] = [
        BackdropAccent::OrbitRings,
        BackdropAccent::Stars,
        BackdropAccent::HexGrid,
        BackdropAccent::CircuitTrace,
        BackdropAccent::Constellation,
        BackdropAccent::Aurora,
    ];

    pub fn draw(stream: &mut ByteStream) -> Self {
        Self::TABLE[stream.next_bounded(Self::TABLE.len() as i32) as usize]
    }

    pub fn paint(self, canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
        let (c, r, accent) = (p.center, p.radius, p.traits.accent);
        match self {
            BackdropAccent::OrbitRings => orbit_rings(canvas, c, r, accent),
            BackdropAccent::Stars => stars(canvas, r, accent, stream),
            BackdropAccent::HexGrid => hex_grid(canvas, c, r, accent, stream),
            BackdropAccent::CircuitTrace => circuit_trace(canvas, c, r, accent, stream),
            BackdropAccent::Constellation => constellation(canvas, c, r, accent, stream),
            BackdropAccent::Aurora => aurora(canvas, c, r, accent, stream),
        }
    }
}

pub fn accent(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    let variant = BackdropAccent::draw(stream);
    tracing::debug!(?variant, "background accent");
    variant.paint(canvas, p, stream);
}

/// Flattened ellipse sampled every π/64.
fn orbit_rings(canvas: &mut Canvas, c: Point, r: i32, accent: Rgba8) {
    let ring = f64::from(r + r / 2);
    let mut angle = 0.0f64;
    // The sample count depends on float rounding of the accumulated angle.
    while angle < 2.0 * PI {
        let x = c.x + (ring * cos(angle)) as i32;
        let y = c.y + (ring * sin(angle) * 0.5) as i32;
        canvas.set(x, y, accent);
        angle += PI / 64.0;
    }
}

fn stars(canvas: &mut Canvas, r: i32, accent: Rgba8, stream: &mut ByteStream) {
    let count = 12 + stream.next_bounded(10);
    for _ in 0..count {
        let x = stream.next_bounded(r * 2) + r / 2;
        let y = stream.next_bounded(r * 2) + r / 2;
        canvas.set(x, y, accent);
    }
}

/// Stepped lattice with odd rows shifted half a cell; each cell rolls its own draw.
fn hex_grid(canvas: &mut Canvas, c: Point, r: i32, accent: Rgba8, stream: &mut ByteStream) {
    let step = (r / 3).max(1);
    for y in (c.y - r..=c.y + r).step_by(step as usize) {
        let shift = if ((y - c.y) / step) % 2 != 0 { step / 2 } else { 0 };
        for x in (c.x - r..=c.x + r).step_by(step as usize) {
            if HEX_CELL.roll(stream) {
                hexagon_outline(canvas, Point::new(x + shift, y), step / 3, accent);
            }
        }
    }
}

/// Random walks; a walk ends early once it steps off the canvas.
fn circuit_trace(canvas: &mut Canvas, c: Point, r: i32, accent: Rgba8, stream: &mut ByteStream) {
    let count = 4 + stream.next_bounded(4);
    for _ in 0..count {
        let x = c.x - r + stream.next_bounded(r * 2);
        let y = c.y - r + stream.next_bounded(r * 2);
        let length = r / 2 + stream.next_bounded(r / 2);
        let mut at = Point::new(x, y);
        for _ in 0..length {
            canvas.set(at.x, at.y, accent);
            at = match stream.next_bounded(4) {
                0 => at.offset(1, 0),
                1 => at.offset(-1, 0),
                2 => at.offset(0, 1),
                _ => at.offset(0, -1),
            };
            if !canvas.contains(at.x, at.y) {
                break;
            }
        }
    }
}

/// Nodes joined in a closed ring, each capped by a small dot.
fn constellation(canvas: &mut Canvas, c: Point, r: i32, accent: Rgba8, stream: &mut ByteStream) {
    let nodes = 6 + stream.next_bounded(4);
    let points: Vec<Point> = (0..nodes)
        .map(|_| {
            let x = c.x - r + stream.next_bounded(r * 2);
            let y = c.y - r + stream.next_bounded(r * 2);
            Point::new(x, y)
        })
        .collect();
    for (i, &from) in points.iter().enumerate() {
        line(canvas, from, points[(i + 1) % points.len()], accent);
        filled_circle(canvas, from, 1 + stream.next_bounded(2), accent);
    }
}

fn aurora(canvas: &mut Canvas, c: Point, r: i32, accent: Rgba8, stream: &mut ByteStream) {
    let bands = 3 + stream.next_bounded(3);
    let glow = blend(accent, 0.3);
    let side = canvas.side_i32();
    for _ in 0..bands {
        let offset = stream.next_bounded(r) - r / 2;
        for x in c.x - r..=c.x + r {
            let wave = sin(f64::from(x + offset) / f64::from(r)) * f64::from(r) / 4.0;
            let y = c.y - r / 2 + wave as i32;
            if (0..side).contains(&y) {
                canvas.set(x, y, glow);
                canvas.set(x, y + 1, accent);
            }
        }
    }
    grid_overlay(canvas, c, r, blend(accent, 0.4), stream);
}

fn grid_overlay(canvas: &mut Canvas, c: Point, r: i32, color: Rgba8, stream: &mut ByteStream) {
    let step = 4 + stream.next_bounded(4);
    for y in (c.y - r..=c.y + r).step_by(step as usize) {
        for x in c.x - r..=c.x + r {
            canvas.set(x, y, color);
        }
    }
}

/// One-pixel stroke around the canvas with corner ticks. Draws nothing from the stream.
pub fn frame_border(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    let stroke = p.traits.frame;
    let last = canvas.side_i32() - 1;
    for i in 0..=last {
        canvas.set(i, 0, stroke);
        canvas.set(i, last, stroke);
        canvas.set(0, i, stroke);
        canvas.set(last, i, stroke);
    }
    for i in 0..CORNER_TICK {
        for (x, y) in [
            (i, 0),
            (0, i),
            (last - i, 0),
            (last, i),
            (i, last),
            (0, last - i),
            (last - i, last),
            (last, last - i),
        ] {
            canvas.set(x, y, stroke);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/backdrop.rs"]
mod tests;
