//! Shape rasterizers. None of them consult the byte stream; callers decide
//! every randomized parameter before drawing.

use crate::canvas::Canvas;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{cos, scale, sin};

/// Every pixel with `dx² + dy² <= radius²`.
pub fn filled_circle(canvas: &mut Canvas, center: Point, radius: i32, fill: Rgba8) {
    let r2 = radius * radius;
    for y in center.y - radius..=center.y + radius {
        for x in center.x - radius..=center.x + radius {
            let dx = x - center.x;
            let dy = y - center.y;
            if dx * dx + dy * dy <= r2 {
                canvas.set(x, y, fill);
            }
        }
    }
}

/// Integer Bresenham, both endpoints inclusive.
pub fn line(canvas: &mut Canvas, a: Point, b: Point, stroke: Rgba8) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);
    loop {
        canvas.set(x, y, stroke);
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Axis-aligned `width × height` block with its top-left corner at `origin`.
pub fn block(canvas: &mut Canvas, origin: Point, width: i32, height: i32, fill: Rgba8) {
    for y in origin.y..origin.y + height {
        for x in origin.x..origin.x + width {
            canvas.set(x, y, fill);
        }
    }
}

/// Horizontal run `[x0, x1]` on row `y`.
pub fn span(canvas: &mut Canvas, y: i32, x0: i32, x1: i32, fill: Rgba8) {
    for x in x0..=x1 {
        canvas.set(x, y, fill);
    }
}

/// `thickness` nested border rings of a rectangle centered on `center`.
pub fn rect_outline(
    canvas: &mut Canvas,
    center: Point,
    width: i32,
    height: i32,
    thickness: i32,
    stroke: Rgba8,
) {
    let left = center.x - width / 2;
    let right = center.x + width / 2;
    let top = center.y - height / 2;
    let bottom = center.y + height / 2;
    for t in 0..thickness {
        for x in left..=right {
            canvas.set(x, top + t, stroke);
            canvas.set(x, bottom - t, stroke);
        }
        for y in top..=bottom {
            canvas.set(left + t, y, stroke);
            canvas.set(right - t, y, stroke);
        }
    }
}

/// Parallelogram: row `y` shifts right by `(y * slope) / height`.
pub fn slanted_rect(
    canvas: &mut Canvas,
    center: Point,
    width: i32,
    height: i32,
    slope: i32,
    fill: Rgba8,
) {
    let left = center.x - width / 2;
    let top = center.y - height / 2;
    for y in 0..height {
        let shift = (y * slope) / height;
        for x in 0..width {
            canvas.set(left + x + shift, top + y, fill);
        }
    }
}

/// Manhattan ball: `|x| + |y| <= radius`.
pub fn diamond(canvas: &mut Canvas, center: Point, radius: i32, fill: Rgba8) {
    for y in -radius..=radius {
        for x in -radius..=radius {
            if x.abs() + y.abs() <= radius {
                canvas.set(center.x + x, center.y + y, fill);
            }
        }
    }
}

/// Rows below `center` narrowing by `trunc(0.8 * row)` on each side.
pub fn chevron(canvas: &mut Canvas, center: Point, width: i32, height: i32, fill: Rgba8) {
    for y in 0..height {
        let offset = scale(y, 0.8);
        span(
            canvas,
            center.y + y,
            center.x - width / 2 + offset,
            center.x + width / 2 - offset,
            fill,
        );
    }
}

/// Every other row below `center`, starting with the first.
pub fn stripe(canvas: &mut Canvas, center: Point, width: i32, height: i32, fill: Rgba8) {
    for y in (0..height).step_by(2) {
        span(
            canvas,
            center.y + y,
            center.x - width / 2,
            center.x + width / 2,
            fill,
        );
    }
}

/// Vertices of a regular hexagon, angle 0 first, truncated toward zero.
pub fn hexagon_vertices(center: Point, radius: i32) -> [Point; 6] {
    core::array::from_fn(|i| {
        let angle = i as f64 * std::f64::consts::PI / 3.0;
        Point::new(
            center.x + (f64::from(radius) * cos(angle)) as i32,
            center.y + (f64::from(radius) * sin(angle)) as i32,
        )
    })
}

pub fn hexagon_outline(canvas: &mut Canvas, center: Point, radius: i32, stroke: Rgba8) {
    let pts = hexagon_vertices(center, radius);
    for i in 0..pts.len() {
        line(canvas, pts[i], pts[(i + 1) % pts.len()], stroke);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
