use super::*;
use crate::foundation::core::AvatarSize;

const INK: Rgba8 = Rgba8::opaque(200, 10, 10);

fn blank() -> Canvas {
    Canvas::new(AvatarSize::S64)
}

fn inked(c: &Canvas) -> Vec<(i32, i32)> {
    c.iter()
        .filter(|&(_, _, p)| p == INK)
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn circle_pixel_counts_follow_integer_disk() {
    for (radius, expected) in [(0, 1), (1, 5), (2, 13), (3, 29)] {
        let mut c = blank();
        filled_circle(&mut c, Point::new(20, 20), radius, INK);
        assert_eq!(inked(&c).len(), expected, "radius {radius}");
    }
}

#[test]
fn circle_clips_at_canvas_edge() {
    let mut c = blank();
    filled_circle(&mut c, Point::new(-5, -5), 10, INK);
    let px = inked(&c);
    assert!(px.contains(&(0, 0)));
    assert!(
        px.iter()
            .all(|&(x, y)| (x + 5) * (x + 5) + (y + 5) * (y + 5) <= 100)
    );
}

#[test]
fn line_is_inclusive_and_eight_connected() {
    let mut c = blank();
    line(&mut c, Point::new(0, 0), Point::new(3, 1), INK);
    assert_eq!(inked(&c), vec![(0, 0), (1, 0), (2, 1), (3, 1)]);

    let mut c = blank();
    line(&mut c, Point::new(40, 30), Point::new(10, 5), INK);
    let px = inked(&c);
    assert_eq!(px.len(), 31);
    assert!(px.contains(&(40, 30)) && px.contains(&(10, 5)));
}

#[test]
fn degenerate_line_is_single_point() {
    let mut c = blank();
    line(&mut c, Point::new(7, 7), Point::new(7, 7), INK);
    assert_eq!(inked(&c), vec![(7, 7)]);
}

#[test]
fn line_leaving_canvas_does_not_wrap() {
    let mut c = blank();
    line(&mut c, Point::new(60, 10), Point::new(70, 10), INK);
    assert_eq!(inked(&c), vec![(60, 10), (61, 10), (62, 10), (63, 10)]);
}

#[test]
fn rect_outline_draws_nested_rings() {
    let mut c = blank();
    rect_outline(&mut c, Point::new(10, 10), 4, 4, 1, INK);
    assert_eq!(inked(&c).len(), 16);
    assert_eq!(c.get(10, 10), Some(Rgba8::TRANSPARENT));

    let mut c = blank();
    rect_outline(&mut c, Point::new(10, 10), 4, 4, 2, INK);
    assert_eq!(inked(&c).len(), 24);
    assert_eq!(c.get(10, 10), Some(Rgba8::TRANSPARENT));
}

#[test]
fn slanted_rect_shifts_rows() {
    let mut c = blank();
    slanted_rect(&mut c, Point::new(10, 10), 4, 2, 2, INK);
    assert_eq!(
        inked(&c),
        vec![
            (8, 9),
            (9, 9),
            (10, 9),
            (11, 9),
            (9, 10),
            (10, 10),
            (11, 10),
            (12, 10)
        ]
    );
}

#[test]
fn slanted_rect_negative_slope_truncates_toward_zero() {
    let mut c = blank();
    slanted_rect(&mut c, Point::new(10, 10), 2, 3, -2, INK);
    // rows shift by 0, trunc(-2/3) = 0, trunc(-4/3) = -1
    assert_eq!(
        inked(&c),
        vec![(9, 9), (10, 9), (9, 10), (10, 10), (8, 11), (9, 11)]
    );
}

#[test]
fn diamond_uses_manhattan_distance() {
    let mut c = blank();
    diamond(&mut c, Point::new(30, 30), 2, INK);
    assert_eq!(inked(&c).len(), 13);
    assert_eq!(c.get(31, 31), Some(INK));
    assert_eq!(c.get(32, 31), Some(Rgba8::TRANSPARENT));
}

#[test]
fn chevron_narrows_and_stripe_skips_rows() {
    let mut c = blank();
    chevron(&mut c, Point::new(20, 20), 10, 3, INK);
    assert_eq!(inked(&c).len(), 11 + 11 + 9);
    assert_eq!(c.get(15, 22), Some(Rgba8::TRANSPARENT));

    let mut c = blank();
    stripe(&mut c, Point::new(20, 20), 10, 3, INK);
    assert_eq!(inked(&c).len(), 22);
    assert_eq!(c.get(20, 21), Some(Rgba8::TRANSPARENT));
}

#[test]
fn hexagon_vertices_start_at_angle_zero() {
    let v = hexagon_vertices(Point::new(20, 20), 10);
    assert_eq!(v[0], Point::new(30, 20));
    assert_eq!(v[3], Point::new(10, 20));
    assert!(v.iter().all(|p| (p.x - 20).abs() <= 10 && (p.y - 20).abs() <= 10));
}

#[test]
fn hexagon_outline_is_closed_and_hollow() {
    let mut c = blank();
    hexagon_outline(&mut c, Point::new(32, 32), 12, INK);
    for v in hexagon_vertices(Point::new(32, 32), 12) {
        assert_eq!(c.get(v.x, v.y), Some(INK));
    }
    assert_eq!(c.get(32, 32), Some(Rgba8::TRANSPARENT));
}

#[test]
fn primitives_far_off_canvas_write_nothing() {
    let mut c = blank();
    let far = Point::new(-500, 900);
    filled_circle(&mut c, far, 20, INK);
    line(&mut c, far, Point::new(-400, 1000), INK);
    block(&mut c, far, 30, 30, INK);
    rect_outline(&mut c, far, 30, 30, 3, INK);
    slanted_rect(&mut c, far, 30, 5, 4, INK);
    diamond(&mut c, far, 20, INK);
    chevron(&mut c, far, 30, 10, INK);
    stripe(&mut c, far, 30, 10, INK);
    hexagon_outline(&mut c, far, 20, INK);
    assert!(inked(&c).is_empty());
}

#[test]
fn primitives_straddling_edges_stay_in_bounds() {
    let mut c = blank();
    for center in [Point::new(0, 0), Point::new(63, 63), Point::new(-3, 40)] {
        filled_circle(&mut c, center, 80, INK);
        rect_outline(&mut c, center, 200, 200, 4, INK);
        diamond(&mut c, center, 90, INK);
        hexagon_outline(&mut c, center, 70, INK);
    }
    assert_eq!(c.pixels().len(), 64 * 64);
}
