use super::*;
use crate::foundation::core::AvatarSize;

fn portrait() -> Portrait {
    let mut zeros = ByteStream::new(vec![0u8]).unwrap();
    Portrait::draw(AvatarSize::S64, &mut zeros)
}

fn run(bytes: Vec<u8>) -> (Canvas, Portrait, usize) {
    let p = portrait();
    let mut c = Canvas::new(AvatarSize::S64);
    let mut s = ByteStream::new(bytes).unwrap();
    accent(&mut c, &p, &mut s);
    (c, p, s.position())
}

fn selector_then(sel: u8, rest: u8) -> Vec<u8> {
    let mut v = vec![rest; 256];
    v[0] = sel;
    v
}

fn count(c: &Canvas, color: Rgba8) -> usize {
    c.pixels().iter().filter(|&&px| px == color).count()
}

#[test]
fn table_maps_draw_to_variant() {
    let mut s = ByteStream::new(vec![0u8, 1, 2, 3, 4, 5, 6]).unwrap();
    let got: Vec<_> = (0..7).map(|_| BackdropAccent::draw(&mut s)).collect();
    assert_eq!(got[..6], BackdropAccent::TABLE);
    assert_eq!(got[6], BackdropAccent::OrbitRings);
}

#[test]
fn gradient_runs_from_background_to_accent() {
    let p = portrait();
    let mut c = Canvas::new(AvatarSize::S64);
    gradient(&mut c, &p, &mut ByteStream::new(vec![0u8]).unwrap());
    let bg = p.traits.background;
    assert_eq!(c.get(0, 0), Some(Rgba8::opaque(bg.r, bg.g, bg.b)));
    assert_eq!(c.get(63, 0), c.get(0, 0));
    let last = c.get(0, 63).unwrap();
    assert_eq!(last.a, 255);
    let accent = p.traits.accent;
    assert!(last.r.abs_diff(accent.r) <= 4);
    assert!(last.g.abs_diff(accent.g) <= 4);
    assert!(last.b.abs_diff(accent.b) <= 4);
}

#[test]
fn frame_border_strokes_only_the_edges() {
    let p = portrait();
    let mut c = Canvas::new(AvatarSize::S64);
    let mut s = ByteStream::new(vec![0u8]).unwrap();
    frame_border(&mut c, &p, &mut s);
    assert_eq!(s.position(), 0);
    assert_eq!(count(&c, p.traits.frame), 4 * 64 - 4);
    assert_eq!(c.get(63, 63), Some(p.traits.frame));
    assert_eq!(c.get(1, 1), Some(Rgba8::TRANSPARENT));
}

#[test]
fn orbit_rings_draw_no_extra_bytes() {
    let (c, p, used) = run(selector_then(0, 0));
    assert_eq!(used, 1);
    assert_eq!(c.get(62, 32), Some(p.traits.accent));
    assert_eq!(c.get(32, 32), Some(Rgba8::TRANSPARENT));
}

#[test]
fn stars_draw_two_coordinates_each() {
    let (c, p, used) = run(selector_then(1, 0));
    assert_eq!(used, 1 + 1 + 12 * 2);
    assert_eq!(c.get(10, 10), Some(p.traits.accent));
    assert_eq!(count(&c, p.traits.accent), 1);
}

#[test]
fn hex_grid_rolls_once_per_cell() {
    let (c, p, used) = run(selector_then(2, 1));
    assert_eq!(used, 1 + 7 * 7);
    assert_eq!(count(&c, p.traits.accent), 0);

    let (c, p, used) = run(selector_then(2, 0));
    assert_eq!(used, 1 + 7 * 7);
    // first cell: hexagon of radius 2 centered on (12, 12)
    assert_eq!(c.get(14, 12), Some(p.traits.accent));
    assert_eq!(c.get(12, 12), Some(Rgba8::TRANSPARENT));
}

#[test]
fn circuit_trace_walks_step_by_step() {
    let (c, p, used) = run(selector_then(3, 0));
    assert_eq!(used, 1 + 1 + 4 * (3 + 10));
    assert!((12..22).all(|x| c.get(x, 12) == Some(p.traits.accent)));
    assert_eq!(count(&c, p.traits.accent), 10);
}

#[test]
fn circuit_trace_stops_at_canvas_edge() {
    let p = portrait();
    let mut c = Canvas::new(AvatarSize::S64);
    // x = 12 + 39, y = 12, length 10 + 9, always stepping right
    let mut bytes = vec![3u8, 0, 39, 0, 9];
    bytes.resize(256, 0);
    let mut s = ByteStream::new(bytes).unwrap();
    accent(&mut c, &p, &mut s);
    assert_eq!(c.get(63, 12), Some(p.traits.accent));
    // 51..=63 painted, then the walk leaves the canvas after 13 moves
    assert_eq!(s.position(), 5 + 13 + 3 * 13);
}

#[test]
fn constellation_links_nodes_and_caps_with_dots() {
    let (c, p, used) = run(selector_then(4, 0));
    assert_eq!(used, 1 + 1 + 6 * 2 + 6);
    assert_eq!(count(&c, p.traits.accent), 5);
    assert_eq!(c.get(12, 12), Some(p.traits.accent));
}

#[test]
fn aurora_paints_bands_then_grid() {
    let (c, p, used) = run(selector_then(5, 0));
    assert_eq!(used, 1 + 1 + 3 + 1);
    let accent = p.traits.accent;
    assert_eq!(c.get(12, 22), Some(blend(accent, 0.3)));
    assert_eq!(c.get(12, 23), Some(accent));
    assert_eq!(c.get(30, 16), Some(blend(accent, 0.4)));
}
