use crate::foundation::core::{AvatarSize, Rgba8};

/// Square RGBA8 pixel buffer, row-major.
///
/// All writes are bounds-checked and silently dropped outside `[0, side)²`;
/// layers are free to compute coordinates that fall off the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: AvatarSize,
    pixels: Vec<Rgba8>,
}

impl Canvas {
    pub fn new(size: AvatarSize) -> Self {
        let side = size.side() as usize;
        Self {
            size,
            pixels: vec![Rgba8::TRANSPARENT; side * side],
        }
    }

    pub fn size(&self) -> AvatarSize {
        self.size
    }

    pub fn side(&self) -> u32 {
        self.size.side()
    }

    pub fn side_i32(&self) -> i32 {
        self.size.side_i32()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let side = self.size.side_i32();
        if x < 0 || y < 0 || x >= side || y >= side {
            return None;
        }
        Some((y * side + x) as usize)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = c;
        }
    }

    /// Read-modify-write of one pixel; no-op outside the canvas.
    pub fn update(&mut self, x: i32, y: i32, f: impl FnOnce(Rgba8) -> Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = f(self.pixels[i]);
        }
    }

    pub fn fill(&mut self, c: Rgba8) {
        self.pixels.fill(c);
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Every pixel with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Rgba8)> + '_ {
        let side = self.size.side_i32();
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i as i32 % side, i as i32 / side, c))
    }

    /// Mutable per-pixel pass used by whole-canvas post-processing.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(i32, i32, &mut Rgba8)) {
        let side = self.size.side_i32();
        for (i, px) in self.pixels.iter_mut().enumerate() {
            f(i as i32 % side, i as i32 / side, px);
        }
    }

    /// Tightly packed RGBA8 bytes, the layout image encoders expect.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}
