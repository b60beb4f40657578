use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{AvatarError, AvatarResult};

/// Straight (non-premultiplied) RGBA8. Canvas writes store it verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Applies `f` to the color channels, leaving alpha as is.
    pub fn map_rgb(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }
}

/// Integer pixel coordinate. May lie outside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The two supported canvas sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AvatarSize {
    #[default]
    S64,
    S128,
}

impl AvatarSize {
    pub const ALL: [AvatarSize; 2] = [AvatarSize::S64, AvatarSize::S128];

    pub const fn side(self) -> u32 {
        match self {
            AvatarSize::S64 => 64,
            AvatarSize::S128 => 128,
        }
    }

    /// Side length as a signed coordinate, for geometry math.
    pub const fn side_i32(self) -> i32 {
        self.side() as i32
    }
}

impl TryFrom<u32> for AvatarSize {
    type Error = AvatarError;

    fn try_from(value: u32) -> AvatarResult<Self> {
        match value {
            64 => Ok(AvatarSize::S64),
            128 => Ok(AvatarSize::S128),
            other => Err(AvatarError::validation(format!(
                "size must be 64 or 128 (got {other})"
            ))),
        }
    }
}

impl From<AvatarSize> for u32 {
    fn from(size: AvatarSize) -> Self {
        size.side()
    }
}

impl FromStr for AvatarSize {
    type Err = AvatarError;

    fn from_str(s: &str) -> AvatarResult<Self> {
        let side: u32 = s
            .trim()
            .parse()
            .map_err(|_| AvatarError::validation(format!("invalid size '{s}'")))?;
        Self::try_from(side)
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side())
    }
}
