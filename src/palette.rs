//! Fixed color tables, one per semantic role.
//!
//! Index order is load-bearing: a draw from the stream selects an entry by position.

use crate::foundation::core::Rgba8;
use crate::seed::stream::ByteStream;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [Rgba8],
}

impl Palette {
    /// One draw: `colors[next_bounded(len)]`.
    pub fn pick(&self, stream: &mut ByteStream) -> Rgba8 {
        let idx = stream.next_bounded(self.colors.len() as i32);
        self.colors[idx as usize]
    }

    pub fn contains(&self, c: Rgba8) -> bool {
        self.colors.contains(&c)
    }
}

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
    Rgba8::new(r, g, b, a)
}

pub const SKIN: Palette = Palette {
    name: "skin",
    colors: &[
        rgba(241, 194, 125, 255),
        rgba(224, 172, 105, 255),
        rgba(198, 134, 66, 255),
        rgba(141, 85, 36, 255),
        rgba(255, 220, 180, 255),
        rgba(205, 133, 63, 255),
    ],
};

pub const HAIR: Palette = Palette {
    name: "hair",
    colors: &[
        rgba(45, 34, 30, 255),
        rgba(71, 52, 39, 255),
        rgba(120, 90, 60, 255),
        rgba(200, 160, 120, 255),
        rgba(35, 30, 50, 255),
    ],
};

pub const EYE: Palette = Palette {
    name: "eye",
    colors: &[
        rgba(36, 70, 142, 255),
        rgba(84, 52, 32, 255),
        rgba(32, 102, 66, 255),
        rgba(70, 70, 70, 255),
    ],
};

pub const MOUTH: Palette = Palette {
    name: "mouth",
    colors: &[
        rgba(141, 62, 62, 255),
        rgba(128, 50, 80, 255),
        rgba(160, 72, 92, 255),
    ],
};

pub const ACCESSORY: Palette = Palette {
    name: "accessory",
    colors: &[
        rgba(60, 60, 60, 255),
        rgba(220, 180, 90, 255),
        rgba(180, 200, 220, 255),
        rgba(120, 160, 200, 255),
        rgba(200, 120, 140, 255),
    ],
};

pub const EYEBROW: Palette = Palette {
    name: "eyebrow",
    colors: &[
        rgba(40, 32, 28, 255),
        rgba(70, 52, 38, 255),
        rgba(110, 80, 50, 255),
        rgba(160, 120, 90, 255),
        rgba(25, 25, 35, 255),
    ],
};

pub const BLUSH: Palette = Palette {
    name: "blush",
    colors: &[
        rgba(238, 168, 168, 220),
        rgba(230, 150, 140, 220),
        rgba(210, 120, 130, 220),
        rgba(240, 180, 190, 220),
    ],
};

pub const NECK: Palette = Palette {
    name: "neck",
    colors: &[
        rgba(236, 190, 126, 255),
        rgba(217, 168, 104, 255),
        rgba(190, 132, 70, 255),
        rgba(135, 84, 45, 255),
    ],
};

pub const CLOTHING: Palette = Palette {
    name: "clothing",
    colors: &[
        rgba(52, 86, 136, 255),
        rgba(88, 120, 76, 255),
        rgba(170, 92, 92, 255),
        rgba(60, 60, 70, 255),
        rgba(120, 68, 144, 255),
        rgba(180, 132, 60, 255),
    ],
};

pub const ACCENT: Palette = Palette {
    name: "accent",
    colors: &[
        rgba(255, 210, 90, 255),
        rgba(210, 90, 120, 255),
        rgba(90, 170, 200, 255),
        rgba(90, 200, 140, 255),
        rgba(200, 200, 200, 255),
    ],
};

pub const SCAR: Palette = Palette {
    name: "scar",
    colors: &[
        rgba(160, 90, 90, 255),
        rgba(140, 70, 70, 255),
        rgba(120, 60, 60, 255),
    ],
};

pub const MASK: Palette = Palette {
    name: "mask",
    colors: &[
        rgba(235, 235, 235, 230),
        rgba(210, 220, 230, 230),
        rgba(190, 210, 220, 230),
        rgba(220, 200, 210, 230),
    ],
};

pub const LIP: Palette = Palette {
    name: "lip",
    colors: &[
        rgba(166, 72, 98, 255),
        rgba(190, 90, 110, 255),
        rgba(140, 60, 82, 255),
        rgba(120, 45, 70, 255),
        rgba(200, 120, 140, 255),
    ],
};

pub const SHADOW: Palette = Palette {
    name: "shadow",
    colors: &[
        rgba(90, 72, 62, 120),
        rgba(110, 92, 82, 120),
        rgba(70, 58, 50, 120),
    ],
};

pub const FRAME: Palette = Palette {
    name: "frame",
    colors: &[
        rgba(30, 30, 30, 255),
        rgba(220, 210, 190, 255),
        rgba(80, 90, 120, 255),
        rgba(180, 140, 80, 255),
        rgba(90, 120, 90, 255),
    ],
};

pub const MARK: Palette = Palette {
    name: "mark",
    colors: &[
        rgba(220, 90, 90, 200),
        rgba(90, 160, 220, 200),
        rgba(120, 200, 140, 200),
        rgba(200, 180, 100, 200),
    ],
};

pub const HOOD: Palette = Palette {
    name: "hood",
    colors: &[
        rgba(55, 65, 90, 220),
        rgba(90, 80, 70, 220),
        rgba(70, 90, 80, 220),
        rgba(100, 60, 80, 220),
    ],
};

pub const IRIS_HIGHLIGHT: Palette = Palette {
    name: "iris-highlight",
    colors: &[
        rgba(255, 255, 255, 200),
        rgba(230, 240, 255, 200),
        rgba(255, 240, 230, 200),
    ],
};

pub const CAPE: Palette = Palette {
    name: "cape",
    colors: &[
        rgba(40, 60, 120, 200),
        rgba(120, 60, 40, 200),
        rgba(50, 90, 70, 200),
        rgba(100, 40, 80, 200),
    ],
};

pub const BACKGROUND: Palette = Palette {
    name: "background",
    colors: &[
        rgba(232, 244, 255, 255),
        rgba(255, 240, 234, 255),
        rgba(240, 255, 244, 255),
        rgba(244, 240, 255, 255),
    ],
};

/// Every palette, for closure checks.
pub const ALL: [&Palette; 20] = [
    &SKIN,
    &HAIR,
    &EYE,
    &MOUTH,
    &ACCESSORY,
    &EYEBROW,
    &BLUSH,
    &NECK,
    &CLOTHING,
    &ACCENT,
    &SCAR,
    &MASK,
    &LIP,
    &SHADOW,
    &FRAME,
    &MARK,
    &HOOD,
    &IRIS_HIGHLIGHT,
    &CAPE,
    &BACKGROUND,
];
