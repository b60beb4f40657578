//! Feature layers: self-contained drawing routines over a [`Portrait`].
//!
//! Every layer has the same shape, [`DrawFn`], so the compositor can hold them
//! in one literal table. Layers that fire conditionally do not roll their own
//! dice; the compositor rolls the layer's [`Odds`] first and skips the body on a miss.

pub mod accessory;
pub mod backdrop;
pub mod body;
pub mod face;
pub mod hair;

use crate::canvas::Canvas;
use crate::foundation::core::{AvatarSize, Point, Rgba8};
use crate::foundation::math::{blend, scale};
use crate::palette;
use crate::seed::stream::ByteStream;

pub type DrawFn = fn(&mut Canvas, &Portrait, &mut ByteStream);

/// Firing rule of a conditional layer: one draw of `next_bounded(modulus)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Odds {
    pub modulus: i32,
    /// Fire when the draw is zero (`1/modulus`), otherwise when it is non-zero.
    pub on_zero: bool,
}

impl Odds {
    /// Fires with probability `1/modulus`.
    pub const fn one_in(modulus: i32) -> Self {
        Self {
            modulus,
            on_zero: true,
        }
    }

    /// Fires with probability `(modulus - 1)/modulus`.
    pub const fn unless_one_in(modulus: i32) -> Self {
        Self {
            modulus,
            on_zero: false,
        }
    }

    /// Consumes exactly one draw.
    pub fn roll(self, stream: &mut ByteStream) -> bool {
        (stream.next_bounded(self.modulus) == 0) == self.on_zero
    }

    pub fn probability(self) -> f64 {
        let hit = 1.0 / f64::from(self.modulus);
        if self.on_zero { hit } else { 1.0 - hit }
    }
}

/// Colors drawn once per render, before any layer runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Traits {
    pub background: Rgba8,
    pub skin: Rgba8,
    pub skin_highlight: Rgba8,
    pub hair: Rgba8,
    pub eye: Rgba8,
    pub mouth: Rgba8,
    pub accessory: Rgba8,
    pub brow: Rgba8,
    pub blush: Rgba8,
    pub neck: Rgba8,
    pub clothing: Rgba8,
    pub accent: Rgba8,
    pub scar: Rgba8,
    pub mask: Rgba8,
    pub lip: Rgba8,
    pub shadow: Rgba8,
    pub frame: Rgba8,
    pub mark: Rgba8,
    pub hood: Rgba8,
    pub iris_highlight: Rgba8,
    pub cape: Rgba8,
}

/// Shared geometry and colors every layer reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portrait {
    pub size: AvatarSize,
    pub center: Point,
    pub radius: i32,
    pub traits: Traits,
}

impl Portrait {
    /// Draws background, head radius and the palette picks, in that order.
    pub fn draw(size: AvatarSize, stream: &mut ByteStream) -> Self {
        let side = size.side_i32();
        let background = blend(palette::BACKGROUND.pick(stream), 0.08);
        let radius = scale(side, 0.32 + 0.06 * f64::from(stream.next_bounded(4)));

        let skin = palette::SKIN.pick(stream);
        let hair = palette::HAIR.pick(stream);
        let eye = palette::EYE.pick(stream);
        let mouth = palette::MOUTH.pick(stream);
        let traits = Traits {
            background,
            skin,
            skin_highlight: blend(skin, 0.2),
            hair,
            eye,
            mouth,
            accessory: palette::ACCESSORY.pick(stream),
            brow: palette::EYEBROW.pick(stream),
            blush: palette::BLUSH.pick(stream),
            neck: palette::NECK.pick(stream),
            clothing: palette::CLOTHING.pick(stream),
            accent: palette::ACCENT.pick(stream),
            scar: palette::SCAR.pick(stream),
            mask: palette::MASK.pick(stream),
            lip: palette::LIP.pick(stream),
            shadow: palette::SHADOW.pick(stream),
            frame: palette::FRAME.pick(stream),
            mark: palette::MARK.pick(stream),
            hood: palette::HOOD.pick(stream),
            iris_highlight: palette::IRIS_HIGHLIGHT.pick(stream),
            cape: palette::CAPE.pick(stream),
        };

        tracing::debug!(radius, ?traits, "portrait traits drawn");
        Self {
            size,
            center: Point::new(side / 2, side / 2),
            radius,
            traits,
        }
    }

    /// Head center shifted by `(dx, dy)`.
    pub fn at(&self, dx: i32, dy: i32) -> Point {
        self.center.offset(dx, dy)
    }
}

/// Number of stream bytes consumed by [`Portrait::draw`].
pub const TRAIT_DRAWS: usize = 21;

#[cfg(test)]
#[path = "../../tests/unit/layers/portrait.rs"]
mod tests;
