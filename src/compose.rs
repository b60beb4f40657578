//! The compositor: one literal, ordered table of layers run over a fresh canvas.
//!
//! The table order is the output contract. Moving an entry, or changing how
//! many draws a layer takes, changes every avatar rendered afterwards.

use crate::canvas::Canvas;
use crate::foundation::math::scale;
use crate::layers::{DrawFn, Odds, Portrait, accessory, backdrop, body, face, hair};
use crate::post;
use crate::seed::stream::ByteStream;

#[derive(Clone, Copy, Debug)]
pub struct Layer {
    pub name: &'static str,
    /// Rolled by the compositor before `draw`; `None` means the layer always runs.
    pub gate: Option<Odds>,
    pub draw: DrawFn,
}

impl Layer {
    const fn always(name: &'static str, draw: DrawFn) -> Self {
        Self {
            name,
            gate: None,
            draw,
        }
    }

    const fn gated(name: &'static str, gate: Odds, draw: DrawFn) -> Self {
        Self {
            name,
            gate: Some(gate),
            draw,
        }
    }

    /// Rolls the gate (if any) and draws on a hit. Returns whether the body ran.
    pub fn apply(&self, canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) -> bool {
        if let Some(gate) = self.gate
            && !gate.roll(stream)
        {
            return false;
        }
        (self.draw)(canvas, p, stream);
        true
    }
}

fn vignette(canvas: &mut Canvas, p: &Portrait, _stream: &mut ByteStream) {
    post::vignette(canvas, p.center, scale(p.size.side_i32(), 0.48));
}

fn noise(canvas: &mut Canvas, p: &Portrait, stream: &mut ByteStream) {
    post::noise(canvas, stream, p.size.side_i32() / 2);
}

pub const LAYERS: [Layer; 27] = [
    Layer::always("head", face::head),
    Layer::always("head_highlight", face::head_highlight),
    Layer::always("gradient", backdrop::gradient),
    Layer::always("hair_cap", hair::hair_cap),
    Layer::always("hair_strands", hair::hair_strands),
    Layer::gated("sideburns", Odds::unless_one_in(2), hair::sideburns),
    Layer::always("neck", body::neck),
    Layer::gated("cape", Odds::one_in(3), body::cape),
    Layer::always("shoulders", body::shoulders),
    Layer::always("backdrop_accent", backdrop::accent),
    Layer::always("frame_border", backdrop::frame_border),
    Layer::always("accessory", accessory::accessory),
    Layer::gated("mask", Odds::one_in(4), face::mask),
    Layer::always("eyes", face::eyes),
    Layer::always("iris_highlights", face::iris_highlights),
    Layer::always("eyebrows", face::eyebrows),
    Layer::always("nose", face::nose),
    Layer::gated("blush", Odds::unless_one_in(3), face::blush),
    Layer::gated("scar", Odds::one_in(4), face::scar),
    Layer::always("mouth", face::mouth),
    Layer::gated("lip_shine", Odds::unless_one_in(2), face::lip_shine),
    Layer::gated("mustache", Odds::one_in(3), face::mustache),
    Layer::gated("chin_shadow", Odds::one_in(2), face::chin_shadow),
    Layer::gated("forehead_mark", Odds::one_in(4), face::forehead_mark),
    Layer::gated("hood", Odds::one_in(3), hair::hood),
    Layer::always("vignette", vignette),
    Layer::always("noise", noise),
];

/// Entries before the post-processing passes (vignette, noise).
pub const FEATURE_LAYERS: usize = 25;

pub fn feature_layers() -> &'static [Layer] {
    &LAYERS[..FEATURE_LAYERS]
}

pub fn layer_names() -> impl Iterator<Item = &'static str> {
    LAYERS.iter().map(|l| l.name)
}

/// Full pipeline: background fill, then every entry of [`LAYERS`] in order.
pub fn compose(p: &Portrait, stream: &mut ByteStream) -> Canvas {
    compose_with(p, stream, &LAYERS)
}

/// Runs a prefix (or any subset) of the table over a background-filled canvas.
pub fn compose_with(p: &Portrait, stream: &mut ByteStream, layers: &[Layer]) -> Canvas {
    let mut canvas = Canvas::new(p.size);
    canvas.fill(p.traits.background);
    let mut fired = 0usize;
    for layer in layers {
        if layer.apply(&mut canvas, p, stream) {
            fired += 1;
        } else {
            tracing::debug!(layer = layer.name, "layer skipped");
        }
    }
    tracing::debug!(fired, draws = stream.position(), "composed");
    canvas
}
