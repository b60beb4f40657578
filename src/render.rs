//! Render entry point: seed derivation, trait draws and the layer table.

use crate::canvas::Canvas;
use crate::compose::compose;
use crate::foundation::core::AvatarSize;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::layers::Portrait;
use crate::seed::digest::Digest;
use crate::seed::stream::ByteStream;
use crate::seed::time_key::TimeKey;

/// A finished avatar together with the seed data that produced it.
#[derive(Clone, Debug)]
pub struct RenderResult {
    pub canvas: Canvas,
    pub digest: Digest,
    pub time_key: TimeKey,
}

/// Renders the avatar for `input` on day `time_key`.
///
/// `input` is used as given; callers that accept user text trim it first. The
/// only failure is an input that is empty after trimming.
#[tracing::instrument(skip(input))]
pub fn render(input: &str, time_key: &TimeKey, size: AvatarSize) -> AvatarResult<RenderResult> {
    if input.trim().is_empty() {
        return Err(AvatarError::validation("input must not be empty"));
    }
    let digest = Digest::derive(input, time_key);
    let canvas = render_digest(&digest, size);
    Ok(RenderResult {
        canvas,
        digest,
        time_key: time_key.clone(),
    })
}

/// Pixels for an already derived seed. Infallible: every digest is a valid seed.
pub fn render_digest(digest: &Digest, size: AvatarSize) -> Canvas {
    let mut stream = ByteStream::from_digest(digest);
    let portrait = Portrait::draw(size, &mut stream);
    compose(&portrait, &mut stream)
}
