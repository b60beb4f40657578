//! PNG output for finished canvases.

use std::io::Cursor;
use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::canvas::Canvas;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Encodes `canvas` as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> AvatarResult<Vec<u8>> {
    let side = canvas.side();
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &canvas.to_rgba8_bytes(),
        side,
        side,
        ColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(|e| AvatarError::encode(format!("png: {e}")))?;
    Ok(out.into_inner())
}

/// Writes `canvas` to `path` as PNG, creating parent directories as needed.
pub fn write_png(canvas: &Canvas, path: &Path) -> AvatarResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AvatarError::Other(anyhow::anyhow!("create dir '{}': {e}", parent.display()))
        })?;
    }
    let side = canvas.side();
    image::save_buffer_with_format(
        path,
        &canvas.to_rgba8_bytes(),
        side,
        side,
        ColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(|e| AvatarError::encode(format!("write png '{}': {e}", path.display())))
}
