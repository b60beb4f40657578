use crate::foundation::error::{AvatarError, AvatarResult};
use crate::seed::digest::Digest;

/// Cyclic reader over seed bytes; the only entropy source of a render.
///
/// One instance per render, threaded by `&mut` through every layer. The cursor
/// never rewinds, so the number and order of draws is part of the output contract.
#[derive(Clone, Debug)]
pub struct ByteStream {
    data: Vec<u8>,
    cursor: usize,
}

impl ByteStream {
    pub fn new(data: impl Into<Vec<u8>>) -> AvatarResult<Self> {
        let data = data.into();
        if data.is_empty() {
            return Err(AvatarError::validation("byte stream needs at least one byte"));
        }
        Ok(Self { data, cursor: 0 })
    }

    pub fn from_digest(digest: &Digest) -> Self {
        Self {
            data: digest.as_bytes().to_vec(),
            cursor: 0,
        }
    }

    pub fn next_byte(&mut self) -> u8 {
        let b = self.data[self.cursor % self.data.len()];
        self.cursor += 1;
        b
    }

    /// A draw in `[0, max)`. Returns 0 for `max <= 0` without consuming a byte.
    pub fn next_bounded(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        i32::from(self.next_byte()) % max
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seed/stream.rs"]
mod tests;
