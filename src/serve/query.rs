use axum::http::StatusCode;

use crate::encode::encode_png;
use crate::foundation::core::AvatarSize;
use crate::foundation::error::AvatarError;
use crate::render::render;
use crate::seed::time_key::TimeKey;

/// Raw `GET /avatar` query parameters, before validation.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct AvatarQuery {
    pub input: Option<String>,
    pub size: Option<String>,
    pub timestamp: Option<String>,
}

/// Rejections and failures of one avatar request. Each class has a fixed status.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("missing input query parameter")]
    MissingInput,

    #[error("invalid size")]
    InvalidSize,

    #[error("size must be 64 or 128")]
    UnsupportedSize,

    #[error("invalid timestamp")]
    InvalidTimestamp,

    #[error("failed to encode image")]
    Encode(#[source] AvatarError),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// A request that passed validation; rendering it cannot be rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarRequest {
    pub input: String,
    pub size: AvatarSize,
    pub time_key: TimeKey,
}

impl AvatarQuery {
    /// Checks input, then size, then timestamp. The first failure wins.
    pub fn validate(&self, default_size: AvatarSize) -> Result<AvatarRequest, RequestError> {
        let input = self.input.as_deref().map(str::trim).unwrap_or_default();
        if input.is_empty() {
            return Err(RequestError::MissingInput);
        }

        let size = match self.size.as_deref() {
            None | Some("") => default_size,
            Some(raw) => {
                let side: i64 = raw.parse().map_err(|_| RequestError::InvalidSize)?;
                u32::try_from(side)
                    .ok()
                    .and_then(|side| AvatarSize::try_from(side).ok())
                    .ok_or(RequestError::UnsupportedSize)?
            }
        };

        let time_key = TimeKey::resolve(self.timestamp.as_deref())
            .map_err(|_| RequestError::InvalidTimestamp)?;

        Ok(AvatarRequest {
            input: input.to_owned(),
            size,
            time_key,
        })
    }
}

/// Encoded avatar plus the values exposed as response headers.
#[derive(Clone, Debug)]
pub struct AvatarResponse {
    pub png: Vec<u8>,
    pub hash: String,
    pub time_key: TimeKey,
}

/// Renders and encodes a validated request. CPU bound; keep it off async workers.
pub fn respond(request: &AvatarRequest) -> Result<AvatarResponse, RequestError> {
    // render only rejects empty input; encoding is the sole server-side failure
    let rendered = render(&request.input, &request.time_key, request.size)
        .map_err(|_| RequestError::MissingInput)?;
    let png = encode_png(&rendered.canvas).map_err(RequestError::Encode)?;
    Ok(AvatarResponse {
        png,
        hash: rendered.digest.to_hex(),
        time_key: rendered.time_key,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/serve/query.rs"]
mod tests;
