#![forbid(unsafe_code)]

pub mod batch;
pub mod canvas;
pub mod compose;
pub mod encode;
pub mod foundation;
pub mod layers;
pub mod palette;
pub mod post;
pub mod raster;
pub mod render;
pub mod seed;
pub mod serve;

pub use batch::{BatchEntry, BatchOptions, BatchStats, read_inputs, render_batch};
pub use canvas::Canvas;
pub use compose::{LAYERS, Layer, compose};
pub use encode::{encode_png, write_png};
pub use foundation::core::{AvatarSize, Point, Rgba8};
pub use foundation::error::{AvatarError, AvatarResult};
pub use layers::{Portrait, Traits};
pub use render::{RenderResult, render, render_digest};
pub use seed::{digest::Digest, stream::ByteStream, time_key::TimeKey};
pub use serve::ServeConfig;
