pub mod digest;
pub mod stream;
pub mod time_key;
