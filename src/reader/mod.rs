// src/reader/mod.rs
mod qgd_reader;
#[cfg(feature = "async")]
mod async_reader;

pub use qgd_reader::{decode_file, decode_file_with, QgdReader};

#[cfg(feature = "async")]
pub use async_reader::{decode_async, decode_file_async};
