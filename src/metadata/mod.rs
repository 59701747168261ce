// src/metadata/mod.rs
mod spectrum_index;

pub use spectrum_index::{
    decode_spectrum_index, SpectrumIndex, SPECTRUM_INDEX_ENTRY_WIDTH,
    SPECTRUM_INDEX_STORES_END_SENTINEL,
};
