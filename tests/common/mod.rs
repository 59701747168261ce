// tests/common/mod.rs
//! Synthetic QGD files for integration tests
#![allow(dead_code)]

use qgd_rs::ScanHeader;
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

pub const STORAGE: &str = "/GCMS Raw Data";
pub const RETENTION_TIME: &str = "/GCMS Raw Data/Retention Time";
pub const TIC: &str = "/GCMS Raw Data/TIC Data";
pub const SPECTRUM_INDEX: &str = "/GCMS Raw Data/Spectrum Index";
pub const MS_RAW_DATA: &str = "/GCMS Raw Data/MS Raw Data";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One scan block as it will be laid out in `MS Raw Data`
#[derive(Debug, Clone)]
pub struct ScanBlock {
    pub header: ScanHeader,
    /// Width the intensities are really stored with
    pub stored_width: usize,
    pub pairs: Vec<(u16, u32)>,
}

impl ScanBlock {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.header.to_bytes().to_vec();
        for &(mz, intensity) in &self.pairs {
            bytes.extend_from_slice(&mz.to_le_bytes());
            bytes.extend_from_slice(&intensity.to_le_bytes()[..self.stored_width]);
        }
        bytes
    }
}

/// Builder for a compound document shaped like an instrument QGD file
#[derive(Debug, Clone, Default)]
pub struct QgdFixture {
    retention_times: Vec<i32>,
    tic: Vec<i64>,
    blocks: Vec<ScanBlock>,
    explicit_sentinel: bool,
    overrides: HashMap<&'static str, Vec<u8>>,
    omitted: Vec<&'static str>,
}

impl QgdFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a well-formed scan with honest header fields
    pub fn scan(self, retention_time_ms: i32, tic: i64, width: u16, pairs: &[(u16, u32)]) -> Self {
        self.scan_with_width(retention_time_ms, tic, width, width as usize, pairs)
    }

    /// Add a scan whose header may declare a different width than the one stored
    pub fn scan_with_width(
        mut self,
        retention_time_ms: i32,
        tic: i64,
        declared_width: u16,
        stored_width: usize,
        pairs: &[(u16, u32)],
    ) -> Self {
        let header = ScanHeader {
            scan_number: self.blocks.len() as i32,
            retention_time_ms,
            intensity_width: declared_width,
            point_count: pairs.len() as u16,
        };
        self.push_block(retention_time_ms, tic, ScanBlock { header, stored_width, pairs: pairs.to_vec() })
    }

    pub fn push_block(mut self, retention_time_ms: i32, tic: i64, block: ScanBlock) -> Self {
        self.retention_times.push(retention_time_ms);
        self.tic.push(tic);
        self.blocks.push(block);
        self
    }

    pub fn explicit_sentinel(mut self) -> Self {
        self.explicit_sentinel = true;
        self
    }

    /// Replace a stream's contents with raw bytes
    pub fn raw_stream(mut self, path: &'static str, bytes: Vec<u8>) -> Self {
        self.overrides.insert(path, bytes);
        self
    }

    pub fn without_stream(mut self, path: &'static str) -> Self {
        self.omitted.push(path);
        self
    }

    pub fn streams(&self) -> Vec<(&'static str, Vec<u8>)> {
        let mut ms = Vec::new();
        let mut offsets = Vec::new();
        for block in &self.blocks {
            offsets.push(ms.len() as u32);
            ms.extend(block.to_bytes());
        }
        if self.explicit_sentinel {
            offsets.push(ms.len() as u32);
        }

        let streams = vec![
            (RETENTION_TIME, self.retention_times.iter().flat_map(|v| v.to_le_bytes()).collect()),
            (TIC, self.tic.iter().flat_map(|v| v.to_le_bytes()).collect()),
            (SPECTRUM_INDEX, offsets.iter().flat_map(|v| v.to_le_bytes()).collect()),
            (MS_RAW_DATA, ms),
        ];

        streams
            .into_iter()
            .filter(|(path, _)| !self.omitted.contains(path))
            .map(|(path, bytes)| (path, self.overrides.get(path).cloned().unwrap_or(bytes)))
            .collect()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut comp = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();
        self.fill(&mut comp);
        comp.into_inner().into_inner()
    }

    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut comp = cfb::create(&path).unwrap();
        self.fill(&mut comp);
        path
    }

    fn fill<F: std::io::Read + Write + std::io::Seek>(&self, comp: &mut cfb::CompoundFile<F>) {
        comp.create_storage(STORAGE).unwrap();
        for (path, bytes) in self.streams() {
            let mut stream = comp.create_stream(path).unwrap();
            stream.write_all(&bytes).unwrap();
        }
        comp.flush().unwrap();
    }
}
