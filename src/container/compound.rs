// src/container/compound.rs
use crate::container::{
    stream_path, MS_RAW_DATA_STREAM, RETENTION_TIME_STREAM, SPECTRUM_INDEX_STREAM, TIC_STREAM,
};
use crate::error::{QgdError, Result};
use bytes::Bytes;
use cfb::CompoundFile;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::{Path, PathBuf};

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::io::Cursor;

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Read-only handle over a compound document
///
/// The source is never written to. Streams are copied out into immutable
/// [`Bytes`] buffers, so the container can be dropped once they are loaded.
pub struct Container<F: ReadSeek> {
    file: CompoundFile<F>,
    source: PathBuf,
}

/// Constructor for standard file I/O
impl Container<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        Self::from_reader_named(BufReader::with_capacity(65536, file), path)
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl Container<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        // The mapping is read-only and lives as long as the container.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_reader_named(Cursor::new(mmap), path)
    }
}

impl<F: ReadSeek> Container<F> {
    /// Wrap an in-memory or otherwise already open source
    pub fn from_reader(reader: F) -> Result<Self> {
        Self::from_reader_named(reader, Path::new("<memory>"))
    }

    fn from_reader_named(reader: F, source: &Path) -> Result<Self> {
        let file = CompoundFile::open(reader).map_err(|e| QgdError::NotACompoundFile {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Container {
            file,
            source: source.to_path_buf(),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn has_stream(&self, path: &str) -> bool {
        self.file.is_stream(path)
    }

    /// All stream paths in the container, in directory order
    pub fn list_streams(&self) -> Vec<String> {
        self.file
            .walk()
            .filter(|entry| entry.is_stream())
            .map(|entry| entry.path().to_string_lossy().into_owned())
            .collect()
    }

    /// Read a whole stream by absolute path
    pub fn stream(&mut self, path: &str) -> Result<Bytes> {
        if !self.file.is_stream(path) {
            return Err(QgdError::StreamMissing(path.to_string()));
        }

        let mut stream = self.file.open_stream(path)?;
        let mut buffer = Vec::with_capacity(stream.len() as usize);
        stream.read_to_end(&mut buffer)?;

        log::debug!("read stream {} ({} bytes)", path, buffer.len());
        Ok(Bytes::from(buffer))
    }
}

fn open_error(path: &Path, err: io::Error) -> QgdError {
    if err.kind() == io::ErrorKind::NotFound {
        QgdError::NotFound(path.to_path_buf())
    } else {
        QgdError::Io(err)
    }
}

/// The four raw streams a decode needs
#[derive(Debug, Clone)]
pub struct QgdStreams {
    pub retention_time: Bytes,
    pub tic: Bytes,
    pub spectrum_index: Bytes,
    pub ms_raw_data: Bytes,
}

impl QgdStreams {
    /// Load all four streams from `storage`. Fails on the first one missing.
    pub fn load<F: ReadSeek>(container: &mut Container<F>, storage: &str) -> Result<Self> {
        Ok(QgdStreams {
            retention_time: container.stream(&stream_path(storage, RETENTION_TIME_STREAM))?,
            tic: container.stream(&stream_path(storage, TIC_STREAM))?,
            spectrum_index: container.stream(&stream_path(storage, SPECTRUM_INDEX_STREAM))?,
            ms_raw_data: container.stream(&stream_path(storage, MS_RAW_DATA_STREAM))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn build_container(streams: &[(&str, &[u8])]) -> Vec<u8> {
        let mut comp = CompoundFile::create(Cursor::new(Vec::new())).unwrap();
        comp.create_storage("/GCMS Raw Data").unwrap();
        for (path, data) in streams {
            let mut stream = comp.create_stream(path).unwrap();
            stream.write_all(data).unwrap();
        }
        comp.flush().unwrap();
        comp.into_inner().into_inner()
    }

    #[test]
    fn test_read_stream_from_memory() {
        let bytes = build_container(&[("/GCMS Raw Data/TIC Data", &[1, 2, 3, 4, 5, 6, 7, 8])]);
        let mut container = Container::from_reader(Cursor::new(bytes)).unwrap();

        assert!(container.has_stream("/GCMS Raw Data/TIC Data"));
        let data = container.stream("/GCMS Raw Data/TIC Data").unwrap();
        assert_eq!(&data[..], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(container.list_streams(), vec!["/GCMS Raw Data/TIC Data".to_string()]);
    }

    #[test]
    fn test_missing_stream() {
        let bytes = build_container(&[]);
        let mut container = Container::from_reader(Cursor::new(bytes)).unwrap();
        match container.stream("/GCMS Raw Data/MS Raw Data") {
            Err(QgdError::StreamMissing(name)) => assert_eq!(name, "/GCMS Raw Data/MS Raw Data"),
            other => panic!("Expected StreamMissing, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_not_a_compound_file() {
        let garbage = vec![0u8; 1024];
        let result = Container::from_reader(Cursor::new(garbage));
        assert!(matches!(result, Err(QgdError::NotACompoundFile { .. })));
    }

    #[test]
    fn test_open_missing_file() {
        let result = Container::open("definitely/not/here.qgd");
        assert!(matches!(result, Err(QgdError::NotFound(_))));
    }
}
