//! Bounded file access for entropy scans.
//!
//! Files are either memory-mapped whole ([`SafeReader`]) or streamed in
//! fixed-size chunks ([`ChunkReader`]) so inputs larger than memory can still
//! be measured. Existence checks, size limits and deadlines are enforced here;
//! the entropy core never sees a path.

pub mod error;

use crate::io::error::{IoError, Result};
use crate::timeout::Deadline;
use bytes::{Bytes, BytesMut};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Default streaming chunk size (1MB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;
/// Files up to this size are memory-mapped in `Auto` mode (256MB).
pub const DEFAULT_MMAP_THRESHOLD: u64 = 256 * 1024 * 1024;
/// Largest file accepted by default (16GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024 * 1024;

/// Defines the resource limits for I/O operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IOLimits {
    /// The absolute maximum file size that can be opened.
    pub max_file_size: u64,
    /// Bytes requested per read when streaming.
    pub chunk_size: usize,
    /// Largest file `ReadMode::Auto` will memory-map.
    pub mmap_threshold: u64,
    /// Wall-clock budget for reading one file.
    pub timeout: Option<Duration>,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            mmap_threshold: DEFAULT_MMAP_THRESHOLD,
            timeout: None,
        }
    }
}

/// How file contents are acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    /// Map small files, stream large ones.
    #[default]
    Auto,
    /// Memory-map the whole file.
    Mmap,
    /// Read the file in chunks.
    Stream,
}

impl ReadMode {
    /// Picks a concrete mode for a file of `size` bytes.
    pub fn resolve(self, size: u64, mmap_threshold: u64) -> ReadMode {
        match self {
            ReadMode::Auto if size <= mmap_threshold => ReadMode::Mmap,
            ReadMode::Auto => ReadMode::Stream,
            other => other,
        }
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReadMode::Auto => "auto",
            ReadMode::Mmap => "mmap",
            ReadMode::Stream => "stream",
        })
    }
}

impl FromStr for ReadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ReadMode::Auto),
            "mmap" => Ok(ReadMode::Mmap),
            "stream" => Ok(ReadMode::Stream),
            other => Err(format!(
                "unknown read mode '{}' (expected auto, mmap or stream)",
                other
            )),
        }
    }
}

/// Checks that `path` names an existing regular file and returns its size.
pub fn validate_input<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(IoError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        return Err(IoError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(metadata.len())
}

fn check_size(path: &Path, size: u64, limits: &IOLimits) -> Result<()> {
    if size > limits.max_file_size {
        warn!(
            path = %path.display(),
            size = size,
            limit = limits.max_file_size,
            "File is too large"
        );
        return Err(IoError::FileTooLarge {
            limit: limits.max_file_size,
            found: size,
        });
    }
    Ok(())
}

/// A memory-mapped, size-checked view of a whole file.
pub struct SafeReader {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl SafeReader {
    /// Opens a file and memory-maps it.
    ///
    /// This function will fail if the file size exceeds `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Mapping file"
        );

        check_size(path, file_size, limits)?;

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: read-only map of a regular file; the mapping is dropped with the reader.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the total size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    /// The mapped file contents.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.mmap {
            Some(m) => &m[..],
            None => &[],
        }
    }
}

/// Iterator over fixed-size chunks of a reader.
///
/// Every chunk but the last holds exactly `chunk_size` bytes. When a
/// deadline is attached it is checked before each read, and expiry ends the
/// iteration with [`IoError::Timeout`].
pub struct ChunkReader<R> {
    inner: R,
    buf: BytesMut,
    chunk_size: usize,
    bytes_read: u64,
    deadline: Option<Deadline>,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            inner: reader,
            buf: BytesMut::with_capacity(chunk_size),
            chunk_size,
            bytes_read: 0,
            deadline: None,
            done: false,
        }
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Total bytes yielded so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn fill(&mut self) -> Result<usize> {
        self.buf.clear();
        self.buf.resize(self.chunk_size, 0);

        let mut filled = 0;
        while filled < self.chunk_size {
            match self.inner.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.buf.truncate(filled);
        Ok(filled)
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(deadline) = self.deadline.as_mut() {
            if let Err(e) = deadline.check() {
                self.done = true;
                return Some(Err(e));
            }
        }

        match self.fill() {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(n) => {
                self.bytes_read += n as u64;
                trace!(len = n, total_read = self.bytes_read, "Read chunk");
                Some(Ok(self.buf.split().freeze()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Opens `path` for streaming after validating its size against `limits`.
pub fn open_chunked<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<ChunkReader<File>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    check_size(path, size, limits)?;

    debug!(
        path = %path.display(),
        size = size,
        chunk_size = limits.chunk_size,
        "Streaming file"
    );

    let reader = ChunkReader::new(file, limits.chunk_size);
    Ok(match limits.timeout {
        Some(t) => reader.with_deadline(Deadline::new(t, format!("read {}", path.display()))),
        None => reader,
    })
}
