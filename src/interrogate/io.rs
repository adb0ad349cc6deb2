//! Bounded sampling of streams and files.
//!
//! Detection only ever looks at the leading bytes of its input. These helpers
//! read at most a configured number of bytes and record whether the input
//! continued past the sample.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

/// Default number of leading bytes sampled from streams and files (4KB).
pub const MAX_SAMPLE_SIZE: usize = 4096;

/// A bounded reader that limits the amount of data read.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(reader: R, limit: u64) -> Self {
        Self {
            inner: reader,
            bytes_read: 0,
            limit,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes_read >= self.limit {
            return Ok(0);
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

/// Leading bytes of some input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub data: Vec<u8>,
    /// The input had more bytes than were sampled.
    pub truncated: bool,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Read at most `limit` bytes from the current position of `reader`.
///
/// One byte beyond the limit is requested to tell whether the input was cut,
/// so a non-seekable reader may be advanced by `limit + 1` bytes.
pub fn read_sample<R: Read>(reader: R, limit: usize) -> io::Result<Sample> {
    let read_limit = (limit as u64).saturating_add(1);
    let mut bounded = BoundedReader::new(reader, read_limit);
    let mut data = Vec::with_capacity(limit.min(MAX_SAMPLE_SIZE) + 1);
    bounded.read_to_end(&mut data)?;

    let truncated = data.len() > limit;
    data.truncate(limit);
    debug!(bytes = data.len(), limit, truncated, "Read sample");
    Ok(Sample { data, truncated })
}

/// Sample `stream` from its beginning and put the position back where it was.
///
/// The position is restored whether or not the read succeeded. A failed read
/// is reported in preference to a failed restore.
pub fn sample_stream<R: Read + Seek>(stream: &mut R, limit: usize) -> io::Result<Sample> {
    let original = stream.stream_position()?;

    let result = stream
        .seek(SeekFrom::Start(0))
        .and_then(|_| read_sample(&mut *stream, limit));
    let restored = stream.seek(SeekFrom::Start(original));

    match (result, restored) {
        (Ok(sample), Ok(_)) => Ok(sample),
        (Err(e), restored) => {
            if let Err(restore_err) = restored {
                warn!(error = %restore_err, "Failed to restore stream position");
            }
            Err(e)
        }
        (Ok(_), Err(e)) => Err(e),
    }
}

/// Sample the first bytes of the file at `path`.
pub fn sample_file<P: AsRef<Path>>(path: P, limit: usize) -> io::Result<Sample> {
    let path = path.as_ref();
    debug!(path = %path.display(), limit, "Sampling file");
    let file = File::open(path)?;
    read_sample(file, limit)
}
