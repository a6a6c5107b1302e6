//! Fixed-size chunk stream over an async byte source.
//!
//! Uploads are consumed through [`chunks`] so peak memory per request is
//! bounded by [`FILE_CHUNK_SIZE`] regardless of the upload's total size.

use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Maximum number of bytes pulled from the source per read.
pub const FILE_CHUNK_SIZE: usize = 8192;

/// Wrap `reader` in a stream of chunks of at most [`FILE_CHUNK_SIZE`] bytes.
///
/// The stream ends at the first zero-length read. A read error is yielded
/// once and ends the stream. The reader and the read buffer are owned by the
/// stream and dropped with it, whether or not it was driven to completion.
pub fn chunks<R>(reader: R) -> ReaderStream<R>
where
    R: AsyncRead,
{
    ReaderStream::with_capacity(reader, FILE_CHUNK_SIZE)
}
