//! The hashing service: password, content and file hashing.
//!
//! Every operation is an independent transform from a request payload to a
//! [`HashResponse`]. Failures from the primitives or the I/O layer come back
//! as [`HashError`]; nothing is retried.

use std::sync::Arc;

use futures_util::StreamExt;
use tokio::io::AsyncRead;

use hashery_types::error::HashError;
use hashery_types::hash::HashResponse;

use crate::service::hash::{ContentHasher, DigestAccumulator};
use crate::service::password::PasswordHasher;
use crate::stream;

/// Stateless hashing service, generic over its hasher ports.
///
/// Holds only immutable adapters, so one instance is shared across all
/// in-flight requests without locking.
pub struct HashService<P: PasswordHasher, C: ContentHasher> {
    password_hasher: Arc<P>,
    content_hasher: C,
}

impl<P, C> HashService<P, C>
where
    P: PasswordHasher + 'static,
    C: ContentHasher,
{
    pub fn new(password_hasher: P, content_hasher: C) -> Self {
        Self {
            password_hasher: Arc::new(password_hasher),
            content_hasher,
        }
    }

    /// Hash a password with a fresh random salt.
    ///
    /// The work runs on the blocking pool so a slow hash never stalls the
    /// runtime's other tasks. Two calls with the same password return
    /// different strings.
    pub async fn password_hash(&self, password: String) -> Result<HashResponse, HashError> {
        let hasher = Arc::clone(&self.password_hasher);
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| HashError::Task(e.to_string()))??;

        tracing::debug!("password hashed");
        Ok(HashResponse::new(hash))
    }

    /// Check a password against a hash produced by [`Self::password_hash`].
    pub async fn password_verify(&self, password: String, hash: String) -> Result<bool, HashError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| HashError::Task(e.to_string()))?
    }

    /// Hash string content (its UTF-8 bytes). Deterministic.
    pub fn content_hash(&self, content: &str) -> Result<HashResponse, HashError> {
        let hash = self.content_hasher.compute_hash(content);
        tracing::debug!(bytes = content.len(), "content hashed");
        Ok(HashResponse::new(hash))
    }

    /// Hash an arbitrarily large byte source without buffering it.
    ///
    /// The source is read in chunks of at most [`stream::FILE_CHUNK_SIZE`]
    /// bytes, each fed into one digest that is finalized at end-of-stream.
    pub async fn file_hash<R>(&self, reader: R) -> Result<HashResponse, HashError>
    where
        R: AsyncRead + Unpin,
    {
        let mut chunks = std::pin::pin!(stream::chunks(reader));
        let mut acc = self.content_hasher.accumulator();
        let mut total: u64 = 0;

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.inspect_err(|e| {
                tracing::warn!(bytes_read = total, error = %e, "upload read failed");
            })?;
            total += chunk.len() as u64;
            acc.update(&chunk);
        }

        tracing::debug!(bytes = total, "file hashed");
        Ok(HashResponse::new(acc.finalize_hex()))
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::sync::Mutex;
    use std::task::{Context, Poll};

    use tokio::io::ReadBuf;

    use super::*;

    /// Records chunk sizes and echoes the input length as the "digest".
    #[derive(Default, Clone)]
    struct RecordingHasher {
        sizes: Arc<Mutex<Vec<usize>>>,
    }

    struct RecordingAccumulator {
        sizes: Arc<Mutex<Vec<usize>>>,
        data: Vec<u8>,
    }

    impl DigestAccumulator for RecordingAccumulator {
        fn update(&mut self, chunk: &[u8]) {
            self.sizes.lock().unwrap().push(chunk.len());
            self.data.extend_from_slice(chunk);
        }

        fn finalize_hex(self) -> String {
            format!("len:{}", self.data.len())
        }
    }

    impl ContentHasher for RecordingHasher {
        type Accumulator = RecordingAccumulator;

        fn accumulator(&self) -> RecordingAccumulator {
            RecordingAccumulator {
                sizes: Arc::clone(&self.sizes),
                data: Vec::new(),
            }
        }
    }

    /// Password hasher that prefixes a counter, so repeated calls differ.
    #[derive(Default)]
    struct CountingPasswordHasher {
        calls: Mutex<u32>,
    }

    impl PasswordHasher for CountingPasswordHasher {
        fn hash(&self, password: &str) -> Result<String, HashError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            Ok(format!("{calls}:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash.split_once(':').is_some_and(|(_, p)| p == password))
        }
    }

    struct FailingPasswordHasher;

    impl PasswordHasher for FailingPasswordHasher {
        fn hash(&self, _password: &str) -> Result<String, HashError> {
            Err(HashError::PasswordHash("invalid cost".to_string()))
        }

        fn verify(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Err(HashError::PasswordHash("invalid hash".to_string()))
        }
    }

    struct PanickingPasswordHasher;

    impl PasswordHasher for PanickingPasswordHasher {
        fn hash(&self, _password: &str) -> Result<String, HashError> {
            panic!("primitive blew up")
        }

        fn verify(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(false)
        }
    }

    /// Yields `good` bytes, then fails every subsequent read.
    struct BrokenReader {
        good: Vec<u8>,
    }

    impl AsyncRead for BrokenReader {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<std::io::Result<()>> {
            if self.good.is_empty() {
                return Poll::Ready(Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "client went away",
                )));
            }
            let n = self.good.len().min(buf.remaining());
            let rest = self.good.split_off(n);
            buf.put_slice(&self.good);
            self.good = rest;
            Poll::Ready(Ok(()))
        }
    }

    fn service() -> (HashService<CountingPasswordHasher, RecordingHasher>, RecordingHasher) {
        let hasher = RecordingHasher::default();
        (
            HashService::new(CountingPasswordHasher::default(), hasher.clone()),
            hasher,
        )
    }

    #[tokio::test]
    async fn test_password_hash_differs_between_calls() {
        let (svc, _) = service();
        let a = svc.password_hash("hunter2".to_string()).await.unwrap();
        let b = svc.password_hash("hunter2".to_string()).await.unwrap();
        assert_ne!(a, b);
        assert!(svc.password_verify("hunter2".to_string(), a.hash).await.unwrap());
        assert!(svc.password_verify("hunter2".to_string(), b.hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_password_hash_error_is_surfaced() {
        let svc = HashService::new(FailingPasswordHasher, RecordingHasher::default());
        let err = svc.password_hash("x".to_string()).await.unwrap_err();
        assert!(matches!(err, HashError::PasswordHash(_)));
        assert_eq!(err.to_string(), "invalid cost");
    }

    #[tokio::test]
    async fn test_password_hash_panic_becomes_task_error() {
        let svc = HashService::new(PanickingPasswordHasher, RecordingHasher::default());
        let err = svc.password_hash("x".to_string()).await.unwrap_err();
        assert!(matches!(err, HashError::Task(_)));
    }

    #[test]
    fn test_content_hash_uses_utf8_bytes() {
        let (svc, hasher) = service();
        let resp = svc.content_hash("héllo").unwrap();
        assert_eq!(resp.hash, "len:6");
        assert_eq!(*hasher.sizes.lock().unwrap(), vec![6]);
    }

    #[tokio::test]
    async fn test_file_hash_feeds_bounded_chunks() {
        let (svc, hasher) = service();
        let input = vec![0xABu8; 50_000];
        let resp = svc.file_hash(&input[..]).await.unwrap();

        assert_eq!(resp.hash, "len:50000");
        let sizes = hasher.sizes.lock().unwrap();
        assert!(sizes.iter().all(|&n| n <= stream::FILE_CHUNK_SIZE));
        assert_eq!(sizes.iter().sum::<usize>(), 50_000);
    }

    #[tokio::test]
    async fn test_file_hash_empty_upload() {
        let (svc, hasher) = service();
        let resp = svc.file_hash(&b""[..]).await.unwrap();
        assert_eq!(resp.hash, "len:0");
        assert!(hasher.sizes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_hash_read_error_is_surfaced() {
        let (svc, _) = service();
        let reader = BrokenReader {
            good: vec![1u8; 10_000],
        };
        let err = svc.file_hash(reader).await.unwrap_err();
        assert!(matches!(err, HashError::Stream(_)));
        assert_eq!(err.to_string(), "client went away");
    }
}
