//! Byte-source acquisition: local paths and remote object references.
//!
//! Resolves a document reference to a seekable byte stream. Remote
//! `s3://bucket/key` references go through an [`ObjectFetcher`] supplied
//! by the caller (credentials and retries live there, not here) and can
//! be cached in a flat directory keyed by a content hash of the
//! reference string.

use std::fs::{self, File};
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Default cache directory for fetched remote objects.
pub const DEFAULT_CACHE_DIR: &str = ".cache/files";

/// Options for document acquisition.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Whether remote fetches read and populate the local cache.
    pub use_cache: bool,

    /// Flat directory holding cached objects.
    pub cache_dir: PathBuf,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }
}

impl SourceOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the cache.
    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Set the cache directory.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }
}

/// Fetches a remote object's bytes. Transport, credentials, and retry
/// policy are the implementor's concern.
pub trait ObjectFetcher {
    /// Fetch the full object at `bucket`/`key`.
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

/// Fetcher for local-only callers: every fetch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteDisabled;

impl ObjectFetcher for RemoteDisabled {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        Err(Error::RemoteFetch {
            reference: format!("s3://{}/{}", bucket, key),
            message: "no remote fetcher configured".to_string(),
        })
    }
}

/// A seekable byte stream backing one document.
#[derive(Debug)]
pub enum ByteSource {
    /// Stream over a file on disk (local reference or cache hit).
    File(File),

    /// Stream over fetched bytes held in memory.
    Memory(Cursor<Vec<u8>>),
}

impl Read for ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ByteSource::File(f) => f.read(buf),
            ByteSource::Memory(c) => c.read(buf),
        }
    }
}

impl Seek for ByteSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            ByteSource::File(f) => f.seek(pos),
            ByteSource::Memory(c) => c.seek(pos),
        }
    }
}

/// Whether a reference names a remote object rather than a local path.
pub fn is_object_uri(reference: &str) -> bool {
    reference.starts_with("s3://")
}

fn object_uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^s3://([^/]+)/(.+)$").expect("valid pattern"))
}

/// Split an `s3://bucket/key` reference into bucket and key.
pub fn parse_object_uri(reference: &str) -> Result<(String, String)> {
    let captures = object_uri_pattern()
        .captures(reference)
        .ok_or_else(|| Error::InvalidObjectUri(reference.to_string()))?;
    Ok((captures[1].to_string(), captures[2].to_string()))
}

/// Cache key for a reference: lowercase hex SHA-256 of the reference
/// string.
pub fn cache_key(reference: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(reference.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Open a document reference as a seekable byte stream.
///
/// Local paths open directly and fail with [`Error::NotFound`] when
/// absent; the cache never applies to them. Remote references consult
/// the cache first (when enabled), otherwise fetch through `fetcher` and
/// write the cache back best-effort.
pub fn open_document(
    reference: &str,
    options: &SourceOptions,
    fetcher: &dyn ObjectFetcher,
) -> Result<ByteSource> {
    if is_object_uri(reference) {
        open_remote(reference, options, fetcher)
    } else {
        if !Path::new(reference).exists() {
            return Err(Error::NotFound(reference.to_string()));
        }
        Ok(ByteSource::File(File::open(reference)?))
    }
}

fn open_remote(
    reference: &str,
    options: &SourceOptions,
    fetcher: &dyn ObjectFetcher,
) -> Result<ByteSource> {
    let (bucket, key) = parse_object_uri(reference)?;
    let cache_path = options.cache_dir.join(cache_key(reference));

    if options.use_cache && cache_path.exists() {
        log::debug!("cache hit for {}", reference);
        return Ok(ByteSource::File(File::open(cache_path)?));
    }

    let data = fetcher.fetch(&bucket, &key)?;

    if options.use_cache {
        if let Err(err) = write_cache(&cache_path, &data) {
            log::warn!("could not cache {}: {}", reference, err);
        }
    }

    Ok(ByteSource::Memory(Cursor::new(data)))
}

fn write_cache(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)
}
