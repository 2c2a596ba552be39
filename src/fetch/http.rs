use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    time::Instant,
};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use url::Url;

use crate::error::FetchError;
use crate::fetch::Fetcher;

/// Blocking HTTP downloader.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("stockdraw/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Passes writes through and keeps the first write error, so a failing disk
/// can be told apart from a failing connection once `copy_to` returns.
struct WriteTracker<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteTracker<W> {
    fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn record(&mut self, e: io::Error) -> io::Error {
        let kind = e.kind();
        if kind != io::ErrorKind::Interrupted && self.error.is_none() {
            self.error = Some(e);
        }
        io::Error::from(kind)
    }
}

impl<W: Write> Write for WriteTracker<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).map_err(|e| self.record(e))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().map_err(|e| self.record(e))
    }
}

impl Fetcher for HttpFetcher {
    /// The body is streamed into a temp file next to `dest` and renamed over
    /// it once complete, so `dest` is never left half-written.
    fn fetch(&self, url_str: &str, dest: &Path) -> Result<(), FetchError> {
        let url = Url::parse(url_str).map_err(|source| FetchError::InvalidUrl {
            url: url_str.to_string(),
            source,
        })?;
        let network = |source| FetchError::Network {
            url: url_str.to_string(),
            source,
        };

        info!(url=%url, path=%dest.display(), "downloading");
        let start = Instant::now();

        let mut resp = self.client.get(url.as_str()).send().map_err(network)?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Remote {
                url: url_str.to_string(),
                status: status.as_u16(),
            });
        }

        let fs_err =
            |path: PathBuf| move |source: io::Error| FetchError::Filesystem { path, source };
        let dir = match dest.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(fs_err(dir.to_path_buf()))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(fs_err(dir.to_path_buf()))?;
        debug!(tmp=%tmp.path().display(), "staging download");

        let mut sink = WriteTracker::new(tmp.as_file_mut());
        let bytes = match resp.copy_to(&mut sink) {
            Ok(n) => n,
            Err(e) => {
                return Err(match sink.take_error() {
                    Some(source) => FetchError::Filesystem {
                        path: tmp.path().to_path_buf(),
                        source,
                    },
                    None => network(e),
                })
            }
        };
        tmp.as_file()
            .sync_all()
            .map_err(fs_err(tmp.path().to_path_buf()))?;
        tmp.persist(dest)
            .map_err(|e| FetchError::Filesystem {
                path: dest.to_path_buf(),
                source: e.error,
            })?;

        info!(bytes, elapsed=?start.elapsed(), "downloaded");
        Ok(())
    }
}
