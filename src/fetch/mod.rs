// src/fetch/mod.rs

use crate::error::FetchError;
use std::path::Path;

pub mod http;

pub use http::HttpFetcher;

/// Downloads a remote resource onto a local path.
pub trait Fetcher {
    /// Write the full body of `url` to `dest`, replacing any existing file.
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        (**self).fetch(url, dest)
    }
}
