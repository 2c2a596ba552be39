use chrono::NaiveDate;
use rand::Rng;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::cache;
use crate::config::Config;
use crate::error::DrawError;
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::pick::pick_code;

/// The month's listing as found (or placed) on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedListing {
    pub path: PathBuf,
    pub downloaded: bool,
}

/// Result of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub code: String,
    pub cache_path: PathBuf,
    pub downloaded: bool,
    pub candidates: usize,
}

/// Runs cache check, optional cleanup + download, extraction and selection.
pub struct Drawer<F, E> {
    config: Config,
    fetcher: F,
    extractor: E,
}

impl<F: Fetcher, E: Extractor> Drawer<F, E> {
    pub fn new(config: Config, fetcher: F, extractor: E) -> Self {
        Self {
            config,
            fetcher,
            extractor,
        }
    }

    /// Make sure the listing for `today`'s month is on disk.
    ///
    /// An existing file for the month is reused as-is. Otherwise every cache
    /// file from another month is removed (failures are only logged) and the
    /// listing is downloaded.
    pub fn ensure_cache(&self, today: NaiveDate) -> Result<CachedListing, DrawError> {
        let tag = Config::month_tag(today);
        let path = self.config.cache_path(&tag);

        if path.is_file() {
            info!(path=%path.display(), "listing for {} already cached; skipping download", tag);
            return Ok(CachedListing {
                path,
                downloaded: false,
            });
        }

        let report = cache::cleanup_stale(&self.config, &tag)?;
        if !report.failed.is_empty() {
            warn!(
                removed = report.removed.len(),
                failed = report.failed.len(),
                "stale cleanup incomplete"
            );
        }

        self.fetcher.fetch(&self.config.source_url, &path)?;
        Ok(CachedListing {
            path,
            downloaded: true,
        })
    }

    /// Ensure the cache and read every stock code out of it.
    pub fn load_codes(
        &self,
        today: NaiveDate,
    ) -> Result<(CachedListing, Vec<String>), DrawError> {
        let listing = self.ensure_cache(today)?;
        info!(path=%listing.path.display(), "reading stock codes");
        let codes = self.extractor.extract_codes(&listing.path)?;
        info!(count = codes.len(), "extracted stock codes");
        Ok((listing, codes))
    }

    /// Full run: load the month's codes and pick one with `rng`.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Draw, DrawError> {
        let (listing, codes) = self.load_codes(today)?;
        let code = pick_code(&codes, rng)
            .ok_or_else(|| DrawError::EmptyResult {
                path: listing.path.clone(),
            })?
            .to_string();

        Ok(Draw {
            code,
            cache_path: listing.path,
            downloaded: listing.downloaded,
            candidates: codes.len(),
        })
    }
}
