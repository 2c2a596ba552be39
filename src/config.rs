use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

/// JPX monthly listing of all TSE-listed issues.
pub const JPX_LISTING_URL: &str =
    "https://www.jpx.co.jp/markets/statistics-equities/misc/tvdivq0000001vg2-att/data_j.xls";

/// Where the listing comes from and how it is cached locally.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote spreadsheet to download.
    pub source_url: String,
    /// Directory holding the monthly cache files.
    pub cache_dir: PathBuf,
    /// Cache filename prefix, e.g. `data_j_`.
    pub file_prefix: String,
    /// Cache filename extension without the dot.
    pub extension: String,
    /// Zero-based column holding the stock code.
    pub code_column: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: JPX_LISTING_URL.to_string(),
            cache_dir: PathBuf::from("."),
            file_prefix: "data_j_".to_string(),
            extension: "xls".to_string(),
            code_column: 1,
        }
    }
}

impl Config {
    /// `YYYY-MM` tag embedded in the cache filename for `date`.
    pub fn month_tag(date: NaiveDate) -> String {
        format!("{:04}-{:02}", date.year(), date.month())
    }

    /// Cache filename (no directory) for the given month tag.
    pub fn cache_file_name(&self, tag: &str) -> String {
        format!("{}{}.{}", self.file_prefix, tag, self.extension)
    }

    /// Full cache path for the given month tag.
    pub fn cache_path(&self, tag: &str) -> PathBuf {
        self.cache_dir.join(self.cache_file_name(tag))
    }

    /// Glob matching every cache file regardless of month.
    pub fn cache_glob(&self) -> String {
        let dir = glob::Pattern::escape(&self.cache_dir.to_string_lossy());
        format!("{}/{}*.{}", dir, self.file_prefix, self.extension)
    }
}
