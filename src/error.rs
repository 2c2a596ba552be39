use std::path::PathBuf;
use thiserror::Error;

/// Failure while downloading the listing.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("GET {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned status {status}")]
    Remote { url: String, status: u16 },

    #[error("writing {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while reading stock codes out of a spreadsheet.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("opening spreadsheet {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("no first sheet in {}", path.display())]
    SheetNotFound { path: PathBuf },
}

/// Any fatal failure of a draw run.
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("scanning cache files with `{pattern}`")]
    CacheScan {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("no stock codes found in {}", path.display())]
    EmptyResult { path: PathBuf },
}
