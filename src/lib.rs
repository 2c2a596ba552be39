pub mod cache;
pub mod config;
pub mod draw;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod pick;

pub use config::Config;
pub use draw::{Draw, Drawer};
pub use error::{DrawError, ExtractError, FetchError};
pub use extract::{Extractor, XlsExtractor};
pub use fetch::{Fetcher, HttpFetcher};
