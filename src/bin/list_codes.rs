//! list_codes.rs: print every stock code in this month's JPX listing.
//!
//! - Refreshes the local `data_j_<YYYY-MM>.xls` cache exactly like the main binary
//!   (stale months removed, download only when the month's file is missing).
//! - Writes one code per line to stdout, in sheet order.

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::io::{self, BufWriter, Write};
use stockdraw::{logging, Config, Drawer, HttpFetcher, XlsExtractor};
use tracing::info;

fn main() -> Result<()> {
    logging::init()
        .map_err(|e| anyhow!(e))
        .context("initialising logging")?;

    let config = Config::default();
    let extractor = XlsExtractor::new(config.code_column);
    let fetcher = HttpFetcher::new().context("building HTTP client")?;
    let drawer = Drawer::new(config, fetcher, extractor);

    let (listing, codes) = drawer
        .load_codes(Local::now().date_naive())
        .context("loading stock codes")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for code in &codes {
        writeln!(out, "{}", code)?;
    }
    out.flush()?;

    info!(count = codes.len(), cache=%listing.path.display(), "listed");
    Ok(())
}
