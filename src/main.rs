use anyhow::{anyhow, Context, Result};
use chrono::Local;
use stockdraw::{logging, pick::clock_seeded_rng, Config, Drawer, HttpFetcher, XlsExtractor};
use tracing::info;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init()
        .map_err(|e| anyhow!(e))
        .context("initialising logging")?;

    // ─── 2) wire up the pipeline ─────────────────────────────────────
    let config = Config::default();
    let extractor = XlsExtractor::new(config.code_column);
    let fetcher = HttpFetcher::new().context("building HTTP client")?;
    let drawer = Drawer::new(config, fetcher, extractor);

    // ─── 3) draw ─────────────────────────────────────────────────────
    let today = Local::now().date_naive();
    let mut rng = clock_seeded_rng();
    let draw = drawer
        .draw(today, &mut rng)
        .context("drawing a random stock code")?;

    info!(
        candidates = draw.candidates,
        downloaded = draw.downloaded,
        cache=%draw.cache_path.display(),
        "picked"
    );
    println!("{}", draw.code);
    Ok(())
}
