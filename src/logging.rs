use std::error::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Startup shared by the binaries: stderr logging filtered by `RUST_LOG`,
/// then a panic hook that reports on stderr.
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn Error + Send + Sync>> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init()?;

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init();
        assert!(init().is_err());
    }
}
