// src/log.rs
// Subscriber setup for the binary. Library code only emits `tracing` events.
//
// Lines go to stderr, stamped with time since start, so stdout carries only
// the JSON map. `RUST_LOG` wins over the verbosity flag when set.

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "mvc_scrape=info",
        1 => "mvc_scrape=debug",
        _ => "mvc_scrape=trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "mvc_scrape=info");
        assert_eq!(default_directive(1), "mvc_scrape=debug");
        assert_eq!(default_directive(5), "mvc_scrape=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
