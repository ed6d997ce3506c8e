use tracing::Level;

/// Step `base` up by `verbose` levels, saturating at TRACE.
pub fn effective_level(base: Level, verbose: u8) -> Level {
    let mut level = base;
    for _ in 0..verbose {
        level = match level {
            Level::ERROR => Level::WARN,
            Level::WARN => Level::INFO,
            Level::INFO => Level::DEBUG,
            _ => Level::TRACE,
        };
    }
    level
}

/// Install the stderr fmt subscriber. Stdout is reserved for the summary.
pub fn init_logging(base: Level, verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(effective_level(base, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(effective_level(Level::WARN, 0), Level::WARN);
        assert_eq!(effective_level(Level::WARN, 1), Level::INFO);
        assert_eq!(effective_level(Level::WARN, 2), Level::DEBUG);
        assert_eq!(effective_level(Level::ERROR, 9), Level::TRACE);
    }
}
