use anyhow::Result;
use simple_logger::SimpleLogger;

pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    SimpleLogger::new()
        .with_level(level(verbose, quiet))
        .without_timestamps()
        .init()?;

    Ok(())
}

fn level(verbose: u8, quiet: bool) -> log::LevelFilter {
    match (quiet, verbose) {
        (true, _) => log::LevelFilter::Warn,
        (false, 0) => log::LevelFilter::Info,
        (false, 1) => log::LevelFilter::Debug,
        (false, _) => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_verbosity_to_level() {
        assert_eq!(level(0, false), log::LevelFilter::Info);
        assert_eq!(level(1, false), log::LevelFilter::Debug);
        assert_eq!(level(3, false), log::LevelFilter::Trace);
        assert_eq!(level(2, true), log::LevelFilter::Warn);
    }
}
