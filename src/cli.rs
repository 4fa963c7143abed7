use simplelog::LevelFilter;

/// Log level of the report binary. Only problems with the input are shown.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

fn log_config() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Sends log output to stderr so stdout only carries the report.
pub fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    simplelog::TermLogger::init(
        level,
        log_config(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
