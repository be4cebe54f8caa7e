use fern::Dispatch;
use log::LevelFilter;
use std::path::Path;

/// Map a level name to a filter, defaulting to info.
pub fn level_filter(verbosity: &str) -> LevelFilter {
    match verbosity.to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Send log records to stderr and, if given, append them to `log_file`.
pub fn setup_logging(verbosity: &str, log_file: Option<&Path>) -> Result<(), fern::InitError> {
    let mut base_config = Dispatch::new()
        .level(level_filter(verbosity))
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        base_config = base_config.chain(fern::log_file(path)?);
    }

    base_config.apply()?;
    Ok(())
}
