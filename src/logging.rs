use log::LevelFilter;

/// External crates only need to log warnings and errors
const EXTERNAL_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let now = chrono::Local::now();

            out.finish(format_args!(
                "{} {:5} {} {}",
                now.format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(EXTERNAL_LEVEL)
        .level_for("fanfare", LevelFilter::Info)
        .level_for("actix_web::middleware::logger", LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .expect("logging is initialized")
}
