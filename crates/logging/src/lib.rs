//! helpers for logging.

/// Log to stderr.
///
/// If called multiple times in the same process, only applies once.  The level comes from `RUST_LOG` and defaults to
/// `info`.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format(|buf, record| {
                use std::io::Write;

                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {} time={} target={}",
                    record.level(),
                    record.args(),
                    now,
                    record.target()
                )
            })
            .init();
        log::debug!("stderr logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_call_keeps_first_logger() {
        log_to_stderr();
        let level = log::max_level();
        assert_ne!(level, log::LevelFilter::Off);

        log_to_stderr();
        assert_eq!(log::max_level(), level);
        let error = log::Metadata::builder().level(log::Level::Error).build();
        assert!(log::logger().enabled(&error));
    }
}
