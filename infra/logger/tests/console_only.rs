use otsav_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_only_has_no_guard_and_second_init_fails() {
    let logger = Logger::builder("integration-console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");

    let err = Logger::builder("integration-console-second")
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
