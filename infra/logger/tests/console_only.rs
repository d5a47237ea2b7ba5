use wayfarer_logger::{LevelFilter, Logger};

#[test]
fn init_console_logger() {
    let logger = Logger::builder()
        .name("integration-console")
        .console(true)
        .level(LevelFilter::DEBUG)
        .env_filter("integration=trace")
        .init()
        .expect("logger should initialize");

    assert_eq!(logger.name(), "integration-console");
    tracing::info!(offset = 320.0, "scroll-to-top visible");
}
