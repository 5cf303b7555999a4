use crate::CliError;
use crate::logger;

use fd_config::LoggingConfig;
use tempfile::TempDir;

#[test]
fn given_log_file_in_missing_directory_when_initialize_then_logger_error() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing").join("fibro.log");

    // When
    let result = logger::initialize(&LoggingConfig::default(), Some(&path));

    // Then
    match result {
        Err(CliError::Logger { message }) => assert!(message.contains("fibro.log")),
        other => panic!("expected logger error, got {other:?}"),
    }
}
