use noteline_core::{init_logging_for_mode, logging_status, AppMode};

// Logger state is process-global, so the whole flow lives in one test.
#[test]
fn mode_from_env_drives_logger_level() {
    std::env::remove_var("TEST");
    std::env::set_var("DEVELOPMENT", "1");
    let mode = AppMode::from_env();
    assert_eq!(mode, AppMode::Development);

    std::env::set_var("TEST", "1");
    assert_eq!(AppMode::from_env(), AppMode::Test);
    std::env::remove_var("TEST");
    std::env::remove_var("DEVELOPMENT");
    assert_eq!(AppMode::from_env(), AppMode::Production);

    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();

    init_logging_for_mode(mode, &log_dir_str).unwrap();
    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "debug");
    assert_eq!(active_dir, log_dir.path());

    init_logging_for_mode(AppMode::Test, &log_dir_str).unwrap();
    let err = init_logging_for_mode(AppMode::Production, &log_dir_str).unwrap_err();
    assert!(err.contains("refusing to switch"));
}
