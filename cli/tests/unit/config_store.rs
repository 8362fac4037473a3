//! Unit tests for the YAML config store.

use runup_cli::application::ports::ConfigStore as _;
use runup_cli::infra::config::YamlConfigStore;

#[test]
fn default_path_is_project_local() {
    // RUNUP_CONFIG is not set in the test environment.
    assert_eq!(
        YamlConfigStore.path(),
        std::path::PathBuf::from("runup.yaml")
    );
}

#[test]
fn missing_file_yields_defaults() {
    // The test process runs in the crate directory, which carries no
    // runup.yaml.
    let cfg = YamlConfigStore.load().expect("defaults");
    assert_eq!(cfg.server.port, 8000);
    assert_eq!(cfg.env.path, std::path::PathBuf::from(".venv"));
}
