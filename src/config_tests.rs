use crate::config::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    unsafe {
        env::remove_var("MODEL_PATH");
        env::remove_var("ENCODER_PATH");
        env::remove_var("DATASET_PATH");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.model_path, PathBuf::from("data/model.json"));
    assert_eq!(config.encoder_path, PathBuf::from("data/encoder_city.json"));
    assert_eq!(
        config.dataset_path,
        PathBuf::from("data/houses_to_rent_v2.csv")
    );
}

#[test]
fn test_config_env_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    unsafe {
        env::set_var("MODEL_PATH", "/tmp/other_model.json");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.model_path, PathBuf::from("/tmp/other_model.json"));

    // Cleanup
    unsafe {
        env::remove_var("MODEL_PATH");
    }
}
