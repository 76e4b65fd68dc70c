use crate::config::{Config, DEFAULT_REGULARIZATION};
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const KEYS: &[&str] = &[
    "HOF_MODEL_REGULARIZATION",
    "HOF_DEFAULT_WAR",
    "HOF_DEFAULT_HOFM",
    "HOF_DEFAULT_JAWS",
    "HOF_REGISTER_CSV",
    "HOF_BATTING_CSV",
];

fn clear_env() {
    for key in KEYS {
        unsafe { env::remove_var(key) };
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.model.regularization, DEFAULT_REGULARIZATION);
    assert_eq!(config.defaults.war, 65.0);
    assert_eq!(config.defaults.hofm, 120.0);
    assert_eq!(config.defaults.jaws, 55.0);
    assert!(config.lookup.sources().is_none());
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    unsafe {
        env::set_var("HOF_MODEL_REGULARIZATION", "0.25");
        env::set_var("HOF_DEFAULT_WAR", "70.5");
        env::set_var("HOF_REGISTER_CSV", "data/people.csv");
        env::set_var("HOF_BATTING_CSV", "data/batting.csv");
    }

    let config = Config::from_env().unwrap();

    assert!((config.model.regularization - 0.25).abs() < 1e-12);
    assert!((config.defaults.war - 70.5).abs() < 1e-12);
    // Untouched keys keep their defaults
    assert_eq!(config.defaults.jaws, 55.0);
    assert!(config.lookup.sources().is_some());

    clear_env();
}

#[test]
fn test_config_rejects_bad_values() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    unsafe { env::set_var("HOF_DEFAULT_HOFM", "lots") };
    let err = Config::from_env().unwrap_err();
    assert!(format!("{:#}", err).contains("HOF_DEFAULT_HOFM"));

    clear_env();
    unsafe { env::set_var("HOF_MODEL_REGULARIZATION", "-2") };
    assert!(Config::from_env().is_err());

    clear_env();
}
