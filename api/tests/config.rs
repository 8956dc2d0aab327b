use api::state::app_state::DEFAULT_API_ADDRESS;
use api::{ApiConfig, AppError};
use serial_test::serial;

const VARS: [&str; 4] = [
    "API_ADDRESS",
    "CORS_ALLOWED_ORIGINS",
    "OPENAI_API_KEY",
    "OPENAI_URL",
];

fn clear_env() {
    for v in VARS {
        unsafe { std::env::remove_var(v) };
    }
}

fn set(name: &str, value: &str) {
    unsafe { std::env::set_var(name, value) };
}

#[test]
#[serial]
fn defaults_apply_with_only_api_key() {
    clear_env();
    set("OPENAI_API_KEY", "sk-test");

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.address, DEFAULT_API_ADDRESS);
    assert!(cfg.allowed_origins.is_empty());
    assert_eq!(cfg.llm.api_key.as_deref(), Some("sk-test"));
}

#[test]
#[serial]
fn overrides_are_read() {
    clear_env();
    set("OPENAI_API_KEY", "sk-test");
    set("API_ADDRESS", "0.0.0.0:8080");
    set("CORS_ALLOWED_ORIGINS", "https://a.example,https://b.example");

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.address, "0.0.0.0:8080");
    assert_eq!(cfg.allowed_origins.len(), 2);
}

#[test]
#[serial]
fn missing_api_key_fails_startup() {
    clear_env();
    let err = ApiConfig::from_env().unwrap_err();
    assert!(matches!(err, AppError::Llm(_)));
}
