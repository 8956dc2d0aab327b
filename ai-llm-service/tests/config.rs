use ai_llm_service::config::default_config::{
    DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL, DEFAULT_TIMEOUT_SECS,
};
use ai_llm_service::{AiLlmError, ConfigError, config_openai_from_env};
use serial_test::serial;

const VARS: [&str; 7] = [
    "OPENAI_API_KEY",
    "OPENAI_URL",
    "OPENAI_MODEL",
    "LLM_MAX_TOKENS",
    "LLM_TEMPERATURE",
    "LLM_TIMEOUT_SECS",
    "LLM_MAX_RETRIES",
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
fn missing_api_key_is_an_error() {
    clear_env();
    let err = config_openai_from_env().unwrap_err();
    assert!(matches!(
        err,
        AiLlmError::Config(ConfigError::MissingVar("OPENAI_API_KEY"))
    ));
}

#[test]
#[serial]
fn defaults_apply() {
    clear_env();
    set("OPENAI_API_KEY", "k");
    let cfg = config_openai_from_env().unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_OPENAI_URL);
    assert_eq!(cfg.model, DEFAULT_OPENAI_MODEL);
    assert_eq!(cfg.api_key.as_deref(), Some("k"));
    assert_eq!(cfg.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.max_tokens, None);
    assert_eq!(cfg.temperature, None);
}

#[test]
#[serial]
fn overrides_apply() {
    clear_env();
    set("OPENAI_API_KEY", "k");
    set("OPENAI_URL", "http://localhost:11434/");
    set("OPENAI_MODEL", "llama3.1");
    set("LLM_MAX_TOKENS", "1024");
    set("LLM_TEMPERATURE", "0.3");
    set("LLM_TIMEOUT_SECS", "30");
    set("LLM_MAX_RETRIES", "2");
    let cfg = config_openai_from_env().unwrap();
    assert_eq!(cfg.chat_url(), "http://localhost:11434/v1/chat/completions");
    assert_eq!(cfg.model, "llama3.1");
    assert_eq!(cfg.max_tokens, Some(1024));
    assert_eq!(cfg.temperature, Some(0.3));
    assert_eq!(cfg.timeout_secs, Some(30));
    assert_eq!(cfg.max_retries, 2);
    clear_env();
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    clear_env();
    set("OPENAI_API_KEY", "k");
    set("OPENAI_URL", "api.openai.com");
    assert!(matches!(
        config_openai_from_env(),
        Err(AiLlmError::Config(ConfigError::InvalidFormat { .. }))
    ));

    set("OPENAI_URL", "https://api.openai.com");
    set("LLM_MAX_RETRIES", "many");
    assert!(matches!(
        config_openai_from_env(),
        Err(AiLlmError::Config(ConfigError::InvalidNumber {
            var: "LLM_MAX_RETRIES",
            ..
        }))
    ));

    unsafe { std::env::remove_var("LLM_MAX_RETRIES") };
    set("LLM_TEMPERATURE", "3.5");
    assert!(matches!(
        config_openai_from_env(),
        Err(AiLlmError::Config(ConfigError::OutOfRange { .. }))
    ));
    clear_env();
}
