//! Tests for verifier configuration loading.

use opendart_verify::{DEFAULT_MAX_RETRIES, EndpointVerifier, VerifierConfig};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_defaults() {
    let config = VerifierConfig::default();

    assert_eq!(*config.max_retries(), DEFAULT_MAX_RETRIES);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(*config.rate_limit().min_delay_secs(), 0.5);
    assert_eq!(*config.rate_limit().max_delay_secs(), 16.0);
    assert_eq!(config.test_data().corp_code, "00126380");
    assert_eq!(config.test_data().sj_div, "BS");
    assert!(config.api_key().is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
    let file = toml_file(
        r#"
api_key = "test-key"
max_retries = 5

[rate_limit]
max_delay_secs = 8.0

[test_data]
corp_code = "00164779"
"#,
    )?;

    let config = VerifierConfig::from_file(file.path())?;

    assert_eq!(config.api_key().as_deref(), Some("test-key"));
    assert_eq!(*config.max_retries(), 5);
    assert_eq!(*config.rate_limit().max_delay_secs(), 8.0);
    assert_eq!(*config.rate_limit().min_delay_secs(), 0.5);
    assert_eq!(config.test_data().corp_code, "00164779");
    assert_eq!(config.test_data().bsns_year, "2023");
    Ok(())
}

#[test]
fn test_invalid_rate_limit_is_rejected() -> anyhow::Result<()> {
    for body in [
        "[rate_limit]\nbackoff_factor = 1.0\n",
        "[rate_limit]\nrecovery_factor = 1.5\n",
        "[rate_limit]\nmin_delay_secs = 20.0\n",
        "[rate_limit]\nmin_delay_secs = -1.0\n",
    ] {
        let file = toml_file(body)?;
        let err = VerifierConfig::from_file(file.path()).expect_err(body);
        assert!(err.to_string().contains("rate_limit: "), "{body}: {err}");
    }
    Ok(())
}

#[test]
fn test_zero_timeout_names_the_setting() -> anyhow::Result<()> {
    let file = toml_file("timeout_secs = 0\n")?;
    let err = VerifierConfig::from_file(file.path()).expect_err("zero timeout");
    assert!(err.to_string().contains("timeout_secs: must be at least 1"), "{err}");
    Ok(())
}

#[test]
fn test_malformed_file_is_a_config_error() -> anyhow::Result<()> {
    let file = toml_file("max_retries = \"many\"\n")?;
    let err = VerifierConfig::from_file(file.path()).expect_err("bad type");
    assert!(err.to_string().contains("Configuration Error"));
    Ok(())
}

#[test]
fn test_missing_explicit_file_fails() {
    let result = VerifierConfig::load_with(Some(std::path::Path::new(
        "/nonexistent/opendart-verify.toml",
    )));
    assert!(result.is_err());
}

#[test]
fn test_explicit_file_overrides_bundled_defaults() -> anyhow::Result<()> {
    let file = toml_file("max_retries = 7\n\n[test_data]\nbsns_year = \"2022\"\n")?;

    let config = VerifierConfig::load_with(Some(file.path()))?;

    assert_eq!(*config.max_retries(), 7);
    assert_eq!(config.test_data().bsns_year, "2022");
    assert_eq!(config.test_data().reprt_code, "11011");
    Ok(())
}

#[test]
fn test_verifier_requires_api_key() {
    let config = VerifierConfig::default();
    let err = EndpointVerifier::from_config(&config)
        .err()
        .expect("missing key rejected");
    assert!(err.to_string().contains("API key"));

    let config = VerifierConfig::default().with_api_key("   ");
    assert!(EndpointVerifier::from_config(&config).is_err());
}

#[test]
fn test_verifier_from_config_applies_settings() -> anyhow::Result<()> {
    let file = toml_file("max_retries = 1\n[rate_limit]\nmin_delay_secs = 1.0\n")?;
    let config = VerifierConfig::from_file(file.path())?
        .with_api_key("test-key")
        .with_base_url("http://127.0.0.1:9");

    let verifier = EndpointVerifier::from_config(&config)?;

    assert_eq!(*verifier.rate_limiter().current_delay(), Duration::from_secs(1));
    assert_eq!(verifier.api().base_url(), "http://127.0.0.1:9");
    assert_eq!(verifier.registry().len(), 30);
    Ok(())
}
