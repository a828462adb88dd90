use acme_extract::cli::{Cli, OutputFormat};
use acme_extract::{ConfigError, Settings};
use clap::Parser;
use std::path::PathBuf;

fn cli(domain: &str) -> Cli {
    Cli {
        domain: domain.to_string(),
        resolver_name: "myresolver".to_string(),
        acme_json_path: PathBuf::from("/data/acme.json"),
        out_dir: PathBuf::from("/certs"),
        format: OutputFormat::Text,
        no_color: false,
    }
}

#[test]
fn test_settings_from_cli() {
    let settings = Settings::from_cli(&cli("example.com")).unwrap();
    assert_eq!(settings.domains, vec!["example.com".to_string()]);
    assert_eq!(settings.resolver_name, "myresolver");
    assert_eq!(settings.acme_json_path, PathBuf::from("/data/acme.json"));
    assert_eq!(settings.out_dir, PathBuf::from("/certs"));
}

#[test]
fn test_settings_from_cli_keeps_domain_verbatim() {
    let settings = Settings::from_cli(&cli(" example.com")).unwrap();
    assert_eq!(settings.domains, vec![" example.com".to_string()]);
}

#[test]
fn test_settings_from_cli_rejects_blank_domain() {
    let err = Settings::from_cli(&cli("   ")).unwrap_err();
    assert!(matches!(err, ConfigError::MissingRequired { key } if key == "DOMAIN"));
}

#[test]
fn test_settings_from_cli_rejects_traversal() {
    let err = Settings::from_cli(&cli("../../etc")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDomain { .. }));
}

#[test]
fn test_parse_flags() {
    let cli = Cli::try_parse_from([
        "acme-extract",
        "--domain",
        "example.com",
        "--resolver",
        "le",
        "--acme-json",
        "acme.json",
        "--out-dir",
        "out",
        "--format",
        "json",
    ])
    .unwrap();
    assert_eq!(cli.domain, "example.com");
    assert_eq!(cli.resolver_name, "le");
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(!cli.no_color);
}

#[test]
fn test_output_format_display() {
    assert_eq!(OutputFormat::Text.to_string(), "text");
    assert_eq!(OutputFormat::Json.to_string(), "json");
}
