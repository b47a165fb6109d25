//! Integration tests for encoding configs to disk and decoding them back.

use plugcfg_config::{ConfigError, ConfigFormat, Provenance, codec};
use plugcfg_test::{EconomyConfig, TestRoot, WelcomeConfig};

#[test]
fn generated_files_decode_to_the_original_value() {
    let root = TestRoot::new();
    let welcome = WelcomeConfig {
        message: "hi \"there\" // not a comment".to_string(),
        ..WelcomeConfig::default()
    };

    for format in ConfigFormat::PRIORITY {
        let text = codec::encode(&welcome, format, &Provenance::now("plugcfg", "Welcome")).unwrap();
        let path = root.write_real("Welcome", format, &text);

        let decoded: WelcomeConfig = codec::decode_file(&path).unwrap();
        assert_eq!(decoded, welcome, "round trip through {format} failed");
    }
}

#[test]
fn provenance_is_exactly_one_line() {
    let economy = EconomyConfig::default();
    for format in ConfigFormat::PRIORITY {
        let text = codec::encode(&economy, format, &Provenance::now("Host", "Economy")).unwrap();
        let comment_lines = text
            .lines()
            .take_while(|l| l.starts_with(format.comment_token()))
            .count();
        assert_eq!(comment_lines, 1, "{format}: {text}");
        assert!(text.lines().next().unwrap().contains("for plugin 'Economy'"));
    }
}

#[test]
fn decode_file_rejects_unknown_extension() {
    let root = TestRoot::new();
    let path = root.write_plugin_file("Economy", "Economy.yaml", "currency: x");

    let result: Result<EconomyConfig, _> = codec::decode_file(&path);
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
}

#[test]
fn json_block_comments_spanning_lines_are_skipped() {
    let root = TestRoot::new();
    let path = root.write_real(
        "Economy",
        ConfigFormat::Json,
        "/*\n * Economy\n */\n{\n  \"currency\": \"c\", /* inline */\n  \"starting_balance\": 1,\n  \"allow_debt\": false\n}\n// end\n",
    );

    let decoded: EconomyConfig = codec::decode_file(&path).unwrap();
    assert_eq!(decoded.currency, "c");
}

#[test]
fn toml_and_json_generated_from_same_value_agree() {
    let economy = EconomyConfig {
        currency: "gold".to_string(),
        starting_balance: 12,
        allow_debt: true,
    };
    let provenance = Provenance::now("plugcfg", "Economy");

    let as_toml = codec::encode(&economy, ConfigFormat::Toml, &provenance).unwrap();
    let as_json = codec::encode(&economy, ConfigFormat::Json, &provenance).unwrap();

    let from_toml: serde_json::Value =
        codec::decode_str(&as_toml, ConfigFormat::Toml, "<toml>").unwrap();
    let from_json: serde_json::Value =
        codec::decode_str(&as_json, ConfigFormat::Json, "<json>").unwrap();
    assert_eq!(from_toml, from_json);
}
