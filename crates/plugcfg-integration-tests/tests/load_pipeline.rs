//! End-to-end tests for the config loading fallback chain.

mod common;

use common::CapturedLogs;
use plugcfg_config::{ConfigError, ConfigFormat, ConfigSource, codec};
use plugcfg_test::{
    EconomyConfig, SeededConfig, TestRoot, WelcomeConfig, economy_json, economy_toml,
};

#[test]
fn economy_without_files_generates_json_default() {
    let root = TestRoot::new();
    assert!(!root.location("Economy").dir().exists());

    let resolved = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(resolved.config, EconomyConfig::default());

    let path = root.path().join("configs/plugins/Economy/Economy.json");
    assert_eq!(resolved.source, ConfigSource::Generated { path: path.clone() });

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(
        "// This configuration was automatically generated by plugcfg for plugin 'Economy', at "
    ));
    let reparsed: EconomyConfig = codec::decode_file(&path).unwrap();
    assert_eq!(reparsed, EconomyConfig::default());
}

#[test]
fn empty_plugin_directory_generates_default() {
    let root = TestRoot::new();
    std::fs::create_dir_all(root.location("Economy").dir()).unwrap();

    let resolved = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(resolved.config, EconomyConfig::default());
    assert!(root.read_real("Economy", ConfigFormat::Json).is_some());
    assert!(root.read_real("Economy", ConfigFormat::Toml).is_none());
}

#[test]
fn toml_real_file_wins_over_json() {
    let root = TestRoot::new();
    root.write_real("Economy", ConfigFormat::Json, &economy_json("from-json"));
    root.write_real("Economy", ConfigFormat::Toml, &economy_toml("from-toml"));

    let resolved = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(resolved.config.currency, "from-toml");
    assert_eq!(
        resolved.source.path(),
        Some(&root.real_path("Economy", ConfigFormat::Toml))
    );
}

#[test]
fn json_real_file_with_comments_loads() {
    let root = TestRoot::new();
    root.write_real("Economy", ConfigFormat::Json, &economy_json("gems"));

    let economy = root.loader().load::<EconomyConfig>("Economy").unwrap().into_inner();
    assert_eq!(economy.currency, "gems");
    assert_eq!(economy.starting_balance, 100);
    assert!(economy.allow_debt);
}

#[test]
fn example_json_is_copied_verbatim() {
    let root = TestRoot::new();
    let content = economy_json("example-gems");
    let example = root.write_example("Economy", ConfigFormat::Json, &content);

    let resolved = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(resolved.config.currency, "example-gems");
    assert_eq!(
        resolved.source,
        ConfigSource::CopiedExample {
            example,
            path: root.real_path("Economy", ConfigFormat::Json),
        }
    );
    assert_eq!(root.read_real("Economy", ConfigFormat::Json), Some(content));
    assert!(root.read_real("Economy", ConfigFormat::Toml).is_none());
}

#[test]
fn example_toml_is_preferred_over_example_json() {
    let root = TestRoot::new();
    root.write_example("Economy", ConfigFormat::Json, &economy_json("json-example"));
    root.write_example("Economy", ConfigFormat::Toml, &economy_toml("toml-example"));

    let resolved = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(resolved.config.currency, "toml-example");
    assert!(root.read_real("Economy", ConfigFormat::Toml).is_some());
    assert!(root.read_real("Economy", ConfigFormat::Json).is_none());
}

#[test]
fn existing_real_file_shadows_examples_of_any_format() {
    let root = TestRoot::new();
    root.write_real("Economy", ConfigFormat::Json, &economy_json("real"));
    root.write_example("Economy", ConfigFormat::Toml, &economy_toml("example"));

    let resolved = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(resolved.config.currency, "real");
    assert!(matches!(resolved.source, ConfigSource::Existing { .. }));
    assert!(root.read_real("Economy", ConfigFormat::Toml).is_none());
}

#[test]
fn malformed_real_toml_fails_instead_of_falling_back() {
    let root = TestRoot::new();
    root.write_real("Economy", ConfigFormat::Toml, "currency = ");
    root.write_example("Economy", ConfigFormat::Json, &economy_json("example"));

    let err = root.loader().load::<EconomyConfig>("Economy").unwrap_err();
    assert!(err.is_parse_error(), "expected parse error, got {err:?}");
    assert!(matches!(err, ConfigError::TomlParse { .. }));
    assert!(root.read_real("Economy", ConfigFormat::Json).is_none());
}

#[test]
fn real_json_with_wrong_shape_fails() {
    let root = TestRoot::new();
    root.write_real("Economy", ConfigFormat::Json, r#"{"currency": 5}"#);

    let err = root.loader().load::<EconomyConfig>("Economy").unwrap_err();
    assert!(matches!(err, ConfigError::JsonParse { .. }));
}

#[test]
fn yaml_file_is_never_a_candidate() {
    let root = TestRoot::new();
    root.write_plugin_file("Economy", "Economy.yaml", "currency: yaml\n");
    root.write_plugin_file("Economy", "Economy.example.yaml", "currency: yaml\n");

    let location = root.location("Economy");
    assert!(
        location
            .real_files()
            .iter()
            .chain(location.example_files())
            .all(|f| f.path.extension().and_then(|e| e.to_str()) != Some("yaml"))
    );

    let resolved = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(resolved.config, EconomyConfig::default());
    assert!(matches!(resolved.source, ConfigSource::Generated { .. }));
}

#[test]
fn broken_example_falls_back_to_generated_default() {
    let root = TestRoot::new();
    root.write_example("Economy", ConfigFormat::Json, "{ not json");

    let logs = CapturedLogs::default();
    let resolved = logs.capture(|| root.loader().load::<EconomyConfig>("Economy").unwrap());

    assert_eq!(resolved.config, EconomyConfig::default());
    let output = logs.contents();
    assert!(output.contains("copying example configuration"), "{output}");
    assert!(output.contains("failed to copy example configuration"), "{output}");
    assert!(output.contains("Economy"), "{output}");
}

#[test]
fn unwritable_plugin_directory_still_returns_default() {
    let root = TestRoot::new();
    // A regular file where the plugin directory should be.
    std::fs::create_dir_all(root.root().plugins_dir()).unwrap();
    std::fs::write(root.root().plugins_dir().join("Economy"), "").unwrap();

    let logs = CapturedLogs::default();
    let resolved = logs.capture(|| root.loader().load::<EconomyConfig>("Economy").unwrap());

    assert_eq!(resolved.config, EconomyConfig::default());
    assert_eq!(resolved.source, ConfigSource::InMemoryDefault);
    assert!(logs.contents().contains("failed to generate configuration"));
}

#[test]
fn nested_tables_round_trip_through_generated_toml() {
    let root = TestRoot::new();
    let loader = root.loader().with_default_format(ConfigFormat::Toml);

    let first = loader.load::<WelcomeConfig>("Welcome").unwrap();
    assert!(matches!(first.source, ConfigSource::Generated { .. }));
    let written = root.read_real("Welcome", ConfigFormat::Toml).unwrap();
    assert!(written.starts_with("# This configuration was automatically generated"));
    assert!(written.contains("[colors]"));

    let second = loader.load::<WelcomeConfig>("Welcome").unwrap();
    assert!(matches!(second.source, ConfigSource::Existing { .. }));
    assert_eq!(second.config, WelcomeConfig::default());
}

#[test]
fn default_config_hook_is_used_for_generation() {
    let root = TestRoot::new();
    let seeded = root.loader().load::<SeededConfig>("Seeded").unwrap().into_inner();
    assert_eq!(seeded.seed, 42);

    let written = root.read_real("Seeded", ConfigFormat::Json).unwrap();
    assert!(written.contains("\"seed\": 42"));
}

#[test]
fn plugins_are_isolated_by_directory() {
    let root = TestRoot::new();
    root.write_real("Economy", ConfigFormat::Toml, &economy_toml("economy"));

    let welcome = root.loader().load::<WelcomeConfig>("Welcome").unwrap();
    assert!(matches!(welcome.source, ConfigSource::Generated { .. }));

    let economy = root.loader().load::<EconomyConfig>("Economy").unwrap();
    assert_eq!(economy.config.currency, "economy");
}

#[test]
fn free_function_load_matches_loader() {
    let root = TestRoot::new();
    root.write_real("Economy", ConfigFormat::Toml, &economy_toml("free"));

    let economy: EconomyConfig = plugcfg_config::load(&root.root(), "Economy").unwrap();
    assert_eq!(economy.currency, "free");
}
