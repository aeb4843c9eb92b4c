//! Integration tests for loading configuration directories end to end.
//!
//! These tests drive the public API the way a host container would: write a
//! directory of YAML files, pick an environment, and inspect the registry.

use std::fs;
use std::path::Path;

use service_loader::{
    ConfigDocument, ConfigStage, Environment, EnvironmentAwareLoader, InMemoryRegistry,
    LoadOutcome, LoaderError, MergeError, ServiceRegistry,
};
use tempfile::TempDir;

const BASE_WITH_TEST_SERVICE: &str = r#"
services:
  _defaults:
    autowire: true
    autoconfigure: true

  TestService:
    class: stdClass
"#;

const DEV_WITH_DEV_SERVICE: &str = r#"
services:
  _defaults:
    autowire: true

  DevService:
    class: stdClass
"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn load(dir: &Path, env: &str) -> (Result<service_loader::LoadReport, LoaderError>, InMemoryRegistry) {
    let mut registry = InMemoryRegistry::new();
    let result = EnvironmentAwareLoader::new().load(dir, &Environment::from(env), &mut registry);
    (result, registry)
}

/// Base file only, production environment.
#[test]
fn test_scenario_a_base_only_in_prod() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "services.yaml", BASE_WITH_TEST_SERVICE);

    let (result, registry) = load(temp_dir.path(), "prod");
    result.expect("base file should load");

    assert!(registry.contains("TestService"));
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["TestService"]);
}

/// Base and dev override, dev environment.
#[test]
fn test_scenario_b_dev_override_in_dev() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "services.yaml", BASE_WITH_TEST_SERVICE);
    write(temp_dir.path(), "services_dev.yaml", DEV_WITH_DEV_SERVICE);

    let (result, registry) = load(temp_dir.path(), "dev");
    let report = result.expect("dev override should load");

    assert!(registry.contains("TestService"));
    assert!(registry.contains("DevService"));
    assert_eq!(
        report.outcome,
        LoadOutcome::OverrideLoaded(ConfigStage::DevOverride)
    );
    assert_eq!(
        report.files.iter().map(|f| f.stage).collect::<Vec<_>>(),
        vec![ConfigStage::Base, ConfigStage::DevOverride]
    );
}

/// Base and dev override, production environment.
#[test]
fn test_scenario_c_dev_override_ignored_in_prod() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "services.yaml", BASE_WITH_TEST_SERVICE);
    write(temp_dir.path(), "services_dev.yaml", DEV_WITH_DEV_SERVICE);

    let (result, registry) = load(temp_dir.path(), "prod");
    let report = result.expect("base file should load");

    assert!(registry.contains("TestService"));
    assert!(!registry.contains("DevService"));
    assert_eq!(report.outcome, LoadOutcome::NoOverride);
}

/// Base file with parameters but no services key.
#[test]
fn test_scenario_d_missing_services_key() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "services.yaml",
        "parameters:\n  some_param: value\n",
    );

    let (result, registry) = load(temp_dir.path(), "prod");
    let err = result.unwrap_err();

    assert!(matches!(err, LoaderError::MalformedDocument { .. }));
    assert!(err.to_string().contains("services"));
    assert!(registry.is_empty());
}

/// Stray YAML file next to a valid base file.
#[test]
fn test_scenario_e_stray_file_rejected_before_merge() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "services.yaml", BASE_WITH_TEST_SERVICE);
    write(temp_dir.path(), "extra.yaml", BASE_WITH_TEST_SERVICE);

    let (result, registry) = load(temp_dir.path(), "prod");
    let err = result.unwrap_err();

    assert!(matches!(err, LoaderError::DisallowedFile { ref file, .. } if file == "extra.yaml"));
    assert!(err.to_string().contains("extra.yaml"));
    assert!(registry.is_empty());
}

#[test]
fn test_missing_defaults_mentions_snippet() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "services.yaml",
        "services:\n  TestService:\n    class: stdClass\n",
    );

    let (result, _) = load(temp_dir.path(), "prod");
    let message = result.unwrap_err().to_string();

    assert!(message.contains("services._defaults"));
    assert!(message.contains("autowire: true"));
    assert!(message.contains("autoconfigure: true"));
}

#[test]
fn test_exclude_directive_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "services.yaml",
        r#"
services:
  _defaults:
    autowire: true

  TestNamespace\:
    resource: '../src/'
    exclude:
      - '../src/Entity/'
"#,
    );

    let (result, _) = load(temp_dir.path(), "prod");
    let err = result.unwrap_err();
    assert!(matches!(err, LoaderError::ExcludeDirectiveForbidden { .. }));
    assert!(err.to_string().contains("services.yaml"));
}

#[test]
fn test_missing_base_file_is_generic_not_found() {
    let temp_dir = TempDir::new().unwrap();

    let (result, _) = load(temp_dir.path(), "prod");
    let err = result.unwrap_err();
    assert!(matches!(err, LoaderError::ResourceNotFound { .. }));
    assert!(!err.is_policy_violation());
}

#[test]
fn test_test_environment_loads_test_override() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "services.yaml", BASE_WITH_TEST_SERVICE);
    write(
        temp_dir.path(),
        "services_test.yaml",
        "services:\n  _defaults:\n    autowire: true\n  TestOnlyService:\n    class: stdClass\n",
    );

    let (result, registry) = load(temp_dir.path(), "test");
    result.unwrap();

    assert!(registry.contains("TestService"));
    assert!(registry.contains("TestOnlyService"));
}

#[test]
fn test_custom_tags_are_carried_through() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "services.yaml",
        r#"
services:
  _defaults:
    autowire: true

  App\HandlerRegistry:
    arguments:
      - !tagged_iterator app.handler
"#,
    );

    let (result, registry) = load(temp_dir.path(), "prod");
    result.unwrap();
    assert!(registry.contains("App\\HandlerRegistry"));
}

#[test]
fn test_loading_is_idempotent_across_fresh_registries() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "services.yaml", BASE_WITH_TEST_SERVICE);
    write(temp_dir.path(), "services_dev.yaml", DEV_WITH_DEV_SERVICE);

    for env in ["prod", "dev", "test", "staging"] {
        let (first_result, first) = load(temp_dir.path(), env);
        let (second_result, second) = load(temp_dir.path(), env);

        assert_eq!(first_result.unwrap(), second_result.unwrap());
        assert_eq!(first, second, "registries differ for environment {env}");
    }
}

/// A registry that records merge order, standing in for a host container.
#[derive(Default)]
struct RecordingRegistry {
    merged: Vec<String>,
}

impl ServiceRegistry for RecordingRegistry {
    fn merge_from(&mut self, document: &ConfigDocument) -> Result<(), MergeError> {
        let name = document
            .source()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or("document has no file name")?;
        self.merged.push(name);
        Ok(())
    }

    fn contains(&self, _id: &str) -> bool {
        false
    }
}

#[test]
fn test_host_registry_receives_base_before_override() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "services.yaml", BASE_WITH_TEST_SERVICE);
    write(temp_dir.path(), "services_dev.yaml", DEV_WITH_DEV_SERVICE);

    let mut registry = RecordingRegistry::default();
    EnvironmentAwareLoader::new()
        .load(temp_dir.path(), &Environment::Dev, &mut registry)
        .unwrap();

    assert_eq!(registry.merged, vec!["services.yaml", "services_dev.yaml"]);
}
