use revisao_poo::utils::validation::Validate;
use revisao_poo::{DemoError, Driver, Pokemon, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_scenario(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_scenario_file_matches_default_wiring() {
    let file = write_scenario(
        r#"
[client]
name = "Lucas"
age = 30
weight = 70

[city]
name = "Joinville"

[[pokemon]]
name = "Charmander"

[[pokemon]]
name = "Frokie"
"#,
    );

    let scenario = TomlConfig::from_file(file.path()).unwrap();
    scenario.validate().unwrap();
    let client = Driver::new(scenario).run();

    assert_eq!(client.name(), "Lucas");
    assert_eq!(client.age(), 30);
    assert_eq!(client.weight(), 70.0);
    assert_eq!(client.city().unwrap().name(), "Joinville");
    let names: Vec<&str> = client.pokemon_list().iter().map(Pokemon::name).collect();
    assert_eq!(names, vec!["Charmander", "Frokie"]);
}

#[test]
fn test_scenario_without_city_leaves_client_unassigned() {
    let file = write_scenario("[client]\nname = \"Lucas\"\nage = -3\nweight = -1.0\n");

    let client = Driver::new(TomlConfig::from_file(file.path()).unwrap()).run();

    assert!(client.city().is_none());
    assert_eq!(client.age(), -3);
    assert_eq!(client.weight(), -1.0);
}

#[test]
fn test_env_vars_are_substituted() {
    std::env::set_var("REVISAO_POO_TEST_CITY", "Blumenau");
    let file = write_scenario(
        "[client]\nname = \"Lucas\"\n\n[city]\nname = \"${REVISAO_POO_TEST_CITY}\"\n",
    );

    let scenario = TomlConfig::from_file(file.path()).unwrap();

    assert_eq!(scenario.city.as_ref().unwrap().name, "Blumenau");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TomlConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, DemoError::IoError(_)));
}

#[test]
fn test_bundled_scenario_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/joinville.toml");
    let scenario = TomlConfig::from_file(path).unwrap();
    scenario.validate().unwrap();

    let client = Driver::new(scenario).run();
    assert_eq!(client.pokemon_list().len(), 2);
}
