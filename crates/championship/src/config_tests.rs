use super::*;

#[test]
fn test_default_config() {
    let config = ChampionshipConfig::default();
    assert_eq!(config.teams.len(), 10);
    assert_eq!(config.teams[0], "Spartak");
    assert_eq!(config.max_goals, 5);
    assert!(config.seed.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ChampionshipConfig::from_toml_str("seed = 42\n").unwrap();
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.teams.len(), 10);
    assert_eq!(config.max_goals, 5);
}

#[test]
fn test_full_toml() {
    let config = ChampionshipConfig::from_toml_str(
        r#"
teams = ["Ajax", "PSV", "Feyenoord"]
max_goals = 3
"#,
    )
    .unwrap();
    assert_eq!(config.teams, vec!["Ajax", "PSV", "Feyenoord"]);
    assert_eq!(config.max_goals, 3);
}

#[test]
fn test_duplicate_team_rejected() {
    let err = ChampionshipConfig::from_toml_str(r#"teams = ["Ajax", "PSV", "Ajax"]"#).unwrap_err();
    assert!(matches!(err, ChampionshipError::DuplicateTeam(ref name) if name == "Ajax"));
}

#[test]
fn test_single_team_rejected() {
    let err = ChampionshipConfig::from_toml_str(r#"teams = ["Ajax"]"#).unwrap_err();
    assert!(matches!(err, ChampionshipError::TooFewTeams(1)));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = ChampionshipConfig::from_toml_str("max_goals = \"lots\"").unwrap_err();
    assert!(matches!(err, ChampionshipError::ConfigParse(_)));
}

#[test]
fn test_load_or_default_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ChampionshipConfig::load_or_default(dir.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(config, ChampionshipConfig::default());
}

#[test]
fn test_load_or_default_reads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, "teams = [\"Ajax\", \"PSV\"]\nseed = 7\n").unwrap();

    let config = ChampionshipConfig::load_or_default(&path).unwrap();
    assert_eq!(config.teams, vec!["Ajax", "PSV"]);
    assert_eq!(config.seed, Some(7));
}

#[test]
fn test_load_or_default_reports_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, "teams = [\"Ajax\"]\n").unwrap();

    let err = ChampionshipConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ChampionshipError::TooFewTeams(1)));
}

#[test]
fn test_load_or_default_reports_unreadable_path() {
    // A directory exists but cannot be read as a file
    let dir = tempfile::tempdir().unwrap();
    let err = ChampionshipConfig::load_or_default(dir.path()).unwrap_err();
    assert!(matches!(err, ChampionshipError::ConfigRead { .. }));
}

#[test]
fn test_missing_file_is_read_error() {
    let err = ChampionshipConfig::load("definitely/not/here/championship.toml").unwrap_err();
    assert!(matches!(err, ChampionshipError::ConfigRead { .. }));
    assert!(err.to_string().contains("championship.toml"));
}
