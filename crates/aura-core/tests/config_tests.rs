use aura_core::{AuraConfig, AuraEngine, AuraRng, ConfigError};

#[test]
fn test_config_default_values() {
    let config = AuraConfig::default();

    assert_eq!(config.particle_count, 20);
    assert_eq!(config.size_min, 50.0);
    assert_eq!(config.size_max, 200.0);
    assert_eq!(config.max_speed, 0.1);
    assert_eq!(config.max_alpha, 0.1);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_config_partial_json_keeps_defaults() {
    let config: AuraConfig =
        serde_json::from_str(r#"{ "particle_count": 8, "max_alpha": 0.3 }"#).unwrap();

    assert_eq!(config.particle_count, 8);
    assert_eq!(config.max_alpha, 0.3);
    assert_eq!(config.size_min, 50.0);
    assert_eq!(config.size_max, 200.0);
    assert_eq!(config.max_speed, 0.1);
}

#[test]
fn test_config_empty_json_is_default() {
    let config: AuraConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, AuraConfig::default());
}

#[test]
fn test_config_rejects_invalid_values() {
    let cases = [
        (
            AuraConfig {
                particle_count: 0,
                ..Default::default()
            },
            ConfigError::EmptyPool,
        ),
        (
            AuraConfig {
                size_min: 200.0,
                size_max: 50.0,
                ..Default::default()
            },
            ConfigError::SizeRange {
                min: 200.0,
                max: 50.0,
            },
        ),
        (
            AuraConfig {
                size_min: 0.0,
                ..Default::default()
            },
            ConfigError::SizeRange {
                min: 0.0,
                max: 200.0,
            },
        ),
        (
            AuraConfig {
                max_speed: 0.0,
                ..Default::default()
            },
            ConfigError::Speed(0.0),
        ),
        (
            AuraConfig {
                max_alpha: 1.5,
                ..Default::default()
            },
            ConfigError::Alpha(1.5),
        ),
    ];

    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
}

#[test]
fn test_config_rejects_nan() {
    let config = AuraConfig {
        max_alpha: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Alpha(_))));

    let config = AuraConfig {
        max_speed: f64::INFINITY,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Speed(_))));
}

#[test]
fn test_engine_new_validates() {
    let bad = AuraConfig {
        particle_count: 0,
        ..Default::default()
    };
    assert!(AuraEngine::new(bad, AuraRng::default()).is_err());

    let engine = AuraEngine::new(AuraConfig::default(), AuraRng::default()).unwrap();
    assert_eq!(engine.config(), &AuraConfig::default());
}

#[test]
fn test_config_error_messages() {
    assert_eq!(ConfigError::Alpha(2.0).to_string(), "max_alpha must be in (0, 1], got 2");
    assert_eq!(
        ConfigError::EmptyPool.to_string(),
        "particle_count must be at least 1"
    );
}
