use cfmask_core::config::MaskConfig;
use cfmask_core::error::CfmaskError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_mask_config_defaults() {
    let config = MaskConfig::default();
    assert_eq!(config.cloud_probability, 22.5);
    assert_eq!(config.cloud_dilation, 3);
    assert_eq!(config.shadow_dilation, 3);
    assert!(!config.use_cirrus);
    assert!(config.use_thermal);
    assert!(config.validate().is_ok());
}

#[test]
fn test_mask_config_missing_fields_use_defaults() {
    let config: MaskConfig = serde_json::from_str(r#"{ "use_cirrus": true }"#).unwrap();
    assert!(config.use_cirrus);
    assert!(config.use_thermal);
    assert_eq!(config.cloud_probability, 22.5);
    assert_eq!(config.cloud_dilation, 3);
}

#[test]
fn test_mask_config_overrides() {
    let json = r#"{
        "cloud_probability": 40.0,
        "cloud_dilation": 5,
        "shadow_dilation": 1,
        "use_thermal": false
    }"#;
    let config: MaskConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.cloud_probability, 40.0);
    assert_eq!(config.cloud_dilation, 5);
    assert_eq!(config.shadow_dilation, 1);
    assert!(!config.use_thermal);
    assert!(!config.use_cirrus);
}

#[test]
fn test_mask_config_serde_preserves_values() {
    let config = MaskConfig {
        cloud_probability: 12.5,
        use_cirrus: true,
        ..MaskConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: MaskConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_mask_config_rejects_out_of_range_probability() {
    for bad in [-0.1, 100.5, f32::NAN, f32::INFINITY] {
        let config = MaskConfig {
            cloud_probability: bad,
            ..MaskConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CfmaskError::InvalidConfig(_)), "got {err:?}");
    }
}

#[test]
fn test_mask_config_accepts_probability_bounds() {
    for ok in [0.0, 100.0] {
        let config = MaskConfig {
            cloud_probability: ok,
            ..MaskConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_mask_config_display_lists_fields() {
    let s = format!("{}", MaskConfig::default());
    assert!(s.contains("cloud_probability = 22.5"), "got: {s}");
    assert!(s.contains("use_thermal       = true"), "got: {s}");
    assert!(s.contains("use_cirrus        = false"), "got: {s}");
}
