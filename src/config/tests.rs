use crate::config::{ReferenceDirectionsConfig, DEFAULT_MAX_SECTIONS, DEFAULT_TOLERANCE};
use crate::error::Error;
use std::io::Write;

#[test]
fn default_config_is_valid()
{
    let config = ReferenceDirectionsConfig::default();

    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(config.max_sections, DEFAULT_MAX_SECTIONS);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults()
{
    let config = ReferenceDirectionsConfig::from_json_str(r#"{ "max_sections": 20 }"#).unwrap();

    assert_eq!(config.max_sections, 20);
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
}

#[test]
fn rejects_invalid_values()
{
    let zero_tolerance = ReferenceDirectionsConfig::default().with_tolerance(0.0);
    assert!(matches!(zero_tolerance.validate(), Err(Error::InvalidArgument(_))));

    let nan_tolerance = ReferenceDirectionsConfig::default().with_tolerance(f64::NAN);
    assert!(matches!(nan_tolerance.validate(), Err(Error::InvalidArgument(_))));

    let zero_sections = ReferenceDirectionsConfig::default().with_max_sections(0);
    assert!(matches!(zero_sections.validate(), Err(Error::InvalidArgument(_))));

    assert!(matches!(
        ReferenceDirectionsConfig::from_json_str(r#"{ "tolerance": -1.0 }"#),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn malformed_json_is_reported()
{
    assert!(matches!(
        ReferenceDirectionsConfig::from_json_str("{ tolerance: "),
        Err(Error::Json(_))
    ));
}

#[test]
fn loads_from_file()
{
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tolerance": 1e-6, "max_sections": 12 }}"#).unwrap();

    let config = ReferenceDirectionsConfig::from_json_file(file.path()).unwrap();

    assert_eq!(config, ReferenceDirectionsConfig::default().with_tolerance(1e-6).with_max_sections(12));
}
