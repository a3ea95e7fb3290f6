// Host-side tests for device-class configuration.

use galaxy_core::constants::*;
use galaxy_core::{ConfigError, DeviceClass, FieldConfig};

#[test]
fn device_class_splits_at_compact_width() {
    assert_eq!(DeviceClass::from_viewport_width(768.0), DeviceClass::Compact);
    assert_eq!(DeviceClass::from_viewport_width(375.0), DeviceClass::Compact);
    assert_eq!(DeviceClass::from_viewport_width(769.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_viewport_width(1920.0), DeviceClass::Desktop);
}

#[test]
fn desktop_and_compact_presets() {
    let desktop = FieldConfig::for_device(DeviceClass::Desktop);
    assert_eq!(desktop.object_count, 28);
    assert_eq!(desktop.vertical_spacing, 7.5);
    assert_eq!(desktop.radial_segments, 16);
    assert_eq!(desktop.tubular_segments, 110);

    let compact = FieldConfig::for_device(DeviceClass::Compact);
    assert_eq!(compact.object_count, 16);
    assert_eq!(compact.vertical_spacing, 6.5);
    assert!(compact.tubular_segments < desktop.tubular_segments);
    assert!(compact.max_pixel_ratio < desktop.max_pixel_ratio);
}

#[test]
fn presets_validate() {
    assert_eq!(FieldConfig::for_device(DeviceClass::Desktop).validate(), Ok(()));
    assert_eq!(FieldConfig::for_device(DeviceClass::Compact).validate(), Ok(()));
}

#[test]
fn validate_rejects_bad_values() {
    let mut c = FieldConfig::default();
    c.object_count = 0;
    assert_eq!(c.validate(), Err(ConfigError::NoObjects));

    let mut c = FieldConfig::default();
    c.vertical_spacing = f32::NAN;
    assert!(matches!(c.validate(), Err(ConfigError::NonPositiveSpacing(_))));

    let mut c = FieldConfig::default();
    c.radial_segments = 2;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::DegenerateTessellation { radial: 2, .. })
    ));

    let mut c = FieldConfig::default();
    c.min_travel = 0.0;
    assert_eq!(c.validate(), Err(ConfigError::NonPositiveTravel(0.0)));

    let mut c = FieldConfig::default();
    c.viewport_margin = -0.1;
    assert!(matches!(c.validate(), Err(ConfigError::NegativeMargin(_))));

    let mut c = FieldConfig::default();
    c.idle_edge_opacity = c.active_edge_opacity;
    assert!(matches!(c.validate(), Err(ConfigError::OpacityOrder { .. })));

    let mut c = FieldConfig::default();
    c.idle_edge_opacity = 0.0;
    assert!(matches!(c.validate(), Err(ConfigError::OpacityOrder { .. })));
}

#[test]
fn stack_height_covers_every_slot() {
    let c = FieldConfig::default();
    assert_eq!(c.stack_height(), 28.0 * 7.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(IDLE_EDGE_OPACITY > 0.0 && IDLE_EDGE_OPACITY < ACTIVE_EDGE_OPACITY);
    assert_eq!(FILL_OPACITY, 0.0);
    assert!(ACTIVE_LOCAL_MIN < ACTIVE_LOCAL_MAX);
    assert!(PHASE_MAX < 1.0);
    assert!(MIN_TRAVEL > 0.0);
    assert!(MIN_CAMERA_DISTANCE > 0.0);
    assert!(JITTER_TRAVEL_FRACTION < 1.0);
    assert!(COMPACT_OBJECT_COUNT < DESKTOP_OBJECT_COUNT);
    assert!(CAMERA_NEAR < CAMERA_FAR);
}
