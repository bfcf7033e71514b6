//! Lookups against the embedded USDA table.

use std::io::Write;

use approx::assert_relative_eq;
use soilprof_profile::{SoilLayer, TextureClassifier};
use soilprof_texture::{Method, TextureConverter, TextureError};

#[test]
fn twelve_usda_classes() {
    let converter = TextureConverter::usda().unwrap();
    let classes = converter.list_available_classes();
    assert_eq!(classes.len(), 12);
    assert!(classes.contains(&"silty_clay_loam".to_string()));
    assert_eq!(converter.metadata().system, "USDA");
}

#[test]
fn loamy_sand_centroid() {
    let converter = TextureConverter::usda().unwrap();
    let (sand, silt, clay) = converter
        .class_to_percentages("loamy sand", Method::Centroid, true)
        .unwrap();
    assert_relative_eq!(sand, 82.0);
    assert_relative_eq!(silt, 12.0);
    assert_relative_eq!(clay, 6.0);
}

#[test]
fn aliases_resolve() {
    let converter = TextureConverter::usda().unwrap();
    let direct = converter
        .class_to_percentages("loamy_sand", Method::Centroid, true)
        .unwrap();
    for alias in ["silty sand", "LS", "Loamy-Sand"] {
        assert_eq!(
            converter
                .class_to_percentages(alias, Method::Centroid, true)
                .unwrap(),
            direct,
            "{alias}"
        );
    }
}

#[test]
fn every_class_normalizes_to_100() {
    let converter = TextureConverter::usda().unwrap();
    for class in converter.list_available_classes() {
        for method in [Method::Centroid, Method::Mean] {
            let (sand, silt, clay) = converter.class_to_percentages(&class, method, true).unwrap();
            assert_relative_eq!(sand + silt + clay, 100.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn ranges_bracket_centroids() {
    let converter = TextureConverter::usda().unwrap();
    for class in converter.list_available_classes() {
        let ranges = converter.get_ranges(&class).unwrap();
        let (sand, silt, clay) = converter
            .class_to_percentages(&class, Method::Centroid, false)
            .unwrap();
        assert!(ranges.sand.min <= sand && sand <= ranges.sand.max, "{class} sand");
        assert!(ranges.silt.min <= silt && silt <= ranges.silt.max, "{class} silt");
        assert!(ranges.clay.min <= clay && clay <= ranges.clay.max, "{class} clay");
    }
}

#[test]
fn unknown_class_message_lists_classes() {
    let converter = TextureConverter::usda().unwrap();
    let err = converter
        .class_to_percentages("peat", Method::Centroid, true)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("\"peat\""));
    assert!(msg.contains("sandy_clay_loam"));
    assert!(matches!(
        converter.get_ranges("peat"),
        Err(TextureError::UnknownClass { .. })
    ));
}

#[test]
fn infers_layer_fractions() {
    let converter = TextureConverter::usda().unwrap();
    let mut layer = SoilLayer::builder("Ap")
        .with_texture_class("silt loam")
        .build()
        .unwrap();
    layer.infer_fractions_from_texture(&converter).unwrap();
    assert_eq!(layer.sand_content(), Some(20.0));
    assert_eq!(layer.silt_content(), Some(65.0));
    assert_eq!(layer.clay_content(), Some(15.0));
    assert_eq!(
        converter.classify("sil").unwrap(),
        layer.fractions().unwrap()
    );
}

#[test]
fn loads_table_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(
        file,
        "[metadata]\nsystem = \"local\"\n\n[centroids.peat]\nsand = 10.0\nsilt = 30.0\nclay = 10.0\n"
    )
    .unwrap();
    let converter = TextureConverter::from_path(file.path()).unwrap();
    let (sand, _, _) = converter
        .class_to_percentages("peat", Method::Centroid, true)
        .unwrap();
    assert_relative_eq!(sand, 20.0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = TextureConverter::from_path(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(TextureError::Io { .. })));
}
