use tcd_reference::*;

#[test]
fn roundtrip_yaml_builtin() {
    let path = std::env::temp_dir().join("tcd_reference_roundtrip.yaml");
    let catalog = ReferenceCatalog::builtin();

    save_catalog(&path, &catalog).unwrap();
    let loaded = load_catalog(&path).unwrap();

    assert_eq!(catalog, loaded);
}

#[test]
fn roundtrip_json_builtin() {
    let path = std::env::temp_dir().join("tcd_reference_roundtrip.json");
    let catalog = ReferenceCatalog::builtin();

    save_catalog(&path, &catalog).unwrap();
    let loaded = load_catalog(&path).unwrap();

    assert_eq!(catalog, loaded);
}

#[test]
fn load_hand_written_yaml() {
    let path = std::env::temp_dir().join("tcd_reference_custom.yaml");
    let yaml = r#"
arteries:
  - id: "M1 right"
    display_name: "Right MCA, M1 segment"
    group: mca
    side: right
    vps_cm_s: 120.0
    vfd_cm_s: 45.0
    vm_cm_s: 70.0
  - id: "Vertebral"
    display_name: "Vertebral artery"
    group: basilar
    aliases: ["VA"]
    vps_cm_s: 60.0
    vfd_cm_s: 20.0
    vm_cm_s: 35.0
"#;
    std::fs::write(&path, yaml).unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let m1 = catalog.lookup("m1 right").unwrap();
    assert!(m1.is_mca());
    assert_eq!(m1.side, Some(Side::Right));

    let va = catalog.lookup("VA").unwrap();
    assert_eq!(va.group, ArteryGroup::Basilar);
    assert_eq!(va.side, None);
}

#[test]
fn load_rejects_invalid_values() {
    let path = std::env::temp_dir().join("tcd_reference_invalid.yaml");
    let yaml = r#"
arteries:
  - id: "Basilar"
    display_name: "Basilar artery"
    group: basilar
    vps_cm_s: -70.0
    vfd_cm_s: 25.0
    vm_cm_s: 40.0
"#;
    std::fs::write(&path, yaml).unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidValue { .. }));
}

#[test]
fn load_rejects_unknown_extension() {
    let path = std::env::temp_dir().join("tcd_reference_catalog.toml");
    std::fs::write(&path, "").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("tcd_reference_does_not_exist.yaml");
    let _ = std::fs::remove_file(&path);

    assert!(matches!(load_catalog(&path), Err(CatalogError::Io(_))));
}
