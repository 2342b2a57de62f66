use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("tcd-cli").unwrap()
}

#[test]
fn cli_help_smoke() {
    cmd().arg("--help").assert().success();
}

#[test]
fn compute_right_mca() {
    cmd()
        .args(["compute", "--artery", "ACMd (Derecha)", "--vps", "110", "--vfd", "40"])
        .assert()
        .success()
        .stdout(contains("136.67"))
        .stdout(contains("4.56"))
        .stdout(contains("Suggests Vasospasm"));
}

#[test]
fn compute_unknown_artery_fails() {
    cmd()
        .args(["compute", "--artery", "XYZ", "--vps", "100", "--vfd", "40"])
        .assert()
        .failure()
        .stderr(contains("XYZ"));
}

#[test]
fn batch_to_csv_on_stdout() {
    let path = std::env::temp_dir().join("tcd_cli_batch.yaml");
    std::fs::write(
        &path,
        r#"
measurements:
  - { artery: "ACAd (Derecha)", vps_cm_s: 200, vfd_cm_s: 30 }
  - { artery: "r-mca", vps_cm_s: 110, vfd_cm_s: 40 }
"#,
    )
    .unwrap();

    cmd()
        .args(["batch", "--format", "csv", "--chart"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Artery,VPS,VFD,Vm,PI,RI,Lindegaard,Status"))
        .stdout(contains("ACAd (Derecha),200,30,220,0.77,0.85,N/A,Elevated Velocity"))
        .stdout(contains("Vm comparison"));
}

#[test]
fn arteries_filter() {
    cmd()
        .args(["arteries", "basilar"])
        .assert()
        .success()
        .stdout(contains("Basilar artery"));
}

#[test]
fn references_show_normal_ranges() {
    cmd()
        .arg("references")
        .assert()
        .success()
        .stdout(contains("PI (pulsatility): 0.6 - 1.1"))
        .stdout(contains("ACId (Sifón/Extracraneal)"));
}

#[test]
fn dumped_catalog_can_be_reloaded() {
    let path = std::env::temp_dir().join("tcd_cli_catalog.yaml");
    let _ = std::fs::remove_file(&path);

    cmd()
        .args(["references", "--dump"])
        .arg(&path)
        .assert()
        .success();

    cmd()
        .arg("--catalog")
        .arg(&path)
        .args(["compute", "--artery", "Basilar", "--vps", "70", "--vfd", "25"])
        .assert()
        .success()
        .stdout(contains("Normal"));
}

#[test]
fn batch_with_invalid_entry_shows_stored_rows() {
    let path = std::env::temp_dir().join("tcd_cli_batch_partial.yaml");
    std::fs::write(
        &path,
        r#"
measurements:
  - { artery: "Basilar", vps_cm_s: 70, vfd_cm_s: 25 }
  - { artery: "XYZ", vps_cm_s: 70, vfd_cm_s: 25 }
"#,
    )
    .unwrap();

    cmd()
        .arg("batch")
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("Partial report (1 rows stored)"))
        .stdout(contains("Basilar"))
        .stderr(contains("XYZ"));
}

#[test]
fn compute_prints_lindegaard_grade() {
    cmd()
        .args(["compute", "--artery", "ACMd (Derecha)", "--vps", "110", "--vfd", "40"])
        .assert()
        .success()
        .stdout(contains("Lindegaard 4.56: Mild/moderate vasospasm"));
}
