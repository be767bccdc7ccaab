use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn message_interpolates_reference() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("t4j")
        .current_dir(tmp.path())
        .env("T4J_CONFIG_PATH", tmp.path().join("no-config.toml"))
        .args(["message", "--tone", "firm"])
        .args(["--reference", "Incident Report CAR-0001 - Followed home"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This is a formal cease and desist notice.",
        ))
        .stdout(predicate::str::contains(
            "Incident Report CAR-0001 - Followed home",
        ));
}

#[test]
fn message_without_tone_uses_configured_default() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("docket.toml");
    fs::write(
        &config,
        "[defaults]\nmessage_tone = \"calm\"\nevidence_tone = \"plain\"\n",
    )
    .expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("t4j")
        .current_dir(tmp.path())
        .env("T4J_CONFIG_PATH", &config)
        .arg("message")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I am writing to formally request that you cease all contact",
        ))
        .stdout(predicate::str::contains("Reference:").not());
}

#[test]
fn message_tone_falls_back_to_saved_settings() {
    let tmp = tempdir().expect("tempdir");
    let settings = tmp.path().join("settings.json");
    fs::write(
        &settings,
        "{\"language\":\"en\",\"toneStyle\":\"directSafety\",\"visualTheme\":\"default\"}",
    )
    .expect("write settings");

    assert_cmd::cargo::cargo_bin_cmd!("t4j")
        .current_dir(tmp.path())
        .env("T4J_CONFIG_PATH", tmp.path().join("no-config.toml"))
        .arg("message")
        .args(["--settings", settings.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains("CEASE AND DESIST - FINAL WARNING"));
}

#[test]
fn message_builds_reference_from_incident_snapshot() {
    let tmp = tempdir().expect("tempdir");
    let incidents = tmp.path().join("incidents.json");
    fs::write(
        &incidents,
        r#"[{"id":3,"status":"open","title":"Parking lot","criminalActivityReportNumber":"CAR-0003","description":"","author":"aaaa","timestamp":1767625445000000000,"evidenceIds":[]}]"#,
    )
    .expect("write incidents");

    assert_cmd::cargo::cargo_bin_cmd!("t4j")
        .current_dir(tmp.path())
        .env("T4J_CONFIG_PATH", tmp.path().join("no-config.toml"))
        .args(["message", "--tone", "very-harsh", "--incident-id", "3"])
        .args(["--incidents", incidents.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Incident Report CAR-0003 - Parking lot (",
        ));
}

#[test]
fn unknown_tone_is_rejected() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("t4j")
        .current_dir(tmp.path())
        .env("T4J_CONFIG_PATH", tmp.path().join("no-config.toml"))
        .args(["message", "--tone", "shouty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown message tone"));
}
