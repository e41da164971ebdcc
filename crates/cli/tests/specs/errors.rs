//! Error reporting specs

use crate::prelude::*;

#[test]
fn invalid_bpm_fails_with_validation_message() {
    let stage = Stage::empty();
    let path = stage.show("show.toml", "[cue]\nname = \"Loud\"\nbpm = 900\n");

    showhub()
        .args(["cue", "--show"])
        .args([&path])
        .fails()
        .stderr_has("BPM must be in range 1..400, got 900");
}

#[test]
fn invalid_smoke_level_fails_run() {
    let stage = Stage::empty();
    let path = stage.show("show.toml", "[cue]\nname = \"Foggy\"\nsmoke_level_pct = 101\n");

    showhub()
        .args(["run", "--pause-ms", "0", "--show"])
        .args([&path])
        .fails()
        .stderr_has("SmokeLevelPct must be in range 0..100, got 101");
}

#[test]
fn missing_show_file_fails() {
    let stage = Stage::empty();
    let path = stage.show("present.toml", "");
    let missing = path.with_file_name("absent.toml");

    showhub()
        .args(["cue", "--show"])
        .args([&missing])
        .fails()
        .stderr_has("failed to load show");
}

#[test]
fn duplicate_rig_names_fail_run() {
    let stage = Stage::empty();
    let path = stage.show(
        "show.toml",
        r#"
        [cue]
        name = "Twins"

        [[rig]]
        kind = "smoke"
        name = "Fogger-01"

        [[rig]]
        kind = "smoke"
        name = "Fogger-01"
        "#,
    );

    showhub()
        .args(["run", "--pause-ms", "0", "--show"])
        .args([&path])
        .fails()
        .stderr_has("Fogger-01");
}
