//! `showhub cue` specs

use crate::prelude::*;

#[test]
fn prints_default_cue_line() {
    showhub()
        .args(["cue"])
        .passes()
        .stdout_eq("BUILT CUE: Intro → Chorus blast | bpm: 138 | lights: NEON-SWEEP | smoke: 35 %\n");
}

#[test]
fn prints_cue_as_json() {
    let out = showhub().args(["cue", "--json"]).passes();
    let json: serde_json::Value = serde_json::from_str(&out.stdout).unwrap();

    assert_eq!(json["bpm"], 138);
    assert_eq!(json["starts_in"], "2s");
    assert_eq!(json["tags"], serde_json::json!(["opener", "high-energy"]));
}

#[test]
fn reads_cue_from_show_file() {
    let stage = Stage::empty();
    let path = stage.show(
        "show.toml",
        r#"
        [cue]
        name = "Encore"
        bpm = 90
        light_preset = "BLUE-WASH"
        "#,
    );

    showhub()
        .args(["cue", "--show"])
        .args([&path])
        .passes()
        .stdout_eq("BUILT CUE: Encore | bpm: 90 | lights: BLUE-WASH | smoke: 0 %\n");
}
