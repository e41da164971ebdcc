//! `showhub run` specs

use crate::prelude::*;

/// The lighting rig takes the cue's `light_preset` (`NEON-SWEEP` in the
/// built-in show) for CHORUS instead of its fixed `WIDE-BRIGHT` default.
#[test]
fn default_show_plays_every_reaction() {
    showhub()
        .args(["run", "--pause-ms", "0"])
        .passes()
        .stdout_has("BUILT CUE: Intro → Chorus blast | bpm: 138")
        .stdout_has("[LED-WALL#A1]")
        .stdout_has("[PROJECTOR(Backstage)]")
        .stdout_has("==  ARE YOU READY?  ==")
        .stdout_has("♪ Chorus")
        .stdout_has("[Lights:MainRig] warm spotlight")
        .stdout_has("[Lights:MainRig] switching to preset: NEON-SWEEP")
        .stdout_has("[Smoke:Fogger-01] pumping smoke: 35%")
        .stdout_has("[Lights:MainRig] strobe ON!")
        .stdout_has("[Sound:Rack-Sub] sub-bass boost!")
        .stdout_lacks("[Artist:MC] received");
}

#[test]
fn missed_send_is_reported_and_run_continues() {
    let stage = Stage::empty();
    let path = stage.show(
        "show.toml",
        r#"
        [cue]
        name = "Miss"

        [[rig]]
        kind = "artist"
        name = "MC"

        [[rig]]
        kind = "sound"
        name = "Rack-Sub"

        [[script]]
        send = "Nonexistent"
        kind = "TALK"

        [[script]]
        trigger = "MC"
        kind = "DROP"
        "#,
    );

    showhub()
        .args(["run", "--pause-ms", "0", "--show"])
        .args([&path])
        .passes()
        .stdout_has("[HUB] node \"Nonexistent\" not found")
        .stdout_has("[Sound:Rack-Sub] sub-bass boost!");
}

#[test]
fn two_artists_hear_each_other_but_not_themselves() {
    let stage = Stage::empty();
    let path = stage.show(
        "show.toml",
        r#"
        [cue]
        name = "Duet"

        [[rig]]
        kind = "artist"
        name = "MC"

        [[rig]]
        kind = "artist"
        name = "DJ"

        [[script]]
        trigger = "MC"
        kind = "TALK"
        payload = "hello"
        "#,
    );

    showhub()
        .args(["run", "--pause-ms", "0", "--show"])
        .args([&path])
        .passes()
        .stdout_has("[Artist:DJ] received TALK from MC (hello)")
        .stdout_lacks("[Artist:MC] received");
}
