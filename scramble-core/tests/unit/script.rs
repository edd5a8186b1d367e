use super::*;

use crate::render::surface::BufferSurface;

#[test]
fn builder_collects_steps_in_order() {
    let script = Script::new(7)
        .step("TRANSMITTING...", 4)
        .step("SIGNAL RECEIVED", 4)
        .step("TRANSMIT", 0);
    assert_eq!(script.seed, 7);
    assert_eq!(script.steps.len(), 3);
    assert_eq!(script.steps[0].text, "TRANSMITTING...");
    assert_eq!(script.steps[2].hold_frames, 0);
    assert!(script.validate().is_ok());
}

#[test]
fn validate_rejects_an_empty_script() {
    let err = Script::new(0).validate().unwrap_err();
    assert!(err.to_string().contains("at least one step"));
}

#[test]
fn validate_rejects_bad_params() {
    let mut params = ScrambleParams::default();
    params.jitter_width = 0;
    let script = Script::new(0).with_params(params).step("X", 0);
    assert!(script.validate().is_err());
}

#[test]
fn from_reader_applies_serde_defaults() {
    let json = r#"{ "steps": [ { "text": "HELLO" } ] }"#;
    let script = Script::from_reader(json.as_bytes()).unwrap();
    assert_eq!(script.seed, 0);
    assert_eq!(script.params, ScrambleParams::default());
    assert_eq!(script.steps[0].hold_frames, 0);
}

#[test]
fn from_reader_rejects_malformed_json() {
    let err = Script::from_reader("{".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn player_tick_count_is_exact_for_instant_runs() {
    // jitter_width 1 makes every run complete inside set_text, so the tick
    // budget is fully determined by the hold: the start tick plus one tick
    // per held frame, then the closing tick reports Finished.
    let mut params = ScrambleParams::default();
    params.jitter_width = 1;
    let script = Script::new(0).with_params(params).step("DONE", 3);

    let mut player = ScriptPlayer::new(BufferSurface::default(), script).unwrap();
    let mut ticks = 0;
    while player.tick() == PlayerStatus::Running {
        ticks += 1;
    }
    assert_eq!(ticks, 4);
    assert!(player.is_finished());
    assert_eq!(player.surface().contents(), "DONE");
}

#[test]
fn player_walks_every_step() {
    let mut params = ScrambleParams::default();
    params.jitter_width = 6;
    let script = Script::new(13)
        .with_params(params)
        .step("FIRST", 2)
        .step("SECOND", 0);

    let mut player = ScriptPlayer::new(BufferSurface::default(), script).unwrap();
    let mut saw_first = false;
    let mut ticks = 0u32;
    while player.tick() == PlayerStatus::Running {
        saw_first |= player.surface().contents() == "FIRST";
        ticks += 1;
        assert!(ticks < 200, "player failed to finish");
    }
    assert!(saw_first, "first step never settled on screen");
    assert_eq!(player.into_surface().contents(), "SECOND");
}
