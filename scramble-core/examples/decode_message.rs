//! Dump every frame of a three-step script to stdout.
//!
//! ```sh
//! cargo run -p scramble-core --example decode_message
//! ```

use scramble::{BufferSurface, PlayerStatus, ScrambleResult, Script, ScriptPlayer};

fn main() -> ScrambleResult<()> {
    let script = Script::new(7)
        .step("TRANSMITTING...", 8)
        .step("SIGNAL RECEIVED", 8)
        .step("TRANSMIT", 0);

    let mut player = ScriptPlayer::new(BufferSurface::default(), script)?;
    while player.tick() == PlayerStatus::Running {
        println!("{}", player.surface().contents());
    }
    println!("{}", player.surface().contents());
    Ok(())
}
