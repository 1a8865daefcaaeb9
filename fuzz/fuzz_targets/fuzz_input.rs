#![no_main]

//! Input parser fuzzer: no line may panic, and any accepted pod number
//! maps onto the mover's own side.

use libfuzzer_sys::fuzz_target;
use mancala::game::Player;
use mancala::input::{Command, parse_command, parse_confirmation, pod_index};

fuzz_target!(|line: &str| {
    let _ = parse_confirmation(line);
    if let Ok(Command::Pod(number)) = parse_command(line) {
        for player in Player::ALL {
            let pod = pod_index(number, player);
            assert_eq!(Player::owning_pod(pod), Some(player));
        }
    }
});
