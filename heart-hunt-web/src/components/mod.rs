pub mod backdrop;
pub mod confetti;
pub mod envelope;
pub mod footer;
pub mod heart;
pub mod love_letter;
pub mod music_player;
pub mod reward_gate;
