pub mod vote_control;

pub use vote_control::{TallyDisplay, VoteControl, VoteControlError};
