pub mod vote_click;

pub use vote_click::{apply_outcome, VoteClickHandler};
