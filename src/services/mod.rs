pub mod vote_client;
pub mod notifier;

pub use vote_client::*;
pub use notifier::*;
