pub mod vote;

pub use vote::{Direction, Notification, NotificationCategory, Tally, VoteEffect, VoteOutcome};
