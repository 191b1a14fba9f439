pub mod pull;

pub use pull::{MAX_PULL, PULL_THRESHOLD, PullState};
