pub mod fixtures;
pub mod ladder;
pub mod results;
pub mod snapshot;
pub mod teams;
