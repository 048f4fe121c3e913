pub mod migrate;
pub mod serve;
pub mod stats;
pub mod token;
