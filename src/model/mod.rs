//! Problem and solution value types

mod configuration;
mod problem;
mod solution;

pub use configuration::Configuration;
pub use problem::Problem;
pub use solution::Solution;
