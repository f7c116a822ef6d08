// clippy lint unwrap
#![warn(clippy::unwrap_used)]
#![warn(clippy::pedantic)]
// ban unsafe
#![forbid(unsafe_code)]

pub mod calculator;
pub mod chart;
pub mod cli;
pub mod configuration;
pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod telemetry;
pub mod tests;
