mod config;
mod math_helpers;

pub use config::*;
pub use math_helpers::*;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod math_helpers_tests;
