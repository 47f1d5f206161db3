//! Runtime settings (environment, `.env`) and compile-time constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
