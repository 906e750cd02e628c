//! Hotel Console - text menu over the reservation bookkeeping
//!
//! - `config`: TOML settings from the OS config directory
//! - `prompt`: line-oriented input helpers and the payment prompt
//! - `menu`: the numbered action loop

pub mod config;
pub mod menu;
pub mod prompt;

pub use config::HotelConfig;
pub use menu::Menu;
pub use prompt::Prompter;
