//! Buckshot Roulette rules engine. Keep this crate free of IO and platform concerns.

pub mod config;
pub mod dealer;
pub mod economy;
pub mod events;
pub mod inventory;
pub mod items;
pub mod player;
pub mod rng;
pub mod setup;
pub mod shell;
pub mod state;

pub use config::*;
pub use dealer::*;
pub use economy::*;
pub use events::*;
pub use inventory::*;
pub use items::*;
pub use player::*;
pub use rng::*;
pub use setup::*;
pub use shell::*;
pub use state::*;
