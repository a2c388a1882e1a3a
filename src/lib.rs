#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod reveal;
mod ui;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use reveal::connected_region;
pub use ui::*;
