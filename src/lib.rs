#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod placement;
mod ship;
mod view;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use placement::*;
pub use ship::*;
pub use view::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
