#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod placer;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placer::*;
#[cfg(feature = "std")]
pub use render::{cell_name, print_board, render_board};
pub use ship::*;
