#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod cell;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod field;
#[cfg(feature = "std")]
mod logging;

pub use cell::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use field::*;
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging, level_from};
