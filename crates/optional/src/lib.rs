#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub mod config;
pub use config::Config;

// Optional module
pub mod optional;
pub use optional::Optional;

#[cfg(feature = "std")]
pub mod guard;
#[cfg(feature = "std")]
pub use guard::{Fatal, Guard};
