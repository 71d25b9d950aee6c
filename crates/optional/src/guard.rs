use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::string::{String, ToString};

use crate::config::Config;

/// A fatal failure (`unwrap` / `expect` on `Empty`, or any other panic)
/// caught by [`Guard::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fatal {
    pub message: String,
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal: {}", self.message)
    }
}

impl std::error::Error for Fatal {}

/// Outer boundary for code that asserts presence.
///
/// A panic inside `run` stops that unit of work only; the caller gets a
/// `Fatal` back instead of the whole thread unwinding. With `verbose` set,
/// each caught failure is also reported on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Guard {
    pub verbose: bool,
}

impl Guard {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run<T, F: FnOnce() -> T>(&self, f: F) -> Result<T, Fatal> {
        let result = catch_unwind(AssertUnwindSafe(f));

        match result {
            Ok(val) => Ok(val),
            Err(payload) => {
                let fatal = Fatal {
                    message: payload_message(&*payload),
                };
                if self.verbose {
                    println!("⚠️ fatal caught: {}", fatal.message);
                }
                Err(fatal)
            }
        }
    }
}

// `panic!` with a plain literal yields `&'static str`, formatted panics yield `String`.
fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        Config::NON_STRING_PANIC.to_string()
    }
}
