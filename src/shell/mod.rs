//! Shell command execution.
//!
//! The prober spawns the delegate interpreter directly (no shell), while
//! the delegate launch command is a user-provided string that goes through
//! the login shell so PATH shims and aliases behave as they would in a
//! terminal.

pub mod command;
pub mod platform;

pub use command::{execute, execute_program, CommandOptions, CommandResult};
pub use platform::{is_ci, shell_executable, shell_flag};
