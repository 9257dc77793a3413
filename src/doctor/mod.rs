//! Preflight diagnostics.
//!
//! The doctor answers one question: would a deployment host get this
//! project to a working launch? It checks the interpreter, the expected
//! project structure, the dependency imports, and the exported
//! deployment variables, then maps the overall result to exit code 0/1.
//! Checks never abort each other; every problem found is reported in one
//! pass.

pub mod checks;
pub mod report;

pub use checks::run_doctor;
pub use report::{DoctorReport, EnvCheck, ImportCheck, InterpreterCheck, PathCheck};
