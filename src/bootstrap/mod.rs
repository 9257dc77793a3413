//! Bootstrap sequencing.
//!
//! One invocation makes exactly one decision: launch the delegate, show a
//! degraded preview, or block. The decision ([`decide`]) is a pure
//! function over the probe report; everything user-visible happens in the
//! rendering boundary ([`render`]); the only side-effecting path is the
//! delegate launch ([`delegate`]), whose failures are caught and rendered
//! rather than propagated.

pub mod delegate;
pub mod plan;
pub mod render;

pub use delegate::DelegateRunner;
pub use plan::{decide, BootstrapPlan, MissingDependency};
pub use render::{render_delegate_failure, render_plan};
