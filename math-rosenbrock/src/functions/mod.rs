//! Rosenbrock family of benchmark functions

pub mod rosenbrock;
pub mod rosenbrock_disk_constraint;
pub mod rosenbrock_objective;

pub use rosenbrock::*;
pub use rosenbrock_disk_constraint::*;
pub use rosenbrock_objective::*;
