/// Atomic vector values
///
/// This module holds the raw values that index arguments are built from.
/// Missingness is tracked explicitly through `OptionNA`, and coercion between
/// modes is handled within rust's type system.
///
pub mod coercion;
pub mod types;

mod core;
pub use core::*;
