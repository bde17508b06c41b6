//! Provides some common functions.

/// Checks some pre-conditions.
pub(crate) mod checker;
