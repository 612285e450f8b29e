//! CLI command implementations.

mod check;
mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use serve::ServeArgs;
