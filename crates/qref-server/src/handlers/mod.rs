//! Request handlers.

pub(crate) mod languages;
pub(crate) mod menu;
pub(crate) mod pages;
