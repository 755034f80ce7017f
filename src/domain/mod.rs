//! Usage: Domain logic (selection reducer, skill catalog, user card, wrapper style).

pub(crate) mod catalog;
pub(crate) mod selection;
pub(crate) mod user;
pub(crate) mod wrapper;
