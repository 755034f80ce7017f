//! Usage: App-level wiring (managed state, logging).

pub(crate) mod app_state;
pub(crate) mod logging;
