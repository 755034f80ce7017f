//! Usage: Cross-cutting helpers shared by `app`, `commands`, and `domain`.

pub(crate) mod error;
pub(crate) mod mutex_ext;
