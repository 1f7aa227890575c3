//! ally: manage unix-like command aliases persisted as per-user scripts.
//!
//! The core is the encoding between a raw alias value and the two-line
//! script stored on disk ([`codec`]) plus the file-backed store mapping
//! alias names to those scripts ([`store`]). The CLI in [`cli`] is a thin
//! dispatcher over the store.

pub mod alias;
pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod fsio;
pub mod store;
pub mod util;
