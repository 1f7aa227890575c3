//! Command dispatch
//!
//! Every invocation performs exactly one store operation, chosen by
//! precedence: clear, then search, then list (no name), then delete (no
//! value), then register.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::fsio::RealFileSystem;
use crate::store::AliasStore;

/// Resolve settings, open the store and dispatch.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let store = AliasStore::open(settings.data_dir, Arc::new(RealFileSystem))?;
    dispatch(cli, &store)
}

/// Dispatch one invocation against an already-opened store.
pub fn dispatch(cli: &Cli, store: &AliasStore) -> CliResult<()> {
    if cli.clear {
        return clear(store);
    }
    if let Some(query) = &cli.search {
        return search(store, query);
    }
    match (&cli.name, &cli.value) {
        (None, _) => list(store),
        (Some(name), None) => delete(store, name),
        (Some(name), Some(value)) => register(store, name, value),
    }
}

#[instrument(skip(store))]
fn register(store: &AliasStore, name: &str, value: &str) -> CliResult<()> {
    debug!("registering alias {:?}", name);
    store.register(name, value)?;
    Ok(())
}

#[instrument(skip(store))]
fn delete(store: &AliasStore, name: &str) -> CliResult<()> {
    debug!("deleting alias {:?}", name);
    store.delete(name)?;
    Ok(())
}

#[instrument(skip(store))]
fn list(store: &AliasStore) -> CliResult<()> {
    for alias in store.list()? {
        output::info(&alias?.reusable_line());
    }
    Ok(())
}

#[instrument(skip(store))]
fn search(store: &AliasStore, query: &str) -> CliResult<()> {
    for alias in store.search(query)? {
        output::info(&alias?.reusable_line());
    }
    Ok(())
}

#[instrument(skip(store))]
fn clear(store: &AliasStore) -> CliResult<()> {
    debug!("clearing all aliases in {}", store.dir().display());
    store.clear()?;
    Ok(())
}
