//! Command-line demo for the to-do store.
//!
//! Appends each argument (or `"Buy milk"` when there are none) to a fresh
//! list, then removes the seed record, printing the list as JSON after
//! every step.
//!
//! `RUST_LOG` controls log output, `SLICEKIT_MAX_FEEDBACK_ACTIONS` the
//! store's feedback limit.

use slicekit_core::environment::NanoIdGenerator;
use slicekit_runtime::StoreConfig;
use std::sync::Arc;
use todo::{TodoId, TodoStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_list(label: &str, store: &TodoStore) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(&store.list())?;
    println!("{label}:\n{json}\n");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = StoreConfig::from_env()?;
    let mut store = TodoStore::with_config(Arc::new(NanoIdGenerator::new()), config);

    info!(todos = store.len(), "Store ready");
    print_list("Initial", &store)?;

    let mut texts: Vec<String> = std::env::args().skip(1).collect();
    if texts.is_empty() {
        texts.push("Buy milk".to_string());
    }

    for text in texts {
        info!(text = %text, "Appending");
        store.append(text);
    }
    print_list("After append", &store)?;

    let seed = TodoId::from(todo::types::SEED_ID);
    info!(id = %seed, "Removing seed record");
    store.remove(&seed);
    print_list("After remove", &store)?;

    Ok(())
}
