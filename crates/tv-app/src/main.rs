//! Headless demo harness for the traceview import flow
//!
//! Loads a catalog (a JSON file path argument, or the built-in sample),
//! opens the import dialog through the modal host, scripts the checks the
//! tree widget would report, confirms, and prints the compiled record.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use tv_core::events::events::{CatalogLoaded, ModalResolved};
use tv_core::events::handler_from_fn;
use tv_core::{EventBus, ModalHost};
use tv_data::{CatalogService, JsonCatalog, StaticCatalog};
use tv_import::{ImportArgs, ImportDialog, ImportResult};

mod demo;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run())
}

async fn run() -> Result<()> {
    let catalog: Box<dyn CatalogService> = match std::env::args().nth(1) {
        Some(path) => Box::new(JsonCatalog::new(path)),
        None => {
            info!("no catalog file given, using the built-in demo catalog");
            Box::new(StaticCatalog::new(demo::demo_sources()))
        }
    };

    let event_bus = Arc::new(EventBus::new());
    event_bus.subscribe::<ModalResolved>(handler_from_fn(|event| {
        if let Some(resolved) = event.as_any().downcast_ref::<ModalResolved>() {
            info!(
                modal_id = %resolved.modal_id,
                cancelled = resolved.cancelled,
                "modal resolved"
            );
        }
    }));

    let host = ModalHost::new(event_bus.clone());
    let (dialog, pending) =
        host.open(|resolver| ImportDialog::new(ImportArgs::graph(), resolver));

    // One-shot wholesale delivery; a real selection UI stays
    // non-interactive until this lands
    let sources = catalog.get_sources().await?;
    event_bus.publish(CatalogLoaded {
        source_count: sources.len(),
        dataset_count: sources.iter().map(|s| s.datasets.len()).sum(),
    });
    dialog.write().sources_loaded(sources.clone());

    // Script what the tree widget would report: every selectable leaf
    let checked = demo::all_leaves(&sources);
    dialog.write().on_check(&checked);
    info!(selected = checked.len(), "checked every selectable leaf");

    if !dialog.read().confirm() {
        anyhow::bail!("confirm was unavailable; nothing resolvable was selected");
    }
    host.sweep();

    match pending.outcome().await {
        Some(ImportResult::Graph(graph)) => {
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        Some(ImportResult::Traces(traces)) => {
            println!("{}", serde_json::to_string_pretty(&traces)?);
        }
        None => info!("import cancelled"),
    }

    Ok(())
}
