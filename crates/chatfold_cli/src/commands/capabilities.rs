//! `chatfold capabilities`: inspect and call the demo capability catalog.

use anyhow::{anyhow, Result};
use chatfold_core::{CapabilityKind, CapabilityRegistry};
use serde_json::Value as JsonValue;

use crate::catalog::demo_registry;
use crate::cli::CapabilitiesAction;
use crate::output;

pub async fn handle(action: CapabilitiesAction) -> Result<()> {
    let registry = demo_registry()?;

    match action {
        CapabilitiesAction::List => list(&registry),
        CapabilitiesAction::Info { name } => info(&registry, &name),
        CapabilitiesAction::Call { name, args } => call(&registry, &name, &args).await,
    }
}

fn kind_label(kind: CapabilityKind) -> &'static str {
    match kind {
        CapabilityKind::Component => "component",
        CapabilityKind::Tool => "tool",
    }
}

fn list(registry: &CapabilityRegistry) -> Result<()> {
    let capabilities = registry.list();

    if capabilities.is_empty() {
        output::dim("No capabilities registered");
        return Ok(());
    }

    output::header("Capabilities");

    let mut table = output::table();
    output::table_header(&mut table, &["Name", "Kind", "Description"]);
    let items: Vec<_> = capabilities
        .iter()
        .map(|c| {
            // first line only; descriptions can run long
            let summary = c.description.lines().next().unwrap_or_default();
            output::table_row(&mut table, &c.name, kind_label(c.kind), summary);
            serde_json::json!({ "name": c.name, "kind": c.kind, "description": c.description })
        })
        .collect();

    output::table_print(&table, &items);
    Ok(())
}

fn info(registry: &CapabilityRegistry, name: &str) -> Result<()> {
    let capability = registry
        .get(name)
        .ok_or_else(|| anyhow!("Capability not found: {}", name))?;

    if output::is_json() {
        output::data(name, &capability);
        return Ok(());
    }

    output::header(&format!("{}: {}", kind_label(capability.kind), capability.name));
    output::dim(&capability.description);
    println!();
    output::header(match capability.kind {
        CapabilityKind::Component => "Input",
        CapabilityKind::Tool => "Parameters",
    });
    output::json_pretty(&capability.schema);
    Ok(())
}

async fn call(registry: &CapabilityRegistry, name: &str, args_str: &str) -> Result<()> {
    let args: JsonValue =
        serde_json::from_str(args_str).map_err(|e| anyhow!("Invalid JSON arguments: {}", e))?;

    let spinner = output::spinner(&format!("Calling {}...", name));
    let result = registry.call(name, args).await;
    let (value, duration_ms) = match result {
        Ok(ok) => ok,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    output::spinner_success(&spinner, &format!("Completed in {}ms", duration_ms));
    output::json_pretty(&value);
    Ok(())
}
