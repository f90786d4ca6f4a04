//! Headless mode - dump the service catalog as JSON
//!
//! Prints the same records the board shows, without touching the terminal.
//! Useful for scripting and for checking the catalog contents.

use std::io::{self, Write};

use microdesigner_core::prelude::*;
use microdesigner_core::ServiceCatalog;

/// Pretty JSON for a catalog
pub fn catalog_json(catalog: &ServiceCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Print the built-in catalog to stdout
pub fn run() -> Result<()> {
    let catalog = ServiceCatalog::sample();
    info!("Headless mode: printing {} services", catalog.len());

    let json = catalog_json(&catalog)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
