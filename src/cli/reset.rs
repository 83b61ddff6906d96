// ABOUTME: Headless reset: delete the saved concept snapshot

use anyhow::Result;
use std::path::Path;

use crate::concept::ConceptStore;

use super::ResetArgs;

pub fn execute(args: ResetArgs, store_path: &Path) -> Result<()> {
    if !args.yes {
        println!("This deletes the saved concept at {}.", store_path.display());
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut store = ConceptStore::open(store_path);
    store.reset()?;
    println!("Concept reset; saved file removed.");
    Ok(())
}
