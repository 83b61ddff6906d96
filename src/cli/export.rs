// ABOUTME: Headless export: render the saved concept to stdout or a file

use anyhow::Result;
use std::path::Path;

use crate::concept::ConceptStore;
use crate::{export, summary};

use super::ExportArgs;

pub fn execute(args: ExportArgs, store_path: &Path) -> Result<()> {
    let store = ConceptStore::open(store_path);
    let doc = store.document();

    if args.text {
        println!("{}", summary::plain_text(doc));
        return Ok(());
    }

    match args.out {
        Some(out) => {
            let path = if out.is_dir() {
                export::write_markdown(doc, &out)?
            } else {
                export::write_markdown_to(doc, &out)?;
                out
            };
            println!("Exported to {}", path.display());
        }
        None => print!("{}", summary::markdown(doc)),
    }
    Ok(())
}
