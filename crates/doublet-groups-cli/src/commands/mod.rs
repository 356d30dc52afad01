pub mod dict;
pub mod graphs;
pub mod merge;

use crate::error::Result;
use doublet_groups::core::io::json::write_json;
use doublet_groups::engine::table::ResultTable;
use std::path::Path;
use tracing::info;

fn write_table(path: &Path, table: &ResultTable) -> Result<()> {
    info!("Writing {} group(s) to {:?}", table.len(), path);
    write_json(path, table)?;
    println!("✓ Result table written to: {}", path.display());
    Ok(())
}
