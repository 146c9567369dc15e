//! MTL serialization of the color table

use crate::color::{ColorTable, Rgb};
use crate::error::{FuseError, FuseResult};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Material block for one color
///
/// Only the diffuse term varies; the rest is a fixed unshaded material.
pub fn material_block(name: &str, color: Rgb) -> String {
    let [r, g, b] = color.to_unit();
    let mut block = String::new();
    let _ = writeln!(block, "newmtl {}", name);
    let _ = writeln!(block, "Ns 100");
    // Debug formatting keeps the decimal point on whole values (1.0, 0.0)
    let _ = writeln!(block, "Kd {:?} {:?} {:?}", r, g, b);
    let _ = writeln!(block, "Ks 1 1 1");
    let _ = writeln!(block, "Ka 0 0 0");
    let _ = writeln!(block, "Ni 1");
    let _ = writeln!(block, "d 1");
    let _ = writeln!(block, "illum 1");
    block.push('\n');
    block
}

/// Serialize every table entry, in table order
pub fn serialize_mtl(table: &ColorTable) -> String {
    table
        .iter()
        .map(|(rgb, id)| material_block(id.as_str(), rgb))
        .collect()
}

/// Write the MTL file for `table`, replacing any existing file
pub fn write_mtl(path: impl AsRef<Path>, table: &ColorTable) -> FuseResult<()> {
    let path = path.as_ref();
    std::fs::write(path, serialize_mtl(table)).map_err(|source| FuseError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), materials = table.len(), "wrote materials");
    Ok(())
}
