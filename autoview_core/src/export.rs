//! Viewpoint export
//!
//! Plain-text output: one line per top-level viewpoint holding its 4×4
//! world transform as 16 space-terminated floats in row-major order,
//! immediately followed by the child transform's 16 floats when a
//! previous-frame child exists. Lines are separated by `\n` with no
//! trailing newline.

use glam::Mat4;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::autoview_info;
use crate::error::{AutoviewError, AutoviewResult};
use crate::store::ViewpointStore;

fn push_matrix(out: &mut String, matrix: Mat4) {
    // glam stores columns; transpose to emit rows
    for value in matrix.transpose().to_cols_array() {
        let _ = write!(out, "{} ", value);
    }
}

/// Render the store into the export text format.
pub fn format_viewpoints(store: &ViewpointStore) -> String {
    let mut lines = Vec::new();
    for (_, view) in store.top_level_ordered() {
        let mut line = String::new();
        push_matrix(&mut line, view.pose.matrix());
        if let Some(child) = view.child.and_then(|key| store.get(key)) {
            push_matrix(&mut line, child.pose.matrix());
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Write the export file to `path`.
pub fn write_viewpoints(path: &Path, store: &ViewpointStore) -> AutoviewResult<()> {
    let content = format_viewpoints(store);
    fs::write(path, content).map_err(|e| {
        AutoviewError::ExportFailed(format!("failed to write {}: {}", path.display(), e))
    })?;
    autoview_info!(
        "autoview::Export",
        "wrote {} viewpoints to {}",
        store.top_level_ordered().count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
