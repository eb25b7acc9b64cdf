use glam::{Mat4, Vec3};
use super::*;
use crate::geom::Pose;
use crate::store::ViewpointStore;

fn store_with_poses(positions: &[Vec3]) -> ViewpointStore {
    let mut store = ViewpointStore::new();
    for &p in positions {
        store.insert(Pose::new(p, Vec3::ZERO));
    }
    store
}

#[test]
fn test_one_line_per_top_level_viewpoint() {
    let store = store_with_poses(&[Vec3::ZERO, Vec3::X]);
    let text = format_viewpoints(&store);
    assert_eq!(text.lines().count(), 2);
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_line_is_row_major_with_trailing_space() {
    let store = store_with_poses(&[Vec3::new(1.0, 2.0, 3.0)]);
    let text = format_viewpoints(&store);

    assert!(text.ends_with(' '));
    let fields: Vec<f32> = text
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(fields.len(), 16);

    // Row-major identity rotation with translation in the last column
    assert_eq!(fields[0], 1.0);
    assert_eq!(fields[3], 1.0);
    assert_eq!(fields[7], 2.0);
    assert_eq!(fields[11], 3.0);
    assert_eq!(fields[15], 1.0);
}

#[test]
fn test_child_appended_to_parent_line() {
    let mut store = store_with_poses(&[Vec3::ZERO]);
    let parent = store.top_level_ordered().next().unwrap().0;
    store
        .attach_child(parent, Pose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO), Mat4::IDENTITY)
        .unwrap();

    let text = format_viewpoints(&store);
    assert_eq!(text.lines().count(), 1);
    let fields: Vec<f32> = text
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(fields.len(), 32);
    // Child translation z lands at row-major index 11 of the second block
    assert_eq!(fields[16 + 11], 5.0);
}

#[test]
fn test_empty_store_formats_to_empty_string() {
    let store = ViewpointStore::new();
    assert_eq!(format_viewpoints(&store), "");
}

#[test]
fn test_write_failure_is_typed() {
    let store = store_with_poses(&[Vec3::ZERO]);
    let result = write_viewpoints(std::path::Path::new("/nonexistent/dir/out.cfg"), &store);
    assert!(matches!(result, Err(crate::AutoviewError::ExportFailed(_))));
}

#[test]
fn test_write_and_read_back() {
    let store = store_with_poses(&[Vec3::ZERO, Vec3::Y]);
    let path = std::env::temp_dir().join(format!("autoview_export_{}.cfg", std::process::id()));
    write_viewpoints(&path, &store).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(content, format_viewpoints(&store));
}
