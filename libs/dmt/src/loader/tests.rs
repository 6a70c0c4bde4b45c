//! Tests for DMT loading and triangle admission.

use super::*;
use crate::error::DmtFileErrorKind;
use crate::filter::{DegenerateTriangleFilter, DuplicateTriangleFilter, NoFilter};
use glam::DVec3;
use std::sync::Mutex;

/// A unit square split into two triangles sharing the diagonal.
fn square_block(version: u32) -> DmtBlock {
    DmtBlock::new(
        version,
        vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
        vec![[0, 1, 2], [0, 2, 3]],
    )
}

/// Records every triangle it is asked about, admitting all of them.
#[derive(Default)]
struct RecordingFilter {
    calls: Mutex<Vec<[DVec3; 3]>>,
}

impl TriangleFilter for RecordingFilter {
    fn can_add_triangle(&self, a: DVec3, b: DVec3, c: DVec3) -> bool {
        self.calls.lock().unwrap().push([a, b, c]);
        true
    }
}

#[test]
fn test_no_filter_admits_every_triangle() {
    let file = DmtFile::new(2)
        .with_block(square_block(2))
        .with_block(square_block(2));
    let (model, report) = DmtLoader::new(&NoFilter).load_with_report(&file).unwrap();

    assert_eq!(model.triangle_count(), file.triangle_count());
    assert_eq!(model.block_count(), 2);
    assert_eq!(
        report,
        LoadReport {
            offered: 4,
            accepted: 4,
            rejected: 0
        }
    );
}

#[test]
fn test_filter_is_consulted_once_per_triangle_in_source_order() {
    let file = DmtFile::new(2).with_block(square_block(2));
    let filter = RecordingFilter::default();
    DmtLoader::new(&filter).load(&file).unwrap();

    let calls = filter.calls.into_inner().unwrap();
    assert_eq!(
        calls,
        vec![
            [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)],
            [DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
        ]
    );
}

/// Invalid files never reach the filter, even if early blocks are fine.
#[test]
fn test_validation_happens_before_admission() {
    let file = DmtFile::new(2)
        .with_block(square_block(2))
        .with_block(DmtBlock::new(2, vec![DVec3::ZERO], vec![]));
    let filter = RecordingFilter::default();
    let err = DmtLoader::new(&filter).load(&file).unwrap_err();

    assert_eq!(err.kind(), DmtFileErrorKind::NoTriangles);
    assert_eq!(err.context().block_index, Some(1));
    assert!(filter.calls.into_inner().unwrap().is_empty());
}

#[test]
fn test_shared_vertices_are_registered_once() {
    let file = DmtFile::new(2).with_block(square_block(2));
    let model = DmtLoader::new(&NoFilter).load(&file).unwrap();
    let mesh = &model.blocks()[0];
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
}

/// Vertices used only by rejected triangles are dropped and the remaining
/// indices are compacted.
#[test]
fn test_rejected_triangle_vertices_are_discarded() {
    let block = DmtBlock::new(
        2,
        vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(20.0, 0.0, 0.0),
        ],
        // second triangle is collinear
        vec![[0, 1, 2], [1, 3, 4]],
    );
    let file = DmtFile::new(2).with_block(block);
    let (model, report) = DmtLoader::new(&DegenerateTriangleFilter::new())
        .load_with_report(&file)
        .unwrap();

    let mesh = &model.blocks()[0];
    assert_eq!(report.rejected, 1);
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.vertices(), &[DVec3::ZERO, DVec3::X, DVec3::Y]);
    assert!(mesh.validate());
}

#[test]
fn test_vertex_order_follows_first_admitted_use() {
    let block = DmtBlock::new(
        2,
        vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
        vec![[3, 2, 1]],
    );
    let file = DmtFile::new(2).with_block(block);
    let model = DmtLoader::new(&NoFilter).load(&file).unwrap();
    let mesh = &model.blocks()[0];
    assert_eq!(mesh.vertices(), &[DVec3::Z, DVec3::Y, DVec3::X]);
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
}

#[test]
fn test_fully_rejected_block_is_kept_empty() {
    let file = DmtFile::new(2)
        .with_block(square_block(2))
        .with_block(square_block(2));
    let dedupe = DuplicateTriangleFilter::new();
    let model = DmtLoader::new(&dedupe).load(&file).unwrap();

    assert_eq!(model.block_count(), 2);
    assert_eq!(model.blocks()[0].triangle_count(), 2);
    assert!(model.blocks()[1].is_empty());
    assert_eq!(model.blocks()[1].vertex_count(), 0);
}

#[test]
fn test_closure_filter() {
    let file = DmtFile::new(2).with_block(square_block(2));
    let only_first_quadrant = |a: DVec3, b: DVec3, c: DVec3| (a + b + c).y < 1.5;
    let model = DmtLoader::new(&only_first_quadrant).load(&file).unwrap();
    assert_eq!(model.triangle_count(), 1);
}

#[test]
fn test_unsupported_version_with_custom_config() {
    let file = DmtFile::new(1).with_block(square_block(1));
    let config = LoaderConfig::new(1.0e-9, 100, vec![2]).unwrap();
    let err = DmtLoader::new(&NoFilter)
        .with_config(config)
        .load(&file)
        .unwrap_err();
    assert_eq!(err.kind(), DmtFileErrorKind::UnsupportedFileFormat);
}

#[test]
fn test_duplicate_filter_follows_loader_tolerance() {
    let mut shifted = square_block(2);
    for v in &mut shifted.vertices {
        *v += DVec3::splat(1e-5);
    }
    let file = DmtFile::new(2)
        .with_block(square_block(2))
        .with_block(shifted);

    let coarse = LoaderConfig::new(1e-3, 100, vec![2]).unwrap();
    let filter = DuplicateTriangleFilter::from_config(&coarse);
    let (_, report) = DmtLoader::new(&filter)
        .with_config(coarse)
        .load_with_report(&file)
        .unwrap();
    assert_eq!(report.accepted, 2);
    assert_eq!(report.rejected, 2);

    let fine = DuplicateTriangleFilter::from_config(&LoaderConfig::default());
    let (_, report) = DmtLoader::new(&fine).load_with_report(&file).unwrap();
    assert_eq!(report.accepted, 4);
}

#[test]
fn test_parallel_load_matches_sequential() {
    let mut file = DmtFile::new(2);
    for i in 0..16 {
        let mut block = square_block(2);
        for v in &mut block.vertices {
            *v += DVec3::Z * f64::from(i);
        }
        file = file.with_block(block);
    }

    let loader = DmtLoader::new(&NoFilter);
    let sequential = loader.load_with_report(&file).unwrap();
    let parallel = loader.load_parallel(&file).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_load_fails_fast() {
    let file = DmtFile::new(2)
        .with_block(square_block(2))
        .with_block(square_block(1));
    let err = DmtLoader::new(&NoFilter).load_parallel(&file).unwrap_err();
    assert_eq!(err.kind(), DmtFileErrorKind::BlockVersionDoesNotMatchFileVersion);
}

#[test]
fn test_report_accumulates() {
    let mut total = LoadReport::default();
    total += LoadReport {
        offered: 3,
        accepted: 2,
        rejected: 1,
    };
    total += LoadReport {
        offered: 1,
        accepted: 1,
        rejected: 0,
    };
    assert_eq!(
        total,
        LoadReport {
            offered: 4,
            accepted: 3,
            rejected: 1
        }
    );
}
