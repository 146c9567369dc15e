//! Row-by-row pairing of two scans into 3D lattice points
//!
//! Image A contributes the X coordinate, image B the Z coordinate, and the
//! shared row becomes Y. Only rows present in both scans are merged. Within a
//! row the shorter side is repeated cyclically until both sides have the
//! length of the longer one, then records are paired index for index,
//! optionally after shuffling each side independently.

use crate::color::ColorId;
use crate::scan::{PixelRecord, RowIndex};
use glam::UVec3;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// How records of a shared row are paired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pairing {
    /// Pair in scan order
    Ordered,
    /// Shuffle both sides before pairing, seeded from OS entropy
    #[default]
    Shuffled,
    /// Shuffle with a fixed seed
    Seeded(u64),
}

/// Material ids of the two faces of a merged point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    pub x: ColorId,
    pub z: ColorId,
}

/// Insertion-ordered set of merged points
///
/// Re-inserting an existing position replaces its colors but keeps its
/// original place in the iteration order.
#[derive(Debug, Clone, Default)]
pub struct MergedPoints {
    points: Vec<(UVec3, ColorPair)>,
    lookup: HashMap<UVec3, usize>,
}

impl MergedPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, position: UVec3, colors: ColorPair) {
        match self.lookup.get(&position) {
            Some(&index) => self.points[index].1 = colors,
            None => {
                self.lookup.insert(position, self.points.len());
                self.points.push((position, colors));
            }
        }
    }

    pub fn get(&self, position: UVec3) -> Option<&ColorPair> {
        self.lookup.get(&position).map(|&index| &self.points[index].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (UVec3, &ColorPair)> {
        self.points.iter().map(|(position, colors)| (*position, colors))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Merge two scans with the given pairing strategy
pub fn merge(rows_x: &RowIndex, rows_z: &RowIndex, pairing: Pairing) -> MergedPoints {
    match pairing {
        Pairing::Ordered => merge_ordered(rows_x, rows_z),
        Pairing::Shuffled => merge_shuffled(rows_x, rows_z, &mut StdRng::from_os_rng()),
        Pairing::Seeded(seed) => {
            merge_shuffled(rows_x, rows_z, &mut StdRng::seed_from_u64(seed))
        }
    }
}

/// Deterministic merge: records are paired in scan order
pub fn merge_ordered(rows_x: &RowIndex, rows_z: &RowIndex) -> MergedPoints {
    merge_with(rows_x, rows_z, |xs, zs| (xs, zs))
}

/// Randomized merge: each side of each row is shuffled independently
pub fn merge_shuffled<R: Rng + ?Sized>(
    rows_x: &RowIndex,
    rows_z: &RowIndex,
    rng: &mut R,
) -> MergedPoints {
    merge_with(rows_x, rows_z, |mut xs, mut zs| {
        xs.shuffle(&mut *rng);
        zs.shuffle(&mut *rng);
        (xs, zs)
    })
}

fn merge_with<'a, F>(rows_x: &'a RowIndex, rows_z: &'a RowIndex, mut arrange: F) -> MergedPoints
where
    F: FnMut(
        Vec<&'a PixelRecord>,
        Vec<&'a PixelRecord>,
    ) -> (Vec<&'a PixelRecord>, Vec<&'a PixelRecord>),
{
    let mut merged = MergedPoints::new();
    let mut skipped = 0usize;

    // Rows are visited in ascending order, bottom scanline first, so the
    // emitted point order depends only on the two row indices.
    for (y, xs) in rows_x.iter() {
        let Some(zs) = rows_z.row(y) else {
            tracing::trace!(row = y, "row missing from second scan, dropped");
            skipped += 1;
            continue;
        };

        let n = xs.len().max(zs.len());
        let (xs, zs) = arrange(cycle_to(xs, n), cycle_to(zs, n));

        for (x_rec, z_rec) in xs.into_iter().zip(zs) {
            merged.insert(
                UVec3::new(x_rec.coordinate, y, z_rec.coordinate),
                ColorPair {
                    x: x_rec.color_id.clone(),
                    z: z_rec.color_id.clone(),
                },
            );
        }
    }

    tracing::debug!(
        points = merged.len(),
        rows_dropped = skipped,
        "merged rows"
    );

    merged
}

/// Repeat `records` cyclically up to length `n`; empty input stays empty
fn cycle_to(records: &[PixelRecord], n: usize) -> Vec<&PixelRecord> {
    if records.is_empty() {
        return Vec::new();
    }
    (0..n).map(|i| &records[i % records.len()]).collect()
}
