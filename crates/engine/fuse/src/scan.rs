//! Foreground pixel extraction grouped by (flipped) image row

use crate::color::{ColorId, ColorTable, Rgb};
use crate::source::PixelSource;
use std::collections::BTreeMap;

/// One foreground pixel: its column and the id of its color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRecord {
    pub coordinate: u32,
    pub color_id: ColorId,
}

impl PixelRecord {
    pub fn new(coordinate: u32, color_id: ColorId) -> Self {
        Self {
            coordinate,
            color_id,
        }
    }
}

/// Pixel records keyed by row, row 0 being the bottom scanline
///
/// A row can be absent or present with no records; [`RowIndex::row`] keeps
/// the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowIndex {
    rows: BTreeMap<u32, Vec<PixelRecord>>,
}

impl RowIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `row` as present, leaving existing records untouched
    pub fn insert_row(&mut self, row: u32) -> &mut Vec<PixelRecord> {
        self.rows.entry(row).or_default()
    }

    /// Append a record to the end of `row`
    pub fn push(&mut self, row: u32, record: PixelRecord) {
        self.insert_row(row).push(record);
    }

    pub fn row(&self, row: u32) -> Option<&[PixelRecord]> {
        self.rows.get(&row).map(Vec::as_slice)
    }

    /// Rows in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[PixelRecord])> {
        self.rows.iter().map(|(&row, records)| (row, records.as_slice()))
    }

    /// Number of present rows, empty ones included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total records across all rows
    pub fn record_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }
}

/// Collect every non-`background` pixel of `source`
///
/// Colors not yet in `table` are assigned ids in a fresh scan namespace.
/// Rows are flipped so that the bottom scanline of the image becomes row 0.
pub fn scan<S: PixelSource + ?Sized>(
    source: &S,
    background: Rgb,
    table: &mut ColorTable,
) -> RowIndex {
    let scan_id = table.begin_scan();
    let (width, height) = (source.width(), source.height());
    let colors_before = table.len();
    let mut rows = RowIndex::new();

    for y in 0..height {
        for x in 0..width {
            let color = source.pixel(x, y);
            if color == background {
                continue;
            }

            let color_id = table.intern(color, scan_id, y, x);
            rows.push(height - 1 - y, PixelRecord::new(x, color_id));
        }
    }

    tracing::debug!(
        scan = scan_id.index(),
        width,
        height,
        rows = rows.len(),
        records = rows.record_count(),
        new_colors = table.len() - colors_before,
        "scanned pixel source"
    );

    rows
}
