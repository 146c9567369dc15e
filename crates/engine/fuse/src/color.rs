//! RGB colors and the run-scoped color identifier table
//!
//! Every distinct color seen while scanning gets one [`ColorId`], which later
//! doubles as its material name in the MTL file. Identifiers are derived from
//! a per-scan number handed out by the table plus the image row/column where
//! the color first appeared, so two scans sharing a table never collide.

use std::collections::HashMap;
use std::fmt;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    /// Channels scaled into the [0, 1] range
    pub fn to_unit(self) -> [f64; 3] {
        let [r, g, b] = self.0;
        [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Rgb(channels)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Rgb(pixel.0)
    }
}

/// Run-unique textual handle for a color, used as the material name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(String);

impl ColorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one scan against a [`ColorTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanId(u32);

impl ScanId {
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Insertion-ordered mapping from RGB to [`ColorId`], shared by all scans of a run
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: Vec<(Rgb, ColorId)>,
    lookup: HashMap<Rgb, usize>,
    scans: u32,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new identifier namespace for one scan
    pub fn begin_scan(&mut self) -> ScanId {
        let id = ScanId(self.scans);
        self.scans += 1;
        id
    }

    /// Return the id for `color`, assigning one from `(scan, row, col)` if unseen
    pub fn intern(&mut self, color: Rgb, scan: ScanId, row: u32, col: u32) -> ColorId {
        if let Some(&index) = self.lookup.get(&color) {
            return self.entries[index].1.clone();
        }

        let id = ColorId(format!("c{}_{}_{}", scan.0, row, col));
        self.lookup.insert(color, self.entries.len());
        self.entries.push((color, id.clone()));
        id
    }

    pub fn get(&self, color: Rgb) -> Option<&ColorId> {
        self.lookup.get(&color).map(|&index| &self.entries[index].1)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, &ColorId)> {
        self.entries.iter().map(|(rgb, id)| (*rgb, id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
