//! Crossworld fuse - two orthogonal images into one voxel model
//!
//! Image A is read as the model seen along the Z axis (its columns become X),
//! image B as the model seen along the X axis (its columns become Z). Rows
//! shared by both images are paired into lattice points, each rendered as two
//! colored quads of a unit cube and written as Wavefront OBJ + MTL.
//!
//! ## Architecture
//!
//! ```text
//! image A        image B
//!    ↓ load_rgb     ↓ load_rgb
//! scan() ──┐    ┌── scan()        (shared ColorTable)
//!          ↓    ↓
//!        merge()                  (Ordered / Shuffled / Seeded)
//!          ↓
//!     MergedPoints
//!      ↓        ↓
//! write_mtl()  write_obj()
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use crossworld_fuse::{fuse_files, FuseOptions, Pairing};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = FuseOptions::default().with_pairing(Pairing::Seeded(42));
//!     let summary = fuse_files("front.png", "side.png", "out/model", &options)?;
//!     println!("Wrote {} points", summary.points);
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod error;
pub mod material;
pub mod merge;
pub mod mesh;
pub mod pipeline;
pub mod scan;
pub mod source;

pub use color::{ColorId, ColorTable, Rgb, ScanId};
pub use error::{FuseError, FuseResult, Stage};
pub use material::{serialize_mtl, write_mtl};
pub use merge::{merge, merge_ordered, merge_shuffled, ColorPair, MergedPoints, Pairing};
pub use mesh::{serialize_obj, write_obj};
pub use pipeline::{fuse_files, fuse_sources, FuseOptions, FuseSummary, FusedModel, OutputPaths};
pub use scan::{scan, PixelRecord, RowIndex};
pub use source::{load_rgb, PixelGrid, PixelSource};
