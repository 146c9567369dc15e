//! End-to-end fusion: decode, scan, merge, write

use crate::color::{ColorTable, Rgb};
use crate::error::FuseResult;
use crate::material::write_mtl;
use crate::merge::{merge, MergedPoints, Pairing};
use crate::mesh::{write_obj, FACES_PER_POINT, VERTICES_PER_POINT};
use crate::scan::scan;
use crate::source::{load_rgb, PixelSource};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const MESH_EXTENSION: &str = "obj";
pub const MATERIAL_EXTENSION: &str = "mtl";

/// Options for one fuse run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuseOptions {
    /// Color treated as empty space
    pub background: Rgb,
    pub pairing: Pairing,
}

impl Default for FuseOptions {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            pairing: Pairing::default(),
        }
    }
}

impl FuseOptions {
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }
}

/// Output file locations derived from a base path without extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub mesh: PathBuf,
    pub material: PathBuf,
    /// Name the mesh uses to reference the material file
    pub material_lib: String,
}

impl OutputPaths {
    pub fn from_base(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let name = base
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            mesh: with_suffix(base, MESH_EXTENSION),
            material: with_suffix(base, MATERIAL_EXTENSION),
            material_lib: format!("{}.{}", name, MATERIAL_EXTENSION),
        }
    }
}

/// Append `.ext` to the full base path (a dot in the base name is kept)
fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// Counts describing a fused model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuseSummary {
    pub points: usize,
    pub vertices: usize,
    pub faces: usize,
    pub materials: usize,
}

/// Color table and merged points of one run, ready to be written
#[derive(Debug, Clone)]
pub struct FusedModel {
    pub colors: ColorTable,
    pub points: MergedPoints,
}

impl FusedModel {
    pub fn summary(&self) -> FuseSummary {
        FuseSummary {
            points: self.points.len(),
            vertices: self.points.len() * VERTICES_PER_POINT,
            faces: self.points.len() * FACES_PER_POINT,
            materials: self.colors.len(),
        }
    }

    /// Write `<base>.mtl` then `<base>.obj`
    pub fn write(&self, base: impl AsRef<Path>) -> FuseResult<OutputPaths> {
        let paths = OutputPaths::from_base(base);
        write_mtl(&paths.material, &self.colors)?;
        write_obj(&paths.mesh, &paths.material_lib, &self.points)?;
        Ok(paths)
    }
}

/// Fuse two in-memory sources; `x_source` supplies X, `z_source` supplies Z
pub fn fuse_sources<A, B>(x_source: &A, z_source: &B, options: &FuseOptions) -> FusedModel
where
    A: PixelSource + ?Sized,
    B: PixelSource + ?Sized,
{
    let mut colors = ColorTable::new();
    let rows_x = scan(x_source, options.background, &mut colors);
    let rows_z = scan(z_source, options.background, &mut colors);
    let points = merge(&rows_x, &rows_z, options.pairing);
    FusedModel { colors, points }
}

/// Decode two image files, fuse them and write `<output_base>.obj` / `.mtl`
///
/// Both images are decoded before anything is written, so a decode failure
/// leaves no output behind.
pub fn fuse_files(
    image_a: impl AsRef<Path>,
    image_b: impl AsRef<Path>,
    output_base: impl AsRef<Path>,
    options: &FuseOptions,
) -> FuseResult<FuseSummary> {
    let img_a = load_rgb(image_a)?;
    let img_b = load_rgb(image_b)?;

    let model = fuse_sources(&img_a, &img_b, options);
    let paths = model.write(output_base)?;
    let summary = model.summary();

    tracing::info!(
        mesh = %paths.mesh.display(),
        material = %paths.material.display(),
        points = summary.points,
        faces = summary.faces,
        materials = summary.materials,
        "fused images"
    );

    Ok(summary)
}
