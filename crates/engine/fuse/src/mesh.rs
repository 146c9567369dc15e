//! Wavefront OBJ serialization of merged points
//!
//! Each point becomes six corners of its unit cube and two quads: one facing
//! along X (colored by image A) and one facing along Z (colored by image B).
//! All vertices are written first, then all faces, and faces refer to
//! vertices by their 1-based position in the file. The vertex pass and the
//! face pass therefore walk the points in the same order.

use crate::error::{FuseError, FuseResult};
use crate::merge::MergedPoints;
use glam::UVec3;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Vertices written per point
pub const VERTICES_PER_POINT: usize = 6;

/// Faces written per point
pub const FACES_PER_POINT: usize = 2;

/// The six cube corners used by the two quads of a point at `p`
pub fn cube_corners(p: UVec3) -> [UVec3; VERTICES_PER_POINT] {
    let (x, y, z) = (p.x, p.y, p.z);
    [
        UVec3::new(x + 1, y, z),
        UVec3::new(x + 1, y + 1, z),
        UVec3::new(x + 1, y, z + 1),
        UVec3::new(x + 1, y + 1, z + 1),
        UVec3::new(x, y, z + 1),
        UVec3::new(x, y + 1, z + 1),
    ]
}

/// Vertex references of the X and Z quads for the point whose first vertex is `n`
pub fn quad_indices(n: usize) -> ([usize; 4], [usize; 4]) {
    ([n + 2, n + 4, n + 5, n + 3], [n, n + 2, n + 3, n + 1])
}

/// Serialize `points` to OBJ text referencing the material library `material_lib`
pub fn serialize_obj(points: &MergedPoints, material_lib: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "mtllib {}", material_lib);

    for (position, _) in points.iter() {
        for v in cube_corners(position) {
            let _ = writeln!(output, "v {} {} {}", v.x, v.y, v.z);
        }
    }

    let mut index = 1;
    for (_, colors) in points.iter() {
        let (x_quad, z_quad) = quad_indices(index);
        write_face(&mut output, colors.x.as_str(), x_quad);
        write_face(&mut output, colors.z.as_str(), z_quad);
        index += VERTICES_PER_POINT;
    }

    output
}

fn write_face(output: &mut String, material: &str, quad: [usize; 4]) {
    let _ = writeln!(output, "usemtl {}", material);
    let _ = writeln!(output, "f {} {} {} {}", quad[0], quad[1], quad[2], quad[3]);
}

/// Write the OBJ file for `points`, replacing any existing file
pub fn write_obj(
    path: impl AsRef<Path>,
    material_lib: &str,
    points: &MergedPoints,
) -> FuseResult<()> {
    let path = path.as_ref();
    std::fs::write(path, serialize_obj(points, material_lib)).map_err(|source| {
        FuseError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), points = points.len(), "wrote mesh");
    Ok(())
}
