//! `blockMeshDict` serialization.
//!
//! Writes an accumulated session in the external mesher's dictionary
//! layout: the `FoamFile` header, then the `vertices`, `blocks`, `edges`,
//! `boundary` and `mergePatchPairs` sections in that order. Vertex, block
//! and edge entries carry their index as a trailing comment. Sessions
//! serialize deterministically: equal state produces identical bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::BlockMesh;

/// Writes the session to `writer` in `blockMeshDict` form.
///
/// Collected merge pairs are not emitted; the `mergePatchPairs` section is
/// always empty.
///
/// # Errors
///
/// Returns any I/O error raised by the underlying writer.
pub fn write<W: Write>(mesh: &BlockMesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "FoamFile")?;
    writeln!(writer, "{{")?;
    writeln!(writer, "    version     2.0;")?;
    writeln!(writer, "    format      ascii;")?;
    writeln!(writer, "    class       dictionary;")?;
    writeln!(writer, "    object      blockMeshDict;")?;
    writeln!(writer, "}}")?;
    writeln!(writer, "convertToMeters 1;")?;

    writeln!(writer, "\nvertices\n(")?;
    for (index, point) in mesh.points().iter().enumerate() {
        writeln!(
            writer,
            "    ({} {} {}) // {index}",
            point.x, point.y, point.z
        )?;
    }
    writeln!(writer, ");")?;

    writeln!(writer, "\nblocks\n(")?;
    for (index, block) in mesh.blocks().iter().enumerate() {
        let c = &block.corners;
        let r = &block.resolution;
        let g = &block.grading;
        writeln!(
            writer,
            "    hex ({} {} {} {} {} {} {} {}) ({} {} {}) simpleGrading ({} {} {}) // {index}",
            c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], r[0], r[1], r[2], g[0], g[1], g[2],
        )?;
    }
    writeln!(writer, ");")?;

    writeln!(writer, "\nedges\n(")?;
    for (index, arc) in mesh.arcs().iter().enumerate() {
        writeln!(
            writer,
            "    arc {} {} ({} {} {}) // {index}",
            arc.a, arc.b, arc.midpoint.x, arc.midpoint.y, arc.midpoint.z,
        )?;
    }
    writeln!(writer, ");")?;

    writeln!(writer, "\nboundary\n(")?;
    for patch in mesh.patches() {
        writeln!(writer, "    {}", patch.name)?;
        writeln!(writer, "    {{")?;
        writeln!(writer, "        type {};", patch.kind)?;
        writeln!(writer, "        faces")?;
        writeln!(writer, "        (")?;
        for face in &patch.faces {
            writeln!(
                writer,
                "            ({} {} {} {})",
                face[0], face[1], face[2], face[3]
            )?;
        }
        writeln!(writer, "        );")?;
        writeln!(writer, "    }}")?;
    }
    writeln!(writer, ");")?;

    writeln!(writer, "\nmergePatchPairs\n(\n);")?;
    Ok(())
}

/// Saves the session to a `blockMeshDict` file at `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Returns any I/O error from creating, writing or flushing the file.
pub fn save<P: AsRef<Path>>(mesh: &BlockMesh, path: P) -> Result<()> {
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer)?;
    writer.flush()?;
    tracing::debug!(
        path = %path.as_ref().display(),
        vertices = mesh.points().len(),
        blocks = mesh.blocks().len(),
        "wrote blockMeshDict"
    );
    Ok(())
}
