//! Text serialization of [WeldedMeshes](WeldedMesh).
//!
//! ```text
//! vertices <count>
//! <x> <y> <z> <u> <v> <nx> <ny> <nz> <uvFlag> <nFlag>   (repeated <count> times)
//! indices <count>
//! <i0> <i1> ... <i_{count-1}>
//! ```
//!
//! Floats use six decimal places; flags are `1` for a referenced attribute, `0` for a sentinel.

use std::{fmt, io};

use num_traits::AsPrimitive;
use objweld_common::ArrayIndex;

use crate::{CompositeVertex, Real, WeldedMesh};

impl<Idx: ArrayIndex> WeldedMesh<Idx> {
    /// Write this mesh to `out` in the welded text format.
    pub fn emit<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }

    /// Render this mesh in the welded text format.
    pub fn emit_to_string(&self) -> String {
        self.to_string()
    }
}

impl<Idx: ArrayIndex> fmt::Display for WeldedMesh<Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices {}", self.vertices.len())?;
        for v in &self.vertices {
            writeln!(f, "{v}")?;
        }
        writeln!(f, "indices {}", self.indices.len())?;
        let mut indices = self.indices.iter();
        if let Some(&first) = indices.next() {
            write!(f, "{}", AsPrimitive::<usize>::as_(first))?;
            for &i in indices {
                write!(f, " {}", AsPrimitive::<usize>::as_(i))?;
            }
        }
        writeln!(f)
    }
}

/// One vertex line, without the trailing newline.
impl fmt::Display for CompositeVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            position: p,
            texcoord: t,
            normal: n,
            ..
        } = self;
        for c in [p.x, p.y, p.z, t.x, t.y, n.x, n.y, n.z] {
            write!(f, "{} ", Fixed(c))?;
        }
        write!(
            f,
            "{} {}",
            u8::from(self.has_texcoord),
            u8::from(self.has_normal)
        )
    }
}

/// Six-decimal float; non-finite values are written as `nan`, `inf` and `-inf`.
struct Fixed(Real);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            x if x.is_nan() => f.write_str("nan"),
            x if x == Real::INFINITY => f.write_str("inf"),
            x if x == Real::NEG_INFINITY => f.write_str("-inf"),
            x => write!(f, "{x:.6}"),
        }
    }
}
