//! Vertex welding: one output vertex per distinct face corner token.
//!
//! Corners are deduplicated by their literal text, not by the attribute values they resolve to.
//! `1/1` and `1/1/` resolve identically but weld to two different vertices; two `1/1` corners
//! anywhere in the input always share one.

mod corner;
pub use corner::*;

use std::collections::HashMap;

use objweld_common::ArrayIndex;

use crate::{attribute::AttributeKind, AttributeTable, CompositeVertex, Error, Result, WeldedMesh};

/// Accumulates welded vertices and the index sequence referencing them.
#[derive(Debug, Clone)]
pub struct Welder<Idx: ArrayIndex = u32> {
    /// Corner token text -> position within `vertices`
    lookup: HashMap<String, Idx>,
    vertices: Vec<CompositeVertex>,
    indices: Vec<Idx>,
}

impl<Idx: ArrayIndex> Default for Welder<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: ArrayIndex> Welder<Idx> {
    pub fn new() -> Self {
        Self {
            lookup: HashMap::new(),
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[CompositeVertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[Idx] {
        &self.indices
    }

    /// Look up the welded index of a corner token, if it has been seen.
    #[inline]
    pub fn index_of(&self, token: &str) -> Option<Idx> {
        self.lookup.get(token).copied()
    }

    /// Weld every corner of a face, in order, appending one index per corner.
    ///
    /// No triangulation is performed; an N-gon contributes N indices. Returns the number of
    /// corners welded.
    pub fn weld_face<'a>(
        &mut self,
        table: &AttributeTable,
        corners: impl IntoIterator<Item = &'a str>,
        line: usize,
    ) -> Result<usize> {
        let mut count = 0;
        for token in corners {
            self.weld_corner(table, token, line)?;
            count += 1;
        }
        Ok(count)
    }

    /// Weld a single corner token, appending its index to the index sequence.
    pub fn weld_corner(&mut self, table: &AttributeTable, token: &str, line: usize) -> Result<Idx> {
        // attribute sequences only grow, so a token that resolved once still resolves
        let index = match self.lookup.get(token) {
            Some(&index) => {
                tracing::trace!(line, token, index = ?index, "reusing welded vertex");
                index
            }
            None => {
                let vertex = resolve(table, token, line)?;
                let index = Idx::try_from_usize(self.vertices.len()).ok_or(
                    Error::IndexOverflow {
                        count: self.vertices.len() + 1,
                    },
                )?;
                tracing::trace!(line, token, index = ?index, "welding new vertex");
                self.vertices.push(vertex);
                self.lookup.insert(token.to_owned(), index);
                index
            }
        };
        self.indices.push(index);
        Ok(index)
    }

    pub fn into_mesh(self) -> WeldedMesh<Idx> {
        WeldedMesh::from_parts(self.vertices, self.indices)
    }
}

/// Resolve a corner token against the attributes loaded so far.
pub fn resolve(table: &AttributeTable, token: &str, line: usize) -> Result<CompositeVertex> {
    let corner = Corner::parse(token).ok_or_else(|| Error::MalformedCorner {
        line,
        token: token.to_owned(),
    })?;
    let out_of_range = |attribute: AttributeKind, index: i64| Error::IndexOutOfRange {
        line,
        token: token.to_owned(),
        attribute,
        index,
        len: table.len(attribute),
    };

    let position = *table
        .position(corner.position)
        .ok_or_else(|| out_of_range(AttributeKind::Position, corner.position))?;
    let texcoord = corner
        .texcoord
        .map(|i| {
            table
                .texcoord(i)
                .copied()
                .ok_or_else(|| out_of_range(AttributeKind::Texcoord, i))
        })
        .transpose()?;
    let normal = corner
        .normal
        .map(|i| {
            table
                .normal(i)
                .copied()
                .ok_or_else(|| out_of_range(AttributeKind::Normal, i))
        })
        .transpose()?;

    Ok(CompositeVertex::new(position, texcoord, normal))
}
