use num_traits::AsPrimitive;
use objweld_common::ArrayIndex;

use crate::{CompositeVertex, GpuVertex};

/// Deduplicated vertices plus the index sequence that reassembles the original faces.
///
/// Indices are 0-based positions within [vertices](Self::vertices), in face-corner order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeldedMesh<Idx: ArrayIndex = u32> {
    pub(crate) vertices: Vec<CompositeVertex>,
    pub(crate) indices: Vec<Idx>,
}

impl<Idx: ArrayIndex> Default for WeldedMesh<Idx> {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

impl<Idx: ArrayIndex> WeldedMesh<Idx> {
    pub(crate) fn from_parts(vertices: Vec<CompositeVertex>, indices: Vec<Idx>) -> Self {
        Self { vertices, indices }
    }

    #[inline]
    pub fn vertices(&self) -> &[CompositeVertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[Idx] {
        &self.indices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    pub fn into_parts(self) -> (Vec<CompositeVertex>, Vec<Idx>) {
        (self.vertices, self.indices)
    }

    /// Iterate the vertices referenced by the index sequence, in order.
    ///
    /// Indices that don't address a vertex (possible only for meshes read from text) are skipped.
    pub fn corners(&self) -> impl Iterator<Item = &CompositeVertex> + '_ {
        self.indices
            .iter()
            .filter_map(|&i| self.vertices.get(AsPrimitive::<usize>::as_(i)))
    }

    /// Vertex data in the interleaved layout uploaded to the GPU.
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().map(CompositeVertex::to_gpu).collect()
    }
}
