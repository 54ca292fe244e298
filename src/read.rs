//! Reading welded mesh text back into a [WeldedMesh], as the renderer does before upload.

use std::io::BufRead;

use objweld_common::ArrayIndex;

use crate::{CompositeVertex, Error, Real, Result, WeldedMesh};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Indices,
}

/// Parse the count following a section keyword; only used as a capacity hint.
fn header_count(line: &str, keyword: &str) -> Option<Option<usize>> {
    let rest = line.strip_prefix(keyword)?;
    Some(rest.split_whitespace().next().and_then(|n| n.parse().ok()))
}

fn welded_err(line: usize, reason: impl Into<String>) -> Error {
    Error::Welded {
        line,
        reason: reason.into(),
    }
}

fn parse_vertex(text: &str, line: usize) -> Result<CompositeVertex> {
    let mut tokens = text.split_whitespace();
    let mut f = [0.0 as Real; 8];
    for slot in f.iter_mut() {
        let token = tokens
            .next()
            .ok_or_else(|| welded_err(line, "vertex line has fewer than 10 fields"))?;
        *slot = token
            .parse()
            .map_err(|e| welded_err(line, format!("bad vertex field {token:?}: {e}")))?;
    }
    let mut flag = || -> Result<bool> {
        let token = tokens
            .next()
            .ok_or_else(|| welded_err(line, "vertex line has fewer than 10 fields"))?;
        token
            .parse::<i64>()
            .map(|v| v != 0)
            .map_err(|e| welded_err(line, format!("bad vertex flag {token:?}: {e}")))
    };
    let has_texcoord = flag()?;
    let has_normal = flag()?;
    Ok(CompositeVertex {
        position: nalgebra::point![f[0], f[1], f[2]],
        texcoord: nalgebra::point![f[3], f[4]],
        normal: nalgebra::vector![f[5], f[6], f[7]],
        has_texcoord,
        has_normal,
    })
}

impl<Idx: ArrayIndex> WeldedMesh<Idx> {
    /// Parse welded mesh text.
    ///
    /// Lines before the first section header and blank lines are ignored. Header counts are
    /// treated as hints; a mismatch with what follows is logged, not rejected.
    pub fn parse(text: &str) -> Result<Self> {
        Self::read(text.as_bytes())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn read(input: impl BufRead) -> Result<Self> {
        let mut section = Section::Preamble;
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut expected_vertices = None;
        let mut expected_indices = None;

        for (i, line) in input.lines().enumerate() {
            let line_no = i + 1;
            let line = line?;
            let trimmed = line.trim();

            if let Some(count) = header_count(trimmed, "vertices") {
                if let Some(n) = count {
                    vertices.reserve(n);
                }
                expected_vertices = count;
                section = Section::Vertices;
                continue;
            }
            if let Some(count) = header_count(trimmed, "indices") {
                if let Some(n) = count {
                    indices.reserve(n);
                }
                expected_indices = count;
                section = Section::Indices;
                continue;
            }
            if trimmed.is_empty() {
                continue;
            }

            match section {
                Section::Preamble => {
                    tracing::trace!(line = line_no, "skipping line before first section header")
                }
                Section::Vertices => vertices.push(parse_vertex(trimmed, line_no)?),
                Section::Indices => {
                    for token in trimmed.split_whitespace() {
                        let index = token
                            .parse::<usize>()
                            .ok()
                            .and_then(Idx::try_from_usize)
                            .ok_or_else(|| welded_err(line_no, format!("bad index {token:?}")))?;
                        indices.push(index);
                    }
                }
            }
        }

        if expected_vertices.is_some_and(|n| n != vertices.len()) {
            tracing::warn!(
                expected = expected_vertices,
                actual = vertices.len(),
                "vertex count differs from header"
            );
        }
        if expected_indices.is_some_and(|n| n != indices.len()) {
            tracing::warn!(
                expected = expected_indices,
                actual = indices.len(),
                "index count differs from header"
            );
        }
        tracing::debug!(
            vertices = vertices.len(),
            indices = indices.len(),
            "read welded mesh"
        );

        Ok(Self::from_parts(vertices, indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_sections() {
        let mesh = WeldedMesh::<u32>::parse(
            "vertices 2\n\
             0.000000 1.000000 2.000000 0.500000 0.250000 0.000000 0.000000 1.000000 1 1\n\
             3 4 5 0 0 0 0 0 0 0\n\
             indices 4\n\
             0 1\n\
             1 0\n",
        )
        .unwrap();
        assert_eq!(mesh.vertices().len(), 2);
        assert_eq!(mesh.indices(), &[0, 1, 1, 0]);
        let v = &mesh.vertices()[0];
        assert_eq!(v.position, nalgebra::point![0.0, 1.0, 2.0]);
        assert_eq!(v.texcoord(), Some(&nalgebra::point![0.5, 0.25]));
        assert_eq!(v.normal(), Some(&nalgebra::vector![0.0, 0.0, 1.0]));
        assert!(!mesh.vertices()[1].has_texcoord);
    }

    #[test]
    fn header_count_is_a_hint() {
        let mesh = WeldedMesh::<u32>::parse("junk\nvertices\n1 2 3 0 0 0 0 0 0 0\nindices 9\n0 0 0\n")
            .unwrap();
        assert_eq!(mesh.vertices().len(), 1);
        assert_eq!(mesh.indices().len(), 3);
    }

    #[test]
    fn rejects_short_vertex_lines() {
        let err = WeldedMesh::<u32>::parse("vertices 1\n1 2 3\n").unwrap_err();
        assert!(matches!(err, Error::Welded { line: 2, .. }));
    }

    #[test]
    fn rejects_indices_too_wide() {
        let err = WeldedMesh::<u8>::parse("indices 1\n256\n").unwrap_err();
        assert!(matches!(err, Error::Welded { line: 2, .. }));
    }
}
