//! Raw vertex attributes, as listed by `v`, `vt` and `vn` directives.

use nalgebra::{Point2, Point3, Vector3};

use crate::{Error, Real, Result};

pub type Position = Point3<Real>;
pub type Texcoord = Point2<Real>;
pub type Normal = Vector3<Real>;

/// Which attribute sequence a face corner index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Position,
    Texcoord,
    Normal,
}

impl AttributeKind {
    /// The directive keyword that appends to this sequence.
    pub const fn directive(self) -> &'static str {
        match self {
            AttributeKind::Position => "v",
            AttributeKind::Texcoord => "vt",
            AttributeKind::Normal => "vn",
        }
    }

    /// Number of numeric arguments the directive requires.
    pub const fn components(self) -> usize {
        match self {
            AttributeKind::Position | AttributeKind::Normal => 3,
            AttributeKind::Texcoord => 2,
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeKind::Position => f.write_str("position"),
            AttributeKind::Texcoord => f.write_str("texcoord"),
            AttributeKind::Normal => f.write_str("normal"),
        }
    }
}

/// The three attribute sequences of a mesh description, each in file order.
///
/// Face corners address these with 1-based indices; lookups are bounds-checked against whatever
/// has been loaded so far.
#[derive(Debug, Default, Clone)]
pub struct AttributeTable {
    positions: Vec<Position>,
    texcoords: Vec<Texcoord>,
    normals: Vec<Normal>,
}

impl AttributeTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn texcoords(&self) -> &[Texcoord] {
        &self.texcoords
    }

    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    /// Number of loaded attributes of the given kind.
    pub fn len(&self, kind: AttributeKind) -> usize {
        match kind {
            AttributeKind::Position => self.positions.len(),
            AttributeKind::Texcoord => self.texcoords.len(),
            AttributeKind::Normal => self.normals.len(),
        }
    }

    pub fn push_position(&mut self, p: Position) {
        self.positions.push(p);
    }

    pub fn push_texcoord(&mut self, t: Texcoord) {
        self.texcoords.push(t);
    }

    pub fn push_normal(&mut self, n: Normal) {
        self.normals.push(n);
    }

    /// Parse the arguments of an attribute directive and append the result.
    ///
    /// Arguments past the required component count are ignored (`vt u v w` loads as `(u, v)`).
    pub fn load<'a>(
        &mut self,
        kind: AttributeKind,
        args: impl IntoIterator<Item = &'a str>,
        line: usize,
    ) -> Result<()> {
        let mut c = [0.0; 3];
        let mut found = 0;
        for (slot, token) in c.iter_mut().zip(args).take(kind.components()) {
            *slot = token.parse::<Real>().map_err(|source| Error::Parse {
                line,
                directive: kind.directive(),
                token: token.to_owned(),
                source,
            })?;
            found += 1;
        }
        if found < kind.components() {
            return Err(Error::MissingComponent {
                line,
                directive: kind.directive(),
                expected: kind.components(),
                found,
            });
        }
        match kind {
            AttributeKind::Position => self.push_position(nalgebra::point![c[0], c[1], c[2]]),
            AttributeKind::Texcoord => self.push_texcoord(nalgebra::point![c[0], c[1]]),
            AttributeKind::Normal => self.push_normal(nalgebra::vector![c[0], c[1], c[2]]),
        }
        Ok(())
    }

    /// Convert a 1-based reference into a 0-based position within the `kind` sequence.
    fn offset(&self, kind: AttributeKind, index: i64) -> Option<usize> {
        let offset = usize::try_from(index).ok()?.checked_sub(1)?;
        (offset < self.len(kind)).then_some(offset)
    }

    /// Resolve a 1-based position reference.
    ///
    /// Returns `None` if `index` ∉ 1..=len.
    #[inline]
    pub fn position(&self, index: i64) -> Option<&Position> {
        self.offset(AttributeKind::Position, index)
            .map(|i| &self.positions[i])
    }

    /// Resolve a 1-based texcoord reference.
    #[inline]
    pub fn texcoord(&self, index: i64) -> Option<&Texcoord> {
        self.offset(AttributeKind::Texcoord, index)
            .map(|i| &self.texcoords[i])
    }

    /// Resolve a 1-based normal reference.
    #[inline]
    pub fn normal(&self, index: i64) -> Option<&Normal> {
        self.offset(AttributeKind::Normal, index)
            .map(|i| &self.normals[i])
    }
}
