//! Line-level tokenization of mesh descriptions.

use std::str::SplitWhitespace;

use crate::attribute::AttributeKind;

/// A single input line, split into its command and arguments.
///
/// Runs of whitespace separate tokens; leading and trailing whitespace is ignored.
#[derive(Debug, Clone)]
pub enum Directive<'line> {
    /// `v`, `vt` or `vn`
    Attribute(AttributeKind, SplitWhitespace<'line>),
    /// `f`, followed by one corner token per polygon vertex
    Face(SplitWhitespace<'line>),
    /// Blank lines, comments, and any command this crate does not handle
    Ignored(Option<&'line str>),
}

impl<'line> Directive<'line> {
    pub fn parse(line: &'line str) -> Self {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => Self::Attribute(AttributeKind::Position, tokens),
            Some("vt") => Self::Attribute(AttributeKind::Texcoord, tokens),
            Some("vn") => Self::Attribute(AttributeKind::Normal, tokens),
            Some("f") => Self::Face(tokens),
            other => Self::Ignored(other),
        }
    }
}
