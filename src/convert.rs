//! Single-pass conversion of a mesh description into a [WeldedMesh].

use std::io::{self, BufRead};

use objweld_common::ArrayIndex;

use crate::{AttributeTable, Directive, Result, WeldedMesh, Welder};

/// Counts gathered over one conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    /// Lines fed to the conversion, including ignored ones
    pub lines: usize,
    pub positions: usize,
    pub texcoords: usize,
    pub normals: usize,
    /// `f` directives welded
    pub faces: usize,
    /// Corner tokens welded; equal to the length of the output index sequence
    pub corners: usize,
    /// Distinct corner tokens; equal to the number of output vertices
    pub welded: usize,
    /// Lines with no recognized directive (blank lines, comments, unsupported commands)
    pub ignored: usize,
}

/// All state owned by a single conversion: the attribute table and the welder's output.
///
/// Lines are processed in stream order; a face may only reference attributes listed before it.
#[derive(Debug, Clone)]
pub struct Conversion<Idx: ArrayIndex = u32> {
    table: AttributeTable,
    welder: Welder<Idx>,
    stats: Stats,
}

impl<Idx: ArrayIndex> Default for Conversion<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: ArrayIndex> Conversion<Idx> {
    pub fn new() -> Self {
        Self {
            table: AttributeTable::new(),
            welder: Welder::new(),
            stats: Stats::default(),
        }
    }

    #[inline]
    pub fn table(&self) -> &AttributeTable {
        &self.table
    }

    #[inline]
    pub fn welder(&self) -> &Welder<Idx> {
        &self.welder
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Process one input line. `line` is the 1-based line number used in diagnostics.
    pub fn feed_line(&mut self, line: usize, text: &str) -> Result<()> {
        self.stats.lines += 1;
        match Directive::parse(text) {
            Directive::Attribute(kind, args) => self.table.load(kind, args, line)?,
            Directive::Face(corners) => {
                self.stats.corners += self.welder.weld_face(&self.table, corners, line)?;
                self.stats.faces += 1;
            }
            Directive::Ignored(command) => {
                tracing::trace!(line, command, "ignoring line");
                self.stats.ignored += 1;
            }
        }
        Ok(())
    }

    /// Process every line of `text`, numbering from 1.
    pub fn feed_str(&mut self, text: &str) -> Result<()> {
        text.lines()
            .enumerate()
            .try_for_each(|(i, line)| self.feed_line(i + 1, line))
    }

    /// Process every line of `input`, numbering from 1.
    pub fn feed_reader(&mut self, input: impl BufRead) -> Result<()> {
        for (i, line) in input.lines().enumerate() {
            self.feed_line(i + 1, &line?)?;
        }
        Ok(())
    }

    /// Finish the conversion, yielding the welded mesh and summary counts.
    pub fn finish(mut self) -> (WeldedMesh<Idx>, Stats) {
        self.stats.positions = self.table.positions().len();
        self.stats.texcoords = self.table.texcoords().len();
        self.stats.normals = self.table.normals().len();
        self.stats.welded = self.welder.vertices().len();
        let stats = self.stats;
        tracing::debug!(
            lines = stats.lines,
            positions = stats.positions,
            texcoords = stats.texcoords,
            normals = stats.normals,
            faces = stats.faces,
            corners = stats.corners,
            welded = stats.welded,
            ignored = stats.ignored,
            "finished welding"
        );
        (self.welder.into_mesh(), stats)
    }
}

/// Convert a whole mesh description held in memory.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn convert_str<Idx: ArrayIndex>(text: &str) -> Result<WeldedMesh<Idx>> {
    let mut conv = Conversion::new();
    conv.feed_str(text)?;
    Ok(conv.finish().0)
}

/// Convert a mesh description read line by line from `input`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn convert_reader<Idx: ArrayIndex>(input: impl BufRead) -> Result<WeldedMesh<Idx>> {
    let mut conv = Conversion::new();
    conv.feed_reader(input)?;
    Ok(conv.finish().0)
}

/// Convert `input` and write the welded text to `output`.
///
/// Nothing is written unless the whole conversion succeeds.
pub fn convert<W: io::Write + ?Sized>(input: impl BufRead, output: &mut W) -> Result<Stats> {
    let mut conv = Conversion::<u32>::new();
    conv.feed_reader(input)?;
    let (mesh, stats) = conv.finish();
    let text = mesh.emit_to_string();
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(stats)
}

/// Convert a mesh description held in memory straight to welded text.
pub fn convert_to_string(text: &str) -> Result<String> {
    convert_str::<u32>(text).map(|mesh| mesh.emit_to_string())
}
