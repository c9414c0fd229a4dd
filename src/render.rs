//! Text rendering of solution paths.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};

use crate::layout::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Plain,
    /// Bold step headers via terminal escape sequences.
    Styled,
}

/// Writes each layout of `path` under a `# step` header, followed by a blank
/// line.
pub fn write_path<W: Write>(out: &mut W, path: &[Layout], style: PathStyle) -> io::Result<()> {
    for (step, layout) in path.iter().enumerate() {
        match style {
            PathStyle::Plain => writeln!(out, "# {step}")?,
            PathStyle::Styled => queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(format!("# {step}")),
                SetAttribute(Attribute::Reset),
                Print("\n")
            )?,
        }
        write!(out, "{layout}")?;
        writeln!(out)?;
    }
    out.flush()
}
