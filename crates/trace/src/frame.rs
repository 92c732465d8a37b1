//! Single stack locations.
//!
//! A [`Frame`] stores nothing but the raw instruction pointer recorded during a
//! stack walk. File, line and function name are decoded on every query, so a
//! frame is cheap to copy and compare and costs nothing until it is inspected.

use core::fmt;
use std::path::Path;

use crate::symbolize::{self, Symbol, UNKNOWN};

/// One location in a captured call stack.
///
/// Two frames are equal iff they were recorded from the same instruction
/// pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    ip: usize,
}

/// Presentation modes for a [`Frame`].
///
/// | Mode | Output |
/// |---|---|
/// | `File` | base name of the source file |
/// | `FuncAndPath` | full function name, `\n\t`, full source path |
/// | `Line` | source line |
/// | `FuncName` | short function name |
/// | `Location` | `File:Line` |
/// | `FullLocation` | `FuncAndPath:Line` |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrameFormat {
    /// Base name of the source file.
    File,
    /// Fully-qualified function name and full source path, separated by `\n\t`.
    FuncAndPath,
    /// Source line number.
    Line,
    /// Function name with its module path stripped.
    FuncName,
    /// `file:line` using the base file name.
    #[default]
    Location,
    /// Function name and full path followed by `:line`.
    FullLocation,
}

impl Frame {
    /// Creates a frame from a raw instruction pointer.
    #[inline]
    pub const fn from_ip(ip: usize) -> Self {
        Self { ip }
    }

    /// Returns the raw instruction pointer this frame was recorded from.
    #[inline]
    pub const fn ip(&self) -> usize {
        self.ip
    }

    /// Returns the full path of the source file, or `"unknown"`.
    pub fn file(&self) -> String {
        self.symbol()
            .map_or_else(|| UNKNOWN.to_owned(), |s| s.file().to_owned())
    }

    /// Returns the source line, or `0` if it cannot be resolved.
    pub fn line(&self) -> u32 {
        self.symbol().map_or(0, |s| s.line())
    }

    /// Returns the fully-qualified function name, or `"unknown"`.
    pub fn full_func_name(&self) -> String {
        self.symbol()
            .map_or_else(|| UNKNOWN.to_owned(), |s| s.name().to_owned())
    }

    /// Returns the function name with its module path stripped.
    ///
    /// `app::server::handle` becomes `handle`, `app::run::{{closure}}` becomes
    /// `run::{{closure}}`, and `<app::Conn as std::io::Read>::read` becomes
    /// `read`.
    pub fn func_name(&self) -> String {
        short_name(&self.full_func_name()).to_owned()
    }

    /// Returns the canonical single-line encoding `"<function> <file>:<line>"`,
    /// or `"unknown"` when the function cannot be resolved.
    pub fn to_text(&self) -> String {
        match self.symbol() {
            Some(symbol) if symbol.name.is_some() => {
                format!("{} {}:{}", symbol.name(), symbol.file(), symbol.line())
            }
            _ => UNKNOWN.to_owned(),
        }
    }

    /// Returns an adapter that renders this frame in the given mode.
    #[inline]
    pub const fn display(&self, format: FrameFormat) -> FrameDisplay {
        FrameDisplay {
            frame: *self,
            format,
        }
    }

    fn symbol(&self) -> Option<Symbol> {
        symbolize::resolve(self.ip)
    }
}

impl From<usize> for Frame {
    fn from(ip: usize) -> Self {
        Self::from_ip(ip)
    }
}

/// `{}` renders [`FrameFormat::Location`], `{:#}` renders
/// [`FrameFormat::FullLocation`].
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() {
            FrameFormat::FullLocation
        } else {
            FrameFormat::Location
        };
        fmt::Display::fmt(&self.display(format), f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Frame {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_text())
    }
}

/// Renders a [`Frame`] in one [`FrameFormat`]. Created by [`Frame::display`].
#[derive(Clone, Copy, Debug)]
pub struct FrameDisplay {
    frame: Frame,
    format: FrameFormat,
}

impl fmt::Display for FrameDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Resolve once per rendering, even for the combined modes.
        let symbol = self.frame.symbol().unwrap_or_default();
        write_frame(&symbol, self.format, f)
    }
}

fn write_frame(symbol: &Symbol, format: FrameFormat, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match format {
        FrameFormat::File => f.write_str(base_name(symbol.file())),
        FrameFormat::FuncAndPath => write!(f, "{}\n\t{}", symbol.name(), symbol.file()),
        FrameFormat::Line => write!(f, "{}", symbol.line()),
        FrameFormat::FuncName => f.write_str(short_name(symbol.name())),
        FrameFormat::Location => {
            write_frame(symbol, FrameFormat::File, f)?;
            f.write_str(":")?;
            write_frame(symbol, FrameFormat::Line, f)
        }
        FrameFormat::FullLocation => {
            write_frame(symbol, FrameFormat::FuncAndPath, f)?;
            f.write_str(":")?;
            write_frame(symbol, FrameFormat::Line, f)
        }
    }
}

fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Strips the module path from a demangled function path.
///
/// Splits on `::` outside of `<...>` qualifiers and keeps the last named
/// segment together with any `{{closure}}` markers that follow it.
fn short_name(full: &str) -> &str {
    let mut depth = 0usize;
    // Byte offsets where each top-level segment starts.
    let mut starts = vec![0usize];
    let bytes = full.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                starts.push(i + 2);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    let segment = |idx: usize| {
        let end = starts.get(idx + 1).map_or(full.len(), |next| next - 2);
        &full[starts[idx]..end]
    };

    let mut first = starts.len() - 1;
    while first > 0 && segment(first).starts_with("{{") {
        first -= 1;
    }
    &full[starts[first]..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_strips_module_path() {
        assert_eq!(short_name("app::server::handle"), "handle");
        assert_eq!(short_name("handle"), "handle");
        assert_eq!(short_name(UNKNOWN), UNKNOWN);
    }

    #[test]
    fn test_short_name_keeps_closure_markers() {
        assert_eq!(short_name("app::run::{{closure}}"), "run::{{closure}}");
        assert_eq!(
            short_name("app::run::{{closure}}::{{closure}}"),
            "run::{{closure}}::{{closure}}"
        );
    }

    #[test]
    fn test_short_name_ignores_separators_inside_qualifiers() {
        assert_eq!(short_name("<app::Conn as std::io::Read>::read"), "read");
        assert_eq!(
            short_name("core::ops::function::FnOnce::call_once<app::main, ()>"),
            "call_once<app::main, ()>"
        );
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/src/app/server.rs"), "server.rs");
        assert_eq!(base_name("server.rs"), "server.rs");
        assert_eq!(base_name(UNKNOWN), UNKNOWN);
    }

    #[test]
    fn test_unresolvable_frame_degrades_to_sentinels() {
        let frame = Frame::from_ip(0);
        assert_eq!(frame.file(), UNKNOWN);
        assert_eq!(frame.line(), 0);
        assert_eq!(frame.full_func_name(), UNKNOWN);
        assert_eq!(frame.func_name(), UNKNOWN);
        assert_eq!(frame.to_text(), UNKNOWN);
    }

    #[test]
    fn test_unresolvable_frame_formats() {
        let frame = Frame::from_ip(0);
        assert_eq!(frame.display(FrameFormat::File).to_string(), "unknown");
        assert_eq!(
            frame.display(FrameFormat::FuncAndPath).to_string(),
            "unknown\n\tunknown"
        );
        assert_eq!(frame.display(FrameFormat::Line).to_string(), "0");
        assert_eq!(frame.display(FrameFormat::FuncName).to_string(), "unknown");
        assert_eq!(frame.to_string(), "unknown:0");
        assert_eq!(format!("{frame:#}"), "unknown\n\tunknown:0");
    }

    #[test]
    fn test_equality_is_by_instruction_pointer() {
        assert_eq!(Frame::from_ip(0x1000), Frame::from(0x1000));
        assert_ne!(Frame::from_ip(0x1000), Frame::from_ip(0x1001));
        assert_eq!(Frame::from_ip(0x1000).ip(), 0x1000);
    }

    #[inline(never)]
    fn here() -> Frame {
        crate::Stack::capture(0)
            .stack_source()
            .unwrap_or(Frame::from_ip(0))
    }

    #[test]
    fn test_resolved_frame_names_its_function() {
        let frame = here();
        assert_eq!(frame.func_name(), "here");
        assert!(frame.full_func_name().ends_with("frame::tests::here"));
        assert!(frame.file().ends_with("frame.rs"));
        assert!(frame.line() > 0);
        assert_eq!(frame.display(FrameFormat::File).to_string(), "frame.rs");
        assert!(frame.to_text().starts_with(&frame.full_func_name()));
        assert!(frame.to_string().starts_with("frame.rs:"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_text() {
        let frame = Frame::from_ip(0);
        assert_eq!(serde_json::to_string(&frame).unwrap(), "\"unknown\"");
    }
}
