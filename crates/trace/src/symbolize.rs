//! Symbol resolution for raw instruction pointers.
//!
//! All decoding of frames goes through [`resolve`]. Results are not cached
//! here; the `backtrace` crate keeps its own synchronized symbol caches.

use core::ffi::c_void;

/// Placeholder reported for any part of a frame that cannot be resolved.
pub const UNKNOWN: &str = "unknown";

/// Symbol information decoded from one instruction pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Symbol {
    /// Demangled function path, without the trailing symbol hash.
    pub(crate) name: Option<String>,
    pub(crate) file: Option<String>,
    pub(crate) line: Option<u32>,
}

impl Symbol {
    pub(crate) fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    pub(crate) fn file(&self) -> &str {
        self.file.as_deref().unwrap_or(UNKNOWN)
    }

    pub(crate) fn line(&self) -> u32 {
        self.line.unwrap_or(0)
    }
}

/// Resolve `ip` to its innermost symbol, if the platform knows it.
///
/// `ip` is a return address as recorded during the stack walk; `backtrace`
/// adjusts it back into the call instruction before the lookup.
pub(crate) fn resolve(ip: usize) -> Option<Symbol> {
    let mut resolved: Option<Symbol> = None;
    backtrace::resolve(ip as *mut c_void, |symbol| {
        // Inlined frames report several symbols; the first is the innermost.
        if resolved.is_some() {
            return;
        }
        resolved = Some(Symbol {
            name: symbol.name().map(|name| format!("{name:#}")),
            file: symbol
                .filename()
                .map(|path| path.to_string_lossy().into_owned()),
            line: symbol.lineno(),
        });
    });
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parts_fall_back_to_sentinels() {
        let symbol = Symbol::default();
        assert_eq!(symbol.name(), UNKNOWN);
        assert_eq!(symbol.file(), UNKNOWN);
        assert_eq!(symbol.line(), 0);
    }

    #[test]
    fn test_null_address_does_not_resolve() {
        assert_eq!(resolve(0), None);
    }
}
