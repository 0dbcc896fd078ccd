// crates/litpack-core/src/codegen.rs

use crate::escape::{escape_into, EscapeStyle};

/// Declaration prefix for every emitted array.
const DECLARATION: &str = "static const char";

/// One packing session: an owned accumulating source buffer.
///
/// Declarations are appended in call order and never touched again; the
/// buffer leaves the session exactly once, via `into_source`.
#[derive(Debug)]
pub struct Generator {
    style: EscapeStyle,
    source: String,
}

impl Generator {
    pub fn new(style: EscapeStyle) -> Self {
        Self {
            style,
            source: String::new(),
        }
    }

    /// Append `static const char <name>[] = "<escaped bytes>";\n`.
    pub fn push_array(&mut self, name: &str, data: &[u8]) {
        self.source.push_str(DECLARATION);
        self.source.push(' ');
        self.source.push_str(name);
        self.source.push_str("[] = \"");
        escape_into(self.style, data, &mut self.source);
        self.source.push_str("\";\n");
    }

    pub fn style(&self) -> EscapeStyle {
        self.style
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(EscapeStyle::default())
    }
}
