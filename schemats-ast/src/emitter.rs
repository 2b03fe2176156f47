//! Text buffer with indentation tracking for the printer.

use crate::Indent;

/// Accumulates printed text, inserting indentation at the start of each line.
///
/// Unlike a line-oriented builder, type nodes are mostly printed inline, so
/// indentation is written lazily when the first text of a line arrives.
///
/// # Example
///
/// ```
/// use schemats_ast::{Emitter, Indent};
///
/// let mut emitter = Emitter::new(Indent::COMPILER);
/// emitter
///     .push_raw("{")
///     .push_indent()
///     .push_newline()
///     .push_raw("a: string;")
///     .push_dedent()
///     .push_newline()
///     .push_raw("}");
/// assert_eq!(emitter.build(), "{\n    a: string;\n}");
/// ```
#[derive(Debug, Clone)]
pub struct Emitter {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    at_line_start: bool,
}

impl Emitter {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    /// Append text on the current line.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self;
        }
        if self.at_line_start {
            self.write_indent();
            self.at_line_start = false;
        }
        self.buffer.push_str(s);
        self
    }

    /// End the current line.
    pub fn push_newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Separate two blocks with an empty line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.push_newline().push_newline()
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a JSDoc comment followed by a line break.
    ///
    /// Single-line text prints as `/** text */`; multi-line text prints one
    /// ` * ` line per input line.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() <= 1 {
            self.push_raw(&format!("/** {} */", text.trim_end()));
            return self.push_newline();
        }
        self.push_raw("/**").push_newline();
        for line in lines {
            if line.is_empty() {
                self.push_raw(" *");
            } else {
                self.push_raw(&format!(" * {}", line));
            }
            self.push_newline();
        }
        self.push_raw(" */").push_newline()
    }

    /// Add a JSDoc comment on the current line, collapsing line breaks.
    pub fn push_inline_jsdoc(&mut self, text: &str) -> &mut Self {
        let flat: Vec<&str> = text.lines().map(str::trim).collect();
        self.push_raw(&format!("/** {} */ ", flat.join(" ")))
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the emitter and return the printed text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
