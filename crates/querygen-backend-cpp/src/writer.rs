//! Indentation-tracking source text builder.
//!
//! Both renderers go through this writer, so the declaration and definition
//! artifacts cannot drift in indentation convention. Indentation is four
//! spaces per level; blank lines never carry trailing indentation.

/// Indentation unit for generated C++ source.
const INDENT: &str = "    ";

/// Accumulates generated source text line by line.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buf: String,
    depth: usize,
}

impl SourceWriter {
    /// Creates an empty writer at indentation depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the current indentation depth. An empty `text`
    /// produces a bare newline.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Appends a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Runs `body` with the indentation depth increased by one level.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    /// Appends `lines` at the current depth, or a single blank line when the
    /// list is empty. Generated method bodies and member blocks use this so
    /// an empty body still renders as one blank line between its braces.
    pub fn lines_or_blank(&mut self, lines: &[String]) {
        if lines.is_empty() {
            self.blank();
        } else {
            for line in lines {
                self.line(line);
            }
        }
    }

    /// Returns the accumulated text. Every line, including the last, is
    /// newline-terminated.
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_indented_per_depth() {
        let mut w = SourceWriter::new();
        w.line("class Foo {");
        w.indented(|w| {
            w.line("int x;");
            w.indented(|w| w.line("deep"));
        });
        w.line("};");
        assert_eq!(w.finish(), "class Foo {\n    int x;\n        deep\n};\n");
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let mut w = SourceWriter::new();
        w.indented(|w| {
            w.line("a");
            w.blank();
            w.line("");
            w.line("b");
        });
        assert_eq!(w.finish(), "    a\n\n\n    b\n");
    }

    #[test]
    fn empty_body_renders_as_single_blank_line() {
        let mut w = SourceWriter::new();
        w.line("{");
        w.indented(|w| w.lines_or_blank(&[]));
        w.line("}");
        assert_eq!(w.finish(), "{\n\n}\n");
    }

    #[test]
    fn output_is_newline_terminated() {
        let mut w = SourceWriter::new();
        w.line("only");
        assert_eq!(w.finish(), "only\n");
    }
}
