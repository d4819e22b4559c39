//! Line-oriented text buffer with nesting-aware indentation.

use crate::Result;

/// Accumulates emitted source text one line at a time.
///
/// Every line is prefixed with the indentation unit repeated once per open scope. Scopes are
/// balanced: closing more scopes than were opened, or finishing with scopes still open, is an
/// internal error.
#[derive(Debug, Clone)]
pub struct CodePrinter {
    text: String,
    indent: String,
    depth: usize,
}

impl CodePrinter {
    /// Create an empty printer using `indent` for one nesting level
    #[must_use]
    pub fn new(indent: impl Into<String>) -> Self {
        CodePrinter {
            text: String::new(),
            indent: indent.into(),
            depth: 0,
        }
    }

    /// Append `text` as one or more lines at the current depth.
    ///
    /// Embedded newlines start new lines, each indented on its own. Empty lines stay empty, and
    /// a single trailing newline in `text` does not produce an extra blank line.
    pub fn line(&mut self, text: &str) {
        let text = text.strip_suffix('\n').unwrap_or(text);
        for line in text.split('\n') {
            if !line.is_empty() {
                for _ in 0..self.depth {
                    self.text.push_str(&self.indent);
                }
                self.text.push_str(line);
            }
            self.text.push('\n');
        }
    }

    /// Append a block of text produced elsewhere; an empty block adds nothing
    pub fn block(&mut self, text: &str) {
        if !text.is_empty() {
            self.line(text);
        }
    }

    /// Enter a nested scope
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Leave the innermost scope
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if no scope is open.
    pub fn dedent(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(malformed_error!("Scope closed at depth 0"));
        }

        self.depth -= 1;
        Ok(())
    }

    /// Current nesting depth
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True if nothing has been appended yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the printer and return its text
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if scopes are still open.
    pub fn finish(self) -> Result<String> {
        if self.depth != 0 {
            return Err(malformed_error!(
                "Unbalanced scopes - {} still open",
                self.depth
            ));
        }

        Ok(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_indentation() {
        let mut printer = CodePrinter::new("  ");
        printer.line("struct A");
        printer.line("{");
        printer.indent();
        printer.line("int32_t LowerBound0;\nint32_t Size0;");
        printer.dedent().unwrap();
        printer.line("};");

        assert_eq!(
            printer.finish().unwrap(),
            "struct A\n{\n  int32_t LowerBound0;\n  int32_t Size0;\n};\n"
        );
    }

    #[test]
    fn test_block() {
        let mut printer = CodePrinter::new("\t");
        printer.block("");
        assert!(printer.is_empty());

        printer.indent();
        printer.block("void f();\n\nvoid g();\n");
        printer.dedent().unwrap();
        assert_eq!(printer.finish().unwrap(), "\tvoid f();\n\n\tvoid g();\n");
    }

    #[test]
    fn test_unbalanced() {
        let mut printer = CodePrinter::new("\t");
        assert!(matches!(printer.dedent(), Err(Error::Malformed { .. })));

        printer.indent();
        assert_eq!(printer.depth(), 1);
        assert!(matches!(printer.finish(), Err(Error::Malformed { .. })));
    }
}
