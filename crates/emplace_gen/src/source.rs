//! Source text builder for one definition.
//!
//! Tracks indentation while lines are appended; each definition is rendered
//! into its own builder and then handed to the driver as finished text.

/// Indentation unit (4 spaces, rustfmt style).
const INDENT: &str = "    ";

/// Line-oriented builder for generated Rust source.
#[derive(Default)]
pub struct SourceBuilder {
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(256),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line (with indentation and newline).
    pub fn writeln(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Take the generated output.
    pub fn finish(self) -> String {
        self.output
    }
}

/// Comma-separated list.
pub fn render_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Tuple expression or type: `()`, `(x,)`, `(x, y)`.
pub fn render_tuple<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => "()".to_string(),
        [single] => format!("({},)", single.as_ref()),
        _ => format!("({})", render_list(items)),
    }
}
