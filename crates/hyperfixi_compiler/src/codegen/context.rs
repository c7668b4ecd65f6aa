//! Per-compilation code generation state.

use std::collections::BTreeSet;

use super::{CodegenOptions, CodegenTarget};

/// State owned by one compilation. Never shared between snippets.
#[derive(Debug)]
pub struct CodegenContext<'o> {
    /// Output options.
    pub options: &'o CodegenOptions,
    /// Id of the handler being generated.
    pub handler_id: String,
    next_id: usize,
    selector_cache: Vec<(String, String)>,
    helpers: BTreeSet<String>,
    emitted: usize,
}

impl<'o> CodegenContext<'o> {
    /// Creates a fresh context.
    #[must_use]
    pub fn new(options: &'o CodegenOptions, handler_id: impl Into<String>) -> Self {
        Self {
            options,
            handler_id: handler_id.into(),
            next_id: 0,
            selector_cache: Vec::new(),
            helpers: BTreeSet::new(),
            emitted: 0,
        }
    }

    /// A temporary name unique within this compilation.
    pub fn fresh(&mut self, prefix: &str) -> String {
        let name = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        name
    }

    /// Records a runtime helper reference and returns its access path.
    pub fn helper(&mut self, name: &str) -> String {
        self.helpers.insert(name.to_string());
        format!("_rt.{name}")
    }

    /// Runtime helpers referenced so far.
    #[must_use]
    pub const fn helpers(&self) -> &BTreeSet<String> {
        &self.helpers
    }

    /// Registers a hoisted selector query.
    pub fn cache_selector(&mut self, key: &str, selector: &str) {
        if !self.selector_cache.iter().any(|(k, _)| k == key) {
            self.selector_cache
                .push((key.to_string(), selector.to_string()));
        }
    }

    /// Hoisted queries in first-use order as `(key, selector)`.
    #[must_use]
    pub fn cached_selectors(&self) -> &[(String, String)] {
        &self.selector_cache
    }

    /// Counts a real statement written to the output.
    pub fn count_statement(&mut self) {
        self.emitted += 1;
    }

    /// Number of real statements written.
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns true when the target has `??` and `?.`.
    #[must_use]
    pub fn modern(&self) -> bool {
        self.options.target == CodegenTarget::Es2020
    }

    /// Returns true when comments survive into the output.
    #[must_use]
    pub const fn comments(&self) -> bool {
        !self.options.minify || self.options.preserve_comments
    }
}

/// Indented line buffer.
#[derive(Debug, Default)]
pub struct Emitter {
    lines: Vec<(usize, String)>,
    indent: usize,
}

impl Emitter {
    /// Creates an empty buffer at indent zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line at the current indent.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push((self.indent, text.into()));
    }

    /// Appends a line and indents what follows.
    pub fn open(&mut self, text: impl Into<String>) {
        self.line(text);
        self.indent += 1;
    }

    /// Dedents and appends a closing line.
    pub fn close(&mut self, text: impl Into<String>) {
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    /// Closes a block and opens the next one (`} else {`).
    pub fn reopen(&mut self, text: impl Into<String>) {
        self.indent = self.indent.saturating_sub(1);
        self.open(text);
    }

    /// Appends another buffer's lines, nested under the current indent.
    pub fn append(&mut self, other: Self) {
        let base = self.indent;
        self.lines
            .extend(other.lines.into_iter().map(|(i, l)| (base + i, l)));
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the buffer. Minified output drops indentation and newlines.
    #[must_use]
    pub fn finish(&self, minify: bool) -> String {
        if minify {
            return self.lines.iter().map(|(_, l)| l.as_str()).collect();
        }
        self.lines
            .iter()
            .map(|(indent, line)| format!("{}{line}", "  ".repeat(*indent)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
