//! The interactive REPL.
//!
//! Each line is compiled (or translated) and the result printed. Lines
//! starting with `:` change the session instead.

use std::fmt::Write as _;
use std::io::{self, Write};

use hyperfixi_foundation::{Error, ErrorKind, Result};

use crate::compiler::AotCompiler;
use crate::editor::{LineEditor, META_COMMANDS, ReadResult, RustylineEditor, is_complete};
use crate::options::{CompileOptions, MAX_OPTIMIZATION_LEVEL};

/// What one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show.
    Print(String),
    /// Nothing to show.
    Silent,
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    compiler: AotCompiler,
    options: CompileOptions,
    /// Render lines in this language instead of compiling them.
    translate_to: Option<String>,
    json: bool,
    show_banner: bool,
    prompt: String,
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL reading from `editor`.
    pub fn with_editor(editor: E) -> Self {
        let mut repl = Self {
            editor,
            compiler: AotCompiler::new(),
            options: CompileOptions::default(),
            translate_to: None,
            json: false,
            show_banner: true,
            prompt: "hf> ".to_string(),
            continuation_prompt: ".. ".to_string(),
        };
        repl.refresh_keywords();
        repl
    }

    /// Starts from the given options.
    #[must_use]
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self.refresh_keywords();
        self
    }

    /// Prints results as JSON.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Runs until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        while self.read_eval_print()? {}
        println!("\nGoodbye!");
        Ok(())
    }

    /// One iteration. Returns `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };
        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);
        match self.eval(&input) {
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Quit) => return Ok(false),
            Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
        }
        Ok(true)
    }

    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        loop {
            let prompt = if input.is_empty() {
                &self.prompt
            } else {
                &self.continuation_prompt
            };
            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !input.is_empty() {
                        input.push('\n');
                    }
                    input.push_str(&line);
                    if is_complete(&input) {
                        return Ok(Some(input));
                    }
                }
                ReadResult::Interrupted => {
                    println!();
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof if input.is_empty() => return Ok(None),
                ReadResult::Eof => {
                    return Err(Error::new(ErrorKind::Io(
                        "unexpected EOF in multi-line input".to_string(),
                    )));
                }
            }
        }
    }

    /// Handles one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for bad meta-commands and for source that does not
    /// compile or translate.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let input = input.trim();
        if let Some(meta) = input.strip_prefix(':') {
            return self.meta(meta);
        }
        if let Some(target) = &self.translate_to {
            let text = self.compiler.translate(input, &self.options.language, target)?;
            return Ok(Outcome::Print(text));
        }

        let result = self.compiler.compile_one(input, &self.options);
        if self.json {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| Error::new(ErrorKind::Json(e.to_string())))?;
            return Ok(Outcome::Print(json));
        }
        if !result.success {
            return Err(Error::no_match(result.errors.join("; ")));
        }
        let mut text = result.code.unwrap_or_default();
        if let Some(parser) = result.metadata.parser_used {
            text = format!("\x1b[2m// {parser}\x1b[0m\n{text}");
        }
        for warning in &result.warnings {
            let _ = write!(text, "\n\x1b[33mwarning: {warning}\x1b[0m");
        }
        Ok(Outcome::Print(text))
    }

    fn meta(&mut self, command: &str) -> Result<Outcome> {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        match (name, arg) {
            ("q" | "quit", _) => Ok(Outcome::Quit),
            ("help", _) => Ok(Outcome::Print(HELP.to_string())),
            ("lang", None) => Ok(Outcome::Print(self.options.language.clone())),
            ("lang", Some(code)) => {
                self.compiler.parser().languages().get(code)?;
                self.options.language = code.to_string();
                self.refresh_keywords();
                Ok(Outcome::Print(format!("language: {code}")))
            }
            ("translate", None | Some("off")) => {
                self.translate_to = None;
                Ok(Outcome::Print("translation off".to_string()))
            }
            ("translate", Some(code)) => {
                self.compiler.parser().languages().get(code)?;
                self.translate_to = Some(code.to_string());
                Ok(Outcome::Print(format!("translating to {code}")))
            }
            ("opt", Some(level)) => {
                let level = level
                    .parse::<u8>()
                    .ok()
                    .filter(|l| *l <= MAX_OPTIMIZATION_LEVEL)
                    .ok_or_else(|| Error::parse(format!("bad optimization level: {level}"), 1, 6))?;
                self.options.optimization_level = level;
                Ok(Outcome::Print(format!("optimization level: {level}")))
            }
            ("opt", None) => Ok(Outcome::Print(self.options.optimization_level.to_string())),
            ("json", _) => {
                self.json = !self.json;
                Ok(Outcome::Silent)
            }
            _ => Err(Error::unknown_command(format!(":{name}"))),
        }
    }

    fn refresh_keywords(&mut self) {
        let mut keywords: Vec<String> = META_COMMANDS.iter().map(ToString::to_string).collect();
        if let Ok(language) = self.compiler.parser().languages().get(&self.options.language) {
            keywords.extend(language.lexicon().iter().cloned());
        }
        self.editor.set_keywords(keywords);
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mhyperfixi\x1b[0m {}", env!("CARGO_PKG_VERSION"));
        println!("Type hyperscript to compile it. :help lists commands, Ctrl+D exits.\n");
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
:lang [code]          show or set the source language
:translate <code|off> render input in another language instead of compiling
:opt [0|1|2]          show or set the optimization level
:json                 toggle JSON output
:quit                 exit";

#[cfg(test)]
mod tests {
    use super::*;

    struct MockEditor {
        inputs: Vec<String>,
        index: usize,
        keywords: Vec<String>,
    }

    impl MockEditor {
        fn new(inputs: Vec<&str>) -> Self {
            Self {
                inputs: inputs.into_iter().map(String::from).collect(),
                index: 0,
                keywords: Vec::new(),
            }
        }
    }

    impl LineEditor for MockEditor {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            if self.index < self.inputs.len() {
                let line = self.inputs[self.index].clone();
                self.index += 1;
                Ok(ReadResult::Line(line))
            } else {
                Ok(ReadResult::Eof)
            }
        }

        fn add_history(&mut self, _line: &str) {}

        fn set_keywords(&mut self, keywords: Vec<String>) {
            self.keywords = keywords;
        }
    }

    fn repl() -> Repl<MockEditor> {
        Repl::with_editor(MockEditor::new(vec![])).without_banner()
    }

    #[test]
    fn compiles_a_line() {
        let Outcome::Print(text) = repl().eval("on click toggle .active").unwrap() else {
            panic!("expected output");
        };
        assert!(text.contains("classList.toggle('active')"));
    }

    #[test]
    fn switching_language_updates_completion() {
        let mut repl = repl();
        repl.eval(":lang ja").unwrap();
        assert_eq!(repl.options().language, "ja");
        assert!(repl.editor.keywords.iter().any(|k| k == "切り替え"));
        assert!(repl.eval(":lang xx").is_err());
        assert_eq!(repl.options().language, "ja");
    }

    #[test]
    fn translate_mode() {
        let mut repl = repl();
        repl.eval(":translate es").unwrap();
        let Outcome::Print(text) = repl.eval("toggle .active").unwrap() else {
            panic!("expected output");
        };
        assert!(text.contains(".active"));
        assert!(!text.contains("classList"));
    }

    #[test]
    fn optimization_level() {
        let mut repl = repl();
        repl.eval(":opt 1").unwrap();
        assert_eq!(repl.options().optimization_level, 1);
        assert!(repl.eval(":opt 9").is_err());
        assert!(repl.eval(":frobnicate").is_err());
    }

    #[test]
    fn run_stops_at_quit() {
        let editor = MockEditor::new(vec!["toggle .a", ":quit", "never read"]);
        let mut repl = Repl::with_editor(editor).without_banner();
        repl.run().unwrap();
        assert_eq!(repl.editor.index, 2);
    }

    #[test]
    fn multi_line_input() {
        let editor = MockEditor::new(vec!["[on event:click body:{", "[toggle patient:.a] }]"]);
        let mut repl = Repl::with_editor(editor).without_banner();
        let input = repl.read_input().unwrap().unwrap();
        assert_eq!(input, "[on event:click body:{\n[toggle patient:.a] }]");
    }
}
