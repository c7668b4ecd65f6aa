//! The compile entry point.
//!
//! [`AotCompiler::compile`] tries each parsing strategy in turn, then runs
//! the AST through analysis, optimization, and code generation. Failure is
//! reported in the [`CompileResult`], never as an `Err`.

use std::collections::HashSet;
use std::fmt;

use hyperfixi_compiler::{
    Analyzer, AstBuilder, AstNode, CodeGenerator, GeneratedHandler, Optimizer, handler_id_base,
};
use hyperfixi_foundation::{Error, Result};
use hyperfixi_semantic::{ExplicitSyntax, SemanticParser};
use serde::{Deserialize, Serialize};

use crate::fallback::RegexRecognizer;
use crate::options::CompileOptions;
use crate::usage::Usage;

// =============================================================================
// Strategies
// =============================================================================

/// A parser supplied by the host for the classic hyperscript grammar.
pub trait TraditionalParser: Send + Sync {
    /// Parses source into a normalized AST.
    ///
    /// # Errors
    ///
    /// Any error; the next strategy is tried.
    fn parse(&self, source: &str) -> Result<AstNode>;
}

impl<F> TraditionalParser for F
where
    F: Fn(&str) -> Result<AstNode> + Send + Sync,
{
    fn parse(&self, source: &str) -> Result<AstNode> {
        self(source)
    }
}

/// The strategy that produced the AST.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserUsed {
    /// Bracket syntax.
    Explicit,
    /// The JSON interchange form.
    Json,
    /// The locale-aware semantic parser.
    Semantic,
    /// The host's traditional parser.
    Traditional,
    /// The single-command recognizer.
    Regex,
}

impl ParserUsed {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Json => "json",
            Self::Semantic => "semantic",
            Self::Traditional => "traditional",
            Self::Regex => "regex",
        }
    }
}

impl fmt::Display for ParserUsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Results
// =============================================================================

/// What a compilation did. Empty when nothing parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileMetadata {
    /// Id of the first handler.
    pub handler_id: String,
    /// Strategy that produced the AST.
    pub parser_used: Option<ParserUsed>,
    /// Source language.
    pub language: String,
    /// Commands in the optimized AST.
    pub commands_used: Vec<String>,
    /// Optimization passes that ran.
    pub optimizations_applied: Vec<String>,
    /// The code references the runtime.
    pub needs_runtime: bool,
    /// Runtime helper names.
    pub runtime_helpers: Vec<String>,
}

/// Outcome of one compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResult {
    /// True if code was generated.
    pub success: bool,
    /// Generated JavaScript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Generated handlers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<GeneratedHandler>,
    /// Why compilation failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
    /// What happened.
    pub metadata: CompileMetadata,
    /// Features the source uses.
    #[serde(default)]
    pub usage: Usage,
}

impl CompileResult {
    fn failure(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }
}

/// Handler ids already emitted in a batch.
#[derive(Clone, Debug, Default)]
pub struct HandlerIdRegistry {
    used: HashSet<String>,
}

impl HandlerIdRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id `base` would get: itself if free, otherwise the first free
    /// `base_2`, `base_3`, ...
    #[must_use]
    pub fn resolve(&self, base: &str) -> String {
        if !self.used.contains(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{base}_{n}"))
            .find(|id| !self.used.contains(id))
            .unwrap_or_else(|| base.to_string())
    }

    /// Marks an id as used.
    pub fn claim(&mut self, id: impl Into<String>) {
        self.used.insert(id.into());
    }

    /// Returns true if `id` is taken.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Number of ids taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Returns true if no id is taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

// =============================================================================
// Compiler
// =============================================================================

/// Parses, optimizes, and generates code for hyperfixi source.
pub struct AotCompiler {
    parser: SemanticParser,
    builder: AstBuilder,
    traditional: Option<Box<dyn TraditionalParser>>,
    recognizer: RegexRecognizer,
}

impl fmt::Debug for AotCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AotCompiler")
            .field("languages", &self.parser.languages().codes().collect::<Vec<_>>())
            .field("traditional", &self.traditional.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for AotCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl AotCompiler {
    /// Creates a compiler with the built-in languages and schemas.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parser(SemanticParser::new())
    }

    /// Creates a compiler around a configured semantic parser. The
    /// confidence threshold comes from [`CompileOptions`] instead.
    #[must_use]
    pub fn with_parser(parser: SemanticParser) -> Self {
        Self {
            parser,
            builder: AstBuilder::new(),
            traditional: None,
            recognizer: RegexRecognizer,
        }
    }

    /// Installs the host's traditional parser.
    #[must_use]
    pub fn with_traditional(mut self, parser: Box<dyn TraditionalParser>) -> Self {
        self.traditional = Some(parser);
        self
    }

    /// The semantic parser.
    #[must_use]
    pub const fn parser(&self) -> &SemanticParser {
        &self.parser
    }

    /// The semantic parser, for registering schemas and keywords.
    pub fn parser_mut(&mut self) -> &mut SemanticParser {
        &mut self.parser
    }

    /// Compiles one snippet with a fresh id registry.
    #[must_use]
    pub fn compile_one(&self, source: &str, options: &CompileOptions) -> CompileResult {
        self.compile(source, options, &mut HandlerIdRegistry::new())
    }

    /// Compiles one snippet, taking handler ids from `registry`.
    #[must_use]
    pub fn compile(
        &self,
        source: &str,
        options: &CompileOptions,
        registry: &mut HandlerIdRegistry,
    ) -> CompileResult {
        let (ast, parser_used) = match self.parse(source, options) {
            Ok(parsed) => parsed,
            Err(errors) => {
                tracing::warn!(language = %options.language, "no parser accepted the source");
                return CompileResult::failure(errors);
            }
        };
        let usage = Usage::from_ast(&ast);

        let analysis = Analyzer::analyze(&ast);
        let optimized = Optimizer::new(options.optimization_level).optimize(ast, &analysis);
        let analysis = Analyzer::analyze(&optimized.root);

        let handler_id = registry.resolve(&handler_id_base(&optimized.root));
        let mut metadata = CompileMetadata {
            handler_id: handler_id.clone(),
            parser_used: Some(parser_used),
            language: options.language.clone(),
            commands_used: analysis.commands_used.iter().cloned().collect(),
            optimizations_applied: optimized.applied_passes,
            needs_runtime: false,
            runtime_helpers: Vec::new(),
        };

        let generator = CodeGenerator::new(options.codegen.clone());
        let generated = match generator.generate(&optimized.root, &analysis, &handler_id) {
            Ok(generated) => generated,
            Err(e) => {
                return CompileResult {
                    errors: vec![e.to_string()],
                    warnings: analysis.warnings,
                    metadata,
                    usage,
                    ..CompileResult::default()
                };
            }
        };

        registry.claim(handler_id.clone());
        for handler in &generated.handlers {
            registry.claim(handler.id.clone());
        }
        metadata.needs_runtime = generated.needs_runtime();
        metadata.runtime_helpers = generated.helpers.iter().cloned().collect();

        let mut warnings = analysis.warnings;
        warnings.extend(generated.warnings);
        tracing::debug!(
            handler = %handler_id,
            parser = %parser_used,
            passes = metadata.optimizations_applied.len(),
            "compiled"
        );
        CompileResult {
            success: true,
            code: Some(generated.code),
            handlers: generated.handlers,
            errors: Vec::new(),
            warnings,
            metadata,
            usage,
        }
    }

    /// Runs the parsing strategies in order and returns the first AST.
    ///
    /// # Errors
    ///
    /// Returns one message per strategy tried when all of them fail.
    pub fn parse(
        &self,
        source: &str,
        options: &CompileOptions,
    ) -> std::result::Result<(AstNode, ParserUsed), Vec<String>> {
        let source = source.trim();
        let mut errors = Vec::new();
        if source.is_empty() {
            errors.push(Error::no_match("empty source").to_string());
            return Err(errors);
        }

        let mut attempt = |used: ParserUsed, result: Result<AstNode>| match result {
            Ok(ast) => {
                tracing::debug!(parser = %used, "strategy accepted");
                Some((ast, used))
            }
            Err(e) => {
                tracing::trace!(parser = %used, error = %e, "strategy rejected");
                errors.push(format!("{used}: {e}"));
                None
            }
        };

        if ExplicitSyntax::is_explicit(source) {
            if let Some(hit) = attempt(ParserUsed::Explicit, self.builder.build_explicit(source)) {
                return Ok(hit);
            }
        }
        if source.starts_with('{') {
            if let Some(hit) = attempt(ParserUsed::Json, self.builder.build_json(source)) {
                return Ok(hit);
            }
        }
        if let Some(hit) = attempt(ParserUsed::Semantic, self.semantic(source, options)) {
            return Ok(hit);
        }
        if let Some(traditional) = &self.traditional {
            if let Some(hit) = attempt(ParserUsed::Traditional, traditional.parse(source)) {
                return Ok(hit);
            }
        }
        if let Some(hit) = attempt(ParserUsed::Regex, self.recognizer.recognize(source)) {
            return Ok(hit);
        }
        Err(errors)
    }

    fn semantic(&self, source: &str, options: &CompileOptions) -> Result<AstNode> {
        let node = self
            .parser
            .parse_at(source, &options.language, options.confidence_threshold)?;
        self.builder.build(&node)
    }

    /// Parses in one language and renders in another.
    ///
    /// # Errors
    ///
    /// Returns the parse error, or `UnknownLanguage` for either code.
    pub fn translate(&self, source: &str, from: &str, to: &str) -> Result<String> {
        self.parser.translate(source, from, to)
    }
}
