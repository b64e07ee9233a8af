//! Parse/print collaborator.
//!
//! Wraps the SWC parser and code generator behind two operations:
//! [`SourceTree::parse`] (text to owned, mutable module tree, failing on
//! malformed input) and [`SourceTree::print`] (tree back to text). Comments
//! are collected into a store shared by the lexer and the emitter so they
//! survive the round trip.

use std::path::Path;

use swc_core::common::comments::SingleThreadedComments;
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap, Spanned};
use swc_core::ecma::ast::{EsVersion, Module};
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::codegen::{Config, Emitter};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use tracing::trace;

use crate::error::{MigrateError, ParseError};

/// Grammar a source file is parsed with, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Ts,
    Tsx,
    Js,
    Jsx,
}

impl SourceKind {
    /// Extensions eligible for migration.
    pub const EXTENSIONS: [&'static str; 4] = ["ts", "tsx", "js", "jsx"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" => Some(Self::Ts),
            "tsx" => Some(Self::Tsx),
            "js" => Some(Self::Js),
            "jsx" => Some(Self::Jsx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    fn syntax(self) -> Syntax {
        match self {
            Self::Ts => Syntax::Typescript(TsSyntax {
                decorators: true,
                ..Default::default()
            }),
            Self::Tsx => Syntax::Typescript(TsSyntax {
                tsx: true,
                decorators: true,
                ..Default::default()
            }),
            Self::Js | Self::Jsx => Syntax::Es(EsSyntax {
                jsx: true,
                decorators: true,
                ..Default::default()
            }),
        }
    }
}

/// One parsed source file: the module tree plus the source map and comment
/// store needed to print it again.
pub struct SourceTree {
    pub module: Module,
    cm: Lrc<SourceMap>,
    comments: SingleThreadedComments,
}

impl SourceTree {
    /// Parse `source`. `name` is only used for diagnostics.
    ///
    /// Recoverable syntax errors count as failures: a tree that did not parse
    /// cleanly is never handed to the rewriter.
    pub fn parse(source: &str, name: &str, kind: SourceKind) -> Result<Self, ParseError> {
        let cm: Lrc<SourceMap> = Default::default();
        let comments = SingleThreadedComments::default();
        let file = cm.new_source_file(
            Lrc::new(FileName::Custom(name.to_string())),
            source.to_string(),
        );

        let lexer = Lexer::new(
            kind.syntax(),
            EsVersion::latest(),
            StringInput::from(&*file),
            Some(&comments),
        );
        let mut parser = Parser::new_from(lexer);

        let parse_error = |err: swc_core::ecma::parser::error::Error| ParseError {
            file: name.to_string(),
            line: cm.lookup_char_pos(err.span().lo).line,
            message: format!("{:?}", err.kind()),
        };

        let module = parser.parse_module().map_err(parse_error)?;
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(parse_error(err));
        }

        trace!(file = name, items = module.body.len(), "parsed module");
        Ok(Self {
            module,
            cm,
            comments,
        })
    }

    /// Serialize the (possibly mutated) module back to source text.
    pub fn print(&self) -> Result<String, MigrateError> {
        let mut buf = Vec::new();
        {
            let mut emitter = Emitter {
                cfg: Config::default().with_target(EsVersion::latest()),
                cm: self.cm.clone(),
                comments: Some(&self.comments),
                wr: JsWriter::new(self.cm.clone(), "\n", &mut buf, None),
            };
            emitter.emit_module(&self.module).map_err(MigrateError::Print)?;
        }
        Ok(String::from_utf8(buf)?)
    }
}
