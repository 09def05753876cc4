//! Per-file reports, rendered as text or serialized as JSON.

use serde::Serialize;

use quill_grapheme::{clusters_of, ClusterStrategy};
use quill_ir::{characters_of, CharSymbol, StringValue};
use quill_lexer::{lex_literals, LexError, Literal, LiteralForm};
use quill_text::TextScanner;

/// What to collect for each decoded literal.
#[derive(Copy, Clone)]
pub enum Detail<'a> {
    /// Just the value.
    Value,
    /// The value plus every character's Unicode name.
    Names,
    /// The value split into clusters.
    Clusters(&'a (dyn ClusterStrategy + Sync)),
}

#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    /// Set when the file could not be read; `literals` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
    pub literals: Vec<LiteralReport>,
}

impl FileReport {
    pub fn unreadable(path: &str, message: String) -> Self {
        FileReport {
            path: path.to_owned(),
            read_error: Some(message),
            literals: Vec::new(),
        }
    }

    /// Lex `source` and collect `detail` for each literal.
    #[tracing::instrument(level = "debug", skip(source, detail))]
    pub fn build(path: &str, source: &str, detail: Detail<'_>) -> Self {
        let literals = lex_literals(source)
            .into_iter()
            .map(|result| match result {
                Ok(literal) => LiteralReport::decoded(&literal, detail),
                Err(err) => LiteralReport::failed(&err),
            })
            .collect();
        FileReport {
            path: path.to_owned(),
            read_error: None,
            literals,
        }
    }

    /// Number of failures: an unreadable file, or one per bad literal.
    pub fn error_count(&self) -> usize {
        usize::from(self.read_error.is_some())
            + self.literals.iter().filter(|l| l.error.is_some()).count()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LiteralReport {
    /// `line:col..line:col`, 1-based columns.
    pub span: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter_len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<NamedChar>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl LiteralReport {
    fn decoded(literal: &Literal, detail: Detail<'_>) -> Self {
        let token = &literal.token;
        let (names, clusters) = match detail {
            Detail::Value => (Vec::new(), Vec::new()),
            Detail::Names => (
                characters_of(&literal.value)
                    .into_items()
                    .map(NamedChar::from)
                    .collect(),
                Vec::new(),
            ),
            Detail::Clusters(strategy) => (Vec::new(), cluster_strings(&literal.value, strategy)),
        };
        LiteralReport {
            span: token.span.to_string(),
            form: Some(match token.form {
                LiteralForm::SingleLine => "single-line",
                LiteralForm::MultiLine { .. } => "multi-line",
            }),
            delimiter_len: Some(token.delimiter_len),
            column: token.column(),
            value: Some(literal.value.to_string()),
            names,
            clusters,
            error: None,
        }
    }

    fn failed(err: &LexError) -> Self {
        LiteralReport {
            span: err.span.to_string(),
            form: None,
            delimiter_len: None,
            column: None,
            value: None,
            names: Vec::new(),
            clusters: Vec::new(),
            error: Some(ErrorReport::from(err)),
        }
    }
}

fn cluster_strings(value: &StringValue, strategy: &(dyn ClusterStrategy + Sync)) -> Vec<String> {
    clusters_of(value, strategy)
        .into_items()
        .map(|cluster| cluster.to_string())
        .collect()
}

#[derive(Clone, Debug, Serialize)]
pub struct NamedChar {
    /// `U+XXXX`.
    pub code_point: String,
    pub namespace: &'static str,
    pub name: &'static str,
}

impl From<CharSymbol> for NamedChar {
    fn from(symbol: CharSymbol) -> Self {
        NamedChar {
            code_point: format!("U+{:04X}", u32::from(symbol.code_point())),
            namespace: symbol.namespace(),
            name: symbol.name(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorReport {
    pub message: String,
    pub recoverable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl From<&LexError> for ErrorReport {
    fn from(err: &LexError) -> Self {
        let mut suggestions = err.suggestions.clone();
        suggestions.sort_by_key(|s| s.priority);
        ErrorReport {
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            suggestions: suggestions.into_iter().map(|s| s.message).collect(),
        }
    }
}
