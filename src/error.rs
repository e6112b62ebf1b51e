//! Errors reported while building and analyzing grammars.

use std::error::Error;
use std::fmt;

use crate::symbol::SymbolRepr;

/// Represents any error when building or analyzing a grammar.
///
/// Construction fails atomically. When one of these is returned, no
/// partially built registry, grammar or analysis is left behind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// The registry was asked for a name it does not know.
    NameNotFound(NameNotFound),
    /// A production rule text is malformed.
    Validation(ValidationError),
    /// Pre-built grammar parts do not fit together.
    Construction(ConstructionError),
    /// LL(1) analysis was requested for a grammar that is not context-free.
    NotContextFree,
}

/// A name that is neither a registered nonterminal, nor a terminal, nor `epsilon`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameNotFound {
    /// The unknown name.
    pub name: String,
}

/// Represents an error when parsing a production rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationError {
    /// The offending rule text, as given.
    pub rule: String,
    /// Reason for the error.
    pub kind: ValidationErrorKind,
}

/// Reason for a [`ValidationError`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationErrorKind {
    /// The rule has no `->` separator.
    MissingSeparator,
    /// The rule has more than one `->` separator.
    RepeatedSeparator,
    /// Nothing precedes the separator.
    EmptyLhs,
    /// Nothing follows the separator.
    EmptyRhs,
    /// A token could not be resolved.
    UnknownName(NameNotFound),
}

/// Grammar parts that were rejected during construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstructionError {
    /// The production at the given index has an empty left-hand side.
    EmptyLhs {
        /// Index into the production list.
        production: usize,
    },
    /// The production at the given index has an empty right-hand side.
    EmptyRhs {
        /// Index into the production list.
        production: usize,
    },
    /// The production at the given index mentions a symbol that the registry
    /// never issued.
    ForeignSymbol {
        /// Index into the production list.
        production: usize,
        /// Identity of the symbol.
        id: SymbolRepr,
    },
    /// The start symbol was not issued by the registry.
    ForeignStart {
        /// Identity of the start symbol.
        id: SymbolRepr,
    },
    /// The start symbol is a terminal or a reserved symbol.
    StartNotNonterminal {
        /// Identity of the start symbol.
        id: SymbolRepr,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::NameNotFound(err) => err.fmt(f),
            GrammarError::Validation(err) => err.fmt(f),
            GrammarError::Construction(err) => err.fmt(f),
            GrammarError::NotContextFree => {
                write!(f, "cannot analyze a non-context-free grammar for LL(1)")
            }
        }
    }
}

impl fmt::Display for NameNotFound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "name not found: {:?}", self.name)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match &self.kind {
            ValidationErrorKind::MissingSeparator => "missing `->` separator".to_string(),
            ValidationErrorKind::RepeatedSeparator => "more than one `->` separator".to_string(),
            ValidationErrorKind::EmptyLhs => "empty left-hand side".to_string(),
            ValidationErrorKind::EmptyRhs => "empty right-hand side".to_string(),
            ValidationErrorKind::UnknownName(err) => err.to_string(),
        };
        write!(f, "invalid production {:?}: {}", self.rule, reason)
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConstructionError::EmptyLhs { production } => {
                write!(f, "production {} has an empty left-hand side", production)
            }
            ConstructionError::EmptyRhs { production } => {
                write!(f, "production {} has an empty right-hand side", production)
            }
            ConstructionError::ForeignSymbol { production, id } => write!(
                f,
                "production {} refers to symbol {} unknown to the registry",
                production, id
            ),
            ConstructionError::ForeignStart { id } => {
                write!(f, "start symbol {} is unknown to the registry", id)
            }
            ConstructionError::StartNotNonterminal { id } => {
                write!(f, "start symbol {} is not a nonterminal", id)
            }
        }
    }
}

impl Error for GrammarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        // Display is forwarded to the payload, so the chain continues below it.
        match self {
            GrammarError::Validation(err) => err.source(),
            _ => None,
        }
    }
}

impl Error for NameNotFound {}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ValidationErrorKind::UnknownName(err) => Some(err),
            _ => None,
        }
    }
}

impl Error for ConstructionError {}

impl From<NameNotFound> for GrammarError {
    fn from(err: NameNotFound) -> Self {
        GrammarError::NameNotFound(err)
    }
}

impl From<ValidationError> for GrammarError {
    fn from(err: ValidationError) -> Self {
        GrammarError::Validation(err)
    }
}

impl From<ConstructionError> for GrammarError {
    fn from(err: ConstructionError) -> Self {
        GrammarError::Construction(err)
    }
}
