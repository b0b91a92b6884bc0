//! Rule string tokenizer.

use std::fmt;

use crate::error::ConfigurationDefect;
use crate::violation::ViolationKind;

/// The checks understood by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Exact length (text only).
    Len,
    /// Lower bound: length for text, value for numbers.
    Min,
    /// Upper bound: length for text, value for numbers.
    Max,
    /// Set membership.
    In,
}

impl CheckKind {
    /// Parse a check name as written in a rule string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Self::Len),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// The name used in rule strings.
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Len => "len",
            CheckKind::Min => "min",
            CheckKind::Max => "max",
            CheckKind::In => "in",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One check token: a name and its raw argument, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check<'a> {
    pub kind: CheckKind,
    pub arg: Option<&'a str>,
}

impl<'a> Check<'a> {
    /// Parse the argument as an integer bound.
    pub fn int_arg(&self) -> Result<i64, ViolationKind> {
        self.arg
            .and_then(|arg| arg.parse().ok())
            .ok_or_else(|| self.syntax_error())
    }

    /// The raw argument, or a syntax violation when the token had no `:`.
    pub fn raw_arg(&self) -> Result<&'a str, ViolationKind> {
        self.arg.ok_or_else(|| self.syntax_error())
    }

    /// Violation reported when this check's argument is malformed.
    pub fn syntax_error(&self) -> ViolationKind {
        ViolationKind::InvalidValidatorSyntax {
            check: self.kind,
            arg: self.arg.map(str::to_string),
        }
    }
}

/// Lazy iterator over the checks of a rule string.
///
/// Tokens are separated by `,` and split into name and argument on the
/// first `:`. An `in` token takes the remainder of the rule string as its
/// comma-separated candidate list and ends iteration. An unknown name
/// yields a [`ConfigurationDefect`] and also ends iteration.
#[derive(Debug, Clone)]
pub struct Checks<'a> {
    rest: Option<&'a str>,
}

/// Tokenize a rule string.
pub fn checks(rule: &str) -> Checks<'_> {
    Checks { rest: Some(rule) }
}

impl<'a> Iterator for Checks<'a> {
    type Item = Result<Check<'a>, ConfigurationDefect>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;

        let (token, tail) = match rest.split_once(',') {
            Some((token, tail)) => (token, Some(tail)),
            None => (rest, None),
        };
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };

        let Some(kind) = CheckKind::from_name(name) else {
            return Some(Err(ConfigurationDefect::UnsupportedValidatorType {
                name: name.to_string(),
            }));
        };

        if kind == CheckKind::In {
            let arg = arg.map(|_| &rest[name.len() + 1..]);
            return Some(Ok(Check { kind, arg }));
        }

        self.rest = tail;
        Some(Ok(Check { kind, arg }))
    }
}
