//! Binding directives and their declared argument counts.

use crate::constants::DIRECTIVE_SIGIL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of arguments a directive takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No arguments (`&trans`, `&none`, unknown directives)
    None,
    /// Exactly one argument (`&kp Q`, `&mo 1`)
    Single,
    /// Two arguments (`&lt 1 SPACE`)
    Pair,
    /// One sub-command, plus a device index for `BT_SEL`
    Bluetooth,
}

impl Arity {
    /// Upper bound on the arguments a binding with this arity may carry.
    #[must_use]
    pub const fn max_args(self) -> usize {
        match self {
            Self::None => 0,
            Self::Single => 1,
            Self::Pair | Self::Bluetooth => 2,
        }
    }
}

/// Directives taking exactly one argument.
const SINGLE_ARG_DIRECTIVES: &[&str] = &[
    "kp", "mo", "to", "tog", "sl", "sk", "kt", "out", "rgb_ug", "ext_power",
];

/// Directives taking two arguments.
const PAIR_ARG_DIRECTIVES: &[&str] = &["lt", "mt"];

/// Bluetooth sub-command that takes a device index.
pub const BT_SELECT: &str = "BT_SEL";

/// Looks up the declared arity of a directive name (without the sigil).
///
/// Unknown directives default to [`Arity::None`].
#[must_use]
pub fn arity_of(directive: &str) -> Arity {
    if directive == "bt" {
        Arity::Bluetooth
    } else if PAIR_ARG_DIRECTIVES.contains(&directive) {
        Arity::Pair
    } else if SINGLE_ARG_DIRECTIVES.contains(&directive) {
        Arity::Single
    } else {
        Arity::None
    }
}

/// Returns true if the token starts a new directive.
#[must_use]
pub fn is_directive(token: &str) -> bool {
    token.starts_with(DIRECTIVE_SIGIL)
}

/// A single directive with its arguments, e.g. `&lt 1 SPACE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Directive name without the sigil (e.g. "kp", "mo")
    pub directive: String,
    /// Arguments in source order
    pub args: Vec<String>,
}

impl Binding {
    /// Creates a binding with no arguments.
    pub fn new(directive: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            args: Vec::new(),
        }
    }

    /// Adds an argument (builder style).
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Declared arity of this binding's directive.
    #[must_use]
    pub fn arity(&self) -> Arity {
        arity_of(&self.directive)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DIRECTIVE_SIGIL}{}", self.directive)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
