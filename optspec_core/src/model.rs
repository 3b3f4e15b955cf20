/// The cardinality of values accepted by an option.
///
/// Inspired by Getopt::Long: <https://perldoc.perl.org/Getopt::Long#Summary-of-Option-Specifications>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arity {
    /// `:`: Precisely one value must be specified.
    Require,
    /// `?`: Zero or one value.
    Optional,
    /// `+`: At least one value; every occurrence is accumulated.
    Multiple,
    /// No marker: the option takes no value, its presence is the value.
    #[default]
    Flag,
}

impl Arity {
    /// The arity denoted by a spec-string marker, if `marker` is a supported one.
    ///
    /// The zero-or-more marker `*` is recognized by the spec parser, but has no `Arity`.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            ':' => Some(Arity::Require),
            '+' => Some(Arity::Multiple),
            '?' => Some(Arity::Optional),
            _ => None,
        }
    }

    /// The spec-string marker for this arity (`None` for a flag).
    pub fn marker(&self) -> Option<char> {
        match self {
            Arity::Require => Some(':'),
            Arity::Multiple => Some('+'),
            Arity::Optional => Some('?'),
            Arity::Flag => None,
        }
    }

    /// Whether an option of this arity consumes values at all.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Arity::Flag)
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.marker() {
            Some(m) => write!(f, "{m}"),
            None => Ok(()),
        }
    }
}
