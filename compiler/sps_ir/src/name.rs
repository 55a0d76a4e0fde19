//! Symbols: name literals, executable names, and dictionary keys.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

/// Leading character that turns a symbol into a name literal (`/square`).
pub const NAME_MARKER: char = '/';

/// An immutable, cheaply cloned symbol.
///
/// Name literals keep their marker: the literal `/n` is stored as `"/n"`, and it is
/// also the key a dictionary binding is stored under. Looking up the executable
/// name `n` re-attaches the marker (see [`Name::literal`]).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Rc<str>);

impl Name {
    pub fn new(text: &str) -> Self {
        Name(Rc::from(text))
    }

    /// The name literal (dictionary key) for a bare name: `n` becomes `/n`.
    pub fn literal(bare: &str) -> Self {
        let mut text = String::with_capacity(bare.len() + 1);
        text.push(NAME_MARKER);
        text.push_str(bare);
        Name(Rc::from(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this symbol carries the leading marker.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.0.starts_with(NAME_MARKER)
    }

    /// The symbol without its leading marker.
    pub fn bare(&self) -> &str {
        self.0.strip_prefix(NAME_MARKER).unwrap_or(&self.0)
    }

    /// Whether this symbol may be the target of a definition.
    ///
    /// A definable name is the marker, one alphabetic character, then zero or more
    /// alphanumeric characters. Underscores lex as part of a name but cannot be defined.
    pub fn is_definable(&self) -> bool {
        let Some(rest) = self.0.strip_prefix(NAME_MARKER) else {
            return false;
        };
        let mut chars = rest.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() => chars.all(char::is_alphanumeric),
            _ => false,
        }
    }

    /// Whether `text` has the shape of an executable name (a variable reference).
    pub fn is_identifier(text: &str) -> bool {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", &*self.0)
    }
}
