//! Names used by automaton definitions.
//!
//! States and symbols are plain strings on the wire. Once a definition has
//! been validated every name is interned into a dense index so the engines
//! never hash strings while they run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Identifier of a declared state.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

/// A single symbol of an input, stack or tape alphabet.
///
/// Symbols may be longer than one character (`"Z0"`, `"B"`); the only
/// reserved value is the empty string, which marks an epsilon move in PDA
/// transition tables.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

macro_rules! name_type {
    ($name:ident) => {
        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

name_type!(StateId);
name_type!(Symbol);

/// An input word: an ordered sequence of symbols.
///
/// Converting from a `&str` treats every character as one symbol, which is
/// how words arrive from text inputs. Use [`Word::from_symbols`] when
/// symbols span several characters.
///
/// ```rust
/// use automata_core::Word;
///
/// let word = Word::from("0110");
/// assert_eq!(word.len(), 4);
/// assert_eq!(word.symbols()[1].as_str(), "1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(Vec<Symbol>);

impl Word {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self(symbols.into_iter().map(Into::into).collect())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self(text.chars().map(|c| Symbol(c.to_string())).collect())
    }
}

impl From<Vec<Symbol>> for Word {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            f.write_str(symbol.as_str())?;
        }
        Ok(())
    }
}

/// Bidirectional table between declared names and dense indices.
///
/// Indices are assigned in insertion order; callers insert from sorted sets
/// so the numbering is stable across runs.
#[derive(Clone, Debug)]
pub(crate) struct Interner<T> {
    names: Vec<T>,
    index: HashMap<T, u32>,
}

impl<T: Clone + Eq + Hash> Interner<T> {
    pub(crate) fn new() -> Self {
        Self {
            names: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut interner = Self::new();
        for name in names {
            interner.intern(name);
        }
        interner
    }

    pub(crate) fn intern(&mut self, name: &T) -> u32 {
        if let Some(&ix) = self.index.get(name) {
            return ix;
        }
        let ix = self.names.len() as u32;
        self.names.push(name.clone());
        self.index.insert(name.clone(), ix);
        ix
    }

    pub(crate) fn get(&self, name: &T) -> Option<u32> {
        self.index.get(name).copied()
    }

    pub(crate) fn resolve(&self, ix: u32) -> &T {
        &self.names[ix as usize]
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.names.iter().enumerate().map(|(i, n)| (i as u32, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_from_str_splits_characters() {
        let word = Word::from("01");
        assert_eq!(word.symbols(), &[Symbol::from("0"), Symbol::from("1")]);
        assert_eq!(word.to_string(), "01");
    }

    #[test]
    fn word_from_symbols_keeps_multi_character_symbols() {
        let word = Word::from_symbols(["ab", "c"]);
        assert_eq!(word.len(), 2);
        assert_eq!(word.symbols()[0].as_str(), "ab");
    }

    #[test]
    fn empty_word_has_no_symbols() {
        assert!(Word::from("").is_empty());
        assert!(Word::empty().is_empty());
    }

    #[test]
    fn interner_assigns_stable_indices() {
        let names = [StateId::from("q0"), StateId::from("q1")];
        let mut interner = Interner::from_names(names.iter());

        assert_eq!(interner.get(&StateId::from("q0")), Some(0));
        assert_eq!(interner.get(&StateId::from("q1")), Some(1));
        assert_eq!(interner.intern(&StateId::from("q0")), 0);
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.resolve(1).as_str(), "q1");
        assert_eq!(interner.get(&StateId::from("q9")), None);
    }

    #[test]
    fn names_serialize_transparently() {
        let json = serde_json::to_string(&StateId::from("q0")).unwrap();
        assert_eq!(json, "\"q0\"");

        let word: Word = serde_json::from_str("[\"a\",\"bc\"]").unwrap();
        assert_eq!(word, Word::from_symbols(["a", "bc"]));
    }
}
