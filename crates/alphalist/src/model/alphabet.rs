//! Bucket letters and the alphabet that defines them.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// The label shown for the uncategorized bucket.
pub const UNCATEGORIZED_TITLE: &str = "#";

/// The bucket an entry belongs to.
///
/// Ordering between keys is not defined here; it depends on the [`Alphabet`]
/// and on where the uncategorized bucket is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// A single uppercase letter.
    Letter(char),
    /// Entries whose grouping source is empty or does not start with a letter.
    Uncategorized,
}

impl GroupKey {
    /// Returns the letter, or `None` for the uncategorized bucket.
    pub fn letter(&self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(*c),
            Self::Uncategorized => None,
        }
    }

    /// Returns `true` for the uncategorized bucket.
    pub fn is_uncategorized(&self) -> bool {
        matches!(self, Self::Uncategorized)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Uncategorized => f.write_str(UNCATEGORIZED_TITLE),
        }
    }
}

/// Converts a tapped strip label into a key: `'#'` names the uncategorized
/// bucket, anything else is uppercased.
impl From<char> for GroupKey {
    fn from(c: char) -> Self {
        if c == '#' {
            Self::Uncategorized
        } else {
            Self::Letter(uppercase(c))
        }
    }
}

/// The set of letters that form buckets, and their order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Any alphabetic first character forms a bucket; buckets sort by code point.
    #[default]
    Unicode,
    /// Only the listed uppercase letters form buckets, sorted by list position.
    Custom(Arc<[char]>),
}

impl Alphabet {
    /// The 26-letter Latin alphabet `A`..=`Z`.
    pub fn latin() -> Self {
        Self::custom('A'..='Z')
    }

    /// Builds a custom alphabet.
    ///
    /// Letters are uppercased; duplicates and non-alphabetic characters are
    /// dropped, keeping the first occurrence's position.
    pub fn custom(letters: impl IntoIterator<Item = char>) -> Self {
        let mut out: Vec<char> = Vec::new();
        for c in letters.into_iter().map(uppercase) {
            if c.is_alphabetic() && !out.contains(&c) {
                out.push(c);
            }
        }
        Self::Custom(out.into())
    }

    /// Builds a custom alphabet from a string such as `"ABCDEFGHIJKLMNOPQRSTUVWXYZÅÄÖ"`.
    pub fn parse(letters: &str) -> Self {
        Self::custom(letters.chars())
    }

    /// The explicit letters of a custom alphabet.
    pub fn letters(&self) -> Option<&[char]> {
        match self {
            Self::Unicode => None,
            Self::Custom(letters) => Some(&letters[..]),
        }
    }

    /// Maps the first character of a grouping source to its bucket.
    pub fn classify(&self, first: Option<char>) -> GroupKey {
        let Some(c) = first.map(uppercase) else {
            return GroupKey::Uncategorized;
        };

        let accepted = match self {
            Self::Unicode => c.is_alphabetic(),
            Self::Custom(letters) => letters.contains(&c),
        };

        if accepted {
            GroupKey::Letter(c)
        } else {
            GroupKey::Uncategorized
        }
    }

    /// Orders two bucket letters.
    pub fn compare(&self, a: char, b: char) -> Ordering {
        match self {
            Self::Unicode => a.cmp(&b),
            Self::Custom(letters) => {
                let pos = |c: char| letters.iter().position(|&l| l == c).unwrap_or(usize::MAX);
                pos(a).cmp(&pos(b)).then(a.cmp(&b))
            }
        }
    }
}

/// Uppercases a single character, keeping the first char of multi-char mappings.
pub(crate) fn uppercase(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unicode() {
        let alphabet = Alphabet::Unicode;

        assert_eq!(alphabet.classify(Some('a')), GroupKey::Letter('A'));
        assert_eq!(alphabet.classify(Some('é')), GroupKey::Letter('É'));
        assert_eq!(alphabet.classify(Some('7')), GroupKey::Uncategorized);
        assert_eq!(alphabet.classify(Some('-')), GroupKey::Uncategorized);
        assert_eq!(alphabet.classify(None), GroupKey::Uncategorized);
    }

    #[test]
    fn test_classify_custom() {
        let alphabet = Alphabet::latin();

        assert_eq!(alphabet.classify(Some('z')), GroupKey::Letter('Z'));
        assert_eq!(alphabet.classify(Some('é')), GroupKey::Uncategorized);
    }

    #[test]
    fn test_custom_alphabet_order() {
        let alphabet = Alphabet::parse("abcÅÄÖ");

        assert_eq!(alphabet.letters().map(<[char]>::len), Some(6));
        assert_eq!(alphabet.compare('Ö', 'Å'), Ordering::Greater);
        assert_eq!(alphabet.compare('C', 'Å'), Ordering::Less);
    }

    #[test]
    fn test_custom_alphabet_drops_duplicates_and_symbols() {
        let alphabet = Alphabet::custom(['b', 'B', '1', 'a']);
        assert_eq!(alphabet.letters(), Some(&['B', 'A'][..]));
    }

    #[test]
    fn test_group_key_display_and_from() {
        assert_eq!(GroupKey::Letter('Q').to_string(), "Q");
        assert_eq!(GroupKey::Uncategorized.to_string(), "#");
        assert_eq!(GroupKey::from('q'), GroupKey::Letter('Q'));
        assert_eq!(GroupKey::from('#'), GroupKey::Uncategorized);
    }
}
