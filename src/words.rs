use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;
use std::fs;
use std::path::Path;
use thiserror::Error;

static WORDS_DIR: Dir = include_dir!("src/words");

/// Letters a guess (and therefore a list word) may contain.
pub fn is_guessable_char(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}

/// Fatal configuration problems. Surfaced at startup; no game is created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word list `{0}` not found")]
    UnknownList(String),
    #[error("word list `{0}` is empty")]
    EmptyList(String),
    #[error("word `{word}` in list `{list}` is {actual} letters, expected {expected}")]
    WrongLength {
        list: String,
        word: String,
        actual: usize,
        expected: usize,
    },
    #[error("word `{word}` in list `{list}` contains unsupported character `{ch}`")]
    UnsupportedChar { list: String, word: String, ch: char },
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
    #[error("seconds per row must be at least 1")]
    ZeroTimer,
    #[error("unable to parse word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unable to read word list file: {0}")]
    Io(#[from] std::io::Error),
}

/// A fixed set of uppercase words, all of the same length.
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub length: usize,
    pub words: Vec<String>,
}

impl WordList {
    /// Load one of the word lists embedded in the binary.
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        let file = WORDS_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| ConfigError::UnknownList(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| ConfigError::UnknownList(name.to_string()))?;
        let list: WordList = from_str(contents)?;
        list.validated()
    }

    /// Load a user-supplied word list file (same JSON shape as the embedded
    /// lists).
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let list: WordList = from_str(&contents)?;
        list.validated()
    }

    /// Build a list directly from words, validating as for the embedded lists.
    pub fn from_words(
        name: impl Into<String>,
        length: usize,
        words: Vec<String>,
    ) -> Result<Self, ConfigError> {
        WordList {
            name: name.into(),
            length,
            words,
        }
        .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::EmptyList(self.name));
        }
        for word in &self.words {
            let actual = word.chars().count();
            if actual != self.length {
                return Err(ConfigError::WrongLength {
                    list: self.name.clone(),
                    word: word.clone(),
                    actual,
                    expected: self.length,
                });
            }
            if let Some(ch) = word.chars().find(|&c| !is_guessable_char(c)) {
                return Err(ConfigError::UnsupportedChar {
                    list: self.name.clone(),
                    word: word.clone(),
                    ch,
                });
            }
        }
        Ok(self)
    }

    /// Draw a target uniformly at random.
    pub fn pick(&self) -> &str {
        self.words
            .choose(&mut rand::thread_rng())
            .expect("word list is validated non-empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn load_castellano() {
        let list = WordList::load("castellano").unwrap();
        assert_eq!(list.name, "castellano");
        assert_eq!(list.length, 5);
        assert!(!list.words.is_empty());
    }

    #[test]
    fn load_breve() {
        let list = WordList::load("breve").unwrap();
        assert_eq!(list.length, 5);
        assert!(list.words.contains(&"CHAPA".to_string()));
    }

    #[test]
    fn unknown_list_is_an_error() {
        assert_matches!(WordList::load("nope"), Err(ConfigError::UnknownList(_)));
    }

    #[test]
    fn empty_list_is_an_error() {
        assert_matches!(
            WordList::from_words("vacía", 5, vec![]),
            Err(ConfigError::EmptyList(_))
        );
    }

    #[test]
    fn wrong_length_word_is_an_error() {
        let err = WordList::from_words(
            "mixta",
            5,
            vec!["CHAPA".into(), "GUARDAPOLVO".into()],
        );
        assert_matches!(
            err,
            Err(ConfigError::WrongLength {
                actual: 11,
                expected: 5,
                ..
            })
        );
    }

    #[test]
    fn unsupported_character_is_an_error() {
        assert_matches!(
            WordList::from_words("rara", 5, vec!["CHAP4".into()]),
            Err(ConfigError::UnsupportedChar { ch: '4', .. })
        );
        // lowercase is the adapter's job to fold; lists must be uppercase
        assert_matches!(
            WordList::from_words("rara", 5, vec!["chapa".into()]),
            Err(ConfigError::UnsupportedChar { ch: 'c', .. })
        );
    }

    #[test]
    fn enie_counts_as_one_letter() {
        let list = WordList::from_words("eñes", 5, vec!["SUEÑO".into()]).unwrap();
        assert_eq!(list.words.len(), 1);
    }

    #[test]
    fn pick_returns_a_member() {
        let list = WordList::load("breve").unwrap();
        for _ in 0..20 {
            let picked = list.pick().to_string();
            assert!(list.words.contains(&picked));
        }
    }

    #[test]
    fn guessable_alphabet() {
        assert!(is_guessable_char('A'));
        assert!(is_guessable_char('Z'));
        assert!(is_guessable_char('Ñ'));
        assert!(!is_guessable_char('a'));
        assert!(!is_guessable_char('7'));
        assert!(!is_guessable_char(' '));
    }
}
