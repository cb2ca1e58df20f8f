use crate::debug_log;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::io;
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Category used when the player did not pick one.
pub const DEFAULT_CATEGORY: &str = "DEFAULT";

/// Word played when the selected category has nothing to offer.
pub const FALLBACK_WORD: &str = "EXAMPLE";

/// Category catalogue, kept in the order categories first appear in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    categories: Vec<(String, Vec<String>)>,
}

impl WordBank {
    #[must_use]
    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, words)| words.as_slice())
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Pick a word uniformly at random from `category`, uppercased.
    pub fn pick_word<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> Option<String> {
        self.words(category)?
            .choose(rng)
            .map(|word| word.to_uppercase())
    }

    fn insert(&mut self, category: String, words: Vec<String>) {
        if words.is_empty() {
            debug_log!("Dropping empty category '{}'", category);
            return;
        }
        match self.categories.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = words,
            None => self.categories.push((category, words)),
        }
    }
}

pub fn load_wordbank_from_str(data: &str) -> WordBank {
    let mut bank = WordBank::default();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in data.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix('[') {
            if let Some((name, words)) = current.take() {
                bank.insert(name, words);
            }
            let name = rest.strip_suffix(']').unwrap_or(rest);
            current = Some((name.to_string(), Vec::new()));
        } else if let Some((_, words)) = current.as_mut() {
            words.push(line.to_string());
        } else {
            log::warn!("Ignoring word '{line}' listed before any category");
        }
    }
    if let Some((name, words)) = current {
        bank.insert(name, words);
    }
    bank
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let data = fs::read_to_string(path)?;
    Ok(load_wordbank_from_str(&data))
}

/// Load the word list at `path`, or the embedded one when no path is given.
///
/// An unreadable file is logged and yields an empty catalogue; rounds then
/// fall back to [`FALLBACK_WORD`].
pub fn load_wordbank_or_default(path: Option<&Path>) -> WordBank {
    let bank = match path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(bank) => bank,
            Err(e) => {
                log::warn!("Failed to load word list from '{}': {e}", path.display());
                WordBank::default()
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    log::info!("Loaded {} categories", bank.len());
    bank
}
