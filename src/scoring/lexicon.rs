//! Sentiment lexicon and bias keyword set.
//!
//! Both collections are plain values handed to [`Scorer`](super::Scorer) at
//! construction and never mutated afterwards. Keys are normalized with the
//! same rules as headline tokens so matching is a simple whole-token lookup.

use super::tokenizer::normalize_key;
use crate::models::Weight;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Turkish financial sentiment words and their polarity.
const TURKISH_FINANCIAL_LEXICON: &[(&str, Weight)] = &[
    ("yükseliş", Weight::Positive),
    ("artış", Weight::Positive),
    ("rekor", Weight::Positive),
    ("kazanç", Weight::Positive),
    ("fırsat", Weight::Positive),
    ("büyüme", Weight::Positive),
    ("kar", Weight::Positive),
    ("güçlü", Weight::Positive),
    ("yükseldi", Weight::Positive),
    ("düşüş", Weight::Negative),
    ("kayıp", Weight::Negative),
    ("çöküş", Weight::Negative),
    ("kriz", Weight::Negative),
    ("iflas", Weight::Negative),
    ("zarar", Weight::Negative),
    ("gerileme", Weight::Negative),
    ("tehlike", Weight::Negative),
    ("düştü", Weight::Negative),
    ("fiyatları", Weight::Neutral),
    ("piyasada", Weight::Neutral),
    ("haberi", Weight::Neutral),
    ("gündem", Weight::Neutral),
];

/// Words that flag speculation, forecasts or attributed opinion.
const TURKISH_BIAS_KEYWORDS: &[&str] = &[
    "beklenti",
    "iddia",
    "tahmin",
    "söylenti",
    "analiz",
    "spekülasyon",
    "potansiyel",
    "görüş",
    "uzman",
    "açıklaması",
];

/// Mapping from normalized token to sentiment [`Weight`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentLexicon {
    entries: HashMap<String, Weight>,
}

impl SentimentLexicon {
    /// Build a lexicon from `(word, weight)` pairs.
    ///
    /// Words are lowercased and stripped of punctuation. Entries that do not
    /// reduce to a single token can never match and are skipped with a warning.
    /// A later duplicate overrides an earlier one.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Weight)>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (word, weight) in entries {
            match normalize_key(word.as_ref()) {
                Some(key) => {
                    map.insert(key, weight);
                }
                None => warn!(word = word.as_ref(), "Skipping lexicon entry that is not a single token"),
            }
        }
        Self { entries: map }
    }

    /// The built-in Turkish financial lexicon.
    pub fn turkish_financial() -> Self {
        Self::new(TURKISH_FINANCIAL_LEXICON.iter().copied())
    }

    /// Weight of `token`, or `None` when the token is not in the lexicon.
    pub fn weight(&self, token: &str) -> Option<Weight> {
        self.entries.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Set of tokens whose presence marks a headline as biased.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BiasKeywords {
    words: HashSet<String>,
}

impl BiasKeywords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            match normalize_key(word.as_ref()) {
                Some(key) => {
                    set.insert(key);
                }
                None => warn!(word = word.as_ref(), "Skipping bias keyword that is not a single token"),
            }
        }
        Self { words: set }
    }

    /// The built-in Turkish speculation keywords.
    pub fn turkish_financial() -> Self {
        Self::new(TURKISH_BIAS_KEYWORDS.iter().copied())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
