//! Romaji input for the ingredient reading search.
//!
//! Input is converted syllable by syllable against a bundled table. A trailing
//! fragment that can still grow into a syllable (`k`, `sh`, `ky`) expands into
//! every kana it may become, so prefix search keeps working mid-word.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::RomajiError;

const BUNDLED_ROMAJI: &str = include_str!("../data/romaji.json");

const SOKUON: char = 'っ';
const SYLLABIC_N: char = 'ん';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub kana: String,
    /// Unconverted tail; always a prefix of some syllable.
    pub pending: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RomajiTable {
    syllables: BTreeMap<String, String>,
    longest: usize,
}

impl RomajiTable {
    pub fn new(syllables: BTreeMap<String, String>) -> Result<Self, RomajiError> {
        if let Some(key) = syllables
            .keys()
            .find(|key| key.is_empty() || !key.bytes().all(is_romaji_byte))
        {
            return Err(RomajiError::InvalidKey(key.clone()));
        }
        let longest = syllables.keys().map(String::len).max().unwrap_or(0);
        debug!(syllables = syllables.len(), "romaji table loaded");
        Ok(Self { syllables, longest })
    }

    pub fn from_json(json: &str) -> Result<Self, RomajiError> {
        let syllables: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::new(syllables)
    }

    pub fn bundled() -> Result<Self, RomajiError> {
        Self::from_json(BUNDLED_ROMAJI)
    }

    /// Converts as much of `input` as possible. `None` when the input is
    /// empty or cannot be romaji at all.
    pub fn convert(&self, input: &str) -> Option<Conversion> {
        let input = input.to_ascii_lowercase();
        if input.is_empty() || !input.bytes().all(is_romaji_byte) {
            return None;
        }
        let bytes = input.as_bytes();
        let mut kana = String::new();
        let mut i = 0;
        while i < bytes.len() {
            let current = bytes[i];
            let next = bytes.get(i + 1).copied();
            // `tt`, `kk`: small tsu, the second consonant starts the next syllable
            if next == Some(current) && is_consonant(current) && current != b'n' {
                kana.push(SOKUON);
                i += 1;
                continue;
            }
            // `nj`, `nn`: n before a consonant other than y
            if current == b'n' && next.is_some_and(|n| is_consonant(n) && n != b'y') {
                kana.push(SYLLABIC_N);
                i += 1;
                continue;
            }
            let rest = &input[i..];
            match self.longest_match(rest) {
                Some((len, syllable)) => {
                    kana.push_str(syllable);
                    i += len;
                }
                None if self.syllables.keys().any(|key| key.starts_with(rest)) => {
                    return Some(Conversion { kana, pending: rest.to_string() });
                }
                None => return None,
            }
        }
        Some(Conversion { kana, pending: String::new() })
    }

    /// Every kana string `input` may be the beginning of, sorted. Empty when
    /// the input is not romaji.
    pub fn kana_prefixes(&self, input: &str) -> Vec<String> {
        let Some(Conversion { kana, pending }) = self.convert(input) else {
            return Vec::new();
        };
        if pending.is_empty() {
            return vec![kana];
        }
        self.syllables
            .iter()
            .filter(|(key, _)| key.starts_with(&pending))
            .map(|(_, syllable)| format!("{kana}{syllable}"))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn longest_match(&self, rest: &str) -> Option<(usize, &str)> {
        (1..=self.longest.min(rest.len()))
            .rev()
            .find_map(|len| self.syllables.get(&rest[..len]).map(|s| (len, s.as_str())))
    }
}

fn is_romaji_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b == b'-' || b == b'\''
}

fn is_consonant(b: u8) -> bool {
    b.is_ascii_lowercase() && !b"aiueo".contains(&b)
}
