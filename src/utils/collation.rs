//! Name collation for sorting
//!
//! Local names are Thai, which sorts by consonant before any leading vowel
//! (เ แ โ ใ ไ are written first but collate after the consonant they
//! precede) and treats tone marks as a secondary difference. Foreign names
//! use a locale-neutral case-folded order with an ordinal tie-break.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collation {
    /// Thai dictionary order for local names
    Thai,
    /// Case-insensitive, then ordinal
    Neutral,
}

impl Collation {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Thai => compare_thai(a, b),
            Collation::Neutral => compare_neutral(a, b),
        }
    }
}

fn is_thai_consonant(c: char) -> bool {
    ('\u{0E01}'..='\u{0E2E}').contains(&c)
}

fn is_leading_vowel(c: char) -> bool {
    ('\u{0E40}'..='\u{0E44}').contains(&c)
}

/// Maitaikhu, tone marks, thanthakhat and the other above-line signs
fn is_thai_diacritic(c: char) -> bool {
    ('\u{0E47}'..='\u{0E4E}').contains(&c)
}

/// (primary, secondary) sort keys
fn thai_keys(s: &str) -> (Vec<char>, Vec<char>) {
    let chars: Vec<char> = s.chars().collect();
    let mut primary = Vec::with_capacity(chars.len());
    let mut secondary = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_leading_vowel(c) && i + 1 < chars.len() && is_thai_consonant(chars[i + 1]) {
            primary.push(chars[i + 1]);
            primary.push(c);
            i += 2;
            continue;
        }
        if is_thai_diacritic(c) {
            secondary.push(c);
        } else {
            primary.extend(c.to_lowercase());
        }
        i += 1;
    }

    (primary, secondary)
}

pub fn compare_thai(a: &str, b: &str) -> Ordering {
    let (pa, sa) = thai_keys(a);
    let (pb, sb) = thai_keys(b);
    pa.cmp(&pb).then_with(|| sa.cmp(&sb)).then_with(|| a.cmp(b))
}

pub fn compare_neutral(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
