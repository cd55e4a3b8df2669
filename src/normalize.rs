//! Person-name normalization.
//!
//! Canonicalises extracted names so that textual variants of the same
//! person aggregate under one key: all whitespace is stripped, and a
//! fixed table of legacy kanji forms is folded to the modern equivalent
//! (髙橋 and 高橋 are the same surname; official rosters and news pages
//! disagree on which form they print).

/// Legacy or variant kanji forms folded to their modern equivalents.
const KANJI_VARIANTS: &[(char, char)] = &[
    ('齋', '斉'),
    ('齊', '斉'),
    ('邊', '辺'),
    ('邉', '辺'),
    ('髙', '高'),
    ('濵', '浜'),
    ('濱', '浜'),
    ('澤', '沢'),
    ('澁', '渋'),
    ('瀨', '瀬'),
    ('繩', '縄'),
    ('廣', '広'),
    ('櫻', '桜'),
    ('眞', '真'),
    ('萬', '万'),
];

/// Normalize a person name for aggregation.
///
/// Strips all whitespace (half- and full-width) and folds legacy kanji
/// variants to modern forms. Idempotent: normalizing an already
/// normalized name returns it unchanged.
///
/// # Examples
///
/// ```
/// use jc_officer_search::normalize::normalize_name;
///
/// assert_eq!(normalize_name("山田 太郎"), "山田太郎");
/// assert_eq!(normalize_name("髙橋一郎"), "高橋一郎");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(fold_variant)
        .collect()
}

/// Fold a single character to its modern form, if it is a known variant.
fn fold_variant(c: char) -> char {
    KANJI_VARIANTS
        .iter()
        .find(|(old, _)| *old == c)
        .map_or(c, |(_, new)| *new)
}
