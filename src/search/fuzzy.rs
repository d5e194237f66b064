//! Single-Field Fuzzy Matching
//!
//! Scores one field of text against a query string. Exact and substring
//! containment are decided first; when neither holds, edit-distance
//! similarity, Soundex equality and per-word similarity each contribute
//! additively. Scores are clamped to `[0, 100]`.

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::distance::similarity_score;
use super::phonetic::is_phonetic_match;

/// Ceiling for a single-field score.
pub const MAX_SCORE: f64 = 100.0;

/// Base bonus granted for exact-ish containment; also the scale factor for
/// similarity-driven scores.
pub const EXACT_MATCH_BONUS: f64 = 50.0;
/// Minimum whole-string similarity for the similarity branch to fire.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;
/// Flat bonus when both strings share a Soundex code.
pub const PHONETIC_BONUS: f64 = 20.0;
/// Bonus for the pattern appearing anywhere inside the text.
pub const SUBSTRING_BONUS: f64 = 30.0;
/// Extra bonus when the substring match starts the text.
pub const PREFIX_BONUS: f64 = 40.0;
/// Extra bonus when the substring match starts the text or a word.
pub const WORD_BOUNDARY_BONUS: f64 = 25.0;

/// Per matched pattern word, its best similarity is scaled by this.
const WORD_SIMILARITY_SCALE: f64 = 20.0;
/// Fraction of pattern words that must match for multi-word scoring.
const MIN_WORD_MATCH_RATIO: f64 = 0.5;

/// Half-open character range `[start, end)` into the matched text, marking
/// characters to highlight. Indices count Unicode scalar values of the
/// NFC-normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Classification of how a field matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    /// No signal cleared its threshold
    None,
    /// Whole text equals the pattern
    Exact,
    /// Pattern found at the start of the text
    Prefix,
    /// Pattern found inside the text
    Substring,
    /// Whole-string edit-distance similarity
    Similarity,
    /// Soundex codes agree
    Phonetic,
    /// Enough pattern words matched text words individually
    WordFuzzy,
}

/// Score and highlight detail for one (field, query) pair.
///
/// `spans` may be empty even when the score is positive: phonetic-only and
/// multi-word matches carry no character-level evidence.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score: f64,
    pub spans: Vec<Span>,
    pub match_type: MatchType,
}

impl MatchResult {
    fn none() -> Self {
        MatchResult {
            score: 0.0,
            spans: Vec::new(),
            match_type: MatchType::None,
        }
    }
}

/// Scoring knobs for [`fuzzy_match`]
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    pub exact_match_bonus: f64,
    pub similarity_threshold: f64,
    pub phonetic_bonus: f64,
    pub substring_bonus: f64,
    pub prefix_bonus: f64,
    pub word_boundary_bonus: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            exact_match_bonus: EXACT_MATCH_BONUS,
            similarity_threshold: SIMILARITY_THRESHOLD,
            phonetic_bonus: PHONETIC_BONUS,
            substring_bonus: SUBSTRING_BONUS,
            prefix_bonus: PREFIX_BONUS,
            word_boundary_bonus: WORD_BOUNDARY_BONUS,
        }
    }
}

impl MatchOptions {
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }
}

/// Lowercase a single character without changing the character count, so
/// span indices stay aligned with the input. Characters whose lowercase
/// form expands (e.g. 'İ') are kept as-is.
fn lower_char(c: char) -> char {
    let mut lowered = c.to_lowercase();
    let first = lowered.next().unwrap_or(c);
    if lowered.next().is_some() {
        c
    } else {
        first
    }
}

/// NFC-normalize for matching, optionally folding case per character.
fn normalize(text: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        text.nfc().collect()
    } else {
        text.nfc().map(lower_char).collect()
    }
}

/// First index where `needle` occurs inside `haystack`.
fn find_subslice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Greedy left-to-right scan consuming pattern characters in order,
/// emitting a single-character span per hit. Not a true alignment:
/// transposed or repeated characters can produce non-minimal spans.
fn greedy_char_spans(text: &[char], pattern: &[char]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut next = 0usize;

    for (index, &c) in text.iter().enumerate() {
        if next < pattern.len() && c == pattern[next] {
            spans.push(Span {
                start: index,
                end: index + 1,
            });
            next += 1;
        }
    }

    spans
}

/// Score `text` against `pattern`.
///
/// Exact equality and substring containment are definitive: they return as
/// soon as their bonuses are tallied. Otherwise similarity, phonetic and
/// multi-word signals accumulate, and the type tag records whichever fired
/// first.
pub fn fuzzy_match(text: &str, pattern: &str, options: &MatchOptions) -> MatchResult {
    let text_chars = normalize(text, options.case_sensitive);
    let pattern_chars = normalize(pattern, options.case_sensitive);

    if text_chars.is_empty() || pattern_chars.is_empty() {
        return MatchResult::none();
    }

    // Exact match
    if text_chars == pattern_chars {
        return MatchResult {
            score: MAX_SCORE,
            spans: vec![Span {
                start: 0,
                end: text_chars.len(),
            }],
            match_type: MatchType::Exact,
        };
    }

    // Substring match, upgraded for prefix and word-boundary positions
    if let Some(start) = find_subslice(&text_chars, &pattern_chars) {
        let mut score = options.exact_match_bonus + options.substring_bonus;
        let mut match_type = MatchType::Substring;

        if start == 0 {
            score += options.prefix_bonus;
            match_type = MatchType::Prefix;
        }
        if start == 0 || text_chars[start - 1].is_whitespace() {
            score += options.word_boundary_bonus;
        }

        return MatchResult {
            score: score.min(MAX_SCORE),
            spans: vec![Span {
                start,
                end: start + pattern_chars.len(),
            }],
            match_type,
        };
    }

    // No containment: similarity, phonetic and multi-word signals add up
    let mut score = 0.0;
    let mut match_type = MatchType::None;
    let mut spans = Vec::new();

    let similarity = similarity_score(text, pattern);
    if similarity >= options.similarity_threshold {
        score += similarity * options.exact_match_bonus;
        match_type = MatchType::Similarity;
        spans = greedy_char_spans(&text_chars, &pattern_chars);
    }

    if is_phonetic_match(text, pattern) {
        score += options.phonetic_bonus;
        if match_type == MatchType::None {
            match_type = MatchType::Phonetic;
        }
    }

    let pattern_words: Vec<&str> = pattern.split_whitespace().collect();
    if pattern_words.len() > 1 {
        let text_words: Vec<&str> = text.unicode_words().collect();

        let mut matched = 0usize;
        let mut similarity_sum = 0.0;
        for pattern_word in &pattern_words {
            let best = text_words
                .iter()
                .map(|text_word| similarity_score(text_word, pattern_word))
                .fold(0.0, f64::max);
            if best >= options.similarity_threshold {
                matched += 1;
                similarity_sum += best;
            }
        }

        let ratio = matched as f64 / pattern_words.len() as f64;
        if ratio >= MIN_WORD_MATCH_RATIO {
            score += similarity_sum * WORD_SIMILARITY_SCALE * ratio;
            if match_type == MatchType::None {
                match_type = MatchType::WordFuzzy;
            }
        }
    }

    MatchResult {
        score: score.clamp(0.0, MAX_SCORE),
        spans,
        match_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_exact_match() {
        let m = fuzzy_match("Marcus", "marcus", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::Exact);
        assert_close(m.score, 100.0);
        assert_eq!(m.spans, vec![Span { start: 0, end: 6 }]);
    }

    #[test]
    fn test_exact_match_case_sensitive() {
        let options = MatchOptions::default().with_case_sensitive(true);
        let m = fuzzy_match("Marcus", "marcus", &options);
        assert_ne!(m.match_type, MatchType::Exact);
    }

    #[test]
    fn test_prefix_match_clamps() {
        // 50 + 30 + 40 + 25 = 145, clamped to the ceiling
        let m = fuzzy_match("Marcus Johnson", "marcus", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::Prefix);
        assert_close(m.score, 100.0);
        assert_eq!(m.spans, vec![Span { start: 0, end: 6 }]);
    }

    #[test]
    fn test_prefix_bonuses_accumulate() {
        // Shrink the base bonus so the stack stays under the ceiling:
        // 10 + 30 + 40 + 25 = 105 clamps, 5 + 30 + 40 + 25 = 100 exactly
        let options = MatchOptions {
            exact_match_bonus: 5.0,
            ..MatchOptions::default()
        };
        let m = fuzzy_match("Marcus Johnson", "marcus", &options);
        assert_eq!(m.match_type, MatchType::Prefix);
        assert_close(m.score, 100.0);
    }

    #[test]
    fn test_substring_mid_word() {
        // 50 + 30, no prefix, no word boundary
        let m = fuzzy_match("Johnson", "hns", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::Substring);
        assert_close(m.score, 80.0);
        assert_eq!(m.spans, vec![Span { start: 2, end: 5 }]);
    }

    #[test]
    fn test_substring_word_boundary() {
        // 50 + 30 + 25 = 105, clamped; still tagged substring, not prefix
        let m = fuzzy_match("Marcus Johnson", "johnson", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::Substring);
        assert_close(m.score, 100.0);
        assert_eq!(m.spans, vec![Span { start: 7, end: 14 }]);
    }

    #[test]
    fn test_word_boundary_unclamped() {
        let options = MatchOptions {
            exact_match_bonus: 10.0,
            ..MatchOptions::default()
        };
        // 10 + 30 + 25 = 65
        let m = fuzzy_match("Marcus Johnson", "johnson", &options);
        assert_eq!(m.match_type, MatchType::Substring);
        assert_close(m.score, 65.0);
    }

    #[test]
    fn test_no_match() {
        let options = MatchOptions::default().with_similarity_threshold(0.99);
        let m = fuzzy_match("abc", "xyz", &options);
        assert_eq!(m.match_type, MatchType::None);
        assert_close(m.score, 0.0);
        assert!(m.spans.is_empty());
    }

    #[test]
    fn test_similarity_with_phonetic_stack() {
        // No substring ("johnson" is longer than "jonson"). Similarity
        // 6/7 scales the base bonus; identical Soundex codes add 20 on
        // top without overriding the similarity tag.
        let m = fuzzy_match("Jonson", "Johnson", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::Similarity);
        assert_close(m.score, (6.0 / 7.0) * 50.0 + 20.0);
        // Greedy scan stalls on the pattern's 'h': only "jo" highlights
        assert_eq!(
            m.spans,
            vec![Span { start: 0, end: 1 }, Span { start: 1, end: 2 }]
        );
    }

    #[test]
    fn test_phonetic_only() {
        // similarity 0.5 stays under the threshold, but R163 == R163
        let m = fuzzy_match("Robert", "Rprt", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::Phonetic);
        assert_close(m.score, 20.0);
        assert!(m.spans.is_empty());
    }

    #[test]
    fn test_word_fuzzy_only() {
        // Whole-string similarity is far below threshold, Soundex differs,
        // but both pattern words clear 0.6 against single text words:
        // (0.8 * 20 + 0.75 * 20) * 1.0 = 31
        let m = fuzzy_match("Fade and beard trim", "berd trym", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::WordFuzzy);
        assert_close(m.score, (0.8 * 20.0 + 0.75 * 20.0) * 1.0);
        assert!(m.spans.is_empty());
    }

    #[test]
    fn test_word_fuzzy_ratio_gate() {
        // Only one of three pattern words matches: 1/3 < 0.5, no score
        let m = fuzzy_match("beard trim", "xqzzy qwvrt berd", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::None);
        assert_close(m.score, 0.0);
    }

    #[test]
    fn test_multi_word_stacks_on_similarity() {
        // similarity 0.8 * 50 + phonetic 20 + word-fuzzy (15 + 16) = 91
        let m = fuzzy_match("John Smith", "jon smth", &MatchOptions::default());
        assert_eq!(m.match_type, MatchType::Similarity);
        assert_close(m.score, 0.8 * 50.0 + 20.0 + (0.75 * 20.0 + 0.8 * 20.0));
    }

    #[test]
    fn test_empty_inputs() {
        let options = MatchOptions::default();
        assert_eq!(fuzzy_match("", "query", &options).score, 0.0);
        assert_eq!(fuzzy_match("text", "", &options).score, 0.0);
        assert_eq!(fuzzy_match("", "", &options).match_type, MatchType::None);
    }
}
