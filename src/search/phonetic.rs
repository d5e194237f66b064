//! Phonetic Matching
//!
//! Standard four-character Soundex codes, so that "Smith" and "Smyth"
//! land on the same encoding even when edit distance is unconvincing.

/// Soundex digit class for a single uppercase letter.
///
/// Vowels and H, W, Y carry no digit; they break runs of repeated classes
/// but contribute nothing themselves.
fn digit_class(letter: char) -> Option<char> {
    match letter {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Encode a string as a Soundex code: the first letter followed by three
/// digits, zero-padded. Non-letter characters are stripped first; input
/// with no letters yields an empty string.
pub fn soundex(input: &str) -> String {
    let letters: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if letters.is_empty() {
        return String::new();
    }

    let mut code = String::with_capacity(4);
    code.push(letters[0]);

    let mut previous = digit_class(letters[0]);
    for &letter in &letters[1..] {
        let class = digit_class(letter);
        if let Some(digit) = class {
            // Skip consecutive letters of the same digit class
            if class != previous {
                code.push(digit);
                if code.len() == 4 {
                    break;
                }
            }
        }
        previous = class;
    }

    while code.len() < 4 {
        code.push('0');
    }

    code
}

/// True when both inputs produce the same non-empty Soundex code.
pub fn is_phonetic_match(a: &str, b: &str) -> bool {
    let code_a = soundex(a);
    if code_a.is_empty() {
        return false;
    }
    code_a == soundex(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soundex_textbook() {
        // The classic pair: both encode to R163
        assert_eq!(soundex("Robert"), "R163");
        assert_eq!(soundex("Rupert"), "R163");
    }

    #[test]
    fn test_soundex_known_codes() {
        assert_eq!(soundex("Tymczak"), "T522");
        assert_eq!(soundex("Honeyman"), "H555");
        assert_eq!(soundex("Pfister"), "P236");
    }

    #[test]
    fn test_soundex_padding() {
        assert_eq!(soundex("Lee"), "L000");
        assert_eq!(soundex("Jo"), "J000");
    }

    #[test]
    fn test_soundex_strips_non_letters() {
        assert_eq!(soundex("O'Brien"), soundex("OBrien"));
        assert_eq!(soundex("smith-jones"), soundex("smithjones"));
    }

    #[test]
    fn test_soundex_empty_inputs() {
        assert_eq!(soundex(""), "");
        assert_eq!(soundex("12345"), "");
        assert_eq!(soundex("---"), "");
    }

    #[test]
    fn test_phonetic_match() {
        assert!(is_phonetic_match("Robert", "Rupert"));
        assert!(is_phonetic_match("Smith", "Smyth"));
        assert!(!is_phonetic_match("Smith", "Jones"));
    }

    #[test]
    fn test_phonetic_match_rejects_empty() {
        assert!(!is_phonetic_match("", ""));
        assert!(!is_phonetic_match("", "Smith"));
        assert!(!is_phonetic_match("123", "123"));
    }
}
