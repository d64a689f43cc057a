//! Presentation helpers for names.

/// Title-case a name for display.
///
/// Every run of alphabetic characters starts upper-case and continues
/// lower-case. Any non-alphabetic character ends the current word, so
/// `"o'malley"` renders as `"O'Malley"`.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_single_word() {
        assert_eq!(title_case("rogue"), "Rogue");
        assert_eq!(title_case("ROGUE"), "Rogue");
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("mr. whiskers"), "Mr. Whiskers");
        assert_eq!(title_case("sir  fluffington iii"), "Sir  Fluffington Iii");
    }

    #[test]
    fn punctuation_and_digits_split_words() {
        assert_eq!(title_case("o'malley"), "O'Malley");
        assert_eq!(title_case("r2d2"), "R2D2");
        assert_eq!(title_case("tom-cat"), "Tom-Cat");
    }

    #[test]
    fn handles_non_ascii() {
        assert_eq!(title_case("éclair"), "Éclair");
    }

    #[test]
    fn empty_and_default() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case(crate::DEFAULT_NAME), "Cat");
    }
}
