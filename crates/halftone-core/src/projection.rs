//! Zone-key parsing and the [`ZoneProjection`] type.

/// One zone group inside a sub-zone, projected for adjacency scanning.
///
/// Built once per zone key per run and discarded afterwards. The key's
/// trailing two characters are parsed into a flat number at
/// construction; keys that do not carry one (too short, or a non-digit
/// suffix) simply project with no flat number — a tolerated outcome,
/// not a failure. Members are indices into the run's record snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneProjection {
    key: String,
    flat_number: Option<u32>,
    members: Vec<usize>,
}

impl ZoneProjection {
    /// Project a zone group from its raw key and member record indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use halftone_core::ZoneProjection;
    ///
    /// let known = ZoneProjection::new("Квартира 01", vec![0, 3]);
    /// assert_eq!(known.flat_number(), Some(1));
    ///
    /// let unknown = ZoneProjection::new("Кладовая", vec![1]);
    /// assert!(unknown.is_unknown());
    /// ```
    pub fn new(key: impl Into<String>, members: Vec<usize>) -> Self {
        let key = key.into();
        let flat_number = parse_flat_number(&key);
        Self {
            key,
            flat_number,
            members,
        }
    }

    /// The raw zone-name key this projection was built from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The flat number parsed from the key's two-character suffix, or
    /// `None` if the key did not carry one.
    pub fn flat_number(&self) -> Option<u32> {
        self.flat_number
    }

    /// True if no flat number could be recognized in the key.
    pub fn is_unknown(&self) -> bool {
        self.flat_number.is_none()
    }

    /// Indices of the records sharing this zone key.
    pub fn members(&self) -> &[usize] {
        &self.members
    }
}

/// Parse the flat number from a zone key's trailing two characters.
///
/// The key must be at least three characters long (a suffix with
/// nothing in front of it does not count) and the last two characters
/// must both be ASCII digits. Leading zeros parse normally
/// (`"... 01"` is flat 1).
fn parse_flat_number(key: &str) -> Option<u32> {
    let mut rev = key.chars().rev();
    let ones = rev.next()?;
    let tens = rev.next()?;
    // At least one character must precede the suffix.
    rev.next()?;
    if tens.is_ascii_digit() && ones.is_ascii_digit() {
        Some((tens as u32 - '0' as u32) * 10 + (ones as u32 - '0' as u32))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn two_digit_suffix_is_recognized() {
        assert_eq!(ZoneProjection::new("Квартира 01", vec![]).flat_number(), Some(1));
        assert_eq!(ZoneProjection::new("Квартира 23", vec![]).flat_number(), Some(23));
        assert_eq!(ZoneProjection::new("Кв 99", vec![]).flat_number(), Some(99));
    }

    #[test]
    fn leading_zero_parses_as_plain_integer() {
        assert_eq!(ZoneProjection::new("x07", vec![]).flat_number(), Some(7));
        assert_eq!(ZoneProjection::new("x00", vec![]).flat_number(), Some(0));
    }

    #[test]
    fn short_keys_are_unknown() {
        assert!(ZoneProjection::new("", vec![]).is_unknown());
        assert!(ZoneProjection::new("1", vec![]).is_unknown());
        assert!(ZoneProjection::new("12", vec![]).is_unknown());
        assert!(ZoneProjection::new("Кв", vec![]).is_unknown());
    }

    #[test]
    fn minimum_length_key_with_digit_suffix_is_known() {
        assert_eq!(ZoneProjection::new("a12", vec![]).flat_number(), Some(12));
        // Cyrillic prefix char still counts as one character.
        assert_eq!(ZoneProjection::new("я12", vec![]).flat_number(), Some(12));
    }

    #[test]
    fn non_digit_suffix_is_unknown() {
        assert!(ZoneProjection::new("Квартира 1A", vec![]).is_unknown());
        assert!(ZoneProjection::new("Квартира A1", vec![]).is_unknown());
        assert!(ZoneProjection::new("Гардероб", vec![]).is_unknown());
        // Sign characters are not digits.
        assert!(ZoneProjection::new("Кв +1", vec![]).is_unknown());
        assert!(ZoneProjection::new("Кв -1", vec![]).is_unknown());
        // Non-ASCII digits do not qualify.
        assert!(ZoneProjection::new("Кв ١٢", vec![]).is_unknown());
    }

    #[test]
    fn members_are_kept_in_given_order() {
        let p = ZoneProjection::new("Квартира 05", vec![4, 1, 9]);
        assert_eq!(p.members(), &[4, 1, 9]);
        assert_eq!(p.key(), "Квартира 05");
    }

    proptest! {
        #[test]
        fn keys_of_at_most_two_chars_are_unknown(key in "\\PC{0,2}") {
            prop_assert!(ZoneProjection::new(key, vec![]).is_unknown());
        }

        #[test]
        fn digit_suffix_after_any_prefix_is_recognized(
            prefix in "\\PC{1,12}",
            tens in 0u32..10,
            ones in 0u32..10,
        ) {
            let key = format!("{prefix}{tens}{ones}");
            let p = ZoneProjection::new(key, vec![]);
            prop_assert_eq!(p.flat_number(), Some(tens * 10 + ones));
        }

        #[test]
        fn non_digit_final_char_is_unknown(
            prefix in "\\PC{0,12}",
            last in "[a-zA-Zа-яА-Я ]",
        ) {
            let key = format!("{prefix}{last}");
            prop_assert!(ZoneProjection::new(key, vec![]).is_unknown());
        }
    }
}
