use std::borrow::Cow;

pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Trims and upper-cases a region code. Borrows the input when it is
    /// already in canonical form.
    pub fn normalize(region: &str) -> Cow<'_, str> {
        let trimmed = region.trim();
        if trimmed.bytes().any(|b| b.is_ascii_lowercase()) {
            Cow::Owned(trimmed.to_ascii_uppercase())
        } else {
            Cow::Borrowed(trimmed)
        }
    }

    /// Returns whether the region code can't name a region: empty, not
    /// two ASCII letters or the unknown region itself.
    pub fn is_unknown(region: &str) -> bool {
        region.len() != 2
            || !region.bytes().all(|b| b.is_ascii_alphabetic())
            || region.eq_ignore_ascii_case(Self::get_unknown())
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::RegionCode;

    #[test]
    fn normalize_borrows_canonical_codes() {
        assert_eq!(RegionCode::normalize("AE"), Cow::Borrowed("AE"));
        assert!(matches!(RegionCode::normalize("ae"), Cow::Owned(s) if s == "AE"));
        assert_eq!(RegionCode::normalize(" jo "), "JO");
    }

    #[test]
    fn unknown_regions() {
        assert!(RegionCode::is_unknown(""));
        assert!(RegionCode::is_unknown("ZZ"));
        assert!(RegionCode::is_unknown("zz"));
        assert!(RegionCode::is_unknown("001"));
        assert!(RegionCode::is_unknown("A1"));
        assert!(!RegionCode::is_unknown("AE"));
    }
}
