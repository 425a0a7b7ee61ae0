use std::borrow::Cow;

use crate::macros::raw_input_from_integer;

/// Input of the normalizer: any string, or an integer coerced to its decimal
/// representation. `None` coerces to the empty input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInput<'a>(Cow<'a, str>);

impl<'a> RawInput<'a> {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Cow<'a, str> {
        self.0
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(value: &'a str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(value: &'a String) -> Self {
        Self(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for RawInput<'static> {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for RawInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self(value)
    }
}

impl<'a, T: Into<RawInput<'a>>> From<Option<T>> for RawInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

raw_input_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::RawInput;

    #[test]
    fn integers_render_in_decimal() {
        assert_eq!(RawInput::from(40773818041_u64).as_str(), "40773818041");
        assert_eq!(RawInput::from(-15_i32).as_str(), "-15");
        assert_eq!(RawInput::from(0_u8).as_str(), "0");
    }

    #[test]
    fn none_is_empty() {
        assert!(RawInput::from(None::<&str>).is_empty());
        assert!(RawInput::from(None::<u64>).is_empty());
        assert_eq!(RawInput::from(Some("+40773818041")).as_str(), "+40773818041");
    }
}
