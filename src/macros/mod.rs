/// This macro implements `From<int>` for `RawInput` for every given
/// integer type.
///
/// Integers are rendered in decimal through `itoa`, so callers may pass
/// numeric ids straight from a database column and get the same behaviour
/// as if they had passed the string.
macro_rules! raw_input_from_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for RawInput<'static> {
                fn from(value: $int) -> Self {
                    let mut buf = itoa::Buffer::new();
                    Self::from(buf.format(value).to_owned())
                }
            }
        )*
    };
}

pub(crate) use raw_input_from_integer;
