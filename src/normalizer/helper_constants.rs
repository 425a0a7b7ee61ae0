pub const PLUS_SIGN: &'static str = "+";

// Two leading zeros are the international call prefix in most of the world
// and are often typed instead of '+'.
pub const DOUBLE_ZERO: &'static str = "00";

// Everything after one of these is an annotation (an extension, a comment)
// rather than part of the number. Order matters, see the variants module.
pub const EXTENSION_SEPARATOR: char = '#';
pub const ANNOTATION_SEPARATOR: char = ':';

// Separators users put between several numbers typed into one field.
pub const ALTERNATION_SEPARATORS: &'static str = "[/,]";
pub const WHITESPACE_SEPARATOR: char = ' ';

/// Anything shorter can't be a phone number ("-", "No", "").
pub const MIN_INPUT_LEN: usize = 3;

/// The longest rendering the normalizer returns. Longer renderings come from
/// variants the numbering plan accepts although they are implausibly long.
pub const MAX_FORMATTED_LEN: usize = 16;

/// Leading trunk digits tried after the dialing prefix: none, one ("0") and
/// two ("00" misused as a local trunk code).
pub const MAX_TRUNK_PREFIX_LEN: usize = 2;
