//! Filename tokenizer.
//!
//! Splits a filename such as `render_0042.exr` into its prefix (`render_`),
//! frame number (`42`), padding (`4`) and extension (`.exr`).

use super::result::SequenceKey;

/// A filename recognized as one frame of a numbered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFile {
    /// The full filename.
    pub name: String,
    /// Literal text before the numeric token.
    pub prefix: String,
    /// Parsed frame number.
    pub number: u64,
    /// Digit width of the numeric token (leading zeros included).
    pub padding: usize,
    /// Extension including the leading dot.
    pub extension: String,
}

impl FrameFile {
    /// The grouping key of this frame.
    pub fn key(&self) -> SequenceKey {
        SequenceKey::new(&self.prefix, &self.extension)
    }
}

/// Classification of a single filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The name carries a frame number right before its extension.
    Frame(FrameFile),
    /// The name does not look like a sequence frame.
    Unrecognized(String),
}

impl Token {
    /// Get the frame if this token was recognized.
    pub fn frame(&self) -> Option<&FrameFile> {
        match self {
            Self::Frame(frame) => Some(frame),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Classify a filename.
///
/// The extension is the final `.` followed by one or more ASCII
/// alphanumeric or `_` characters. The stem must end in a run of ASCII
/// digits; that run is the frame number and everything before it is the
/// prefix, digits included.
///
/// # Example
///
/// ```
/// use framecheck::sequence::{tokenize, Token};
///
/// let Token::Frame(frame) = tokenize("shot_010_v2_0005.exr") else {
///     panic!("expected a frame");
/// };
/// assert_eq!(frame.prefix, "shot_010_v2_");
/// assert_eq!(frame.number, 5);
/// assert_eq!(frame.padding, 4);
/// assert_eq!(frame.extension, ".exr");
/// ```
pub fn tokenize(name: &str) -> Token {
    let unrecognized = || Token::Unrecognized(name.to_string());

    let Some(dot) = name.rfind('.') else {
        return unrecognized();
    };
    let ext_body = &name[dot + 1..];
    if ext_body.is_empty()
        || !ext_body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return unrecognized();
    }

    let stem = &name[..dot];
    let digits = stem
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return unrecognized();
    }

    // ASCII digits are single bytes, so this is always a char boundary.
    let split = stem.len() - digits;
    let Ok(number) = stem[split..].parse::<u64>() else {
        return unrecognized();
    };

    Token::Frame(FrameFile {
        name: name.to_string(),
        prefix: stem[..split].to_string(),
        number,
        padding: digits,
        extension: name[dot..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(name: &str) -> FrameFile {
        match tokenize(name) {
            Token::Frame(f) => f,
            Token::Unrecognized(n) => panic!("{} was not recognized", n),
        }
    }

    #[test]
    fn splits_simple_name() {
        let f = frame("render_0001.png");
        assert_eq!(f.prefix, "render_");
        assert_eq!(f.number, 1);
        assert_eq!(f.padding, 4);
        assert_eq!(f.extension, ".png");
        assert_eq!(f.name, "render_0001.png");
    }

    #[test]
    fn dotted_frame_separator() {
        let f = frame("beauty.1042.exr");
        assert_eq!(f.prefix, "beauty.");
        assert_eq!(f.number, 1042);
        assert_eq!(f.extension, ".exr");
    }

    #[test]
    fn prefix_may_contain_digits() {
        let f = frame("sh010_v3_012.tif");
        assert_eq!(f.prefix, "sh010_v3_");
        assert_eq!(f.number, 12);
        assert_eq!(f.padding, 3);
    }

    #[test]
    fn bare_number_has_empty_prefix() {
        let f = frame("0007.jpg");
        assert_eq!(f.prefix, "");
        assert_eq!(f.number, 7);
    }

    #[test]
    fn unpadded_number() {
        let f = frame("x_12.tga");
        assert_eq!(f.padding, 2);
        assert_eq!(f.number, 12);
    }

    #[test]
    fn no_extension_is_unrecognized() {
        assert!(matches!(tokenize("frame0001"), Token::Unrecognized(_)));
    }

    #[test]
    fn trailing_dot_is_unrecognized() {
        assert!(matches!(tokenize("frame0001."), Token::Unrecognized(_)));
    }

    #[test]
    fn no_digits_is_unrecognized() {
        assert!(matches!(tokenize("notes.txt"), Token::Unrecognized(_)));
        assert!(matches!(tokenize(".DS_Store"), Token::Unrecognized(_)));
    }

    #[test]
    fn digits_not_adjacent_to_extension_are_unrecognized() {
        assert!(matches!(
            tokenize("shot_001_final.png"),
            Token::Unrecognized(_)
        ));
    }

    #[test]
    fn overflowing_number_is_unrecognized() {
        let name = format!("big_{}.png", "9".repeat(30));
        assert_eq!(tokenize(&name), Token::Unrecognized(name.clone()));
    }

    #[test]
    fn extension_with_symbols_is_unrecognized() {
        assert!(matches!(tokenize("a_01.pn-g"), Token::Unrecognized(_)));
    }

    #[test]
    fn unicode_prefix_is_preserved() {
        let f = frame("kamera_ü_05.png");
        assert_eq!(f.prefix, "kamera_ü_");
        assert_eq!(f.number, 5);
    }

    #[test]
    fn key_combines_prefix_and_extension() {
        let f = frame("a_01.jpg");
        assert_eq!(f.key(), SequenceKey::new("a_", ".jpg"));
    }

    #[test]
    fn token_frame_accessor() {
        assert!(tokenize("a_01.jpg").frame().is_some());
        assert!(tokenize("readme.md").frame().is_none());
    }
}
