use unicode_segmentation::UnicodeSegmentation;

pub mod helpers;

/// A password as typed by the player. Its length is measured in UTF-16 code units, the way a
/// browser text field counts, so "🌙" is two characters long. Emoji matching still works on
/// grapheme clusters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Password {
    /// The current password.
    password: String,
}

impl Password {
    /// Wrap the given string.
    pub fn new(password: String) -> Self {
        Password { password }
    }

    /// The length of the password in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.password.encode_utf16().count()
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.password.is_empty()
    }

    /// The password as a string slice.
    pub fn as_str(&self) -> &str {
        self.password.as_str()
    }

    /// The grapheme clusters of the password, in order.
    pub fn graphemes(&self) -> Vec<&str> {
        self.password.graphemes(true).collect()
    }
}

impl From<&str> for Password {
    fn from(string: &str) -> Self {
        Password::new(string.to_owned())
    }
}

impl From<String> for Password {
    fn from(string: String) -> Self {
        Password::new(string)
    }
}

#[cfg(test)]
mod tests {
    use super::Password;

    #[test]
    fn len() {
        assert_eq!(Password::from("foo").len(), 3);
        assert_eq!(Password::default().len(), 0);
        assert!(Password::default().is_empty());

        // Astral plane characters take two code units each
        assert_eq!(Password::from("🌙🌙").len(), 4);
        assert_eq!(Password::from("\u{e9}").len(), 1);
        // Joined emoji count every code point
        assert_eq!(Password::from("foo🏋️‍♂️").len(), 9);
    }

    #[test]
    fn graphemes() {
        assert_eq!(Password::from("a🌙b").graphemes(), vec!["a", "🌙", "b"]);
        assert!(Password::default().graphemes().is_empty());
    }
}
