//! Character set building for password generation.

use indexmap::IndexSet;

use crate::settings::Config;

pub const NUMBER: &str = "0123456789";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const SPACE: &str = " ";

/// Stands in for every ASCII space so trimming never eats a character.
pub const NBSP: char = '\u{00A0}';

/// Distinct characters eligible for sampling, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset(IndexSet<char>);

impl Charset {
    /// Build the set for `config`.
    ///
    /// Enabled classes are appended in the order number, lowercase,
    /// uppercase, symbol, space, then the custom characters.
    pub fn build(config: &Config) -> Self {
        let classes = [
            (config.number, NUMBER),
            (config.lowercase, LOWERCASE),
            (config.uppercase, UPPERCASE),
            (config.symbol, SYMBOL),
            (config.space, SPACE),
        ];

        let mut buf = String::new();
        for (_, chars) in classes.iter().filter(|(enabled, _)| *enabled) {
            buf.push_str(chars);
        }
        if let Some(custom) = &config.custom {
            buf.push_str(custom);
        }

        let units: Vec<u16> = buf.encode_utf16().collect();
        Self::from_utf16(&units)
    }

    /// Segment UTF-16 code units into characters.
    ///
    /// A valid surrogate pair is one character. Unpaired high or low
    /// surrogates are dropped without error. ASCII spaces become [`NBSP`].
    pub fn from_utf16(units: &[u16]) -> Self {
        char::decode_utf16(units.iter().copied())
            .filter_map(Result::ok)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get_index(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Charset(
            iter.into_iter()
                .map(|c| if c == ' ' { NBSP } else { c })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(custom: &str) -> Config {
        Config {
            custom: Some(custom.to_string()),
            ..Config::default().without_classes()
        }
    }

    #[test]
    fn default_classes() {
        let set = Charset::build(&Config::default());
        assert_eq!(set.len(), 62);
        assert_eq!(set.get(0), Some('0'));
        assert_eq!(set.get(10), Some('a'));
        assert_eq!(set.get(36), Some('A'));
    }

    #[test]
    fn all_classes() {
        let config = Config {
            symbol: true,
            space: true,
            ..Config::default()
        };
        let set = Charset::build(&config);
        assert_eq!(set.len(), 10 + 26 + 26 + 32 + 1);
        assert!(set.contains(NBSP));
        assert!(!set.contains(' '));
    }

    #[test]
    fn custom_duplicates_removed() {
        let config = Config {
            custom: Some("aaa0b€€".to_string()),
            ..Config::default()
        };
        let set = Charset::build(&config);
        assert_eq!(set.len(), 63);
        assert!(set.contains('€'));
    }

    #[test]
    fn custom_spaces_become_nbsp() {
        let set = Charset::build(&only("a b c"));
        let chars: Vec<char> = set.iter().collect();
        assert_eq!(chars, vec!['a', NBSP, 'b', 'c']);
    }

    #[test]
    fn space_class_and_custom_space_merge() {
        let config = Config {
            space: true,
            custom: Some(" \u{a0}".to_string()),
            ..Config::default().without_classes()
        };
        assert_eq!(Charset::build(&config).len(), 1);
    }

    #[test]
    fn supplementary_plane_is_one_character() {
        let set = Charset::build(&only("😀😀x"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some('😀'));
    }

    #[test]
    fn unpaired_surrogates_dropped() {
        // lone high, lone low, high followed by a non-surrogate, valid pair
        let units = [0xD83D, 0x0041, 0xDE00, 0x0042, 0xD83D, 0xDE00, 0xD800];
        let set = Charset::from_utf16(&units);
        let chars: Vec<char> = set.iter().collect();
        assert_eq!(chars, vec!['A', 'B', '😀']);
    }

    #[test]
    fn nothing_enabled_is_empty() {
        let set = Charset::build(&Config::default().without_classes());
        assert!(set.is_empty());
    }
}
