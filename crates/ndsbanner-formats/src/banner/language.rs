//! Title slot languages

use std::fmt;

/// Language of a banner title slot, in on-disk slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Slot 0
    Japanese,
    /// Slot 1
    English,
    /// Slot 2
    French,
    /// Slot 3
    German,
    /// Slot 4
    Italian,
    /// Slot 5
    Spanish,
    /// Slot 6, version 2 and later
    Chinese,
    /// Slot 7, version 3 and later
    Korean,
}

impl Language {
    /// All languages in slot order
    pub const ALL: [Language; 8] = [
        Language::Japanese,
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
        Language::Chinese,
        Language::Korean,
    ];

    /// Index of this language's title slot
    pub fn slot_index(self) -> usize {
        self as usize
    }

    /// English name of the language
    pub fn name(self) -> &'static str {
        match self {
            Self::Japanese => "Japanese",
            Self::English => "English",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Spanish => "Spanish",
            Self::Chinese => "Chinese",
            Self::Korean => "Korean",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
