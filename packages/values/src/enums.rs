//! Closed enumerations used by skin attributes, with their file-format
//! token spellings.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! skin_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            pub fn try_parse(text: &str) -> Option<Self> {
                match text.trim() {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// The `#[default]` attribute lands on the first listed variant; variants are
// listed in the order the engine declares them, defaults first.

skin_enum!(
    /// Horizontal widget alignment within the parent area.
    HorizontalAlignment {
        Left => "LeftAligned",
        Centre => "CentreAligned",
        Right => "RightAligned",
    }
);

skin_enum!(
    /// Vertical widget alignment within the parent area.
    VerticalAlignment {
        Top => "TopAligned",
        Centre => "CentreAligned",
        Bottom => "BottomAligned",
    }
);

skin_enum!(
    /// Horizontal imagery formatting.
    HorizontalFormatting {
        LeftAligned => "LeftAligned",
        CentreAligned => "CentreAligned",
        RightAligned => "RightAligned",
        Stretched => "Stretched",
        Tiled => "Tiled",
    }
);

skin_enum!(
    /// Vertical imagery formatting.
    VerticalFormatting {
        TopAligned => "TopAligned",
        CentreAligned => "CentreAligned",
        BottomAligned => "BottomAligned",
        Stretched => "Stretched",
        Tiled => "Tiled",
    }
);

skin_enum!(
    /// Horizontal text formatting, including word-wrapped modes.
    HorizontalTextFormatting {
        LeftAligned => "LeftAligned",
        CentreAligned => "CentreAligned",
        RightAligned => "RightAligned",
        Justified => "Justified",
        WordWrapLeftAligned => "WordWrapLeftAligned",
        WordWrapCentreAligned => "WordWrapCentreAligned",
        WordWrapRightAligned => "WordWrapRightAligned",
        WordWrapJustified => "WordWrapJustified",
    }
);

skin_enum!(
    /// Vertical text formatting.
    VerticalTextFormatting {
        TopAligned => "TopAligned",
        CentreAligned => "CentreAligned",
        BottomAligned => "BottomAligned",
    }
);

skin_enum!(
    /// Item list sorting behaviour.
    SortMode {
        Ascending => "Ascending",
        Descending => "Descending",
        UserSort => "UserSort",
    }
);

skin_enum!(
    /// When a widget receives update pulses.
    WindowUpdateMode {
        Always => "Always",
        Never => "Never",
        Visible => "Visible",
    }
);

skin_enum!(
    /// Aspect-ratio enforcement mode.
    AspectMode {
        Ignore => "Ignore",
        Shrink => "Shrink",
        Expand => "Expand",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        assert_eq!(HorizontalAlignment::Centre.to_string(), "CentreAligned");
        assert_eq!(
            HorizontalAlignment::try_parse("CentreAligned"),
            Some(HorizontalAlignment::Centre)
        );
        assert_eq!(
            VerticalFormatting::try_parse("Stretched"),
            Some(VerticalFormatting::Stretched)
        );
        assert_eq!(
            HorizontalTextFormatting::try_parse("WordWrapJustified"),
            Some(HorizontalTextFormatting::WordWrapJustified)
        );
    }

    #[test]
    fn test_unknown_token_rejected() {
        assert_eq!(SortMode::try_parse("Random"), None);
        // tokens are case-sensitive in the file format
        assert_eq!(AspectMode::try_parse("shrink"), None);
    }

    #[test]
    fn test_defaults_match_engine_declarations() {
        assert_eq!(HorizontalAlignment::default(), HorizontalAlignment::Left);
        assert_eq!(VerticalAlignment::default(), VerticalAlignment::Top);
        assert_eq!(WindowUpdateMode::default(), WindowUpdateMode::Always);
    }
}
