//! Closed tag sets used by profile themes and special links.
//!
//! Every enum serializes as its integer tag, the form clients submit.

use crate::rules::TagEnum;
use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $tag),+
        }

        impl TagEnum for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn tag(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.tag())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(TagEnum::name(*self))
            }
        }
    };
}

tag_enum! {
    /// How the page background is painted.
    BackgroundType {
        Flat = 0,
        Gradient = 1,
    }
}

tag_enum! {
    /// Visual style of link buttons.
    ButtonStyle {
        Fill = 0,
        Outline = 1,
        SoftShadow = 2,
        HardShadow = 3,
    }
}

tag_enum! {
    Font {
        Inter = 0,
        Roboto = 1,
        Poppins = 2,
        Lato = 3,
        Montserrat = 4,
        SpaceMono = 5,
    }
}

tag_enum! {
    /// Platforms with a dedicated social link.
    SpecialLink {
        GitHub = 0,
        Instagram = 1,
        Twitter = 2,
        YouTube = 3,
        Twitch = 4,
        TikTok = 5,
        Patreon = 6,
        Snapchat = 7,
        LinkedIn = 8,
        Facebook = 9,
        Spotify = 10,
    }
}
