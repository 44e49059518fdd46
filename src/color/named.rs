use super::Rgb;
use super::codec::{PackedColor, rgb_from_packed};

const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_ORANGE: &str = "orange";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_INDIGO: &str = "indigo";
const COLOR_NAME_VIOLET: &str = "violet";
const COLOR_NAME_PURPLE: &str = "purple";
const COLOR_NAME_WHITE: &str = "white";
const COLOR_NAME_BLACK: &str = "black";

const COLOR_RED: PackedColor = 0xFF_0000;
const COLOR_ORANGE: PackedColor = 0xFF_A500;
const COLOR_YELLOW: PackedColor = 0xFF_FF00;
const COLOR_GREEN: PackedColor = 0x00_FF00;
const COLOR_BLUE: PackedColor = 0x00_00FF;
const COLOR_INDIGO: PackedColor = 0x4B_0082;
const COLOR_VIOLET: PackedColor = 0x8A_2BE2;
const COLOR_PURPLE: PackedColor = 0xFF_00FF;
const COLOR_WHITE: PackedColor = 0xFF_FFFF;
const COLOR_BLACK: PackedColor = 0x00_0000;

/// Well known colors of the ZIP LED palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ZipLedColor {
    Red = COLOR_RED,
    Orange = COLOR_ORANGE,
    Yellow = COLOR_YELLOW,
    Green = COLOR_GREEN,
    Blue = COLOR_BLUE,
    Indigo = COLOR_INDIGO,
    Violet = COLOR_VIOLET,
    Purple = COLOR_PURPLE,
    White = COLOR_WHITE,
    Black = COLOR_BLACK,
}

impl ZipLedColor {
    /// Every palette entry, in palette order
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// Packed value of the color
    pub const fn packed(self) -> PackedColor {
        self as PackedColor
    }

    /// Look up a palette entry by its packed value
    pub fn from_raw(value: PackedColor) -> Option<Self> {
        Some(match value {
            COLOR_RED => Self::Red,
            COLOR_ORANGE => Self::Orange,
            COLOR_YELLOW => Self::Yellow,
            COLOR_GREEN => Self::Green,
            COLOR_BLUE => Self::Blue,
            COLOR_INDIGO => Self::Indigo,
            COLOR_VIOLET => Self::Violet,
            COLOR_PURPLE => Self::Purple,
            COLOR_WHITE => Self::White,
            COLOR_BLACK => Self::Black,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Orange => COLOR_NAME_ORANGE,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Indigo => COLOR_NAME_INDIGO,
            Self::Violet => COLOR_NAME_VIOLET,
            Self::Purple => COLOR_NAME_PURPLE,
            Self::White => COLOR_NAME_WHITE,
            Self::Black => COLOR_NAME_BLACK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_ORANGE => Some(Self::Orange),
            COLOR_NAME_YELLOW => Some(Self::Yellow),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_BLUE => Some(Self::Blue),
            COLOR_NAME_INDIGO => Some(Self::Indigo),
            COLOR_NAME_VIOLET => Some(Self::Violet),
            COLOR_NAME_PURPLE => Some(Self::Purple),
            COLOR_NAME_WHITE => Some(Self::White),
            COLOR_NAME_BLACK => Some(Self::Black),
            _ => None,
        }
    }
}

impl From<ZipLedColor> for PackedColor {
    fn from(color: ZipLedColor) -> Self {
        color.packed()
    }
}

impl From<ZipLedColor> for Rgb {
    fn from(color: ZipLedColor) -> Self {
        rgb_from_packed(color.packed())
    }
}
