// src/vga_buffer/color.rs

//! VGA color definitions and attribute byte management

/// VGA color codes (4-bit color palette)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl VgaColor {
    /// Color for the low nibble of `value`
    pub const fn from_nibble(value: u8) -> Self {
        match value & 0x0F {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Brown,
            7 => Self::LightGray,
            8 => Self::DarkGray,
            9 => Self::LightBlue,
            10 => Self::LightGreen,
            11 => Self::LightCyan,
            12 => Self::LightRed,
            13 => Self::Pink,
            14 => Self::Yellow,
            _ => Self::White,
        }
    }
}

/// Attribute byte: foreground in the low nibble, background in the high nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Create a new color code from foreground and background colors
    pub const fn new(fg: VgaColor, bg: VgaColor) -> Self {
        Self((bg as u8) << 4 | (fg as u8))
    }

    /// Wrap a raw attribute byte
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw byte value
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub const fn foreground(self) -> VgaColor {
        VgaColor::from_nibble(self.0)
    }

    pub const fn background(self) -> VgaColor {
        VgaColor::from_nibble(self.0 >> 4)
    }

    /// Same background, new foreground
    pub const fn with_foreground(self, fg: VgaColor) -> Self {
        Self::new(fg, self.background())
    }

    /// Same foreground, new background
    pub const fn with_background(self, bg: VgaColor) -> Self {
        Self::new(self.foreground(), bg)
    }

    /// Default color scheme (light gray on black)
    pub const fn normal() -> Self {
        Self::new(VgaColor::LightGray, VgaColor::Black)
    }

    /// Error color scheme (light red on black)
    pub const fn error() -> Self {
        Self::new(VgaColor::LightRed, VgaColor::Black)
    }

    /// Panic color scheme (white on red)
    pub const fn panic() -> Self {
        Self::new(VgaColor::White, VgaColor::Red)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::normal()
    }
}
