use crate::Error;
use std::fmt;
use std::str::FromStr;

/// An RGBA8 color.
///
/// Parse one from a CSS-like string with [`str::parse`]:
///
/// ```
/// use jumper::Color;
///
/// let red: Color = "#f00".parse()?;
/// assert_eq!(red, Color::rgb(0xff, 0x00, 0x00));
///
/// let teal: Color = "#5e48e8".parse()?;
/// assert_eq!(teal.as_rgba(), [0x5e, 0x48, 0xe8, 0xff]);
/// # Ok::<(), jumper::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Color([u8; 4]);

const NAMED: [(&str, [u8; 4]); 12] = [
    ("black", [0x00, 0x00, 0x00, 0xff]),
    ("white", [0xff, 0xff, 0xff, 0xff]),
    ("red", [0xff, 0x00, 0x00, 0xff]),
    ("green", [0x00, 0x80, 0x00, 0xff]),
    ("blue", [0x00, 0x00, 0xff, 0xff]),
    ("yellow", [0xff, 0xff, 0x00, 0xff]),
    ("cyan", [0x00, 0xff, 0xff, 0xff]),
    ("magenta", [0xff, 0x00, 0xff, 0xff]),
    ("orange", [0xff, 0xa5, 0x00, 0xff]),
    ("purple", [0x80, 0x00, 0x80, 0xff]),
    ("gray", [0x80, 0x80, 0x80, 0xff]),
    ("grey", [0x80, 0x80, 0x80, 0xff]),
];

impl Color {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color([r, g, b, 0xff])
    }

    /// Create a color with an alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color([r, g, b, a])
    }

    /// The color as bytes in RGBA order, ready to copy into a pixel buffer.
    pub const fn as_rgba(&self) -> [u8; 4] {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::rgb(0x5e, 0x48, 0xe8)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Color, Error> {
        let invalid = || Error::InvalidColor(s.to_string());
        let trimmed = s.trim();

        let Some(hex) = trimmed.strip_prefix('#') else {
            return NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
                .map(|&(_, rgba)| Color(rgba))
                .ok_or_else(invalid);
        };

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        // Each nibble of the short forms is doubled: `#f80` == `#ff8800`
        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|n| n * 0x11);
        let byte = |i: usize| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16);

        let rgba = match hex.len() {
            3 => [nibble(0), nibble(1), nibble(2), Ok(0xff)],
            4 => [nibble(0), nibble(1), nibble(2), nibble(3)],
            6 => [byte(0), byte(1), byte(2), Ok(0xff)],
            8 => [byte(0), byte(1), byte(2), byte(3)],
            _ => return Err(invalid()),
        };

        let mut out = [0; 4];
        for (dst, src) in out.iter_mut().zip(rgba) {
            *dst = src.map_err(|_| invalid())?;
        }

        Ok(Color(out))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
