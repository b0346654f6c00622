use image::Rgb;
use thiserror::Error;

/// Color of live cells unless told otherwise
pub const DEFAULT_FG: Rgb<u8> = Rgb([0x9F, 0xEF, 0x00]);

/// Color of dead cells unless told otherwise
pub const DEFAULT_BG: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

/// The two colors a rendering is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Live cells
    pub fg: Rgb<u8>,

    /// Dead cells
    pub bg: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
        }
    }
}

impl Palette {
    pub const fn new(fg: Rgb<u8>, bg: Rgb<u8>) -> Self {
        Self { fg, bg }
    }

    /// Color of a cell in state `state`
    #[inline]
    pub fn color(&self, state: u8) -> Rgb<u8> {
        if state == 0 { self.bg } else { self.fg }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("hex color string is empty")]
    Empty,

    #[error("hex color string must be 3 bytes, got {got} hex digits")]
    WrongLength { got: usize },

    #[error("invalid hex digit '{got}'")]
    InvalidHex { got: char },
}

/// Parse a color like `#9FEF00` or `9fef00`.
///
/// Exactly six hex digits are required. The leading `#` is optional.
pub fn parse_color(s: &str) -> Result<Rgb<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    let digits = s.strip_prefix('#').unwrap_or(s);

    if let Some(got) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex { got });
    }

    // Only ascii from here on, so byte offsets are char offsets
    let [r, g, b] = match digits.as_bytes() {
        [r1, r0, g1, g0, b1, b0] => [(r1, r0), (g1, g0), (b1, b0)],
        bytes => return Err(ColorError::WrongLength { got: bytes.len() }),
    }
    .map(|(hi, lo)| (hex_value(*hi) << 4) | hex_value(*lo));

    Ok(Rgb([r, g, b]))
}

/// Value of an ascii hex digit
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => unreachable!("digits were checked to be hex"),
    }
}
