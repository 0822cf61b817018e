use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit RGB colour, as sent in `accent_color` and role colours.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub fn r(&self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub fn g(&self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub fn b(&self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        let c = Color(0x1abc9c);
        assert_eq!(c.to_string(), "#1abc9c");
        assert_eq!((c.r(), c.g(), c.b()), (0x1a, 0xbc, 0x9c));
        assert_eq!(Color(0xff).to_string(), "#0000ff");
    }
}
