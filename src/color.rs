use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB colour. Equality is by channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color([u8; 3]);

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color([red, green, blue])
    }

    pub fn red(&self) -> u8 {
        self.0[0]
    }

    pub fn green(&self) -> u8 {
        self.0[1]
    }

    pub fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance(&self, other: &Color) -> i64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| {
                let d = i64::from(a) - i64::from(b);
                d * d
            })
            .sum()
    }
}

// Accepts `RRGGBB`, `#RRGGBB` or `0xRRGGBB`, hex digits in either case.
impl FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .unwrap_or(s);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AppError::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| AppError::InvalidColor(s.to_string()))
        };

        Ok(Color([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.red(),
            self.green(),
            self.blue()
        )
    }
}
