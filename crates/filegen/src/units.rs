// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{matches_size_pattern, InvalidSize, UnknownUnit};

/// Storage unit a size is expressed in
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum SizeUnit {
    /// Megabytes, as 1024 kilobytes
    #[default]
    Megabytes = 1024 * 1024,
    /// Kilobytes, as 1024 bytes
    Kilobytes = 1024,
    /// Bytes
    Bytes = 1,
}

/// Accepted spellings for each unit, matched after lowercasing
static UNIT_ALIASES: phf::Map<&'static str, SizeUnit> = phf::phf_map! {
    "megabytes" => SizeUnit::Megabytes,
    "mb" => SizeUnit::Megabytes,
    "m" => SizeUnit::Megabytes,
    "kilobytes" => SizeUnit::Kilobytes,
    "kb" => SizeUnit::Kilobytes,
    "k" => SizeUnit::Kilobytes,
    "bytes" => SizeUnit::Bytes,
    "b" => SizeUnit::Bytes,
};

impl SizeUnit {
    /// All units, largest first
    pub const ALL: [SizeUnit; 3] = [SizeUnit::Megabytes, SizeUnit::Kilobytes, SizeUnit::Bytes];

    /// Number of bytes in one of this unit
    pub fn multiplier(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeUnit::Megabytes => f.write_str("megabytes"),
            SizeUnit::Kilobytes => f.write_str("kilobytes"),
            SizeUnit::Bytes => f.write_str("bytes"),
        }
    }
}

impl FromStr for SizeUnit {
    type Err = UnknownUnit;

    /// Attempt to convert a string to a size unit
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        UNIT_ALIASES
            .get(value.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownUnit {
                value: value.to_owned(),
                advice: Some(format!(
                    "supported units are {}",
                    SizeUnit::ALL.iter().map(|u| format!("'{u}'")).join(", ")
                )),
            })
    }
}

/// A positive decimal size with at most two fractional digits.
///
/// Held exactly as a count of hundredths so conversion never suffers
/// from binary floating point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeValue {
    hundredths: u64,
}

impl SizeValue {
    /// Construct from a count of hundredths, rejecting zero
    pub fn from_hundredths(hundredths: u64) -> Option<Self> {
        (hundredths > 0).then_some(Self { hundredths })
    }

    pub fn hundredths(&self) -> u64 {
        self.hundredths
    }
}

impl FromStr for SizeValue {
    type Err = InvalidSize;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InvalidSize {
            value: value.to_owned(),
            reason,
        };

        if !matches_size_pattern(value) {
            return Err(invalid("expected digits with at most two decimal places"));
        }

        let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("not a number"));
        }

        // The pattern guarantees only ASCII digits remain, so parsing can only fail on overflow
        let whole = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| invalid("value is too large"))?
        };
        let fraction = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid("not a number"))? * 10,
            _ => fraction.parse::<u64>().map_err(|_| invalid("not a number"))?,
        };

        let hundredths = whole
            .checked_mul(100)
            .and_then(|h| h.checked_add(fraction))
            .ok_or_else(|| invalid("value is too large"))?;

        Self::from_hundredths(hundredths).ok_or_else(|| invalid("size must be greater than zero"))
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.hundredths / 100;
        let fraction = self.hundredths % 100;
        if fraction == 0 {
            write!(f, "{whole}")
        } else if fraction % 10 == 0 {
            write!(f, "{whole}.{}", fraction / 10)
        } else {
            write!(f, "{whole}.{fraction:02}")
        }
    }
}

/// Convert a size in the given unit to a whole number of bytes.
///
/// Rounds to the nearest byte with ties going up. Results that do not fit
/// in a `u64` saturate; the file system rejects them later.
///
/// # Examples
///
/// ```
/// use filegen::units::{to_bytes, SizeUnit, SizeValue};
/// let half: SizeValue = "0.5".parse().unwrap();
/// assert_eq!(to_bytes(half, SizeUnit::Megabytes), 524288);
/// ```
pub fn to_bytes(value: SizeValue, unit: SizeUnit) -> u64 {
    let scaled = u128::from(value.hundredths) * u128::from(unit.multiplier());
    let bytes = (scaled + 50) / 100;
    u64::try_from(bytes).unwrap_or(u64::MAX)
}

/// Format a byte size into a human-readable string with appropriate units
///
/// # Examples
///
/// ```
/// use filegen::units::format_size;
/// assert_eq!(format_size(1536), "1.5KiB");
/// assert_eq!(format_size(100), "100B");
/// ```
pub fn format_size(size: u64) -> String {
    const SUFFIXES: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    let step = SizeUnit::Kilobytes.multiplier();

    if size < step {
        return format!("{size}B");
    }

    let step = step as f64;
    let mut scaled = size as f64 / step;
    let mut suffix = SUFFIXES[0];
    for &next in &SUFFIXES[1..] {
        if scaled < step {
            break;
        }
        scaled /= step;
        suffix = next;
    }

    format!("{scaled:.1}{suffix}")
}
