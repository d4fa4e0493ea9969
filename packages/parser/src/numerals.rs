//! Roman numeral conversion for division and chapter numbering.

use crate::error::{ParserError, Result};

/// Largest number expressible without overlined numerals.
pub const MAX_ROMAN: u32 = 3999;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a number to its canonical roman form.
///
/// # Examples
/// ```
/// use ustawa_parser::numerals::to_roman;
///
/// assert_eq!(to_roman(14).unwrap(), "XIV");
/// assert!(to_roman(0).is_err());
/// ```
pub fn to_roman(number: u32) -> Result<String> {
    if number == 0 || number > MAX_ROMAN {
        return Err(ParserError::InvalidNumber(number.to_string()));
    }

    let mut remaining = number;
    let mut roman = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            roman.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(roman)
}

/// Parse a canonical upper-case roman numeral.
///
/// Non-canonical spellings such as `IIII` or `VX` are rejected.
pub fn from_roman(roman: &str) -> Result<u32> {
    let invalid = || ParserError::InvalidNumber(roman.to_string());

    let mut total = 0u32;
    let mut previous = 0u32;
    for symbol in roman.chars().rev() {
        let value = match symbol {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return Err(invalid()),
        };
        if value < previous {
            total = total.checked_sub(value).ok_or_else(invalid)?;
        } else {
            total += value;
            previous = value;
        }
        if total > MAX_ROMAN {
            return Err(invalid());
        }
    }

    // Canonical form only: the value must print back to the same text
    if total == 0 || to_roman(total)? != roman {
        return Err(invalid());
    }
    Ok(total)
}

/// Normalize a division/chapter number given as arabic digits or a roman
/// numeral (any case) into its canonical roman form.
///
/// # Examples
/// ```
/// use ustawa_parser::numerals::section_numeral;
///
/// assert_eq!(section_numeral("2").unwrap(), "II");
/// assert_eq!(section_numeral("iv").unwrap(), "IV");
/// ```
pub fn section_numeral(number: &str) -> Result<String> {
    let trimmed = number.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let value: u32 = trimmed
            .parse()
            .map_err(|_| ParserError::InvalidNumber(number.to_string()))?;
        return to_roman(value);
    }

    let upper = trimmed.to_ascii_uppercase();
    from_roman(&upper).map_err(|_| ParserError::InvalidNumber(number.to_string()))?;
    Ok(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman_known_values() {
        assert_eq!(to_roman(1).unwrap(), "I");
        assert_eq!(to_roman(4).unwrap(), "IV");
        assert_eq!(to_roman(9).unwrap(), "IX");
        assert_eq!(to_roman(13).unwrap(), "XIII");
        assert_eq!(to_roman(1997).unwrap(), "MCMXCVII");
        assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_to_roman_out_of_range() {
        assert!(to_roman(0).is_err());
        assert!(to_roman(4000).is_err());
    }

    #[test]
    fn test_from_roman_inverts_to_roman() {
        for n in 1..=MAX_ROMAN {
            let roman = to_roman(n).unwrap();
            assert_eq!(from_roman(&roman).unwrap(), n, "round trip of {roman}");
        }
    }

    #[test]
    fn test_from_roman_rejects_non_canonical() {
        assert!(from_roman("").is_err());
        assert!(from_roman("IIII").is_err());
        assert!(from_roman("VX").is_err());
        assert!(from_roman("iv").is_err());
        assert!(from_roman("XIZ").is_err());
    }

    #[test]
    fn test_section_numeral() {
        assert_eq!(section_numeral("1").unwrap(), "I");
        assert_eq!(section_numeral("12").unwrap(), "XII");
        assert_eq!(section_numeral("XII").unwrap(), "XII");
        assert_eq!(section_numeral("xii").unwrap(), "XII");
        assert!(section_numeral("0").is_err());
        assert!(section_numeral("abc").is_err());
        assert!(section_numeral("").is_err());
    }
}
