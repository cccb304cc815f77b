//! Input decoding for `readchar` and `readnum`.

use std::io::{self, BufRead};

use num_bigint::BigInt;

fn peek_byte<R: BufRead>(input: &mut R) -> io::Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}

/// Number of bytes in a UTF-8 sequence starting with `lead`, or 0 if `lead`
/// cannot start one.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Read one character. Returns `None` at end of input. Malformed UTF-8
/// yields U+FFFD and consumes only the bytes examined.
pub(crate) fn read_char<R: BufRead>(input: &mut R) -> io::Result<Option<char>> {
    let Some(lead) = peek_byte(input)? else {
        return Ok(None);
    };
    input.consume(1);

    let width = utf8_width(lead);
    if width == 0 {
        return Ok(Some(char::REPLACEMENT_CHARACTER));
    }

    let mut bytes = [lead, 0, 0, 0];
    for slot in bytes.iter_mut().take(width).skip(1) {
        match peek_byte(input)? {
            Some(b) if b & 0xC0 == 0x80 => {
                *slot = b;
                input.consume(1);
            }
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        }
    }

    let c = std::str::from_utf8(&bytes[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok(Some(c))
}

/// Read through the next newline. Returns `None` if no bytes remain; a last
/// line without a newline is returned as is.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Parse a line typed for `readnum`.
///
/// Leading whitespace is skipped, then an optional sign and the longest run
/// of decimal digits are read; anything after them is ignored. A line with no
/// digits in that position parses as 0.
pub fn parse_number(line: &str) -> BigInt {
    let trimmed = line.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let magnitude = BigInt::parse_bytes(&rest.as_bytes()[..digits_len], 10).unwrap_or_default();
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
