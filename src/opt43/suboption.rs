use super::err::LineError;
use nom::bytes::complete::{tag, take_until, take_while};
use nom::character::complete::digit1;
use nom::sequence::{preceded, tuple};
use nom::IResult;
use std::convert::TryFrom;

pub const KEYWORD: &[u8] = b"SUBOPTION";

/// Largest value that fits the length byte of a sub-option.
pub const MAX_VALUE_LEN: usize = 255;

fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

fn is_printable(c: u8) -> bool {
    (0x20..=0x7E).contains(&c)
}

fn after_keyword(line: &[u8]) -> IResult<&[u8], &[u8]> {
    preceded(take_until(KEYWORD), tag(KEYWORD))(line)
}

/// `<blanks><digits><blanks><printable value>`
fn fields(input: &[u8]) -> IResult<&[u8], (&[u8], &[u8], &[u8])> {
    tuple((
        preceded(take_while(is_blank), digit1),
        take_while(is_blank),
        take_while(is_printable),
    ))(input)
}

fn parse_number(digits: &[u8]) -> Option<u8> {
    digits.iter().try_fold(0u8, |n, d| {
        n.checked_mul(10)?.checked_add(d - b'0')
    })
}

/// A vendor specific sub-option declared as `SUBOPTION <number> <value>`.
#[derive(PartialEq, Clone, Debug)]
pub struct SubOption {
    number: u8,
    len: u8,
    value: Vec<u8>,
}

impl SubOption {
    /// Fails if `value` does not fit the length byte.
    pub fn new(number: u8, value: &[u8]) -> Result<Self, LineError> {
        let len = u8::try_from(value.len()).map_err(|_| {
            LineError::ValueTooLong {
                number,
                len: value.len(),
            }
        })?;

        return Ok(Self {
            number,
            len,
            value: value.to_vec(),
        });
    }

    /// Parses a line of the sub-options file. Lines without the keyword are
    /// not sub-options and give `Ok(None)`.
    ///
    /// Blanks may separate the keyword, the number and the value. The value
    /// ends at the first non printable byte.
    pub fn parse(line: &[u8]) -> Result<Option<Self>, LineError> {
        let rest = match after_keyword(line) {
            Ok((rest, _)) => rest,
            Err(_) => return Ok(None),
        };

        let (_, (digits, _, value)) =
            fields(rest).map_err(|_| LineError::MissingNumber)?;

        let number = parse_number(digits).ok_or_else(|| {
            LineError::NumberOutOfRange(
                String::from_utf8_lossy(digits).into_owned(),
            )
        })?;

        return Self::new(number, value).map(Some);
    }

    pub fn number(&self) -> u8 {
        return self.number;
    }

    pub fn value(&self) -> &[u8] {
        return &self.value;
    }

    pub fn len(&self) -> u8 {
        return self.len;
    }

    /// Wire format: number, length and value bytes.
    pub fn build(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.value.len() + 2);
        raw.push(self.number);
        raw.push(self.len());
        raw.extend(&self.value);

        return raw;
    }
}
