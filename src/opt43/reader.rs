use std::io::{self, BufRead};

/// Maximum length of a line, terminator included.
pub const MAX_LINE_LEN: usize = 1024;

/// A logical line of the sub-options file, without its terminator.
#[derive(PartialEq, Clone, Debug)]
pub struct ConfigLine {
    number: usize,
    bytes: Vec<u8>,
    truncated: bool,
}

impl ConfigLine {
    pub fn new(number: usize, bytes: &[u8]) -> Self {
        return Self {
            number,
            bytes: bytes.to_vec(),
            truncated: false,
        };
    }

    /// Line number in the source, starting at 1. Lines hidden by a doubled
    /// terminator are counted.
    pub fn number(&self) -> usize {
        return self.number;
    }

    pub fn as_bytes(&self) -> &[u8] {
        return &self.bytes;
    }

    pub fn is_empty(&self) -> bool {
        return self.bytes.is_empty();
    }

    /// The line was longer than `MAX_LINE_LEN` and its tail was dropped.
    pub fn is_truncated(&self) -> bool {
        return self.truncated;
    }
}

fn is_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Splits a byte source in lines ended by `\n`, `\r` or any pair of them
/// (`\r\n`, `\n\r`, ...).
pub struct LineReader<R> {
    inner: R,
    limit: usize,
    next_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        return Self::with_limit(inner, MAX_LINE_LEN);
    }

    /// `limit` counts the terminator, so lines keep at most `limit - 1`
    /// bytes.
    pub fn with_limit(inner: R, limit: usize) -> Self {
        return Self {
            inner,
            limit: limit.max(1),
            next_number: 1,
        };
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let b = self.peek_byte()?;
        if b.is_some() {
            self.inner.consume(1);
        }
        return Ok(b);
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Consumes the companion of the terminator `first`, if present.
    /// `\n\n` and `\r\r` end two lines of the source, the second one empty.
    fn finish_line(&mut self, first: u8) -> io::Result<()> {
        self.next_number += 1;
        if let Some(b) = self.peek_byte()? {
            if is_terminator(b) {
                self.inner.consume(1);
                if b == first {
                    self.next_number += 1;
                }
            }
        }
        return Ok(());
    }

    /// Returns the next line, or `None` once the source is exhausted and
    /// nothing was read. A last line without terminator is still returned.
    pub fn read_line(&mut self) -> io::Result<Option<ConfigLine>> {
        let mut line = ConfigLine::new(self.next_number, b"");
        let mut consumed = false;

        loop {
            let b = match self.next_byte()? {
                Some(b) => b,
                None => break,
            };
            consumed = true;

            if is_terminator(b) {
                self.finish_line(b)?;
                break;
            }

            if line.bytes.len() + 1 < self.limit {
                line.bytes.push(b);
            } else {
                line.truncated = true;
            }
        }

        if !consumed {
            return Ok(None);
        }

        return Ok(Some(line));
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<ConfigLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(input: &[u8]) -> Vec<Vec<u8>> {
        LineReader::new(Cursor::new(input.to_vec()))
            .map(|l| l.unwrap().as_bytes().to_vec())
            .collect()
    }

    #[test]
    fn test_lf_lines() {
        assert_eq!(
            lines(b"one\ntwo\n"),
            vec![b"one".to_vec(), b"two".to_vec()]
        );
    }

    #[test]
    fn test_crlf_same_as_lf() {
        assert_eq!(lines(b"one\r\ntwo\r\n"), lines(b"one\ntwo\n"));
        assert_eq!(lines(b"one\n\rtwo"), lines(b"one\ntwo\n"));
        assert_eq!(lines(b"one\rtwo\r"), lines(b"one\ntwo\n"));
    }

    #[test]
    fn test_last_line_without_terminator() {
        let mut reader = LineReader::new(Cursor::new(b"abc".to_vec()));
        assert_eq!(
            reader.read_line().unwrap(),
            Some(ConfigLine::new(1, b"abc"))
        );
        assert_eq!(reader.read_line().unwrap(), None);
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = LineReader::new(Cursor::new(Vec::new()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_double_terminator_collapses() {
        // The second newline belongs to the first terminator.
        assert_eq!(lines(b"a\n\nb\n"), vec![b"a".to_vec(), b"b".to_vec()]);
        // A third one starts an empty line.
        assert_eq!(
            lines(b"a\n\n\nb"),
            vec![b"a".to_vec(), b"".to_vec(), b"b".to_vec()]
        );
    }

    #[test]
    fn test_long_line_truncated() {
        let mut input = vec![b'x'; 10];
        input.extend(b"\nnext\n");
        let mut reader = LineReader::with_limit(Cursor::new(input), 5);

        let first = reader.read_line().unwrap().unwrap();
        assert_eq!(first.as_bytes(), b"xxxx");
        assert!(first.is_truncated());

        let second = reader.read_line().unwrap().unwrap();
        assert_eq!(second.as_bytes(), b"next");
        assert!(!second.is_truncated());

        assert!(reader.read_line().unwrap().is_none());
    }

    #[test]
    fn test_default_limit_keeps_1023_bytes() {
        let input = vec![b'a'; 2000];
        let line = LineReader::new(Cursor::new(input))
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(line.as_bytes().len(), MAX_LINE_LEN - 1);
        assert!(line.is_truncated());
    }

    #[test]
    fn test_line_at_limit_not_truncated() {
        let mut input = vec![b'a'; MAX_LINE_LEN - 1];
        input.push(b'\n');
        let line = LineReader::new(Cursor::new(input))
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(line.as_bytes().len(), MAX_LINE_LEN - 1);
        assert!(!line.is_truncated());
    }

    #[test]
    fn test_line_numbers() {
        let input = b"a\n\nb\r\nc\n\n\nd\re".to_vec();
        let numbers: Vec<usize> = LineReader::new(Cursor::new(input))
            .map(|l| l.unwrap().number())
            .collect();
        // a=1, hidden blank=2, b=3, c=4, hidden blank=5, empty=6, d=7, e=8
        assert_eq!(numbers, vec![1, 3, 4, 6, 7, 8]);
    }
}
