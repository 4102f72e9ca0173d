use std::io::{self, BufRead};

/// Line that opens the metadata block.
pub const HEADER_START: &str = "---";
/// Lines that close the metadata block.
pub const HEADER_END: [&str; 2] = ["---", "..."];

/// Raw lines of the first metadata block, delimiters excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    lines: Vec<String>,
}

impl HeaderBlock {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The block joined back into one YAML document.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Scan `reader` for the first metadata block.
///
/// Lines are compared after trailing whitespace is removed. A document
/// without a start marker, without a terminator, or with nothing between
/// the two yields `Ok(None)`. Reading stops at the terminator.
pub fn extract_header<R: BufRead>(reader: R) -> io::Result<Option<HeaderBlock>> {
    let mut lines = TrimmedLines::new(reader);

    loop {
        match lines.next_line()? {
            Some(line) if line == HEADER_START => break,
            Some(_) => continue,
            None => return Ok(None),
        }
    }

    let mut collected = Vec::new();
    loop {
        match lines.next_line()? {
            Some(line) if HEADER_END.contains(&line.as_str()) => break,
            Some(line) => collected.push(line),
            None => {
                defaults_logging::pd_debug!(
                    "metadata block not terminated after {} lines",
                    collected.len()
                );
                return Ok(None);
            }
        }
    }

    if collected.is_empty() {
        return Ok(None);
    }
    Ok(Some(HeaderBlock { lines: collected }))
}

/// Line reader that tolerates invalid UTF-8 and strips line endings.
struct TrimmedLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> TrimmedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_lines_strips_crlf_and_trailing_blanks() {
        let mut lines = TrimmedLines::new("a  \r\nb\n".as_bytes());
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(lines.next_line().unwrap(), None);
    }

    #[test]
    fn trimmed_lines_replaces_invalid_utf8() {
        let mut lines = TrimmedLines::new(&b"x\xffy\n"[..]);
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("x\u{fffd}y"));
    }
}
