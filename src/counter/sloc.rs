use std::borrow::Cow;
use std::io::BufRead;

use super::CommentDetector;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    pub const fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.code += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

pub struct SlocCounter<'a> {
    detector: CommentDetector<'a>,
}

impl<'a> SlocCounter<'a> {
    #[must_use]
    pub const fn new(prefixes: &'a [&'a str]) -> Self {
        Self {
            detector: CommentDetector::new(prefixes),
        }
    }

    /// Blank is checked before comment, so a whitespace-only line is never a
    /// comment.
    #[must_use]
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            LineKind::Blank
        } else if self.detector.is_single_line_comment(trimmed) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut stats = LineStats::new();
        for chunk in source.as_bytes().split_inclusive(|&b| b == b'\n') {
            self.record_chunk(chunk, &mut stats);
        }
        stats
    }

    /// Count lines from a buffered reader.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Decoding is best-effort and
    /// lossy: invalid UTF-8 sequences are dropped instead of failing the read.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineStats> {
        let mut stats = LineStats::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            self.record_chunk(&buf, &mut stats);
        }

        Ok(stats)
    }

    /// `chunk` runs up to and including one `\n`, or to the end of input.
    fn record_chunk(&self, chunk: &[u8], stats: &mut LineStats) {
        let body = chunk.strip_suffix(b"\n").unwrap_or(chunk);
        let body = body.strip_suffix(b"\r").unwrap_or(body);
        for raw in body.split(|&b| b == b'\r') {
            stats.record(self.classify(&decode_line(raw)));
        }
    }
}

fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(raw) {
        Ok(line) => Cow::Borrowed(line),
        Err(_) => Cow::Owned(raw.utf8_chunks().map(|chunk| chunk.valid()).collect()),
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
