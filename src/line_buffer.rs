//! Bounded scrolling log of text rows.
//!
//! Lines are appended at the bottom and the oldest rows are evicted once the
//! configured capacity is exceeded, which is what makes the log look like a
//! terminal scrolling up. Drawing always shows the tail, so "scroll to bottom"
//! is implicit.

use std::collections::VecDeque;

/// A single row of the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Monotonic append counter; never reused, survives `clear()`.
    pub seq: u64,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: VecDeque<LogLine>,
    max_lines: usize,
    next_seq: u64,
}

impl LineBuffer {
    /// Creates an empty buffer. A capacity of zero is bumped to one.
    pub fn new(max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            lines: VecDeque::with_capacity(max_lines + 1),
            max_lines,
            next_seq: 0,
        }
    }

    /// Appends a line and evicts from the front until the buffer fits.
    pub fn append(&mut self, text: impl Into<String>) {
        self.lines.push_back(LogLine {
            seq: self.next_seq,
            text: text.into(),
        });
        self.next_seq += 1;

        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Sequence number the next appended line will get.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    /// The bottom-most `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &LogLine> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip)
    }

    /// Lines appended at or after `seq` that are still held.
    pub fn since(&self, seq: u64) -> impl Iterator<Item = &LogLine> {
        self.lines.iter().filter(move |line| line.seq >= seq)
    }

    pub fn last(&self) -> Option<&LogLine> {
        self.lines.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut buffer = LineBuffer::new(5);
        buffer.append("one");
        buffer.append("two");

        let texts: Vec<&str> = buffer.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_append_evicts_oldest_when_full() {
        let mut buffer = LineBuffer::new(3);
        for i in 0..5 {
            buffer.append(format!("line {i}"));
        }

        assert_eq!(buffer.len(), 3);
        let texts: Vec<&str> = buffer.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_is_bumped_to_one() {
        let mut buffer = LineBuffer::new(0);
        buffer.append("a");
        buffer.append("b");
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last().map(|l| l.text.as_str()), Some("b"));
    }

    #[test]
    fn test_clear_does_not_reset_sequence() {
        let mut buffer = LineBuffer::new(10);
        buffer.append("a");
        buffer.append("b");
        buffer.clear();
        assert!(buffer.is_empty());

        buffer.append("c");
        assert_eq!(buffer.last().map(|l| l.seq), Some(2));
    }

    #[test]
    fn test_tail_returns_bottom_rows() {
        let mut buffer = LineBuffer::new(10);
        for i in 0..6 {
            buffer.append(i.to_string());
        }
        let tail: Vec<&str> = buffer.tail(2).map(|l| l.text.as_str()).collect();
        assert_eq!(tail, vec!["4", "5"]);

        // Asking for more than held returns everything
        assert_eq!(buffer.tail(100).count(), 6);
    }

    #[test]
    fn test_since_skips_evicted_lines() {
        let mut buffer = LineBuffer::new(2);
        for i in 0..4 {
            buffer.append(i.to_string());
        }
        let seen: Vec<u64> = buffer.since(0).map(|l| l.seq).collect();
        assert_eq!(seen, vec![2, 3]);
    }
}
