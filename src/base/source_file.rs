//! Module for handling equation sources and their elements.

use std::{
    cmp::Ordering,
    fmt::Debug,
    iter::{Iterator, Peekable},
    ops::Range,
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};

/// Represents a piece of text containing one chemical equation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters)]
pub struct Source {
    /// Get the identifier of the source, e.g. `<stdin>` or `<argv>`.
    #[get = "pub"]
    identifier: String,
    /// Get the content of the source.
    #[get = "pub"]
    content: String,
    lines: Vec<Range<usize>>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("identifier", &self.identifier)
            .field("content", &self.content)
            .finish()
    }
}

impl Source {
    /// Create a new shared source from the given identifier and content.
    #[must_use]
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Arc<Self> {
        let content = content.into();
        let lines = get_line_byte_positions(&content);

        Arc::new(Self {
            identifier: identifier.into(),
            content,
            lines,
        })
    }

    /// Get the line of the source at the given line number.
    ///
    /// Numbering starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.content()[range.clone()])
    }

    /// Get the [`SourceIterator`] for the source.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> SourceIterator<'a> {
        SourceIterator {
            source: self,
            iterator: self.content().char_indices().peekable(),
        }
    }

    /// Get the [`Location`] of a given byte index.
    ///
    /// The index one past the last byte is a valid location, so that empty spans at the end of
    /// the source can still be pointed at.
    #[must_use]
    pub fn get_location(&self, byte_index: usize) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
            return None;
        }

        // get the line number by binary searching the line ranges
        let line = self
            .lines
            .binary_search_by(|range| {
                if range.contains(&byte_index) || (range.end == byte_index && range.is_empty()) {
                    Ordering::Equal
                } else if byte_index < range.start {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .unwrap_or_else(|insert_at| insert_at.saturating_sub(1));

        let line_starting_byte_index = self.lines.get(line)?.start;
        let line_str = self.get_line(line + 1)?;

        // get the column number by iterating through the utf-8 characters (starts at 1)
        let column = line_str
            .char_indices()
            .take_while(|(i, _)| *i + line_starting_byte_index < byte_index)
            .count()
            + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Represents a range of characters in a source.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Get the start byte index of the span.
    #[get_copy = "pub"]
    start: usize,

    /// Get the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: usize,

    /// Get the source that the span is located in.
    #[get = "pub"]
    source: Arc<Source>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source) && self.start == other.start && self.end == other.end
    }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_ptr_value = Arc::as_ptr(&self.source) as usize;
        let other_ptr_value = Arc::as_ptr(&other.source) as usize;

        self_ptr_value
            .cmp(&other_ptr_value)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source).hash(state);
    }
}

impl Span {
    /// Create a span from the given start and end byte indices in the source.
    ///
    /// # Parameters
    /// - `start`: The start byte index of the span.
    /// - `end`: The end byte index of the span (exclusive).
    #[must_use]
    pub fn new(source: Arc<Source>, start: usize, end: usize) -> Option<Self> {
        if start > end
            || source.content().len() < end
            || !source.content().is_char_boundary(start)
            || !source.content().is_char_boundary(end)
        {
            return None;
        }

        Some(Self { start, end, source })
    }

    /// Create a span from indices that are already known to be char boundaries of the source,
    /// e.g. indices yielded by a [`SourceIterator`].
    pub(crate) fn new_unchecked(source: Arc<Source>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= source.content().len());

        Self { start, end, source }
    }

    /// Create an empty span located right after this one.
    #[must_use]
    pub fn empty_after(&self) -> Self {
        Self {
            start: self.end,
            end: self.end,
            source: self.source.clone(),
        }
    }

    /// Get the string slice of the source that the span represents.
    #[must_use]
    pub fn str(&self) -> &str {
        &self.source.content()[self.start..self.end]
    }

    /// Whether the span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location {
        self.source.get_location(self.start).unwrap_or_default()
    }

    /// Join the starting position of this span with the end position of the given span.
    #[must_use]
    pub fn join(&self, end: &Self) -> Option<Self> {
        if !Arc::ptr_eq(&self.source, &end.source) || self.start > end.end {
            return None;
        }

        Some(Self {
            start: self.start,
            end: end.end,
            source: self.source.clone(),
        })
    }
}

/// Pointing to a particular location in a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Line number of the location (starts at 1).
    pub line: usize,

    /// Column number of the location (starts at 1).
    pub column: usize,
}

/// Iterator iterating over the characters in a source that can be peeked at.
#[derive(Debug, Clone, CopyGetters)]
pub struct SourceIterator<'a> {
    /// Get the source that the iterator is iterating over.
    #[get_copy = "pub"]
    source: &'a Arc<Source>,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> SourceIterator<'a> {
    /// Peek at the next character in the source.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.iterator.peek().copied()
    }

    /// Consume the next character if it equals `expected`.
    pub fn next_if_eq(&mut self, expected: char) -> Option<(usize, char)> {
        self.iterator.next_if(|&(_, character)| character == expected)
    }
}

impl<'a> Iterator for SourceIterator<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }
}

/// Get the byte positions of the lines in the given text.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    let mut skip = false;

    for (byte, char) in text.char_indices() {
        if skip {
            skip = false;
            continue;
        }

        // lf
        if char == '\n' {
            #[allow(clippy::range_plus_one)]
            results.push(current_position..byte + 1);

            current_position = byte + 1;
        }

        // crlf
        if char == '\r' {
            if text.as_bytes().get(byte + 1) == Some(&b'\n') {
                results.push(current_position..byte + 2);

                current_position = byte + 2;

                skip = true;
            } else {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 1);

                current_position = byte + 1;
            }
        }
    }

    // add the last line
    results.push(current_position..text.len());

    results
}
