use std::fmt;
use std::ops::Range;

/// The raw, untyped index. We use a 32-bit integer here for space efficiency,
/// MIB sources are never anywhere near 4GB.
pub type RawIndex = u32;

/// A byte position in a source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ByteIndex(pub RawIndex);

impl ByteIndex {
    /// Convert the position into a `usize`, for use in array indexing
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ByteIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ByteIndex({})", self.0)
    }
}

impl fmt::Display for ByteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ByteIndex {
    fn from(index: u32) -> ByteIndex {
        ByteIndex(index)
    }
}

impl From<usize> for ByteIndex {
    fn from(index: usize) -> ByteIndex {
        ByteIndex(index as RawIndex)
    }
}

impl From<ByteIndex> for usize {
    fn from(index: ByteIndex) -> usize {
        index.to_usize()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    start: ByteIndex,
    end: ByteIndex,
}

impl Span {
    /// Create a new span from a starting and ending index.
    ///
    /// An `end` before `start` is clamped to `start`.
    pub fn new(start: impl Into<ByteIndex>, end: impl Into<ByteIndex>) -> Span {
        let start = start.into();
        let end = end.into();
        Span { start, end: end.max(start) }
    }

    pub fn start(self) -> ByteIndex {
        self.start
    }

    pub fn end(self) -> ByteIndex {
        self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<I> From<Range<I>> for Span
where
    I: Into<ByteIndex>,
{
    fn from(range: Range<I>) -> Span {
        Span::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.start.into()..span.end.into()
    }
}

/// A 1-based line and column pair, as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line start table of a source text.
#[derive(Debug, Clone)]
pub struct LineStarts {
    starts: Vec<ByteIndex>,
    len: usize,
}

impl LineStarts {
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .map(ByteIndex::from)
            .collect();
        LineStarts { starts, len: source.len() }
    }

    fn line_index(&self, byte_index: ByteIndex) -> usize {
        match self.starts.binary_search(&byte_index) {
            // Found the start of a line
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        }
    }

    /// Line and column of a byte index. Indices past the end are clamped to the end.
    ///
    /// Columns count bytes, which is what MIB sources (ASCII in practice) need.
    pub fn location(&self, byte_index: ByteIndex) -> Location {
        let byte_index = ByteIndex::from(byte_index.to_usize().min(self.len));
        let line = self.line_index(byte_index);
        let column = byte_index.to_usize() - self.starts[line].to_usize();
        Location { line: line + 1, column: column + 1 }
    }
}
