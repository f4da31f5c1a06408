use crate::input::Input;

/// A location in the source text.
///
/// `offset` is a byte offset, `line` and `col` start at 1 and `col` counts chars.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

impl<'a> From<Input<'a>> for Position {
    fn from(input: Input<'a>) -> Self {
        Self {
            offset: input.location_offset(),
            line: input.location_line(),
            col: input.get_utf8_column(),
        }
    }
}

/// Half open `[start, end)` range of positions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span covering both `self` and `other`, assuming `self` comes first.
    pub fn to(self, other: Span) -> Self {
        Self::new(self.start, other.end)
    }
}
