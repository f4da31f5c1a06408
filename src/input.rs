use bytecount::num_chars;
use memchr::{memchr_iter, memrchr2};
use nom::{
    Compare, Err, FindSubstring, InputIter, InputLength, InputTake, InputTakeAtPosition, Offset,
    Slice,
};
use std::{
    ops::{RangeFrom, RangeTo},
    str::{CharIndices, Chars},
};

/// A `&str` that knows where it starts in the original text.
///
/// Every slice taken from the front moves the byte offset, line and column forward, so tokens can
/// read their position straight from the input they were cut from.
#[derive(Clone, Debug, Copy)]
pub struct Input<'a> {
    pub data: &'a str,
    offset: usize,
    line: usize,
    col: usize,
}

impl<'a> Input<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            offset: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn location_offset(&self) -> usize {
        self.offset
    }

    pub fn location_line(&self) -> usize {
        self.line
    }

    pub fn get_utf8_column(&self) -> usize {
        self.col
    }

    pub fn fragment(&self) -> &'a str {
        self.data
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.data.starts_with(prefix)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Builds the input that starts at `next_data`, which must be a sub slice of `self.data`.
    fn advance(&self, next_data: &'a str) -> Self {
        let consumed = self.data.offset(next_data);

        if consumed == 0 {
            return Self {
                data: next_data,
                ..*self
            };
        }

        let bytes = self.data.as_bytes();
        let skipped = &bytes[..consumed];

        // A `\r` right before an unconsumed `\n` is counted along with that `\n`
        let counted = match (skipped.last(), bytes.get(consumed)) {
            (Some(b'\r'), Some(b'\n')) => &skipped[..consumed - 1],
            _ => skipped,
        };

        let lone_cr = memchr_iter(b'\r', counted)
            .filter(|&i| counted.get(i + 1) != Some(&b'\n'))
            .count();

        let lines = bytecount::count(counted, b'\n') + lone_cr;

        let col = match memrchr2(b'\n', b'\r', counted) {
            // When going to a new line, char starts at 1
            Some(last) => num_chars(&skipped[last + 1..]) + 1,
            None => self.col + num_chars(skipped),
        };

        Self {
            data: next_data,
            offset: self.offset + consumed,
            line: self.line + lines,
            col,
        }
    }
}

impl<'a, 'b> Compare<&'b str> for Input<'a> {
    fn compare(&self, t: &'b str) -> nom::CompareResult {
        self.data.compare(t)
    }

    fn compare_no_case(&self, t: &'b str) -> nom::CompareResult {
        self.data.compare_no_case(t)
    }
}

impl<'a, 'b> FindSubstring<&'b str> for Input<'a> {
    fn find_substring(&self, substr: &'b str) -> Option<usize> {
        self.data.find_substring(substr)
    }
}

impl<'a> InputIter for Input<'a> {
    type Item = char;

    type Iter = CharIndices<'a>;

    type IterElem = Chars<'a>;

    fn iter_indices(&self) -> Self::Iter {
        self.data.iter_indices()
    }

    fn iter_elements(&self) -> Self::IterElem {
        self.data.iter_elements()
    }

    fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(Self::Item) -> bool,
    {
        self.data.position(predicate)
    }

    fn slice_index(&self, count: usize) -> Result<usize, nom::Needed> {
        self.data.slice_index(count)
    }
}

impl<'a> InputLength for Input<'a> {
    fn input_len(&self) -> usize {
        self.data.len()
    }
}

impl<'a> InputTake for Input<'a> {
    fn take(&self, count: usize) -> Self {
        self.slice(..count)
    }

    fn take_split(&self, count: usize) -> (Self, Self) {
        (self.slice(count..), self.slice(..count))
    }
}

impl<'a> InputTakeAtPosition for Input<'a> {
    type Item = char;

    fn split_at_position<P, E: nom::error::ParseError<Self>>(
        &self,
        predicate: P,
    ) -> nom::IResult<Self, Self, E>
    where
        P: Fn(Self::Item) -> bool,
    {
        match self.data.find(predicate) {
            Some(n) => Ok(self.take_split(n)),
            None => Err(Err::Incomplete(nom::Needed::new(1))),
        }
    }

    fn split_at_position1<P, E: nom::error::ParseError<Self>>(
        &self,
        predicate: P,
        e: nom::error::ErrorKind,
    ) -> nom::IResult<Self, Self, E>
    where
        P: Fn(Self::Item) -> bool,
    {
        match self.data.find(predicate) {
            Some(0) => Err(Err::Error(E::from_error_kind(*self, e))),
            Some(n) => Ok(self.take_split(n)),
            None => Err(Err::Incomplete(nom::Needed::new(1))),
        }
    }

    fn split_at_position_complete<P, E: nom::error::ParseError<Self>>(
        &self,
        predicate: P,
    ) -> nom::IResult<Self, Self, E>
    where
        P: Fn(Self::Item) -> bool,
    {
        match self.split_at_position(predicate) {
            Err(Err::Incomplete(_)) => Ok(self.take_split(self.input_len())),
            res => res,
        }
    }

    fn split_at_position1_complete<P, E: nom::error::ParseError<Self>>(
        &self,
        predicate: P,
        e: nom::error::ErrorKind,
    ) -> nom::IResult<Self, Self, E>
    where
        P: Fn(Self::Item) -> bool,
    {
        match self.data.find(predicate) {
            Some(0) => Err(Err::Error(E::from_error_kind(*self, e))),
            Some(n) => Ok(self.take_split(n)),
            None => {
                if self.data.is_empty() {
                    Err(Err::Error(E::from_error_kind(*self, e)))
                } else {
                    Ok(self.take_split(self.input_len()))
                }
            }
        }
    }
}

impl<'a> Offset for Input<'a> {
    fn offset(&self, second: &Self) -> usize {
        self.data.offset(second.data)
    }
}

impl<'a> Slice<RangeTo<usize>> for Input<'a> {
    fn slice(&self, range: RangeTo<usize>) -> Self {
        self.advance(self.data.slice(range))
    }
}

impl<'a> Slice<RangeFrom<usize>> for Input<'a> {
    fn slice(&self, range: RangeFrom<usize>) -> Self {
        self.advance(self.data.slice(range))
    }
}

#[cfg(test)]
mod tests {
    use super::Input;
    use nom::{InputTake, Slice};

    fn location(i: Input) -> (usize, usize, usize) {
        (i.location_offset(), i.location_line(), i.get_utf8_column())
    }

    #[test]
    fn same_line_moves_column() {
        let input = Input::new("{ \"a\": 1 }");

        assert_eq!(location(input.slice(2..)), (2, 1, 3));
    }

    #[test]
    fn new_line_resets_column() {
        let input = Input::new("{\n  \"a\"\r\n}");

        assert_eq!(location(input.slice(4..)), (4, 2, 3));
        assert_eq!(location(input.slice(9..)), (9, 3, 1));
    }

    #[test]
    fn lone_carriage_return_is_a_line_break() {
        let input = Input::new("{\r\"a\"\r\n}");

        assert_eq!(location(input.slice(2..)), (2, 2, 1));
        assert_eq!(location(input.slice(7..)), (7, 3, 1));
    }

    #[test]
    fn crlf_split_between_slices_counts_once() {
        let input = Input::new("{\r\"a\"\r\n}");
        let middle = input.slice(6..);

        assert_eq!(location(middle), (6, 2, 5));
        assert_eq!(location(middle.slice(1..)), (7, 3, 1));
    }

    #[test]
    fn column_counts_chars_not_bytes() {
        let input = Input::new("\"éé\" x");

        assert_eq!(location(input.slice(6..)), (6, 1, 5));
    }

    #[test]
    fn prefix_keeps_start_position() {
        let input = Input::new("abc\ndef").slice(4..);
        let (rest, taken) = input.take_split(2);

        assert_eq!(location(taken), (4, 2, 1));
        assert_eq!(taken.fragment(), "de");
        assert_eq!(location(rest), (6, 2, 3));
    }
}
