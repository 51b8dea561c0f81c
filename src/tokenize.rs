use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// an object key, ex. `name` in `name.other`
    Field(String),

    /// an array index, ex. `99` in `name[99]`
    Index(i64),
}

#[derive(Debug, PartialEq, Error)]
pub enum TokenizeError {
    #[error("path segment has no name")]
    EmptySegment,
    #[error("unclosed `[` in path")]
    UnclosedBracket,
    #[error("`[]` carries no index")]
    EmptyIndex,
    #[error("`{0}` is not an integer index")]
    InvalidIndex(String),
    #[error("unexpected character `{0}` in path")]
    UnexpectedChar(char),
}

/// Splits a dotted path like `name1.name2[99].name3` into segments. The empty
/// path yields no segments and addresses the document root.
pub fn tokenize(path: &str) -> Result<Vec<Segment>, TokenizeError> {
    let chars: Vec<char> = path.chars().collect();
    let mut index = 0;

    let mut segments = Vec::new();

    while index < chars.len() {
        make_segments(&chars, &mut index, &mut segments)?;

        if index < chars.len() {
            // step over the `.` separator, which must introduce another segment
            index += 1;
            if index == chars.len() {
                return Err(TokenizeError::EmptySegment);
            }
        }
    }

    Ok(segments)
}

/// Consumes one dot-delimited token: a field name followed by any number of
/// `[i]` suffixes. Leaves `index` on the `.` separator or at end of input.
fn make_segments(
    chars: &[char],
    index: &mut usize,
    segments: &mut Vec<Segment>,
) -> Result<(), TokenizeError> {
    let mut name = String::new();

    while *index < chars.len() {
        match chars[*index] {
            '.' | '[' => break,
            ']' => return Err(TokenizeError::UnexpectedChar(']')),
            ch => name.push(ch),
        }
        *index += 1;
    }

    if name.is_empty() {
        return Err(TokenizeError::EmptySegment);
    }
    segments.push(Segment::Field(name));

    while *index < chars.len() && chars[*index] == '[' {
        segments.push(tokenize_index(chars, index)?);
    }

    if *index < chars.len() && chars[*index] != '.' {
        return Err(TokenizeError::UnexpectedChar(chars[*index]));
    }

    Ok(())
}

fn tokenize_index(chars: &[char], index: &mut usize) -> Result<Segment, TokenizeError> {
    // step over the `[`
    *index += 1;
    let mut digits = String::new();

    loop {
        if *index >= chars.len() {
            return Err(TokenizeError::UnclosedBracket);
        }

        let ch = chars[*index];
        *index += 1;
        if ch == ']' {
            break;
        }
        digits.push(ch);
    }

    if digits.is_empty() {
        return Err(TokenizeError::EmptyIndex);
    }

    match digits.parse() {
        Ok(num) => Ok(Segment::Index(num)),
        Err(_) => Err(TokenizeError::InvalidIndex(digits)),
    }
}
