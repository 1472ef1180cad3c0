/// Split one line of DSL source into whitespace-delimited tokens while
/// treating parenthesized argument groups as atomic.
///
/// A running depth counter tracks parentheses: splits happen on single
/// spaces only while the depth is zero, so spaces and commas inside `(...)`
/// stay part of the current token. Dot-chained modifier suffixes are not
/// split here; that is the property parser's job. The grammar never nests
/// parentheses, so no nesting support is required.
///
/// An unbalanced `(` simply swallows the rest of the line into the current
/// token; downstream stages treat that token as malformed and drop it.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth: u32 = 0;
    let mut start = 0;

    for (i, ch) in line.char_indices() {
        match ch {
            ' ' if depth == 0 => {
                if start < i {
                    tokens.push(&line[start..i]);
                }
                start = i + 1;
            }
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }

    tokens
}
