use crate::ast::ParsedLine;
use crate::error::ParseDiagnostic;
use crate::property::parse_property;
use crate::tokenizer::tokenize;
use tracing::debug;

/// Parse one source line into a line record.
///
/// Returns `None` for blank and whitespace-only lines; callers filter those
/// out before indentation logic runs, so blank lines never affect nesting.
///
/// Indentation is the count of leading whitespace characters, each counted
/// as width 1. Mixing tabs and spaces is therefore ambiguous; documents
/// should stick to one or the other.
///
/// The first token is the component name. Every remaining token goes
/// through the property parser; a token that fails the grammar is dropped
/// with a diagnostic and the rest of the line survives.
pub fn parse_line(
    raw: &str,
    line_no: usize,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> Option<ParsedLine> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let indent = raw.chars().take_while(|c| c.is_whitespace()).count();

    let mut tokens = tokenize(trimmed).into_iter();
    let component_name = tokens.next()?.to_string();

    let mut properties = Vec::new();
    for token in tokens {
        match parse_property(token) {
            Some(property) => properties.push(property),
            None => {
                debug!(line = line_no, token, "dropping malformed property token");
                diagnostics.push(ParseDiagnostic::malformed_property(line_no, token));
            }
        }
    }

    Some(ParsedLine {
        component_name,
        indent,
        properties,
        line: line_no,
    })
}
