use crate::ast::{Literal, Modifier, PropertyAssignment};
use logos::Logos;

/// Lexical shape of a single property token.
///
/// The line tokenizer keeps `name(args).mod(args)` chains together as one
/// token; this lexer breaks that chain apart. Argument groups are captured
/// raw (free text up to the next `)`) because coercion, not lexing, decides
/// what they mean.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum PropToken<'src> {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r"\([^()]*\)", |lex| {
        let s = lex.slice();
        &s[1..s.len() - 1]
    })]
    Args(&'src str),

    #[token(".")]
    Dot,
}

/// Parse one token into a property assignment with its chained modifiers.
///
/// Grammar per token: `name` or `name(rawArgs)`, followed by zero or more
/// directly-appended `.modifier` or `.modifier(rawArgs)` suffixes. Returns
/// `None` when the token does not match the grammar (including unbalanced
/// parentheses, which the line tokenizer lets through as best-effort
/// tokens) so the caller can drop it and keep the rest of the line.
pub fn parse_property(token: &str) -> Option<PropertyAssignment> {
    let mut lexer = PropToken::lexer(token);

    let name = match lexer.next() {
        Some(Ok(PropToken::Ident(name))) => name.to_string(),
        _ => return None,
    };

    let mut value = Literal::Bool(true);
    let mut pending = lexer.next();
    if let Some(Ok(PropToken::Args(raw))) = pending {
        value = coerce_argument(raw);
        pending = lexer.next();
    }

    let mut modifiers = Vec::new();
    while let Some(tok) = pending {
        if !matches!(tok, Ok(PropToken::Dot)) {
            return None;
        }
        let mod_name = match lexer.next() {
            Some(Ok(PropToken::Ident(name))) => name.to_string(),
            _ => return None,
        };
        let mut mod_value = Literal::Bool(true);
        pending = lexer.next();
        if let Some(Ok(PropToken::Args(raw))) = pending {
            mod_value = coerce_argument(raw);
            pending = lexer.next();
        }
        modifiers.push(Modifier {
            name: mod_name,
            value: mod_value,
        });
    }

    Some(PropertyAssignment {
        name,
        value,
        modifiers,
    })
}

/// Coerce a raw argument string into a literal.
///
/// Rules, in order:
/// 1. a double-quoted argument becomes a string with the quotes stripped
///    (no escape processing);
/// 2. an argument containing a comma becomes an ordered list of trimmed
///    elements, each independently coerced as number-or-string;
/// 3. an argument that parses fully as a number becomes a number;
/// 4. anything else stays a raw string.
///
/// An absent argument group never reaches this function; the property
/// parser assigns `Bool(true)` for bare flags.
pub fn coerce_argument(raw: &str) -> Literal {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Literal::String(raw[1..raw.len() - 1].to_string());
    }
    if raw.contains(',') {
        return Literal::List(raw.split(',').map(|e| coerce_element(e.trim())).collect());
    }
    coerce_element(raw)
}

fn coerce_element(raw: &str) -> Literal {
    match raw.parse::<f64>() {
        Ok(n) => Literal::Number(n),
        Err(_) => Literal::String(raw.to_string()),
    }
}
