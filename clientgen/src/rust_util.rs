use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    static ref KEYWORDS: HashSet<&'static str> = [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ]
    .into_iter()
    .collect();
}

/// True if `name` can be used verbatim as a rust item name, i.e. it is an ascii identifier and
/// not a keyword.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = match chars.next() {
        Some(c) => c == '_' || c.is_ascii_alphabetic(),
        None => false,
    };
    first_ok
        && name != "_"
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !KEYWORDS.contains(name)
}
