//! Human-readable error rendering.

use typestr_parse::ParseError;

/// Render `error` against the descriptor it came from:
///
/// ```text
/// error: unknown type `Foo` at 5..8
///   | List[Foo]
///   |      ^^^
/// ```
pub fn render_error(source: &str, error: &ParseError) -> String {
    let start = (error.span.start as usize).min(source.len());
    let end = (error.span.end as usize).clamp(start, source.len());
    // Columns count characters; spans are byte offsets on char boundaries.
    let column = source.get(..start).map_or(0, |s| s.chars().count());
    let width = source.get(start..end).map_or(0, |s| s.chars().count()).max(1);

    format!(
        "error: {error}\n  | {source}\n  | {}{}",
        " ".repeat(column),
        "^".repeat(width)
    )
}
