//! Token-stream rewrite overlay.
//!
//! The parse tree is immutable; every mutation the translation engine wants
//! to make is recorded here as a positional edit against the original token
//! stream and resolved once, at render time, by a single linear merge.
//!
//! Edit semantics:
//! - `insert_before(t, ..)` renders between `t`'s leading trivia and its
//!   text; `insert_after(t, ..)` renders right after `t`'s text, before the
//!   next token's trivia. Multiple inserts at one point render in issue
//!   order.
//! - Span edits (`replace`/`delete`) cover a closed token range. A span edit
//!   suppresses edits strictly inside its range; an identical range is
//!   last-wins; inserts at the range's left edge and right of its last token
//!   survive. The leading trivia of the range's first token is not consumed.
//! - Partially overlapping span edits are not something the engine issues;
//!   the later one is dropped.

use dts2kt_scanner::TokenStream;
use rustc_hash::FxHashSet;

#[derive(Clone, Debug)]
struct SpanEdit {
    start: u32,
    end: u32,
    text: String,
}

#[derive(Clone, Debug)]
struct BoundaryInsert {
    /// Boundary position: before token `boundary`.
    boundary: u32,
    /// Whether the text goes after the boundary token's leading trivia
    /// (an `insert_before`) or before it (an `insert_after` on the
    /// previous token).
    after_trivia: bool,
    text: String,
}

pub struct TokenRewriter<'a> {
    stream: &'a TokenStream,
    inserts: Vec<BoundaryInsert>,
    spans: Vec<SpanEdit>,
    cleared_trivia: FxHashSet<(u32, u32)>,
}

impl<'a> TokenRewriter<'a> {
    pub fn new(stream: &'a TokenStream) -> TokenRewriter<'a> {
        TokenRewriter {
            stream,
            inserts: Vec::new(),
            spans: Vec::new(),
            cleared_trivia: FxHashSet::default(),
        }
    }

    pub fn stream(&self) -> &TokenStream {
        self.stream
    }

    /// Insert text directly before a token (after its leading trivia).
    pub fn insert_before(&mut self, token: u32, text: impl Into<String>) {
        self.inserts.push(BoundaryInsert {
            boundary: token,
            after_trivia: true,
            text: text.into(),
        });
    }

    /// Insert text directly after a token's text.
    pub fn insert_after(&mut self, token: u32, text: impl Into<String>) {
        self.inserts.push(BoundaryInsert {
            boundary: token + 1,
            after_trivia: false,
            text: text.into(),
        });
    }

    /// Replace the closed token range `start..=end` with `text`.
    pub fn replace(&mut self, start: u32, end: u32, text: impl Into<String>) {
        self.spans.push(SpanEdit {
            start,
            end,
            text: text.into(),
        });
    }

    pub fn replace_token(&mut self, token: u32, text: impl Into<String>) {
        self.replace(token, token, text);
    }

    /// Delete the closed token range `start..=end`.
    pub fn delete(&mut self, start: u32, end: u32) {
        self.replace(start, end, "");
    }

    pub fn delete_token(&mut self, token: u32) {
        self.delete(token, token);
    }

    /// Blank a single trivia piece attached to `token` (doc-comment moves).
    pub fn clear_trivia(&mut self, token: u32, trivia_index: u32) {
        self.cleared_trivia.insert((token, trivia_index));
    }

    /// Materialize `start..=end` with all pending edits applied, including
    /// inserts at both edges, excluding the first token's leading trivia.
    /// This is the accessor parent rules use to capture the already-rewritten
    /// text of a child before relocating or deleting it.
    pub fn text_of(&self, start: u32, end: u32) -> String {
        self.emit(start, end, false)
    }

    /// Apply all recorded edits to the original stream.
    pub fn render(&self) -> String {
        self.emit(0, self.stream.len().saturating_sub(1), true)
    }

    /// Resolve recorded span edits into a non-overlapping effective set.
    fn effective_spans(&self) -> Vec<SpanEdit> {
        let mut effective: Vec<SpanEdit> = Vec::new();
        for edit in &self.spans {
            if let Some(existing) = effective
                .iter()
                .position(|e| e.start == edit.start && e.end == edit.end)
            {
                // Same range re-issued: the later edit wins.
                effective[existing] = edit.clone();
                continue;
            }
            if effective
                .iter()
                .any(|e| e.start <= edit.start && edit.end <= e.end)
            {
                // Nested inside an already-recorded edit: the outer one wins.
                continue;
            }
            // The new edit swallows anything fully inside its range.
            effective.retain(|e| !(edit.start <= e.start && e.end <= edit.end));
            if effective
                .iter()
                .any(|e| e.start <= edit.end && edit.start <= e.end)
            {
                // Partial overlap; contract violation, drop the later edit.
                continue;
            }
            effective.push(edit.clone());
        }
        effective
    }

    fn emit(&self, start: u32, end: u32, is_render: bool) -> String {
        let token_count = self.stream.len();
        if token_count == 0 {
            return String::new();
        }
        let end = end.min(token_count - 1);
        let spans = self.effective_spans();
        let covering = |index: u32| spans.iter().find(|e| e.start <= index && index <= e.end);
        let boundary_suppressed =
            |boundary: u32| spans.iter().any(|e| e.start < boundary && boundary <= e.end);
        let push_inserts = |out: &mut String, boundary: u32, after_trivia: bool| {
            if boundary_suppressed(boundary) {
                return;
            }
            for insert in &self.inserts {
                if insert.boundary == boundary && insert.after_trivia == after_trivia {
                    out.push_str(&insert.text);
                }
            }
        };

        let mut out = String::new();
        for index in start..=end {
            let token = self.stream.token(index);
            let span = covering(index);
            let interior = span.is_some_and(|e| e.start != index);
            if index > start || is_render {
                // Text inserted after the previous token's text.
                push_inserts(&mut out, index, false);
            }
            if !interior && (is_render || index != start) {
                for (trivia_index, trivia) in token.leading_trivia.iter().enumerate() {
                    if !self.cleared_trivia.contains(&(index, trivia_index as u32)) {
                        out.push_str(self.stream.trivia_text(trivia));
                    }
                }
            }
            push_inserts(&mut out, index, true);
            match span {
                Some(edit) if edit.start == index => out.push_str(&edit.text),
                Some(_) => {}
                None => out.push_str(self.stream.token_text(index)),
            }
        }
        // Text inserted after the last emitted token.
        push_inserts(&mut out, end + 1, false);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dts2kt_scanner::ScannerState;

    fn stream(source: &str) -> TokenStream {
        ScannerState::new(source.to_string())
            .tokenize()
            .expect("scan should succeed")
    }

    #[test]
    fn test_untouched_stream_renders_original_text() {
        let s = stream("declare type A = B;\n");
        let rw = TokenRewriter::new(&s);
        assert_eq!(rw.render(), "declare type A = B;\n");
    }

    #[test]
    fn test_replace_keyword_pair() {
        let s = stream("declare type A = B;");
        let mut rw = TokenRewriter::new(&s);
        rw.replace(0, 1, "typealias");
        assert_eq!(rw.render(), "typealias A = B;");
    }

    #[test]
    fn test_inserts_render_in_issue_order() {
        let s = stream("name: T");
        let mut rw = TokenRewriter::new(&s);
        rw.insert_before(0, "var ");
        rw.insert_after(2, "?");
        assert_eq!(rw.render(), "var name: T?");
    }

    #[test]
    fn test_insert_after_lands_before_next_trivia() {
        let s = stream("name: T ;");
        let mut rw = TokenRewriter::new(&s);
        rw.insert_after(2, "?");
        assert_eq!(rw.render(), "name: T? ;");
    }

    #[test]
    fn test_insert_before_renders_after_leading_trivia() {
        let s = stream("/** doc */\ndeclare");
        let mut rw = TokenRewriter::new(&s);
        rw.insert_before(0, "HEADER\n");
        assert_eq!(rw.render(), "/** doc */\nHEADER\ndeclare");
    }

    #[test]
    fn test_outer_delete_wins_over_inner_edits() {
        let s = stream("declare type A = string;");
        let mut rw = TokenRewriter::new(&s);
        rw.replace_token(4, "String");
        rw.delete(0, 5);
        assert_eq!(rw.render(), "");
    }

    #[test]
    fn test_same_span_is_last_wins() {
        let s = stream("a => b");
        let mut rw = TokenRewriter::new(&s);
        rw.replace_token(1, "->");
        rw.delete_token(1);
        assert_eq!(rw.render(), "a  b");
    }

    #[test]
    fn test_delete_keeps_leading_trivia_of_first_token() {
        let s = stream("a ; b");
        let mut rw = TokenRewriter::new(&s);
        rw.delete_token(1);
        assert_eq!(rw.render(), "a  b");
    }

    #[test]
    fn test_insert_after_survives_delete_of_its_token() {
        let s = stream("(x) => T");
        let mut rw = TokenRewriter::new(&s);
        rw.delete_token(3);
        rw.insert_after(3, ":");
        assert_eq!(rw.render(), "(x) : T");
    }

    #[test]
    fn test_text_of_applies_pending_edits() {
        let s = stream("declare type A = string | null;");
        let mut rw = TokenRewriter::new(&s);
        rw.replace_token(4, "String");
        assert_eq!(rw.text_of(4, 6), "String | null");
    }

    #[test]
    fn test_text_of_excludes_leading_trivia_and_includes_edge_inserts() {
        let s = stream("x: Cell ,");
        let mut rw = TokenRewriter::new(&s);
        rw.insert_after(2, "?");
        assert_eq!(rw.text_of(2, 2), "Cell?");
    }

    #[test]
    fn test_clear_trivia_drops_comment_but_keeps_whitespace() {
        let s = stream("/** gone */\ndeclare");
        let mut rw = TokenRewriter::new(&s);
        rw.clear_trivia(0, 0);
        assert_eq!(rw.render(), "\ndeclare");
    }

    #[test]
    fn test_replacement_keeps_edge_inserts() {
        let s = stream("A | B");
        let mut rw = TokenRewriter::new(&s);
        rw.insert_before(0, "[");
        rw.insert_after(2, "]");
        rw.replace(0, 2, "Any");
        assert_eq!(rw.render(), "[Any]");
    }
}
