use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells. A tab takes 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Cut `s` down to at most `max_cells` cells, ending in `…` when anything
/// was dropped. Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }

    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        used += grapheme_width(g);
        if used > budget {
            break;
        }
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let rest = s.get(offset..).filter(|r| !r.is_empty())?;
    let step = rest.graphemes(true).next().map_or(rest.len(), str::len);
    Some(offset + step)
}

/// Byte offset of the grapheme boundary before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    let head = s.get(..offset)?;
    head.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Terminal column of the byte offset `offset`.
pub fn byte_offset_to_display_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Start of the word at or before `offset`. Words are runs of non-whitespace.
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let head = &s[..offset.min(s.len())];
    let graphemes: Vec<(usize, &str)> = head.grapheme_indices(true).collect();

    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Start of the next word after `offset`, or the end of `s`.
pub fn word_boundary_right(s: &str, offset: usize) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    let mut graphemes = s[offset..].grapheme_indices(true).peekable();
    while graphemes.next_if(|(_, g)| !is_blank(g)).is_some() {}
    while graphemes.next_if(|(_, g)| is_blank(g)).is_some() {}
    graphemes.peek().map_or(s.len(), |(i, _)| offset + i)
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" { 4 } else { UnicodeWidthStr::width(g) }
}
