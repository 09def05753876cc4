//! Spelling strings as literals.
//!
//! The inverse of scan + normalize: given content, produce literal source
//! text that reads back as exactly that content, using the shortest
//! delimiter that works.

/// The empty string. `""` would be an opening run with no closing run.
pub const EMPTY_STRING: &str = "()";

/// Spell `content` as a literal whose opening run sits at `column`.
///
/// Single-line form when the content allows it, otherwise the multi-line
/// form aligned to `column`. Empty content becomes [`EMPTY_STRING`].
pub fn encode_literal(content: &str, column: u32) -> String {
    if content.is_empty() {
        return EMPTY_STRING.to_owned();
    }
    // Leading or trailing quotes would merge into the delimiter runs; a
    // leading newline would select the multi-line form.
    let single_line = !content.starts_with(['"', '\n']) && !content.ends_with('"');
    let encoded = if single_line {
        let quotes = "\"".repeat(minimal_delimiter_len(content));
        format!("{quotes}{content}{quotes}")
    } else {
        encode_multi_line(content, column)
    };
    tracing::trace!(
        content_len = content.len(),
        single_line,
        "encoded literal"
    );
    encoded
}

/// Smallest `N >= 1` such that `content` has no quote run of length `N`.
pub fn minimal_delimiter_len(content: &str) -> usize {
    smallest_missing(quote_run_lengths(content.as_bytes()))
}

fn encode_multi_line(content: &str, column: u32) -> String {
    // Only a line made of quotes (plus trailing whitespace) could be taken
    // for the closing line.
    let quote_lines = content
        .split('\n')
        .filter_map(|line| {
            let trimmed = line.trim_end_matches([' ', '\t', '\r']);
            (!trimmed.is_empty() && trimmed.bytes().all(|b| b == b'"')).then_some(trimmed.len())
        })
        .collect();
    let quotes = "\"".repeat(smallest_missing(quote_lines));
    let indent = " ".repeat(column as usize);

    let mut out = String::with_capacity(content.len() + 2 * (quotes.len() + indent.len() + 1));
    out.push_str(&quotes);
    out.push('\n');
    for line in content.split('\n') {
        if !line.is_empty() {
            out.push_str(&indent);
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str(&indent);
    out.push_str(&quotes);
    out
}

/// Lengths of the maximal runs of `"` in `bytes`.
fn quote_run_lengths(bytes: &[u8]) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut positions = memchr::memchr_iter(b'"', bytes).peekable();
    while let Some(start) = positions.next() {
        let mut end = start + 1;
        while positions.next_if_eq(&end).is_some() {
            end += 1;
        }
        lengths.push(end - start);
    }
    lengths
}

fn smallest_missing(mut lengths: Vec<usize>) -> usize {
    lengths.sort_unstable();
    lengths.dedup();
    let mut n = 1;
    for len in lengths {
        match len.cmp(&n) {
            std::cmp::Ordering::Less => {}
            std::cmp::Ordering::Equal => n += 1,
            std::cmp::Ordering::Greater => break,
        }
    }
    n
}

#[cfg(test)]
mod tests;
