/// Remove every blank or whitespace-only line from rendered markdown.
///
/// A markdown table stops parsing at the first blank line between its
/// header and body, so stripping must be exhaustive rather than
/// first-occurrence. Non-blank lines keep their order and content; the
/// result ends with a newline unless it is empty.
pub fn strip_blank_lines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
