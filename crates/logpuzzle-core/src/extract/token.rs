//! Per-line token matching for puzzle image URLs.

/// Finds the puzzle image URL in one log line, if any.
///
/// Scans whitespace-delimited tokens left to right. A token matches when
/// the prefix up to its last `.jpg` occurrence contains `puzzle`; that
/// prefix is the match (anything after the last `.jpg`, such as a protocol
/// suffix, is cut off). At most one match per line is returned — the first
/// matching token — even when later tokens would also match.
pub fn puzzle_token(line: &str) -> Option<&str> {
    for token in line.split_whitespace() {
        if let Some(pos) = token.rfind(".jpg") {
            let candidate = &token[..pos + ".jpg".len()];
            if candidate.contains("puzzle") {
                return Some(candidate);
            }
        }
    }
    None
}
