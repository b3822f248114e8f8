//! Tokenizers for graph ingestion and text generation

/// Tokenize lines for ingestion
///
/// Per line: drop every character that is not an ASCII letter or
/// whitespace, lowercase the rest, split on whitespace runs. Tokens are
/// concatenated across lines in order, so the last word of one line is
/// adjacent to the first word of the next.
pub fn tokenize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| tokenize_line(line.as_ref()))
        .collect()
}

fn tokenize_line(line: &str) -> Vec<String> {
    let kept: String = line
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    kept.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

/// Tokenize input for the text generator
///
/// Case-folds and splits on whitespace, nothing more: punctuation stays
/// attached to its word, matching how arbitrary input text is enriched
/// rather than normalized.
pub fn fold_and_split(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}
