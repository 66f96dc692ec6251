/// Splits submitted text into word tokens on whitespace.
///
/// Tokens are passed to the store as-is; deciding what counts as a word is
/// the normalizer's job, so punctuation is not stripped here.
pub fn tokenize_text(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
