// Whitespace runs become a single underscore; anything not printable ASCII
// is dropped so a record stays one parseable line.
fn sanitize_value(value: &str) -> String {
    let words: Vec<String> = value
        .split_whitespace()
        .map(|word| word.chars().filter(char::is_ascii_graphic).collect())
        .filter(|word: &String| !word.is_empty())
        .collect();
    if words.is_empty() {
        "na".to_string()
    } else {
        words.join("_")
    }
}

/// Structured advisory record on stderr. One line, key=value, greppable.
pub fn emit(code: &str, stage: &str, subject: &str, reason: &str) {
    eprintln!(
        "T4J_WARN code={} stage={} subject={} reason={}",
        sanitize_value(code),
        sanitize_value(stage),
        sanitize_value(subject),
        sanitize_value(reason),
    );
}
