use regex::Regex;

/// How strictly a method lookup confirms the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateMode {
    /// Require the full signature followed by an opening brace. The engine
    /// default.
    Definition,
    /// Require only the declaration keyword, name, and opening parenthesis.
    /// Finds abstract and interface methods, which carry no body.
    Declaration,
}

pub fn locate(mode: LocateMode, content: &str, method: &str) -> Option<usize> {
    match mode {
        LocateMode::Definition => definition_line(content, method),
        LocateMode::Declaration => declaration_line(content, method),
    }
}

/// 1-based line where `function <method>(...) {` begins. The keyword matches
/// case-insensitively, the method name exactly.
pub fn definition_line(content: &str, method: &str) -> Option<usize> {
    let pattern = format!(
        r"(?i:function)\s+{}\s*\([^)]*\)\s*\{{",
        regex::escape(method)
    );
    let re = Regex::new(&pattern).expect("method pattern");
    let found = re.find(content)?;
    Some(content[..found.start()].matches('\n').count() + 1)
}

/// 1-based line of the first `function <method>(` occurrence, scanned
/// line by line. No brace required.
pub fn declaration_line(content: &str, method: &str) -> Option<usize> {
    let pattern = format!(r"(?i:function)\s+{}\s*\(", regex::escape(method));
    let re = Regex::new(&pattern).expect("method pattern");
    content
        .lines()
        .position(|line| re.is_match(line))
        .map(|index| index + 1)
}
