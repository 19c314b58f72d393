//! Luau dialect primitives
//!
//! The fixed statements and literal forms the exporter writes. Nothing here
//! validates Luau; it only knows how to spell the handful of constructs the
//! generated script uses.

/// Variable holding the root `ScreenGui`
pub const ROOT_VAR: &str = "screenGui";

/// Opening lines that create the root container and attach it to the player's GUI
pub const PREAMBLE: [&str; 4] = [
    "local screenGui = Instance.new(\"ScreenGui\")",
    "screenGui.Name = \"ExportedUI\"",
    "screenGui.ResetOnSpawn = false",
    "screenGui.Parent = game:GetService(\"Players\").LocalPlayer:WaitForChild(\"PlayerGui\")",
];

/// Reserved words of Luau, none of which can name a local
///
/// Contextual keywords (`continue`, `export`, `type`) are valid local names.
pub const KEYWORDS: [&str; 21] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Whether `word` is reserved
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Globals the generated script reads after items are declared
pub const RESERVED_GLOBALS: [&str; 4] = ["Instance", "UDim2", "Color3", "game"];

/// Whether a local named `name` would shadow something the script relies on
pub fn shadows_script_name(name: &str) -> bool {
    name == ROOT_VAR || RESERVED_GLOBALS.contains(&name)
}

/// Double-quoted string literal, content passed through untouched
pub fn quoted(content: &str) -> String {
    format!("\"{}\"", content)
}

/// Level-0 long string (`[[...]]`), content passed through untouched
pub fn long_string(content: &str) -> String {
    format!("[[{}]]", content)
}

/// Long string at the lowest bracket level that keeps `content` intact
///
/// A level is usable when its closer (`]]`, `]=]`, `]==]`, ...) cannot be
/// found in `content` with one extra `]` appended. A leading line break is
/// doubled because Luau drops the first one after an opening bracket.
pub fn safe_long_string(content: &str) -> String {
    let equals = "=".repeat(long_bracket_level(content));
    let lead = match content.chars().next() {
        Some(c @ ('\n' | '\r')) => c.to_string(),
        _ => String::new(),
    };
    format!("[{eq}[{lead}{content}]{eq}]", eq = equals, lead = lead, content = content)
}

/// Lowest long-bracket level whose closer cannot be formed inside `content`
pub fn long_bracket_level(content: &str) -> usize {
    // A trailing `]` in the content can pair with the closer's first bracket.
    let probe = format!("{}]", content);
    (0..)
        .find(|level| !probe.contains(&closer(*level)))
        .unwrap_or(0)
}

/// Whether `content` would end a level-0 long string early
pub fn breaks_long_string(content: &str) -> bool {
    long_bracket_level(content) > 0
}

fn closer(level: usize) -> String {
    format!("]{}]", "=".repeat(level))
}
