// src/document/language.rs

/// Fence tag for a file name, derived from its extension.
///
/// Known extensions map to a highlighter name; unknown ones fall back to the
/// raw extension; extensionless names (including dotfiles like `.gitignore`)
/// get an empty tag.
pub fn language_tag(file_name: &str) -> &str {
    let ext = extension(file_name);
    match ext {
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "java" => "java",
        "json" => "json",
        "html" => "html",
        "css" => "css",
        "scss" => "scss",
        "vue" => "vue",
        "md" => "markdown",
        "sh" => "bash",
        "yml" => "yaml",
        "xml" => "xml",
        other => other,
    }
}

/// Text after the last `.`, ignoring a leading dot.
fn extension(file_name: &str) -> &str {
    let stem_start = usize::from(file_name.starts_with('.'));
    match file_name[stem_start..].rfind('.') {
        Some(idx) => &file_name[stem_start + idx + 1..],
        None => "",
    }
}
