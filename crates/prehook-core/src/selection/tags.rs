//! File type tags derived from names and extensions.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes read when sniffing a file without a known name or extension.
const SNIFF_LEN: u64 = 8 * 1024;

/// Tags for a file extension (lowercase, without the dot).
fn extension_tags(ext: &str) -> &'static [&'static str] {
    match ext {
        "py" => &["text", "python"],
        "pyi" => &["text", "pyi"],
        "pyx" => &["text", "cython"],
        "rs" => &["text", "rust"],
        "toml" => &["text", "toml"],
        "yaml" | "yml" => &["text", "yaml"],
        "json" => &["text", "json"],
        "md" | "markdown" => &["text", "markdown"],
        "rst" => &["text", "rst"],
        "txt" => &["text", "plain-text"],
        "cfg" | "ini" => &["text", "ini"],
        "sh" => &["text", "shell", "sh"],
        "bash" => &["text", "shell", "bash"],
        "zsh" => &["text", "shell", "zsh"],
        "js" | "mjs" | "cjs" => &["text", "javascript"],
        "jsx" => &["text", "jsx", "javascript"],
        "ts" | "mts" | "cts" => &["text", "ts", "typescript"],
        "tsx" => &["text", "tsx", "typescript"],
        "html" | "htm" => &["text", "html"],
        "css" => &["text", "css"],
        "scss" => &["text", "scss"],
        "c" => &["text", "c"],
        "h" => &["text", "header", "c"],
        "cc" | "cpp" | "cxx" => &["text", "c++"],
        "hpp" | "hh" => &["text", "header", "c++"],
        "go" => &["text", "go"],
        "java" => &["text", "java"],
        "rb" => &["text", "ruby"],
        "xml" => &["text", "xml"],
        "sql" => &["text", "sql"],
        "png" => &["binary", "image", "png"],
        "jpg" | "jpeg" => &["binary", "image", "jpeg"],
        "gif" => &["binary", "image", "gif"],
        "zip" => &["binary", "zip"],
        "gz" => &["binary", "gzip"],
        _ => &[],
    }
}

/// Tags for well-known file names without a telling extension.
fn name_tags(name: &str) -> &'static [&'static str] {
    match name {
        "Makefile" | "makefile" | "GNUmakefile" => &["text", "makefile"],
        "Dockerfile" => &["text", "dockerfile"],
        "Cargo.lock" => &["text", "toml"],
        ".gitignore" | ".dockerignore" => &["text"],
        "LICENSE" | "README" | "CHANGELOG" => &["text", "plain-text"],
        _ => &[],
    }
}

/// Tags for a path. Every path carries `file`.
pub fn tags_for_path(path: &Path) -> BTreeSet<&'static str> {
    let mut tags = BTreeSet::from(["file"]);

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        tags.extend(name_tags(name));
    }
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        tags.extend(extension_tags(&ext.to_ascii_lowercase()));
    }
    tags
}

/// Tags for a file on disk at `root.join(path)`.
///
/// Same as [`tags_for_path`], except that a file whose name and extension say
/// nothing about its encoding is sniffed: a NUL byte in the first 8 KiB marks
/// it `binary`, otherwise it is `text`. Unreadable files keep the path tags.
pub fn tags_for_file(root: &Path, path: &Path) -> BTreeSet<&'static str> {
    let mut tags = tags_for_path(path);
    if !tags.contains("text") && !tags.contains("binary") {
        if let Some(sniffed) = sniff(&root.join(path)) {
            tags.insert(sniffed);
        }
    }
    tags
}

fn sniff(path: &Path) -> Option<&'static str> {
    let mut head = Vec::new();
    File::open(path)
        .ok()?
        .take(SNIFF_LEN)
        .read_to_end(&mut head)
        .ok()?;
    Some(if head.contains(&0) { "binary" } else { "text" })
}
