//! Entry parsing and program resolution for hook commands.

use std::path::{Path, PathBuf};

use prehook_core::ExecError;
use tracing::debug;

/// Language whose entry is a path inside the hook repository.
pub const SCRIPT_LANGUAGE: &str = "script";

/// Split an entry into words.
///
/// Whitespace separates words. Single quotes are literal; inside double quotes
/// a backslash escapes `"` and `\`. Outside quotes a backslash escapes the
/// next character.
pub fn split_entry(entry: &str) -> Result<Vec<String>, ExecError> {
    let invalid = |reason: &str| ExecError::InvalidEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = entry.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(invalid("unterminated single quote")),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(invalid("unterminated double quote")),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(invalid("unterminated double quote")),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(ch) => current.push(ch),
                    None => return Err(invalid("trailing backslash")),
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }

    if words.is_empty() {
        return Err(invalid("entry is empty"));
    }
    Ok(words)
}

/// Locate the program named by the first word of an entry.
///
/// - `script` hooks: relative paths are resolved inside the repository
///   checkout (or the project root for local hooks)
/// - other languages: bare names are looked up on `PATH`, then in the
///   checkout; relative paths are tried in the checkout, then the project root
pub fn resolve_program(
    program: &str,
    language: &str,
    repo_path: Option<&Path>,
    work_dir: &Path,
) -> Result<PathBuf, ExecError> {
    let path = Path::new(program);
    if path.is_absolute() {
        return if path.exists() {
            Ok(path.to_path_buf())
        } else {
            Err(ExecError::NotFound(program.to_string()))
        };
    }

    let in_repo = repo_path.map(|repo| repo.join(path)).filter(|p| p.exists());

    if language == SCRIPT_LANGUAGE {
        let base = repo_path.unwrap_or(work_dir);
        let candidate = base.join(path);
        return if candidate.exists() {
            Ok(candidate)
        } else {
            Err(ExecError::NotFound(candidate.display().to_string()))
        };
    }

    if path.components().count() > 1 {
        if let Some(candidate) = in_repo {
            return Ok(candidate);
        }
        let candidate = work_dir.join(path);
        return if candidate.exists() {
            Ok(candidate)
        } else {
            Err(ExecError::NotFound(program.to_string()))
        };
    }

    match which::which(program) {
        Ok(found) => Ok(found),
        Err(e) => {
            debug!(program, error = %e, "Program not on PATH, trying repository checkout");
            in_repo.ok_or_else(|| ExecError::NotFound(program.to_string()))
        }
    }
}
