//! Input and file helpers shared by CLI commands.
//!
//! - Reading a line of interactive input
//! - Ensuring parent directories exist before file writes

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use drawpoker_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("1 3 5\n");
/// assert_eq!(read_stdin_line(&mut input), Some("1 3 5".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use drawpoker_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("target/history/rounds.jsonl");
/// ensure_parent_dir(path).unwrap();
/// ```
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}
