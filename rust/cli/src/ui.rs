//! UI helper functions for terminal output formatting.
//!
//! Error and warning prefixes are shared by every command so scripted callers
//! can match on them.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Horizontal rule under a section title.
pub fn write_heading(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_stable() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "Error: boom\nWARNING: careful\n");
    }

    #[test]
    fn heading_is_underlined_to_width() {
        let mut buf = Vec::new();
        write_heading(&mut buf, "Pay table").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Pay table\n---------\n");
    }
}
