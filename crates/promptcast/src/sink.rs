use std::io::{self, Write};

/// Write `text` exactly as received and flush.
pub fn write_response<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_response_is_raw() {
        let mut out = Vec::new();
        write_response(&mut out, "OK").unwrap();
        assert_eq!(out, b"OK");
    }

    #[test]
    fn test_write_response_keeps_markdown_and_escapes() {
        let text = "**Formatted Code:**\n```c\nint x;\n```\n\x1b[1m";
        let mut out = Vec::new();
        write_response(&mut out, text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }
}
