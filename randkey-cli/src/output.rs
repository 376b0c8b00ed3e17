use crate::error::Result;
use std::io::Write;

/// Writes the key to `writer` as a single newline-terminated line and
/// flushes it.
///
/// The caller passes locked stdout in production; a write or flush failure
/// (closed pipe, full disk) surfaces as [`crate::error::AppError::Io`] and is
/// fatal to the invocation.
pub fn write_key<W: Write>(writer: &mut W, key: &str) -> Result<()> {
    writer.write_all(key.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_key_appends_single_newline() {
        let mut buffer = Vec::new();
        write_key(&mut buffer, "abc123").unwrap();
        assert_eq!(buffer, b"abc123\n");
    }

    #[test]
    fn test_write_key_empty_key_is_bare_newline() {
        let mut buffer = Vec::new();
        write_key(&mut buffer, "").unwrap();
        assert_eq!(buffer, b"\n");
    }

    #[test]
    fn test_write_key_propagates_io_errors() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        assert!(write_key(&mut FailingWriter, "abc").is_err());
    }
}
