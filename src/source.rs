//! Command buffer source
//!
//! The original tool picked file-vs-stdin inline; here the choice is a
//! small enum resolved before any network work so the exchange itself never
//! branches on where the bytes came from.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::CdrError;

/// Where the command buffer is read from.
#[derive(Debug, Clone)]
pub enum CommandSource {
    Stdin,
    File(PathBuf),
}

impl CommandSource {
    /// Resolve the optional positional argument. An omitted or empty name
    /// selects standard input, matching the original client.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") => Self::Stdin,
            Some(name) => Self::File(PathBuf::from(name)),
        }
    }

    /// Read the whole buffer. May legitimately be empty.
    pub fn read(&self) -> Result<Vec<u8>, CdrError> {
        match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
            Self::File(path) => fs::read(path).map_err(|source| CdrError::File {
                path: path.clone(),
                source,
            }),
        }
    }

    /// Human-readable name for status output.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "standard input".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_or_missing_arg_selects_stdin() {
        assert!(matches!(CommandSource::from_arg(None), CommandSource::Stdin));
        assert!(matches!(
            CommandSource::from_arg(Some("")),
            CommandSource::Stdin
        ));
    }

    #[test]
    fn test_named_arg_selects_file() {
        match CommandSource::from_arg(Some("commands.xml")) {
            CommandSource::File(path) => assert_eq!(path, PathBuf::from("commands.xml")),
            other => panic!("expected file source, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_roundtrip() {
        let path = std::env::temp_dir().join("cdrcmd_source_test.xml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"<CdrCommandSet></CdrCommandSet>").unwrap();
        drop(file);

        let source = CommandSource::File(path.clone());
        assert_eq!(source.read().unwrap(), b"<CdrCommandSet></CdrCommandSet>");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let source = CommandSource::File(PathBuf::from("/no/such/cdrcmd/file.xml"));
        match source.read() {
            Err(CdrError::File { path, .. }) => {
                assert_eq!(path, PathBuf::from("/no/such/cdrcmd/file.xml"));
            }
            other => panic!("expected file error, got {:?}", other),
        }
    }
}
