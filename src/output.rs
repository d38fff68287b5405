use crate::error::{Error, Result};
use crate::options::Options;
use crate::url::Address;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the body of a response ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// An explicit file wins over a name derived from the URL path; otherwise stdout.
    pub fn for_options(options: &Options, address: &Address) -> Self {
        if !options.writes_file() {
            return Output::Stdout;
        }
        match &options.output_file {
            Some(path) => Output::File(path.clone()),
            None => Output::File(PathBuf::from(address.resource_name())),
        }
    }

    /// Write all of `data`. Files are created or truncated first.
    pub fn write(&self, data: &[u8]) -> Result<()> {
        match self {
            Output::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_all_to(&mut handle, data).map_err(|e| Error::WriteError(self.to_string(), e))
            }
            Output::File(path) => {
                let mut file =
                    File::create(path).map_err(|e| Error::WriteError(self.to_string(), e))?;
                write_all_to(&mut file, data).map_err(|e| Error::WriteError(self.to_string(), e))
            }
        }
    }
}

fn write_all_to<W: Write>(w: &mut W, data: &[u8]) -> io::Result<()> {
    w.write_all(data)?;
    w.flush()
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Output::Stdout => write!(f, "<stdout>"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod output_tests {
    use super::{write_all_to, Output};
    use crate::error::Error;
    use crate::options::Options;
    use crate::url::Address;
    use std::io;
    use std::path::PathBuf;

    fn address() -> Address {
        "http://example.com/docs/page.html".parse().unwrap()
    }

    #[test]
    fn target_selection() {
        let options = Options::new("http://example.com/docs/page.html");
        assert_eq!(Output::for_options(&options, &address()), Output::Stdout);

        let options = options.use_default_name(true);
        assert_eq!(
            Output::for_options(&options, &address()),
            Output::File(PathBuf::from("page.html"))
        );

        let options = options.output_file("explicit.txt");
        assert_eq!(
            Output::for_options(&options, &address()),
            Output::File(PathBuf::from("explicit.txt"))
        );
    }

    #[test]
    fn write_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous contents that are longer").unwrap();

        Output::File(path.clone()).write(b"Hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"Hello");
    }

    #[test]
    fn write_file_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        match Output::File(path.clone()).write(b"Hello") {
            Err(Error::WriteError(target, _)) => assert_eq!(target, path.display().to_string()),
            other => panic!("expected WriteError, got {:?}", other),
        }
    }

    struct ShortWriter {
        capacity: usize,
        data: Vec<u8>,
    }

    impl io::Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = std::cmp::min(buf.len(), self.capacity - self.data.len());
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn short_write_is_an_error() {
        let mut w = ShortWriter {
            capacity: 3,
            data: vec![],
        };
        let err = write_all_to(&mut w, b"Hello").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(&w.data, b"Hel");
    }
}
