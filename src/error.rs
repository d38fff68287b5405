use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    MalformedUrl(String),
    BufferOverflow {
        what: &'static str,
        capacity: usize,
        length: usize,
    },
    ResolutionError(String),
    SocketError(io::Error),
    ConnectError(io::Error),
    SendError(io::Error),
    ReceiveError(io::Error),
    IncompleteResponse(usize),
    WriteError(String, io::Error),
}

pub type Result<R> = std::result::Result<R, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedUrl(url) => {
                write!(f, "malformed URL '{}': expected '//' before the host", url)
            }
            Error::BufferOverflow {
                what,
                capacity,
                length,
            } => write!(
                f,
                "buffer overflow: {} needs {} bytes but holds at most {}",
                what, length, capacity
            ),
            Error::ResolutionError(msg) => write!(f, "resolve: {}", msg),
            Error::SocketError(e) => write!(f, "socket: {}", e),
            Error::ConnectError(e) => write!(f, "connect: {}", e),
            Error::SendError(e) => write!(f, "send: {}", e),
            Error::ReceiveError(e) => write!(f, "recv: {}", e),
            Error::IncompleteResponse(received) => write!(
                f,
                "incomplete response: no header separator in {} received bytes",
                received
            ),
            Error::WriteError(target, e) => write!(f, "write {}: {}", target, e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::SocketError(e)
            | Error::ConnectError(e)
            | Error::SendError(e)
            | Error::ReceiveError(e)
            | Error::WriteError(_, e) => Some(e),
            Error::MalformedUrl(_)
            | Error::BufferOverflow { .. }
            | Error::ResolutionError(_)
            | Error::IncompleteResponse(_) => None,
        }
    }
}
