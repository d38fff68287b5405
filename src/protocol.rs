use crate::buffer::{BoundedString, ANSWER_CAPACITY, REQUEST_CAPACITY};
use crate::error::{Error, Result};
use std::fmt;

/// Blank line between the header block and the body of a response.
pub const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";

const HTTP_VERSION: &str = "HTTP/1.1";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HttpMethod {
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
        }
    }
}

/// Line terminator used when framing a request.
///
/// `Lf` writes bare `\n` terminators, which most servers accept. `CrLf` is the framing
/// RFC 9112 asks for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A GET request carrying a single `Host` header.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HttpRequest {
    method: HttpMethod,
    uri: String,
    host: String,
    line_ending: LineEnding,
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let eol = self.line_ending.as_str();
        write!(f, "{} {} {}{}", self.method, self.uri, HTTP_VERSION, eol)?;
        write!(f, "Host: {}{}", self.host, eol)?;
        write!(f, "{}", eol)?;
        Ok(())
    }
}

impl HttpRequest {
    /// `path` is given without its leading slash.
    pub fn get<H: Into<String>>(host: H, path: &str) -> Self {
        HttpRequest {
            method: HttpMethod::Get,
            uri: format!("/{}", path),
            host: host.into(),
            line_ending: LineEnding::default(),
        }
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// The request as it goes on the wire.
    pub fn serialize(&self) -> Result<BoundedString<REQUEST_CAPACITY>> {
        BoundedString::try_new("request", &self.to_string())
    }
}


/// Position of the first header separator in `bytes`.
pub fn find_separator(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(HEADER_SEPARATOR.len())
        .position(|w| w == HEADER_SEPARATOR)
}

/// Everything received by the single read of an exchange: header block and body together.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RawResponse {
    bytes: Vec<u8>,
}

impl RawResponse {
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > ANSWER_CAPACITY {
            return Err(Error::BufferOverflow {
                what: "response",
                capacity: ANSWER_CAPACITY,
                length: bytes.len(),
            });
        }
        Ok(RawResponse {
            bytes: bytes.to_vec(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Header block including the separator.
    pub fn header_block(&self) -> Result<&[u8]> {
        let end = self.body_start()?;
        Ok(&self.bytes[..end])
    }

    /// The bytes following the first header separator.
    pub fn body(&self) -> Result<ResponseBody> {
        let start = self.body_start()?;
        Ok(ResponseBody {
            bytes: self.bytes[start..].to_vec(),
        })
    }

    pub fn head(&self) -> Result<ResponseHead> {
        Ok(ResponseHead::scan(self.header_block()?))
    }

    fn body_start(&self) -> Result<usize> {
        find_separator(&self.bytes)
            .map(|pos| pos + HEADER_SEPARATOR.len())
            .ok_or(Error::IncompleteResponse(self.bytes.len()))
    }
}

/// Status code and announced body length, read from a header block. Lines that do not parse
/// leave the field unset.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct ResponseHead {
    pub status: Option<u16>,
    pub content_length: Option<usize>,
}

impl ResponseHead {
    pub fn scan(header_block: &[u8]) -> Self {
        let text = String::from_utf8_lossy(header_block);
        let mut lines = text.split("\r\n");

        let status = lines
            .next()
            .filter(|line| line.starts_with("HTTP/"))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|code| code.parse().ok());

        let content_length = lines
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok());

        ResponseHead {
            status,
            content_length,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }
}

/// The part of a `RawResponse` after the header separator.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ResponseBody {
    bytes: Vec<u8>,
}

impl ResponseBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
