//! One request, one response.
//!
//! ```no_run
//! use gethttp::client::run;
//! use gethttp::options::Options;
//!
//! fn main() -> gethttp::error::Result<()> {
//!     run(&Options::new("http://example.com/index.html").output_file("index.html"))
//! }
//! ```
use crate::buffer::ANSWER_CAPACITY;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::output::Output;
use crate::protocol::{HttpRequest, LineEnding, RawResponse, ResponseBody};
use crate::url::Address;
use log::{debug, warn};
use std::fmt;
use std::io::{self, Read, Write};
use std::marker::PhantomData;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

/// Represents the ability to resolve an `Address` and open a stream to it.
pub trait StreamConnector {
    type Stream: io::Read + io::Write;
    type StreamAddr: Clone + fmt::Debug;
    fn to_stream_addr(address: &Address) -> Result<Self::StreamAddr>;
    fn connect(addr: Self::StreamAddr) -> Result<Self::Stream>;
}

impl StreamConnector for TcpStream {
    type Stream = TcpStream;
    type StreamAddr = SocketAddr;

    /// IPv4 only; the first address the resolver returns is used.
    fn to_stream_addr(address: &Address) -> Result<SocketAddr> {
        let port: u16 = address.port().parse().map_err(|_| {
            Error::ResolutionError(format!(
                "{}: invalid port '{}'",
                address.host(),
                address.port()
            ))
        })?;
        (address.host(), port)
            .to_socket_addrs()
            .map_err(|e| Error::ResolutionError(format!("{}: {}", address.host(), e)))?
            .find(SocketAddr::is_ipv4)
            .ok_or_else(|| {
                Error::ResolutionError(format!("{}: no IPv4 address found", address.host()))
            })
    }

    fn connect(addr: SocketAddr) -> Result<TcpStream> {
        TcpStream::connect(addr).map_err(connect_error)
    }
}

// std opens the socket and connects in one call; only errors that cannot come from the
// remote side are reported as socket failures.
fn connect_error(e: io::Error) -> Error {
    match e.kind() {
        io::ErrorKind::Unsupported | io::ErrorKind::OutOfMemory => Error::SocketError(e),
        _ => Error::ConnectError(e),
    }
}

/// Send `request` and perform exactly one read of the answer.
///
/// Takes the stream by value: it is closed when this returns, whatever the outcome.
pub fn exchange<T: io::Read + io::Write>(
    mut stream: T,
    request: &HttpRequest,
) -> Result<RawResponse> {
    let request = request.serialize()?;
    stream
        .write_all(request.as_bytes())
        .and_then(|_| stream.flush())
        .map_err(Error::SendError)?;
    debug!("sent {} bytes", request.len());

    let mut answer = [0u8; ANSWER_CAPACITY];
    let received = stream.read(&mut answer).map_err(Error::ReceiveError)?;
    debug!("received {} bytes", received);

    RawResponse::new(&answer[..received])
}

pub struct HttpClient<S: StreamConnector> {
    line_ending: LineEnding,
    connector: PhantomData<S>,
}

impl<S: StreamConnector> Default for HttpClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StreamConnector> HttpClient<S> {
    pub fn new() -> Self {
        HttpClient {
            line_ending: LineEnding::default(),
            connector: PhantomData,
        }
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn get(&self, address: &Address) -> Result<RawResponse> {
        let stream_addr = S::to_stream_addr(address)?;
        debug!("resolved {} to {:?}", address.host(), stream_addr);

        let stream = S::connect(stream_addr)?;
        debug!("connected to {}:{}", address.host(), address.port());

        let request =
            HttpRequest::get(address.host(), address.path()).line_ending(self.line_ending);
        exchange(stream, &request)
    }
}

fn log_head(raw: &RawResponse, body: &ResponseBody) {
    let head = match raw.head() {
        Ok(head) => head,
        Err(_) => return,
    };
    debug!("status {:?}, {} body bytes", head.status, body.len());
    if !head.is_success() {
        warn!("server answered with status {:?}", head.status);
    }
    if let Some(expected) = head.content_length {
        if expected > body.len() {
            warn!(
                "body truncated: received {} of {} bytes in a single read",
                body.len(),
                expected
            );
        }
    }
}

/// Fetch `options.url` over TCP and deliver the body.
pub fn run(options: &Options) -> Result<()> {
    run_with::<TcpStream>(options)
}

/// Fetch `options.url` through `S` and deliver the body.
///
/// With `debug` set and no file requested the headers are delivered along with the body.
pub fn run_with<S: StreamConnector>(options: &Options) -> Result<()> {
    let address: Address = options.url.parse()?;
    debug!("fetching {}", address);
    if options.show_progress {
        debug!("progress reporting is not supported, ignoring");
    }
    if options.fetch_resources {
        debug!("fetching linked resources is not supported, ignoring");
    }

    let raw = HttpClient::<S>::new()
        .line_ending(options.line_ending)
        .get(&address)?;
    let body = raw.body()?;
    log_head(&raw, &body);

    let output = Output::for_options(options, &address);
    let data = if options.debug && output == Output::Stdout {
        raw.as_bytes()
    } else {
        body.as_bytes()
    };
    debug!("writing {} bytes to {}", data.len(), output);
    output.write(data)
}


#[cfg(test)]
mod run_tests {
    use super::{run_with, StreamConnector};
    use crate::error::{Error, Result};
    use crate::options::Options;
    use crate::url::Address;
    use std::io::{self, Read};

    // Serves a canned answer chosen by host name.
    struct CannedConnector;

    struct CannedStream {
        response: io::Cursor<&'static [u8]>,
    }

    impl io::Read for CannedStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.response.read(buf)
        }
    }

    impl io::Write for CannedStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl StreamConnector for CannedConnector {
        type Stream = CannedStream;
        type StreamAddr = String;

        fn to_stream_addr(address: &Address) -> Result<String> {
            match address.host() {
                "nowhere.test" => Err(Error::ResolutionError("nowhere.test: not found".into())),
                host => Ok(host.into()),
            }
        }

        fn connect(host: String) -> Result<CannedStream> {
            let response: &'static [u8] = match host.as_str() {
                "ok.test" => b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nHello",
                "split.test" => b"HTTP/1.1 200 OK\r\nContent-Le",
                _ => {
                    return Err(Error::ConnectError(io::Error::new(
                        io::ErrorKind::ConnectionRefused,
                        "refused",
                    )))
                }
            };
            Ok(CannedStream {
                response: io::Cursor::new(response),
            })
        }
    }

    #[test]
    fn writes_body_to_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        run_with::<CannedConnector>(&Options::new("http://ok.test/").output_file(&path)).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"Hello");
    }

    #[test]
    fn debug_still_strips_headers_for_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let options = Options::new("http://ok.test/")
            .debug(true)
            .output_file(&path);
        run_with::<CannedConnector>(&options).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"Hello");
    }

    #[test]
    fn incomplete_response_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let result =
            run_with::<CannedConnector>(&Options::new("http://split.test/").output_file(&path));
        assert!(matches!(result, Err(Error::IncompleteResponse(_))));
        assert!(!path.exists());
    }

    #[test]
    fn connect_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let result =
            run_with::<CannedConnector>(&Options::new("http://down.test/").output_file(&path));
        assert!(matches!(result, Err(Error::ConnectError(_))));
        assert!(!path.exists());
    }

    #[test]
    fn resolution_failure() {
        let result = run_with::<CannedConnector>(&Options::new("http://nowhere.test/"));
        assert!(matches!(result, Err(Error::ResolutionError(_))));
    }

    #[test]
    fn malformed_url() {
        let result = run_with::<CannedConnector>(&Options::new("ok.test/index.html"));
        assert!(matches!(result, Err(Error::MalformedUrl(_))));
    }
}
