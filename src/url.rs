//! Splitting a URL into the pieces needed for a single request.
//!
//! The decomposition is purely textual: everything between the `//` authority marker and the
//! next `/` is the host (optionally carrying a `:port` suffix), and everything after that `/`
//! is the path. Schemes, queries and percent-escapes are not interpreted.
use crate::buffer::{BoundedString, HOST_CAPACITY, PATH_CAPACITY, PORT_CAPACITY};
use crate::error::{Error, Result};
use std::fmt;
use std::str;

pub const DEFAULT_PORT: &str = "80";

pub type Host = BoundedString<HOST_CAPACITY>;
pub type Port = BoundedString<PORT_CAPACITY>;
pub type Path = BoundedString<PATH_CAPACITY>;

/// Split `url` into its host segment (port still attached) and its path.
///
/// The first `/` in the URL must be immediately followed by a second one. The path never
/// includes the `/` that ends the host segment, and is empty when there is none.
pub fn split_url(url: &str) -> Result<(Host, Path)> {
    let malformed = || Error::MalformedUrl(url.into());

    let first_slash = url.find('/').ok_or_else(malformed)?;
    let authority = url[first_slash + 1..]
        .strip_prefix('/')
        .ok_or_else(malformed)?;

    let (host, path) = match authority.find('/') {
        Some(end) => (&authority[..end], &authority[end + 1..]),
        None => (authority, ""),
    };

    Ok((Host::try_new("host", host)?, Path::try_new("path", path)?))
}

/// Split an optional `:port` suffix off `host`. Without one the port is `80`.
///
/// The port text is not checked here; a bad port surfaces when the address is resolved.
pub fn split_port(host: &str) -> Result<(Host, Port)> {
    match host.split_once(':') {
        Some((name, port)) => Ok((Host::try_new("host", name)?, Port::try_new("port", port)?)),
        None => Ok((
            Host::try_new("host", host)?,
            Port::try_new("port", DEFAULT_PORT)?,
        )),
    }
}

/// The final segment of `path`, used as a local file name when none was given.
pub fn resource_name(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, name)) => name,
        None => path,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    host: Host,
    port: Port,
    path: Path,
}

impl Address {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn resource_name(&self) -> &str {
        resource_name(&self.path)
    }
}

impl str::FromStr for Address {
    type Err = Error;

    fn from_str(url: &str) -> Result<Self> {
        let (authority, path) = split_url(url)?;
        let (host, port) = split_port(&authority)?;
        Ok(Address { host, port, path })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.path)
    }
}



#[cfg(test)]
mod resource_name_tests {
    use super::resource_name;

    #[test]
    fn last_segment() {
        assert_eq!(resource_name("a/b/c.html"), "c.html");
        assert_eq!(resource_name("dir/"), "");
    }

    #[test]
    fn no_slash() {
        assert_eq!(resource_name("file.html"), "file.html");
        assert_eq!(resource_name(""), "");
    }
}
