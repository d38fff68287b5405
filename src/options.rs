use crate::protocol::LineEnding;
use std::path::PathBuf;

/// What to do with the response of a single exchange. Built once from the command line and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub url: String,
    pub debug: bool,
    pub output_file: Option<PathBuf>,
    /// Write to a file named after the last path segment of the URL.
    pub use_default_name: bool,
    /// Accepted, not acted upon.
    pub show_progress: bool,
    /// Accepted, not acted upon.
    pub fetch_resources: bool,
    pub line_ending: LineEnding,
}

impl Options {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Options {
            url: url.into(),
            debug: false,
            output_file: None,
            use_default_name: false,
            show_progress: false,
            fetch_resources: false,
            line_ending: LineEnding::default(),
        }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn output_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    pub fn use_default_name(mut self, use_default_name: bool) -> Self {
        self.use_default_name = use_default_name;
        self
    }

    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn fetch_resources(mut self, fetch_resources: bool) -> Self {
        self.fetch_resources = fetch_resources;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// True when the body is going to a file, either named or derived from the URL.
    pub fn writes_file(&self) -> bool {
        self.output_file.is_some() || self.use_default_name
    }
}
