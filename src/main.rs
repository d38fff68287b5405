use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use gethttp::client;
use gethttp::options::Options;
use gethttp::protocol::LineEnding;

#[derive(Parser)]
#[command(name = "gethttp", about = "Fetch a URL with a single HTTP GET", disable_help_flag = true)]
struct Cli {
    url: Option<String>,

    /// Show the response headers along with the body
    #[arg(short = 'd')]
    debug: bool,

    /// Write the body to FILE, or to a file named after the URL when FILE is omitted
    #[arg(short = 'w', value_name = "FILE", num_args = 0..=1)]
    write: Option<Option<PathBuf>>,

    /// Show progress and speed (not implemented)
    #[arg(short = 'p')]
    progress: bool,

    /// Fetch linked HTML resources (not implemented)
    #[arg(short = 'r')]
    resources: bool,

    /// Terminate request lines with \r\n instead of \n
    #[arg(long = "crlf")]
    crlf: bool,

    /// Print this help
    #[arg(short = 'h')]
    help: bool,
}

fn usage_and_exit() -> ! {
    eprintln!("{}", Cli::command().render_help());
    process::exit(1);
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if cli.help {
        usage_and_exit();
    }

    let url = match cli.url {
        Some(url) if !url.is_empty() => url,
        _ => {
            eprintln!("gethttp: a URL is required");
            usage_and_exit();
        }
    };

    let mut options = Options::new(url)
        .debug(cli.debug)
        .show_progress(cli.progress)
        .fetch_resources(cli.resources)
        .line_ending(if cli.crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        });
    options = match cli.write {
        Some(Some(path)) => options.output_file(path),
        Some(None) => options.use_default_name(true),
        None => options,
    };

    if let Err(e) = client::run(&options) {
        eprintln!("gethttp: {}", e);
        process::exit(1);
    }
}
