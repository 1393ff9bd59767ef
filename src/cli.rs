//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "parcorp", about = "parallel corpus rebuilding tool.")]
/// Holds every command that is callable by the `parcorp` command.
pub enum Parcorp {
    #[structopt(about = "Copy documents to the work directory and run the sentence aligner")]
    Align(Stage),
    #[structopt(about = "Map aligned lines back to original line numbers")]
    Index(Stage),
    #[structopt(about = "Build the combined parallel corpus from index files")]
    Build(Stage),
    #[structopt(about = "Extract unique pairs from the combined parallel corpus")]
    Unique(Stage),
    #[structopt(about = "Run every stage")]
    Run(Run),
}

#[derive(Debug, StructOpt)]
/// Single stage parameters.
pub struct Stage {
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "path to the TOML configuration file",
        default_value = "io_args.toml"
    )]
    pub config: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Whole chain parameters.
///
/// ```sh
/// parcorp-run 0.1.0
/// Run every stage
///
/// USAGE:
///     parcorp run [FLAGS] [OPTIONS]
///
/// FLAGS:
///     -h, --help          Prints help information
///         --skip-align    reuse aligned files from a previous run
///     -V, --version       Prints version information
///
/// OPTIONS:
///     -c, --config <config>    path to the TOML configuration file [default: io_args.toml]
/// ```
pub struct Run {
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "path to the TOML configuration file",
        default_value = "io_args.toml"
    )]
    pub config: PathBuf,
    #[structopt(long = "skip-align", help = "reuse aligned files from a previous run")]
    pub skip_align: bool,
}
