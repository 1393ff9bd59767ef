//! # parcorp
//!
//! Rebuilds deduplicated parallel corpora from bilingual documents aligned by an external sentence aligner.
//!
//! ## Getting started
//!
//! ```sh
//! parcorp 0.1.0
//! parallel corpus rebuilding tool.
//!
//! USAGE:
//!     parcorp <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     align     Copy documents to the work directory and run the sentence aligner
//!     build     Build the combined parallel corpus from index files
//!     help      Prints this message or the help of the given subcommand(s)
//!     index     Map aligned lines back to original line numbers
//!     run       Run every stage
//!     unique    Extract unique pairs from the combined parallel corpus
//! ```
//!
//! Set `RUST_LOG=info` to follow progress.
use parcorp::config::Config;
use parcorp::error::Error;
use parcorp::io::Layout;
use parcorp::pipelines::{Align, Build, Full, Index, Pipeline, Unique};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Parcorp::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Parcorp::Align(s) => {
            let config = Config::from_path(&s.config)?;
            Align::new(Layout::new(&config)?, config.aligner.clone())?.run()?;
        }
        cli::Parcorp::Index(s) => {
            let config = Config::from_path(&s.config)?;
            Index::new(Layout::new(&config)?).run()?;
        }
        cli::Parcorp::Build(s) => {
            let config = Config::from_path(&s.config)?;
            Build::new(Layout::new(&config)?).run()?;
        }
        cli::Parcorp::Unique(s) => {
            let config = Config::from_path(&s.config)?;
            Unique::new(Layout::new(&config)?).run()?;
        }
        cli::Parcorp::Run(r) => {
            let config = Config::from_path(&r.config)?;
            let report = Full::new(&config, r.skip_align)?.run()?;
            info!("run done:\n{}", serde_json::to_string_pretty(&report)?);
        }
    };
    Ok(())
}
