#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod assemble;
mod find_ori;
mod list_parts;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        PlasmidConstruct(plasmid_construct::error::Error, plasmid_construct::error::ErrorKind);
        FileFormat(plasmid_construct::io::Error, plasmid_construct::io::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "Universal Plasmid", version = env!("CARGO_PKG_VERSION"))]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Builds a universal plasmid from the origin region of a genome and the parts requested by a design."
    )]
    Assemble(assemble::AssembleCommand),
    #[clap(about = "Locates the origin of replication of a genome by its GC skew minimum.")]
    FindOri(find_ori::FindOriCommand),
    /// Prints the known resistance markers, restriction sites and the scar sequence.
    ListParts(list_parts::ListPartsCommand),
}

// The main is unpacked from an error-chain macro.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) -> Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .map_err(|e| Error::from(format!("could not initialise logging: {}", e)))?;

    info!("Logging initialised successfully");
    Ok(())
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level)?;

    match &options.subcommand {
        Command::Assemble(subcommand) => assemble::assemble_plasmid(options, subcommand),
        Command::FindOri(subcommand) => find_ori::find_ori(options, subcommand),
        Command::ListParts(subcommand) => list_parts::list_parts(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}
