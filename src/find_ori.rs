use crate::CliOptions;
use clap::Parser;
use log::{error, info};
use plasmid_construct::io::fasta::read_genome_file;
use plasmid_construct::region::{extract_ori_region, ORI_FLANK};
use plasmid_construct::skew::SkewScan;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
pub struct FindOriCommand {
    #[clap(short, long, help = "The genome in fasta format")]
    pub input: PathBuf,

    #[clap(
        long,
        default_value_t = ORI_FLANK,
        help = "The number of genome symbols taken on each side of the origin of replication"
    )]
    pub flank: usize,

    #[clap(
        short,
        long,
        help = "A file to write the cumulative GC skew to, one tab-separated position and value per line"
    )]
    pub output: Option<PathBuf>,
}

pub(crate) fn find_ori(_options: &CliOptions, subcommand: &FindOriCommand) -> crate::Result<()> {
    let genome = read_genome_file(&subcommand.input).map_err(|e| {
        error!("Error reading genome file");
        e
    })?;

    let scan = SkewScan::scan(&genome).map_err(|e| {
        error!("Cannot locate the origin of replication");
        e
    })?;
    let region = extract_ori_region(&genome, scan.ori_index(), subcommand.flank);
    info!(
        "Minimum skew {} at position {}, the origin region spans {} nt",
        scan.minimum(),
        scan.ori_index(),
        region.len()
    );

    if let Some(output) = &subcommand.output {
        info!("Writing skew trace to {:?}", output);
        let mut writer = BufWriter::new(File::create(output)?);
        writeln!(writer, "position\tskew")?;
        for (position, skew) in scan.trace().iter().enumerate() {
            writeln!(writer, "{}\t{}", position, skew)?;
        }
        writer.flush()?;
    }

    println!("ORI index: {}", scan.ori_index());
    println!("Minimum skew: {}", scan.minimum());
    println!("Region size: {}", region.len());
    Ok(())
}
