use crate::CliOptions;
use clap::Parser;
use colored::*;
use log::{error, info, warn};
use plasmid_construct::assembly::construct_plasmid;
use plasmid_construct::io::design::read_design_file;
use plasmid_construct::io::fasta::{read_genome_file, write_plasmid_file, FASTA_LINE_WIDTH};
use plasmid_construct::io::marker_db::read_marker_db_file;
use plasmid_construct::region::ORI_FLANK;
use std::path::PathBuf;

#[derive(Parser)]
pub struct AssembleCommand {
    #[clap(short, long, help = "The genome in fasta format")]
    pub input: PathBuf,

    #[clap(
        short,
        long,
        help = "The design specification, one 'key,name' row per part; keys containing 'site' denote restriction sites, all others resistance markers"
    )]
    pub design: PathBuf,

    #[clap(
        short,
        long,
        help = "The marker database, one 'name,value' row per marker"
    )]
    pub markers: PathBuf,

    #[clap(
        short,
        long,
        default_value = "Output.fa",
        help = "The output file, to which the plasmid is written in fasta format"
    )]
    pub output: PathBuf,

    #[clap(
        long,
        default_value_t = ORI_FLANK,
        help = "The number of genome symbols taken on each side of the origin of replication"
    )]
    pub flank: usize,

    #[clap(
        long,
        default_value_t = FASTA_LINE_WIDTH,
        help = "The number of symbols per line in the output file"
    )]
    pub line_width: usize,
}

pub(crate) fn assemble_plasmid(
    _options: &CliOptions,
    subcommand: &AssembleCommand,
) -> crate::Result<()> {
    if subcommand.line_width == 0 {
        error!("The line width must be at least one");
        return Err(crate::Error::from(crate::ErrorKind::Parameter));
    }

    let genome = read_genome_file(&subcommand.input).map_err(|e| {
        error!("Error reading genome file");
        e
    })?;
    let design = read_design_file(&subcommand.design).map_err(|e| {
        error!("Error reading design file");
        e
    })?;
    let marker_db = read_marker_db_file(&subcommand.markers).map_err(|e| {
        error!("Error reading marker database");
        e
    })?;
    // Parts are only ever resolved against the built-in tables.
    info!(
        "Marker database with {} entries is not used for resolving parts",
        marker_db.len()
    );

    let construct = construct_plasmid(
        &genome,
        &design.resistances,
        &design.cut_sites,
        subcommand.flank,
    )
    .map_err(|e| {
        error!("Cannot locate the origin of replication");
        e
    })?;

    for skipped_part in &construct.skipped_parts {
        warn!("{} {} missing", skipped_part.category, skipped_part.name);
    }

    write_plasmid_file(
        &subcommand.output,
        &construct.sequence,
        subcommand.line_width,
    )?;

    println!("{}", "Plasmid generated".green());
    println!("ORI index: {}", construct.ori_index);
    println!("Total size: {}", construct.len());
    if !construct.skipped_parts.is_empty() {
        println!(
            "{}",
            format!("Skipped {} parts:", construct.skipped_parts.len()).yellow()
        );
        for skipped_part in &construct.skipped_parts {
            println!("  {} {}", skipped_part.category, skipped_part.name.yellow());
        }
    }

    Ok(())
}
