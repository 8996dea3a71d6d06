use crate::CliOptions;
use clap::Parser;
use colored::*;
use plasmid_construct::parts::{PartTable, ANTIBIOTIC_GENES, RESTRICTIONS, SCAR};

#[derive(Parser)]
pub struct ListPartsCommand {
    #[clap(long, help = "Print only the names, without sequences")]
    pub names_only: bool,
}

fn print_table(title: &str, table: &PartTable, names_only: bool) {
    println!("{} ({} {}s)", title.bold(), table.len(), table.category());
    if names_only {
        for name in table.names() {
            println!("  {}", name);
        }
    } else {
        for (name, sequence) in table.iter() {
            println!("  {:<24}{}", name, sequence);
        }
    }
}

pub(crate) fn list_parts(_options: &CliOptions, subcommand: &ListPartsCommand) -> crate::Result<()> {
    print_table("Resistance markers", &ANTIBIOTIC_GENES, subcommand.names_only);
    print_table("Restriction sites", &RESTRICTIONS, subcommand.names_only);
    println!("{} {}", "Scar:".bold(), SCAR);
    Ok(())
}
