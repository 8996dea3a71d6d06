//! A crate to build universal plasmid constructs from a genome.
//!
//! The origin of replication is located heuristically as the minimum of the cumulative GC skew of the genome.
//! A fixed-width window around it is then joined with antibiotic resistance markers and restriction sites,
//! each preceded by a scar sequence.
//!
//! The reference tables of markers and restriction sites are fixed and live in [`parts`].
#![warn(missing_docs)]
#![recursion_limit = "1024"]

/// The assembler that joins the origin region with markers and restriction sites.
pub mod assembly;
/// Contains the error types used by this crate.
pub mod error;
/// Contains functions for reading and writing genomes, design specifications and marker databases.
pub mod io;
/// The reference tables of known parts.
pub mod parts;
/// Extraction of the window around the origin of replication.
pub mod region;
/// The cumulative GC skew scan.
pub mod skew;
