use crate::io::{Error, ErrorKind};
use log::{info, warn};
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// The id of the record that plasmids are written under.
pub const PLASMID_RECORD_ID: &str = "Universal_Plasmid";
/// The number of symbols per line when writing plasmids.
pub const FASTA_LINE_WIDTH: usize = 70;

/// Read a genome from a fasta reader.
///
/// Lines starting with `>` are headers and are dropped. All other lines are trimmed, converted to upper case
/// and concatenated in order, so headerless files and blank lines are accepted.
/// If there are no sequence lines, the result is empty.
pub fn read_genome<R: BufRead>(reader: R) -> crate::io::Result<Vec<u8>> {
    let mut genome = Vec::new();
    let mut records_found = 0;
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            records_found += 1;
        } else {
            genome.extend(line.trim().bytes().map(|symbol| symbol.to_ascii_uppercase()));
        }
    }

    if genome.is_empty() {
        warn!("Genome contains no sequence");
    } else if records_found == 0 {
        info!("Read {} nt from a file without fasta headers", genome.len());
    } else {
        info!(
            "Read {} nt from {} fasta records",
            genome.len(),
            records_found
        );
    }
    Ok(genome)
}

/// Read a genome from a fasta file.
/// See [`read_genome`].
pub fn read_genome_file<P: AsRef<Path> + Debug>(path: P) -> crate::io::Result<Vec<u8>> {
    info!("Reading genome from {:?}", path);
    read_genome(BufReader::new(File::open(path)?))
}

/// Write a single fasta record with the sequence broken into lines of `line_width` symbols.
/// An empty sequence results in a header line only.
pub fn write_wrapped_record<W: Write>(
    writer: &mut W,
    id: &str,
    sequence: &[u8],
    line_width: usize,
) -> crate::io::Result<()> {
    if line_width == 0 {
        return Err(Error::from(ErrorKind::ZeroLineWidth));
    }

    writeln!(writer, ">{}", id)?;
    for line in sequence.chunks(line_width) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write a plasmid to a fasta file under [`PLASMID_RECORD_ID`].
/// The given file is created if it does not exist or truncated if it does exist.
pub fn write_plasmid_file<P: AsRef<Path> + Debug>(
    path: P,
    sequence: &[u8],
    line_width: usize,
) -> crate::io::Result<()> {
    info!("Writing plasmid of {} nt to {:?}", sequence.len(), path);
    let mut writer = BufWriter::new(File::create(path)?);
    write_wrapped_record(&mut writer, PLASMID_RECORD_ID, sequence, line_width)?;
    writer.flush()?;
    Ok(())
}
