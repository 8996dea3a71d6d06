use crate::parts::{PartCategory, PartTable, ANTIBIOTIC_GENES, RESTRICTIONS, SCAR};
use crate::region::extract_ori_region;
use crate::skew::SkewScan;
use log::{debug, info};

/// A requested part that was not found in its reference table and was left out of the construct.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SkippedPart {
    /// The name as given in the design.
    pub name: String,
    /// The table the name was looked up in.
    pub category: PartCategory,
}

/// A sequence built by the [`Assembler`], together with the parts it had to leave out.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AssembledSequence {
    /// The assembled nucleotides.
    pub sequence: Vec<u8>,
    /// The unresolved parts, in the order they were requested.
    pub skipped_parts: Vec<SkippedPart>,
}

/// Joins an origin region with markers and restriction sites, putting the scar in front of each part.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    marker_table: &'a PartTable,
    enzyme_table: &'a PartTable,
    scar: &'a [u8],
}

impl Default for Assembler<'static> {
    fn default() -> Self {
        Self::new(&ANTIBIOTIC_GENES, &RESTRICTIONS, SCAR.as_bytes())
    }
}

impl<'a> Assembler<'a> {
    /// Creates an assembler resolving markers and enzymes against the given tables.
    pub fn new(marker_table: &'a PartTable, enzyme_table: &'a PartTable, scar: &'a [u8]) -> Self {
        Self {
            marker_table,
            enzyme_table,
            scar,
        }
    }

    /// Appends all resolvable markers and then all resolvable enzymes to `region`.
    ///
    /// Order within each list is kept and nothing is deduplicated.
    /// Unresolvable names are reported in [`AssembledSequence::skipped_parts`] and contribute nothing.
    pub fn assemble<Marker: AsRef<str>, Enzyme: AsRef<str>>(
        &self,
        region: &[u8],
        markers: &[Marker],
        enzymes: &[Enzyme],
    ) -> AssembledSequence {
        let mut result = AssembledSequence {
            sequence: region.to_vec(),
            skipped_parts: Vec::new(),
        };

        for marker in markers {
            self.append_part(&mut result, self.marker_table, marker.as_ref());
        }
        for enzyme in enzymes {
            self.append_part(&mut result, self.enzyme_table, enzyme.as_ref());
        }

        result
    }

    fn append_part(&self, result: &mut AssembledSequence, table: &PartTable, name: &str) {
        match table.resolve(name) {
            Ok(part) => {
                debug!("Appending {} {} ({} nt)", table.category(), name, part.len());
                result.sequence.extend_from_slice(self.scar);
                result.sequence.extend_from_slice(part);
            }
            Err(error) => {
                debug!("Skipping part: {}", error);
                result.skipped_parts.push(SkippedPart {
                    name: name.to_owned(),
                    category: table.category(),
                });
            }
        }
    }
}

/// A finished plasmid construct.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlasmidConstruct {
    /// The position of the skew minimum in the genome.
    pub ori_index: usize,
    /// The assembled plasmid sequence.
    pub sequence: Vec<u8>,
    /// The parts that could not be resolved.
    pub skipped_parts: Vec<SkippedPart>,
}

impl PlasmidConstruct {
    /// The length of the plasmid sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True if the plasmid sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Locates the origin of `genome`, cuts out `flank` symbols on each side of it and appends the given parts
/// with the default tables and scar.
///
/// Fails only if the genome is empty.
pub fn construct_plasmid<Marker: AsRef<str>, Enzyme: AsRef<str>>(
    genome: &[u8],
    markers: &[Marker],
    enzymes: &[Enzyme],
    flank: usize,
) -> crate::error::Result<PlasmidConstruct> {
    let scan = SkewScan::scan(genome)?;
    let ori_index = scan.ori_index();
    info!(
        "Found origin of replication at position {} with skew {}",
        ori_index,
        scan.minimum()
    );

    let region = extract_ori_region(genome, ori_index, flank);
    info!("Extracted origin region of {} nt", region.len());

    let AssembledSequence {
        sequence,
        skipped_parts,
    } = Assembler::default().assemble(region, markers, enzymes);

    Ok(PlasmidConstruct {
        ori_index,
        sequence,
        skipped_parts,
    })
}
