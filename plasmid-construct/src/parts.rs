use crate::error::{Error, ErrorKind};
use std::fmt::{Display, Formatter};

/// The scar sequence inserted in front of every appended part.
pub const SCAR: &str = "TACTAGAG";

/// The kind of a part, deciding which reference table it is resolved against.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PartCategory {
    /// An antibiotic resistance marker gene.
    Marker,
    /// A restriction enzyme recognition site.
    Enzyme,
}

impl Display for PartCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PartCategory::Marker => write!(f, "marker"),
            PartCategory::Enzyme => write!(f, "enzyme"),
        }
    }
}

/// A fixed mapping from part names to their nucleotide sequences.
#[derive(Debug)]
pub struct PartTable {
    category: PartCategory,
    entries: &'static [(&'static str, &'static str)],
}

impl PartTable {
    /// Creates a table of the given category. Names are expected to be unique.
    pub const fn new(
        category: PartCategory,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { category, entries }
    }

    /// The category of the parts in this table.
    pub fn category(&self) -> PartCategory {
        self.category
    }

    /// Returns the sequence of the part with exactly the given name.
    /// Names are case-sensitive.
    pub fn resolve(&self, name: &str) -> crate::error::Result<&'static [u8]> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, sequence)| sequence.as_bytes())
            .ok_or_else(|| Error::from(ErrorKind::UnknownPart(name.to_owned(), self.category)))
    }

    /// Iterates over the names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Iterates over all `(name, sequence)` entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// The number of parts in this table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table contains no parts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recognition sites of the known restriction enzymes.
pub static RESTRICTIONS: PartTable = PartTable::new(
    PartCategory::Enzyme,
    &[
        ("EcoRI", "GAATTC"),
        ("BamHI", "GGATCC"),
        ("HindIII", "AAGCTT"),
        ("PstI", "CTGCAG"),
        ("SphI", "GCATGC"),
        ("SalI", "GTCGAC"),
        ("XbaI", "TCTAGA"),
        ("KpnI", "GGTACC"),
        ("SacI", "GAGCTC"),
        ("SmaI", "CCCGGG"),
        ("NotI", "GCGGCCGC"),
    ],
);

/// Sequences of the known antibiotic resistance markers.
pub static ANTIBIOTIC_GENES: PartTable = PartTable::new(
    PartCategory::Marker,
    &[
        ("Ampicillin", "ATGAGTATTCAACATTTCCGTGTCGCCCTTATTCCCTTTTTTG"),
        ("Kanamycin", "ATGAGCCATATTCAACGGGAAACGTCTTGCTCGAGGCC"),
        ("Chloramphenicol", "ATGGAGAAAAAAATCACTGGATATACCACCGTTGATATATCC"),
        ("Blue_White_Selection", "ATGACCATGATTACGCCAAGCTTGCATGCCTGCAGGTCGAC"),
    ],
);
