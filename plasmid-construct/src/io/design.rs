use crate::io::{Error, ErrorKind};
use log::{debug, info};
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The parts requested by a design specification, in the order they were declared.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DesignSpecification {
    /// Names of the restriction enzymes whose sites should be added.
    pub cut_sites: Vec<String>,
    /// Names of the resistance markers that should be added.
    pub resistances: Vec<String>,
}

/// Read a design specification.
///
/// Every non-empty line must consist of a key and a name separated by a single comma.
/// Rows whose key contains `site` in any case are cut sites, all other rows are resistance markers.
pub fn read_design<R: BufRead>(reader: R) -> crate::io::Result<DesignSpecification> {
    let mut design = DesignSpecification::default();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<_> = line.split(',').map(str::trim).collect();
        let (key, name) = match fields.as_slice() {
            [key, name] => (*key, *name),
            _ => {
                return Err(Error::from(ErrorKind::MalformedDesignRow(
                    line_index + 1,
                    line.to_owned(),
                )))
            }
        };

        if key.to_lowercase().contains("site") {
            debug!("Design row {}: cut site {}", line_index + 1, name);
            design.cut_sites.push(name.to_owned());
        } else {
            debug!("Design row {}: resistance {}", line_index + 1, name);
            design.resistances.push(name.to_owned());
        }
    }

    Ok(design)
}

/// Read a design specification from a file.
/// See [`read_design`].
pub fn read_design_file<P: AsRef<Path> + Debug>(path: P) -> crate::io::Result<DesignSpecification> {
    info!("Reading design from {:?}", path);
    let design = read_design(BufReader::new(File::open(path)?))?;
    info!(
        "Design requests {} resistances and {} cut sites",
        design.resistances.len(),
        design.cut_sites.len()
    );
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::read_design;
    use crate::io::ErrorKind;

    #[test]
    fn test_classification() {
        let input = "\
cut_site_1, EcoRI
resistance,Ampicillin

  Restriction SITE ,NotI
marker , Unknown_X
Siteless,Kanamycin
";
        let design = read_design(input.as_bytes()).unwrap();
        assert_eq!(design.cut_sites, vec!["EcoRI", "NotI", "Kanamycin"]);
        assert_eq!(design.resistances, vec!["Ampicillin", "Unknown_X"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let design = read_design("site,EcoRI\nsite,EcoRI\n".as_bytes()).unwrap();
        assert_eq!(design.cut_sites, vec!["EcoRI", "EcoRI"]);
        assert!(design.resistances.is_empty());
    }

    #[test]
    fn test_empty_design() {
        let design = read_design("\n   \n".as_bytes()).unwrap();
        assert!(design.cut_sites.is_empty());
        assert!(design.resistances.is_empty());
    }

    #[test]
    fn test_malformed_rows() {
        for (input, expected_line) in [
            ("site,EcoRI\nAmpicillin\n", 2),
            ("\nsite,EcoRI,BamHI\n", 2),
            ("a,b,\n", 1),
        ] {
            match read_design(input.as_bytes()) {
                Err(error) => match error.kind() {
                    ErrorKind::MalformedDesignRow(line, _) => assert_eq!(*line, expected_line),
                    other => panic!("unexpected error {:?}", other),
                },
                Ok(design) => panic!("parsed malformed design {:?}", design),
            }
        }
    }
}
