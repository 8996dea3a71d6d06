use log::info;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A name to value mapping of markers, as supplied by the user.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MarkerDatabase {
    entries: HashMap<String, String>,
}

impl MarkerDatabase {
    /// Returns the value stored for the given marker name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// The number of distinct marker names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the database contains no markers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read a marker database.
///
/// Lines are split at their first comma into a name and a value, both trimmed.
/// Empty lines and lines without a comma are ignored, and later entries replace earlier ones.
pub fn read_marker_db<R: BufRead>(reader: R) -> crate::io::Result<MarkerDatabase> {
    let mut entries = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if let Some((name, value)) = line.trim().split_once(',') {
            entries.insert(name.trim().to_owned(), value.trim().to_owned());
        }
    }

    Ok(MarkerDatabase { entries })
}

/// Read a marker database from a file.
/// See [`read_marker_db`].
pub fn read_marker_db_file<P: AsRef<Path> + Debug>(path: P) -> crate::io::Result<MarkerDatabase> {
    info!("Reading marker database from {:?}", path);
    let database = read_marker_db(BufReader::new(File::open(path)?))?;
    info!("Marker database contains {} entries", database.len());
    Ok(database)
}

#[cfg(test)]
mod tests {
    use super::read_marker_db;

    #[test]
    fn test_parse() {
        let input = "\
Ampicillin, bla , extra
no comma here

Kanamycin,nptII
 Ampicillin ,bla2
,orphan
";
        let database = read_marker_db(input.as_bytes()).unwrap();
        assert_eq!(database.len(), 3);
        assert_eq!(database.get("Ampicillin"), Some("bla2"));
        assert_eq!(database.get("Kanamycin"), Some("nptII"));
        assert_eq!(database.get(""), Some("orphan"));
        assert_eq!(database.get("no comma here"), None);
    }

    #[test]
    fn test_value_keeps_later_commas() {
        let database = read_marker_db("Ampicillin,bla, extra".as_bytes()).unwrap();
        assert_eq!(database.get("Ampicillin"), Some("bla, extra"));
    }

    #[test]
    fn test_empty() {
        assert!(read_marker_db("".as_bytes()).unwrap().is_empty());
    }
}
