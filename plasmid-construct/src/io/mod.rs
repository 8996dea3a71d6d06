use error_chain::error_chain;

/// A module providing functions to read genomes and write plasmids in fasta format.
pub mod fasta;
/// A module providing a parser for design specifications.
pub mod design;
/// A module providing a parser for marker databases.
pub mod marker_db;

error_chain! {
    foreign_links {
        // The doc comments have to be put after the item in this macro.
        Io(std::io::Error)
        /// An IO error.
        ;
    }

    errors {
        /// A row of a design specification does not consist of exactly two comma-separated fields.
        MalformedDesignRow(line: usize, content: String) {
            description("a design row does not consist of exactly two comma-separated fields")
            display("design row {} does not consist of exactly two comma-separated fields: '{}'", line, content)
        }

        /// A fasta line width of zero was requested.
        ZeroLineWidth {
            description("the fasta line width is zero")
            display("the fasta line width must be at least one")
        }
    }
}
