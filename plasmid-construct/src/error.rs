use crate::parts::PartCategory;
use error_chain::error_chain;

error_chain! {
    links {
        // The doc comments have to be put after the item in this macro.
        FileFormat(crate::io::Error, crate::io::ErrorKind)
        /// A wrapper for errors thrown while reading or writing files.
        ;
    }

    errors {
        /// The genome sequence given to the skew scan is empty.
        EmptyInput {
            description("the genome sequence is empty")
            display("the genome sequence is empty, no origin of replication can be located")
        }

        /// A part name is not present in its reference table.
        UnknownPart(name: String, category: PartCategory) {
            description("a part name is not present in its reference table")
            display("{} {} missing", category, name)
        }
    }
}
