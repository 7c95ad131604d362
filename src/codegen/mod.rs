pub mod idents;
pub mod source_writer;
