pub mod writer;

pub use writer::write as write_collection;
