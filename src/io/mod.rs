pub mod json_reader;
pub mod report;
pub mod solution_writer;

pub use json_reader::load_instance;
