//! Objects used to read weighted bipolar argumentation graphs and to write the results of the solvers.

mod bag_reader;
pub use bag_reader::BagReader;

mod csv_result_writer;
pub use csv_result_writer::CsvResultWriter;

mod specs;
pub use specs::InstanceReader;
pub use specs::ResultWriter;
pub use specs::WarningHandler;

mod table_result_writer;
pub use table_result_writer::TableResultWriter;
