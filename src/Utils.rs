pub mod logger;
/// atoi/atof-like parsing of command line numbers
pub mod number_parser;
pub mod output_format;
pub mod settings;
/// nom parser for settings documents
pub mod task_parser;
pub mod timer;
