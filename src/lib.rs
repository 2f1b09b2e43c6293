pub mod document;
pub mod env;
pub mod error;
pub mod load;
pub mod options;
pub mod parser;
pub mod scan;

pub use crate::document::Properties;
pub use crate::env::{env_var_name, load_env_from_path, EnvSink};
pub use crate::error::{Error, ErrorKind};
pub use crate::load::{load_path, load_reader, parse_str, ParseReport};
pub use crate::options::{ParseOptions, DEFAULT_CAPACITY};
pub use crate::parser::{LineStatus, ParserState, PropertyHandler};

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_str(input: &str) -> Result<Properties> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options(input: &str, options: &ParseOptions) -> Result<Properties> {
    Properties::from_str_with_options(input, options)
}
