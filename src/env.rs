use std::env;
use std::path::Path;

use crate::load::{load_path, ParseReport};
use crate::options::ParseOptions;
use crate::parser::PropertyHandler;
use crate::Result;

/// Environment form of a property name: `.` becomes `_`, ASCII letters are
/// uppercased.
pub fn env_var_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '.' { '_' } else { c.to_ascii_uppercase() })
        .collect()
}

/// Delivery handler that mirrors properties into the process environment.
/// An empty value unsets the variable instead of setting it to "".
#[derive(Debug, Default)]
pub struct EnvSink;

impl PropertyHandler for EnvSink {
    fn property(&mut self, name: &str, value: &str) -> Result<()> {
        let key = env_var_name(name);
        if value.is_empty() {
            env::remove_var(key);
        } else {
            env::set_var(key, value);
        }
        Ok(())
    }
}

pub fn load_env_from_path<P: AsRef<Path>>(path: P) -> Result<ParseReport> {
    load_path(path, &mut EnvSink, &ParseOptions::default())
}
