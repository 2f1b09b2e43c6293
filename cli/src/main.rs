use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{ArgAction, Parser};
use propline::{parse_str, ParseOptions, Properties};

#[derive(Parser, Debug)]
#[command(name = "propline", version, about = "Java-style .properties parser")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Emit the properties as a JSON object.
    #[arg(long)]
    json: bool,

    /// Emit environment-variable form names (a.b.c becomes A_B_C).
    #[arg(long = "env-names")]
    env_names: bool,

    /// Print the value of a single property and exit.
    #[arg(long, value_name = "name", conflicts_with_all = ["json", "env_names"])]
    get: Option<String>,

    /// Parser state capacity in bytes.
    #[arg(long, value_name = "bytes", default_value_t = propline::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Skip malformed entries instead of failing.
    #[arg(long = "no-strict", action = ArgAction::SetFalse, default_value_t = true)]
    strict: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;
    let options = ParseOptions::new()
        .with_capacity(args.capacity)
        .with_strict(args.strict);

    let mut properties = Properties::new();
    let mut handler = |name: &str, value: &str| -> propline::Result<()> {
        properties.insert(name, value);
        Ok(())
    };
    let report = parse_str(&input, &mut handler, &options)?;
    drop(handler);

    for line in &report.skipped_lines {
        eprintln!("WARN  skipped malformed line {line}");
    }

    if let Some(name) = &args.get {
        let value = properties
            .get(name)
            .ok_or_else(|| format!("property {name:?} not found"))?;
        return with_output_writer(args.output.as_deref(), |writer| {
            writeln!(writer, "{value}")?;
            Ok(())
        });
    }

    with_output_writer(args.output.as_deref(), |writer| {
        if args.json {
            serde_json::to_writer_pretty(&mut *writer, &properties)?;
            writeln!(writer)?;
        } else {
            for (name, value) in properties.iter() {
                let name = if args.env_names {
                    propline::env_var_name(name)
                } else {
                    name.to_string()
                };
                writeln!(writer, "{name}={value}")?;
            }
        }
        Ok(())
    })
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}
