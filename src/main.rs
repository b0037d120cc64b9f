use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use jmdict_reader::{DictError, JMdict, KanjiDic, ParseOptions};

/// Converts JMdict and KANJIDIC2 XML files to JSON.
#[derive(Parser, Debug)]
#[command(name = "jmdict-reader", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a dictionary file and write its records as a JSON array.
    Convert {
        /// Source XML file.
        #[arg(short, long)]
        input: PathBuf,

        /// Destination JSON file.
        #[arg(short, long)]
        output: PathBuf,

        /// Dictionary grammar of the input.
        #[arg(short, long, value_enum, default_value_t = Format::Jmdict)]
        format: Format,

        /// Expand entity codes such as `&n;` into their descriptions (JMdict only).
        #[arg(long)]
        resolve_entities: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Jmdict,
    Kanjidic,
}

fn convert(input: &Path, output: &Path, format: Format, resolve_entities: bool) -> Result<usize, DictError> {
    match format {
        Format::Jmdict => {
            let options = ParseOptions::new().resolve_entities(resolve_entities);
            let dict = JMdict::from_xml_file_with(input, &options)?;
            dict.write_to_json_file(output)?;
            Ok(dict.len())
        }
        Format::Kanjidic => {
            if resolve_entities {
                eprintln!("WARNING: --resolve-entities has no effect on KANJIDIC2 input.");
            }
            let dict = KanjiDic::from_xml_file(input)?;
            if let Some(header) = dict.header() {
                if let Some(version) = &header.database_version {
                    println!("  Database version: {}", version);
                }
            }
            dict.write_to_json_file(output)?;
            Ok(dict.len())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            input,
            output,
            format,
            resolve_entities,
        } => {
            println!("Reading {:?} file: {}", format, input.display());
            println!("{}", "=".repeat(60));

            match convert(&input, &output, format, resolve_entities) {
                Ok(count) => {
                    println!("SUCCESS! {} records written to {}", count, output.display());
                }
                Err(e) => {
                    eprintln!("\nERROR: Failed to convert dictionary file");
                    eprintln!("  {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
