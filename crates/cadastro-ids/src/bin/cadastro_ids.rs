//! Command-line front end: mask, validate, and extract CPF/CNPJ values.

use cadastro_ids::{extract_all, format_tax_id, validate_tax_id, TaxIdKind};
use clap::Parser;

/// Brazilian taxpayer identifier toolbox.
#[derive(Parser, Debug)]
#[command(name = "cadastro-ids", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Apply the CPF or CNPJ mask to the given text.
    Format {
        /// Identifier kind: cpf or cnpj.
        #[arg(long, default_value = "cpf")]
        kind: TaxIdKind,
        text: String,
    },
    /// Check the check digits of the given identifier.
    Validate { text: String },
    /// Find checksum-valid identifiers in the given text.
    Extract { text: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { kind, text } => {
            println!("{}", format_tax_id(&text, kind));
        }
        Commands::Validate { text } => {
            let validity = validate_tax_id(&text);
            println!("{}", serde_json::to_string_pretty(&validity)?);
            if !validity.valid {
                std::process::exit(1);
            }
        }
        Commands::Extract { text } => {
            let ids = extract_all(text);
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
    }

    Ok(())
}
