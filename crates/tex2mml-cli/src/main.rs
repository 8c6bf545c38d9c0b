use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use tex2mml::{Config, Spacing, translate};

/// Translate a restricted subset of LaTeX math notation into MathML.
///
/// The formula is read from stdin unless `--formula` is given. On success
/// the MathML document goes to stdout; on a translation failure the
/// structured error document goes to stdout instead, and the process still
/// exits successfully, since the diagnostic is the program's output.
#[derive(Parser)]
#[command(version, about, verbatim_doc_comment)]
struct Args {
    /// Produce MathML output (the only supported output mode).
    #[arg(long)]
    mathml: bool,

    /// Operator spacing policy.
    #[arg(long, value_enum, default_value_t = SpacingArg::Moderate)]
    spacing: SpacingArg,

    /// Translate this formula instead of reading stdin.
    #[arg(long)]
    formula: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SpacingArg {
    Tight,
    Moderate,
    Wide,
}

impl From<SpacingArg> for Spacing {
    fn from(arg: SpacingArg) -> Self {
        match arg {
            SpacingArg::Tight => Spacing::Tight,
            SpacingArg::Moderate => Spacing::Moderate,
            SpacingArg::Wide => Spacing::Wide,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if !args.mathml {
        eprintln!("error: no output mode selected; pass --mathml");
        return ExitCode::from(2);
    }
    let input = match args.formula {
        Some(formula) => formula,
        None => {
            let mut buf = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };
    let config = Config {
        spacing: args.spacing.into(),
    };
    match translate(&input, &config) {
        Ok(mathml) => println!("{mathml}"),
        Err(err) => println!("{}", err.to_xml()),
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
