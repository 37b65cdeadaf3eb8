use std::path::PathBuf;

use crate::SummaryError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliAction {
    Help,
    Summarize(CommandLineConfig),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub input: PathBuf,
}

impl CommandLineConfig {
    /// Parses `args` as received from `env::args`, program name first.
    pub fn from_args(args: &[&str]) -> Result<CliAction, SummaryError> {
        let mut input = None;
        for arg in args.iter().skip(1) {
            match *arg {
                "--help" | "-h" => return Ok(CliAction::Help),
                other if other.starts_with('-') => {
                    return Err(SummaryError::invalid_input(format!("unknown flag {other}")));
                }
                other => {
                    if input.is_some() {
                        return Err(SummaryError::invalid_input(format!(
                            "unexpected argument {other}"
                        )));
                    }
                    input = Some(PathBuf::from(other));
                }
            }
        }
        let input =
            input.ok_or_else(|| SummaryError::invalid_input("missing input file argument"))?;
        Ok(CliAction::Summarize(Self { input }))
    }

    pub fn help() -> &'static str {
        "Usage: benchsummary <results.csv>\n\n\
         Reads subject,variant,value rows (first row is a header) and prints\n\
         baseline/variant ratio statistics for every non-baseline variant.\n"
    }
}
