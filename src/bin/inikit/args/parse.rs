use std::path::PathBuf;

use super::types::{Args, Command, ParseArgError};

impl Args {
    pub fn parse() -> Result<Args, ParseArgError> {
        Args::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(args: I) -> Result<Args, ParseArgError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = args.next().ok_or(ParseArgError::NoCommand)?;

        let command = match command.as_str() {
            "check" => Command::Check {
                file: next_path(&mut args, "file")?,
            },
            "sections" => Command::Sections {
                file: next_path(&mut args, "file")?,
            },
            "keys" => Command::Keys {
                file: next_path(&mut args, "file")?,
                section: next_value(&mut args, "section")?,
            },
            "get" => Command::Get {
                file: next_path(&mut args, "file")?,
                section: next_value(&mut args, "section")?,
                key: next_value(&mut args, "key")?,
            },
            "set" => Command::Set {
                file: next_path(&mut args, "file")?,
                section: next_value(&mut args, "section")?,
                key: next_value(&mut args, "key")?,
                value: next_value(&mut args, "value")?,
            },
            "fmt" => parse_fmt(&mut args)?,
            other => return Err(ParseArgError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = args.next() {
            return Err(ParseArgError::UnexpectedArgument(extra));
        }

        Ok(Args { command })
    }
}

fn parse_fmt(args: &mut impl Iterator<Item = String>) -> Result<Command, ParseArgError> {
    let file = next_path(args, "file")?;
    let mut output = None;
    let mut spaced = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" => output = Some(next_path(args, "output file")?),
            "--spaced" => spaced = true,
            other => return Err(ParseArgError::UnknownOption(other.to_string())),
        }
    }

    Ok(Command::Fmt {
        file,
        output,
        spaced,
    })
}

fn next_value(
    args: &mut impl Iterator<Item = String>,
    name: &'static str,
) -> Result<String, ParseArgError> {
    args.next().ok_or(ParseArgError::MissingArgument(name))
}

fn next_path(
    args: &mut impl Iterator<Item = String>,
    name: &'static str,
) -> Result<PathBuf, ParseArgError> {
    next_value(args, name).map(PathBuf::from)
}
