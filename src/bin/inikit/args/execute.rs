use inikit::IniWriteOptions;

use super::error::CliError;
use super::types::{Args, Command};

impl Args {
    pub fn execute(&self) -> Result<(), CliError> {
        match &self.command {
            Command::Check { file } => {
                inikit::read_ini_file(file)?;
                println!("OK");
            }
            Command::Sections { file } => {
                let document = inikit::read_ini_file(file)?;
                for name in document.sections() {
                    println!("{name}");
                }
            }
            Command::Keys { file, section } => {
                let document = inikit::read_ini_file(file)?;
                for key in document.keys(section) {
                    println!("{key}");
                }
            }
            Command::Get { file, section, key } => {
                let document = inikit::read_ini_file(file)?;
                println!("{}", document.get(section, key)?);
            }
            Command::Set {
                file,
                section,
                key,
                value,
            } => {
                let mut document = inikit::read_ini_file(file)?;
                document.set(section, key, value);
                inikit::write_ini_file(file, &document, &IniWriteOptions::default())?;
            }
            Command::Fmt {
                file,
                output,
                spaced,
            } => {
                let document = inikit::read_ini_file(file)?;
                let options = IniWriteOptions {
                    blank_line_between_sections: *spaced,
                };
                match output {
                    Some(path) => inikit::write_ini_file(path, &document, &options)?,
                    None => print!("{}", inikit::write_ini(&document, &options)),
                }
            }
        }

        Ok(())
    }
}
