use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    File(#[from] inikit::Error),
    #[error(transparent)]
    Document(#[from] inikit::DocumentError),
}
