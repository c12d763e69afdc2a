use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("{}", .0)]
    Client(#[from] parrot_api_client::ClientError),

    #[error("{}", .0)]
    Chat(#[from] parrot_core::ChatError),

    #[error("Preference::{}", .0)]
    Preference(#[from] parrot_core::preference::PreferenceError),
}
