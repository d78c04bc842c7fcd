use contacts_files::FilesError;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("photo storage failed: {0}")]
    Files(#[from] FilesError),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write contact file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read contact file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove contact record: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
}

pub type ContactResult<T> = std::result::Result<T, ContactError>;
