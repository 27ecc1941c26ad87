use crate::container::ContainerError;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("Module not found: {0}")]
    ModuleNotFound(String),
    #[error("Invalid module reference: {0}")]
    InvalidReference(String),
    #[error("Module already loaded: {0}")]
    AlreadyLoaded(String),
    #[error(transparent)]
    Container(#[from] ContainerError),
}

pub type BootResult<T> = std::result::Result<T, BootError>;
