use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Data file is not valid YAML: {}", .0.display())]
    InvalidData(std::path::PathBuf),
    #[error("Data file contains values the template engine cannot index: {}", .0.display())]
    UnsupportedData(std::path::PathBuf),
    #[error("Invalid partial template: {0}")]
    InvalidPartial(String),
    #[error("Failed to render template: {}", .0.display())]
    Render(std::path::PathBuf),
}
