use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error(
        "please make sure that you're running the commands from the root level of your project \
         (no readable '{}' found)",
        .0.display()
    )]
    NotProjectRoot(PathBuf),
    #[error(
        "component type '{0}' does not exist in the config file under the 'component' object"
    )]
    UnknownComponentType(String),
    #[error(
        "custom directory '{directory}' for {component} does not contain a templatable value"
    )]
    UntemplatableDirectory { directory: String, component: String },
    #[error("'{}' is not a valid configuration: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("custom file type '{0}' requires a custom template path under 'customTemplates'")]
    MissingCustomTemplate(String),
    #[error("custom template path '{}' could not be read", .path.display())]
    CustomTemplate {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn file_name_string<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub(crate) fn is_readable(path: impl AsRef<Path>) -> bool {
    std::fs::File::open(path).is_ok()
}
