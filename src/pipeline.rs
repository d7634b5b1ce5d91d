use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::convertor::Convertors;
use crate::request::Request;
use crate::resolve::{GeneratedFile, Resolver};
use crate::utils::Result;

/// What happened to one file type of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { filename: String, path: PathBuf },
    Conflict { filename: String, path: PathBuf },
    Failed { filename: String, path: PathBuf, error: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { filename, path } => {
                write!(f, "{filename} was successfully created at {}", path.display())
            }
            Self::Conflict { filename, path } => {
                write!(f, "{filename} already exists in this path \"{}\".", path.display())
            }
            Self::Failed { filename, error, .. } => {
                write!(f, "{filename} failed and was not created: {error}")
            }
        }
    }
}

/// Generates every requested file type of one component.
///
/// Each file type reports exactly one [`Outcome`] through `report` as soon as
/// it is known. Existing targets and write failures only affect their own
/// file; unknown component types, untemplatable directories and unusable
/// custom templates abort the batch with an error.
pub fn generate(
    root: impl AsRef<Path>,
    name: &str,
    request: &Request,
    config: &Config,
    mut report: impl FnMut(&Outcome),
) -> Result<Vec<Outcome>> {
    let root = root.as_ref();
    let convertors = Convertors::new(name);
    let resolver = Resolver::new(root, name, request, config, &convertors)?;
    info!(
        component = name,
        directory = %resolver.directory().display(),
        dry_run = request.dry_run,
        "generating component"
    );

    let mut outcomes = Vec::new();
    for file_type in request.file_types() {
        let file = resolver.resolve(&file_type)?;
        let outcome = emit(root, file, &convertors, request.dry_run);
        report(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn emit(root: &Path, file: GeneratedFile, convertors: &Convertors, dry_run: bool) -> Outcome {
    let GeneratedFile {
        component_path: path,
        filename,
        template,
    } = file;
    let target = root.join(&path);

    if target.exists() {
        debug!(path = %path.display(), "target already exists");
        return Outcome::Conflict { filename, path };
    }
    if dry_run {
        return Outcome::Created { filename, path };
    }

    match write(&target, &convertors.substitute(&template)) {
        Ok(()) => {
            info!(path = %path.display(), "created");
            Outcome::Created { filename, path }
        }
        Err(err) => {
            debug!(path = %path.display(), %err, "write failed");
            Outcome::Failed {
                filename,
                path,
                error: err.to_string(),
            }
        }
    }
}

fn write(target: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, contents)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn dry_run_reports_without_writing() {
        let dir = TempDir::new().unwrap();
        let config: Config = serde_json::from_value(json!({
            "usesTypeScript": true,
            "usesCssModule": false,
            "cssPreprocessor": "css",
            "component": { "default": { "path": "src/components", "withStyle": true } }
        }))
        .unwrap();
        let mut request = Request::new("default", config.component_type("default").unwrap());
        request.dry_run = true;

        let mut reported = Vec::new();
        let outcomes =
            generate(dir.path(), "Card", &request, &config, |o| reported.push(o.clone())).unwrap();

        assert_eq!(outcomes, reported);
        assert_eq!(
            outcomes,
            [
                Outcome::Created {
                    filename: String::from("index.tsx"),
                    path: PathBuf::from("src/components/Card/index.tsx"),
                },
                Outcome::Created {
                    filename: String::from("Card.css"),
                    path: PathBuf::from("src/components/Card/Card.css"),
                },
            ]
        );
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn outcome_messages() {
        let created = Outcome::Created {
            filename: String::from("index.js"),
            path: PathBuf::from("src/Card/index.js"),
        };
        assert_eq!(
            created.to_string(),
            "index.js was successfully created at src/Card/index.js"
        );
        let conflict = Outcome::Conflict {
            filename: String::from("index.js"),
            path: PathBuf::from("src/Card/index.js"),
        };
        assert_eq!(
            conflict.to_string(),
            "index.js already exists in this path \"src/Card/index.js\"."
        );
    }
}
