//! Per-file-type template and target path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::builtin;
use crate::config::{ComponentType, Config};
use crate::convertor::Convertors;
use crate::request::{FileType, Request};
use crate::utils::{self, Error, Result};

/// Test library whose queries rely on the built-in `data-testid` attribute.
pub const TESTING_LIBRARY: &str = "Testing Library";

/// Placeholder replaced by the component name in custom template file names.
const FILENAME_PLACEHOLDER: &str = "TemplateName";

/// A file ready to be written, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub component_path: PathBuf,
    pub filename: String,
    pub template: String,
}

/// Everything the resolvers need for one component.
pub struct Resolver<'a> {
    root: &'a Path,
    name: &'a str,
    request: &'a Request,
    config: &'a Config,
    profile: &'a ComponentType,
    directory: PathBuf,
}

impl<'a> Resolver<'a> {
    pub fn new(
        root: &'a Path,
        name: &'a str,
        request: &'a Request,
        config: &'a Config,
        convertors: &'a Convertors,
    ) -> Result<Self> {
        let profile = config.component_type(&request.component_type)?;
        let directory = component_directory(name, request, config, convertors)?;
        Ok(Self {
            root,
            name,
            request,
            config,
            profile,
            directory,
        })
    }

    /// Directory all files of this component are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn resolve(&self, file_type: &FileType) -> Result<GeneratedFile> {
        let (filename, template) = match file_type {
            FileType::Component => self.component()?,
            FileType::Style => self.style()?,
            FileType::Test => self.test()?,
            FileType::Model => self.model(),
            FileType::Custom(key) => self
                .custom_template(key)?
                .ok_or_else(|| Error::MissingCustomTemplate(key.clone()))?,
        };
        debug!(%file_type, %filename, "resolved template");
        Ok(GeneratedFile {
            component_path: self.directory.join(&filename),
            filename,
            template,
        })
    }

    fn custom_template(&self, key: &str) -> Result<Option<(String, String)>> {
        let Some(path) = self.profile.custom_templates.get(key) else {
            return Ok(None);
        };
        let template = fs::read_to_string(self.root.join(path)).map_err(|source| {
            Error::CustomTemplate {
                path: path.clone(),
                source,
            }
        })?;
        let filename = utils::file_name_string(path).replacen(FILENAME_PLACEHOLDER, self.name, 1);
        Ok(Some((filename, template)))
    }

    fn stylesheet_name(&self) -> String {
        let module = if self.config.uses_css_module { ".module" } else { "" };
        format!("{}{}.{}", self.name, module, self.config.css_preprocessor)
    }

    fn component(&self) -> Result<(String, String)> {
        if let Some(custom) = self.custom_template("component")? {
            return Ok(custom);
        }

        let (filename, mut template) = if self.config.uses_type_script {
            ("index.tsx", builtin::COMPONENT_TS.to_string())
        } else {
            ("index.js", builtin::COMPONENT_JS.to_string())
        };

        let keeps_test_id = self.config.test_library.as_deref() == Some(TESTING_LIBRARY)
            && self.request.flag("withTest");
        if !keeps_test_id {
            template = template.replacen(builtin::TEST_ID_ATTR, "", 1);
        }

        if self.request.flag("withStyle") {
            let stylesheet = format!("'./{}'", self.stylesheet_name());
            if self.config.uses_css_module {
                template = template.replacen(builtin::MODULE_IMPORT_PATH, &stylesheet, 1);
            } else {
                template = template.replacen(builtin::CLASS_LOOKUP, &format!("\"{}\"", self.name), 1);
                template = template.replacen(builtin::MODULE_IMPORT_BINDING, &stylesheet, 1);
            }
        } else {
            template = template.replacen(builtin::CLASS_ATTR, "", 1);
            template = template.replacen(builtin::MODULE_IMPORT_LINE, "", 1);
        }

        Ok((filename.to_string(), template))
    }

    fn style(&self) -> Result<(String, String)> {
        if let Some(custom) = self.custom_template("style")? {
            return Ok(custom);
        }
        Ok((self.stylesheet_name(), builtin::STYLE.to_string()))
    }

    fn test(&self) -> Result<(String, String)> {
        if let Some(custom) = self.custom_template("test")? {
            return Ok(custom);
        }
        let extension = if self.config.uses_type_script { "tsx" } else { "js" };
        Ok((
            format!("{}.test.{extension}", self.name),
            builtin::TEST.to_string(),
        ))
    }

    fn model(&self) -> (String, String) {
        (
            format!("{}.module.{}.d.ts", self.name, self.config.css_preprocessor),
            builtin::MODEL.to_string(),
        )
    }
}

/// `request.path`, plus the component directory unless the request is flat.
///
/// The directory is the component name, or the last non-empty custom
/// directory among project, `default` type, selected type and request, with
/// its tokens substituted.
pub fn component_directory(
    name: &str,
    request: &Request,
    config: &Config,
    convertors: &Convertors,
) -> Result<PathBuf> {
    let base = PathBuf::from(&request.path);
    if request.flat {
        return Ok(base);
    }

    let custom = [
        config.custom_directory.as_deref(),
        config
            .component
            .get("default")
            .and_then(|profile| profile.custom_directory.as_deref()),
        config
            .component
            .get(&request.component_type)
            .and_then(|profile| profile.custom_directory.as_deref()),
        request.custom_directory.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|directory| !directory.is_empty())
    .last();

    let directory = match custom {
        Some(directory) if Convertors::contains_token(directory) => {
            convertors.substitute(directory).into_owned()
        }
        Some(directory) => {
            return Err(Error::UntemplatableDirectory {
                directory: directory.to_string(),
                component: name.to_string(),
            })
        }
        None => name.to_string(),
    };
    Ok(base.join(directory))
}
