use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::prompt::Prompter;
use crate::question::{self, QUESTIONS};
use crate::request::FileType;
use crate::utils::{self, Error, Result};

pub const CONFIG_FILE: &str = "generate-solidjs-cli.json";
pub const PROJECT_MARKER: &str = "package.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssPreprocessor {
    #[default]
    Css,
    Scss,
    Less,
    Styl,
}

impl CssPreprocessor {
    pub const NAMES: &'static [&'static str] = &["css", "scss", "less", "styl"];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Styl => "styl",
        }
    }
}

impl fmt::Display for CssPreprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A named generation profile under the `component` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentType {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_style: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_test: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_model: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_directory: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub custom_templates: IndexMap<String, PathBuf>,
    /// Remaining keys; `with<X>` booleans among them are custom file type defaults.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ComponentType {
    /// Default `with*` flags in declaration order, built-ins first.
    pub fn flag_defaults(&self) -> IndexMap<String, bool> {
        let mut flags = IndexMap::new();
        for (key, value) in [
            ("withStyle", self.with_style),
            ("withTest", self.with_test),
            ("withModel", self.with_model),
        ] {
            if let Some(value) = value {
                flags.insert(key.to_string(), value);
            }
        }
        for (key, value) in &self.extra {
            if let (Some(_), Some(value)) = (FileType::from_flag(key), value.as_bool()) {
                flags.insert(key.clone(), value);
            }
        }
        flags
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub uses_type_script: bool,
    pub uses_css_module: bool,
    pub css_preprocessor: CssPreprocessor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_library: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_directory: Option<String>,
    pub component: IndexMap<String, ComponentType>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Config {
    pub fn component_type(&self, key: &str) -> Result<&ComponentType> {
        self.component
            .get(key)
            .ok_or_else(|| Error::UnknownComponentType(key.to_string()))
    }

    pub fn path(root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(CONFIG_FILE)
    }

    /// Writes the configuration as 2-space indented JSON.
    pub fn persist(&self, root: impl AsRef<Path>) -> Result<()> {
        write_json(root, &serde_json::to_value(self)?)
    }

    /// Loads the persisted configuration, asking for whatever it lacks.
    ///
    /// A missing or unparsable configuration file is rebuilt from the full
    /// question set. A file that parses but does not describe a valid
    /// configuration is left untouched and reported as an error.
    pub fn resolve(root: impl AsRef<Path>, prompter: &mut dyn Prompter) -> Result<Self> {
        let root = root.as_ref();
        let marker = root.join(PROJECT_MARKER);
        if !utils::is_readable(&marker) {
            return Err(Error::NotProjectRoot(marker));
        }

        match read_persisted(root) {
            Some(persisted) => reconcile(root, persisted, prompter),
            None => create(root, prompter),
        }
    }
}

fn read_persisted(root: &Path) -> Option<Value> {
    let path = Config::path(root);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(path = %path.display(), %err, "no persisted config");
            return None;
        }
    };
    match serde_json::from_str::<Value>(&contents) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            warn!(path = %path.display(), "persisted config is not a JSON object");
            None
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to parse persisted config");
            None
        }
    }
}

fn write_json(root: impl AsRef<Path>, value: &Value) -> Result<()> {
    let path = Config::path(root);
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(&path, contents)?;
    info!(path = %path.display(), "persisted config");
    Ok(())
}

/// Asks for the missing answers and persists them, unless the merged file
/// would still not decode, in which case nothing is written.
fn reconcile(root: &Path, mut persisted: Value, prompter: &mut dyn Prompter) -> Result<Config> {
    let missing = question::missing(&persisted);
    if missing.is_empty() {
        return decode(root, persisted);
    }

    debug!(
        keys = ?missing.iter().map(|q| q.key).collect::<Vec<_>>(),
        "config is missing answers"
    );
    banner(&[
        "Generate SolidJs CLI has been updated and has a few new features from the last time you ran it within this project.",
        "",
        &format!("Please answer a few questions to update the \"{CONFIG_FILE}\" config file."),
    ]);
    let answers = question::ask(&missing, &persisted, prompter)?;
    question::deep_merge(&mut persisted, answers);
    let config = decode(root, persisted.clone())?;
    write_json(root, &persisted)?;
    println!();
    println!(
        "{}",
        format!("The \"{CONFIG_FILE}\" config file has been successfully updated for this project.").cyan()
    );
    farewell("You can always go back and manually update it as needed.");
    Ok(config)
}

fn decode(root: &Path, value: Value) -> Result<Config> {
    serde_json::from_value(value).map_err(|source| Error::InvalidConfig {
        path: Config::path(root),
        source,
    })
}

fn create(root: &Path, prompter: &mut dyn Prompter) -> Result<Config> {
    banner(&[
        "It looks like this is the first time that you're running generate-solidjs-cli within this project.",
        "",
        &format!(
            "Answer a few questions to customize generate-solidjs-cli for your project needs (this will create a \"{CONFIG_FILE}\" config file on the root level of this project)."
        ),
    ]);

    let questions = QUESTIONS.iter().collect::<Vec<_>>();
    let answers = question::ask(&questions, &Value::Object(Default::default()), prompter)?;
    let config = serde_json::from_value::<Config>(answers)?;
    config.persist(root)?;

    println!();
    println!(
        "{}",
        format!("The \"{CONFIG_FILE}\" config file has been successfully created on the root level of your project.").cyan()
    );
    farewell("You can always go back and update it as needed.");
    Ok(config)
}

fn banner(lines: &[&str]) {
    let rule = "-".repeat(100);
    println!();
    println!("{}", rule.cyan());
    for line in lines {
        println!("{}", line.cyan());
    }
    println!("{}", rule.cyan());
    println!();
}

fn farewell(note: &str) {
    println!();
    println!("{}", note.cyan());
    println!();
    println!("{}", "Happy Hacking!".cyan());
    println!();
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_collects_custom_flag_defaults() {
        let config = serde_json::from_value::<Config>(json!({
            "usesTypeScript": true,
            "usesCssModule": true,
            "cssPreprocessor": "scss",
            "component": {
                "default": {
                    "path": "src/components",
                    "withStyle": true,
                    "withTest": false,
                    "withStory": true,
                    "showwithDocs": false,
                    "with": true,
                    "customTemplates": { "story": "templates/TemplateName.stories.tsx" }
                }
            }
        }))
        .unwrap();

        let default = config.component_type("default").unwrap();
        assert_eq!(config.css_preprocessor, CssPreprocessor::Scss);
        assert_eq!(
            default.flag_defaults().into_iter().collect::<Vec<_>>(),
            [
                (String::from("withStyle"), true),
                (String::from("withTest"), false),
                (String::from("withStory"), true),
                (String::from("showwithDocs"), false)
            ]
        );
        assert_eq!(
            default.custom_templates.get("story"),
            Some(&PathBuf::from("templates/TemplateName.stories.tsx"))
        );
    }

    #[test]
    fn unknown_component_type_is_an_error() {
        let config = serde_json::from_value::<Config>(json!({
            "usesTypeScript": false,
            "usesCssModule": false,
            "cssPreprocessor": "css",
            "component": { "default": { "path": "src/components" } }
        }))
        .unwrap();
        assert!(matches!(
            config.component_type("page"),
            Err(Error::UnknownComponentType(key)) if key == "page"
        ));
    }

    #[test]
    fn unknown_top_level_keys_survive_a_round_trip() {
        let value = json!({
            "usesTypeScript": false,
            "usesCssModule": false,
            "cssPreprocessor": "less",
            "testLibrary": "Testing Library",
            "component": { "default": { "path": "src" } },
            "someFutureOption": [1, 2]
        });
        let config = serde_json::from_value::<Config>(value).unwrap();
        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["someFutureOption"], json!([1, 2]));
        assert_eq!(back["testLibrary"], json!("Testing Library"));
        assert_eq!(back["component"]["default"], json!({ "path": "src" }));
    }
}
