use std::fmt;

use indexmap::IndexMap;

use crate::config::ComponentType;
use crate::convertor::to_camel_case;

/// Category of generated file within one component's batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileType {
    Component,
    Style,
    Test,
    Model,
    /// Keyed by the camelCase name used under `customTemplates`.
    Custom(String),
}

impl FileType {
    /// Maps a request flag such as `withStyle` or `withStory` to its file type.
    pub fn from_flag(flag: &str) -> Option<Self> {
        let (_, rest) = flag.split_once("with")?;
        let file_type = match rest {
            "Style" => Self::Style,
            "Test" => Self::Test,
            "Model" => Self::Model,
            "" => return None,
            custom => Self::Custom(to_camel_case(custom)),
        };
        Some(file_type)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => f.write_str("component"),
            Self::Style => f.write_str("style"),
            Self::Test => f.write_str("test"),
            Self::Model => f.write_str("model"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// One generation request, derived from CLI flags and the selected component type.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub component_type: String,
    /// Base directory the component directory is created in.
    pub path: String,
    pub flat: bool,
    pub dry_run: bool,
    pub custom_directory: Option<String>,
    /// `with*` flags, resolved against the component type's defaults.
    pub flags: IndexMap<String, bool>,
}

impl Request {
    pub fn new(component_type: impl Into<String>, profile: &ComponentType) -> Self {
        Self {
            component_type: component_type.into(),
            path: profile.path.clone(),
            flags: profile.flag_defaults(),
            ..Default::default()
        }
    }

    /// Overrides a flag's default when the CLI provided a value.
    pub fn set_flag(&mut self, flag: impl Into<String>, value: Option<bool>) {
        let flag = flag.into();
        match value {
            Some(value) => {
                self.flags.insert(flag, value);
            }
            None => {
                self.flags.entry(flag).or_insert(false);
            }
        }
    }

    pub fn flag(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    /// The component itself followed by every enabled `with*` file type.
    pub fn file_types(&self) -> Vec<FileType> {
        let mut file_types = vec![FileType::Component];
        for (flag, enabled) in &self.flags {
            if !*enabled {
                continue;
            }
            if let Some(file_type) = FileType::from_flag(flag) {
                if !file_types.contains(&file_type) {
                    file_types.push(file_type);
                }
            }
        }
        file_types
    }
}

const BUILTIN_FLAGS: [&str; 3] = ["with-style", "with-test", "with-model"];

/// Splits `--with-<custom>[=value]` flags out of raw arguments.
///
/// Built-in `--with-style`, `--with-test` and `--with-model` are left in place.
/// Returns the remaining arguments and the custom flags keyed in camelCase
/// (`--with-story-book` becomes `withStoryBook`). A bare flag is true; a value
/// is true only when it is exactly `true`.
///
/// A `true` or `false` argument right after any `--with-*` flag is its value,
/// so `--with-style false` reaches clap as `--with-style=false`.
pub fn split_custom_flags<I>(args: I) -> (Vec<String>, IndexMap<String, bool>)
where
    I: IntoIterator<Item = String>,
{
    let mut rest = Vec::new();
    let mut custom = IndexMap::new();
    let mut args = args.into_iter().peekable();
    while let Some(arg) = args.next() {
        if arg == "--" {
            rest.push(arg);
            rest.extend(args);
            break;
        }
        let Some(flag) = arg.strip_prefix("--") else {
            rest.push(arg);
            continue;
        };
        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };
        if !name.starts_with("with-") || name == "with-" {
            rest.push(arg);
            continue;
        }
        let value = match value {
            Some(value) => Some(value),
            None => args.next_if(|next| next == "true" || next == "false"),
        };
        if BUILTIN_FLAGS.contains(&name) {
            match value {
                Some(value) => rest.push(format!("--{name}={value}")),
                None => rest.push(arg),
            }
            continue;
        }
        custom.insert(
            to_camel_case(name),
            value.map_or(true, |value| value == "true"),
        );
    }
    (rest, custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn file_type_from_flag() {
        assert_eq!(FileType::from_flag("withStyle"), Some(FileType::Style));
        assert_eq!(FileType::from_flag("withModel"), Some(FileType::Model));
        assert_eq!(
            FileType::from_flag("withStoryBook"),
            Some(FileType::Custom(String::from("storyBook")))
        );
        assert_eq!(FileType::from_flag("flat"), None);
        assert_eq!(FileType::from_flag("with"), None);
    }

    #[test]
    fn file_types_follow_enabled_flags_in_order() {
        let profile = ComponentType {
            path: String::from("src/components"),
            with_style: Some(true),
            with_test: Some(false),
            ..Default::default()
        };
        let mut request = Request::new("default", &profile);
        request.set_flag("withTest", Some(true));
        request.set_flag("withStory", Some(true));
        request.set_flag("withModel", None);

        assert_eq!(
            request.file_types(),
            [
                FileType::Component,
                FileType::Style,
                FileType::Test,
                FileType::Custom(String::from("story"))
            ]
        );
        assert_eq!(request.path, "src/components");
        assert!(!request.flag("withModel"));
    }

    #[test]
    fn cli_value_overrides_type_default() {
        let profile = ComponentType {
            path: String::from("src"),
            with_style: Some(true),
            ..Default::default()
        };
        let mut request = Request::new("default", &profile);
        request.set_flag("withStyle", Some(false));
        assert_eq!(request.file_types(), [FileType::Component]);
    }

    #[test]
    fn split_custom_flags_keeps_builtins() {
        let (rest, custom) = split_custom_flags(args(&[
            "solidgen",
            "component",
            "Card",
            "--with-style",
            "--with-story-book",
            "--with-docs=false",
            "--with-fixture=true",
            "--dry-run",
        ]));
        assert_eq!(
            rest,
            args(&["solidgen", "component", "Card", "--with-style", "--dry-run"])
        );
        assert_eq!(
            custom.into_iter().collect::<Vec<_>>(),
            [
                (String::from("withStoryBook"), true),
                (String::from("withDocs"), false),
                (String::from("withFixture"), true)
            ]
        );
    }

    #[test]
    fn split_custom_flags_takes_separate_boolean_values() {
        let (rest, custom) = split_custom_flags(args(&[
            "solidgen",
            "c",
            "Card",
            "--with-style",
            "false",
            "--with-story",
            "false",
            "--with-docs",
            "true",
            "--with-test",
            "Modal",
            "--with-fixture",
            "Banner",
        ]));
        assert_eq!(
            rest,
            args(&[
                "solidgen",
                "c",
                "Card",
                "--with-style=false",
                "--with-test",
                "Modal",
                "Banner"
            ])
        );
        assert_eq!(
            custom.into_iter().collect::<Vec<_>>(),
            [
                (String::from("withStory"), false),
                (String::from("withDocs"), true),
                (String::from("withFixture"), true)
            ]
        );
    }

    #[test]
    fn split_custom_flags_stops_at_double_dash() {
        let (rest, custom) = split_custom_flags(args(&["c", "--", "--with-story"]));
        assert_eq!(rest, args(&["c", "--", "--with-story"]));
        assert!(custom.is_empty());
    }
}
