//! Canonical configuration questions and reconciliation against a persisted file.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::CssPreprocessor;
use crate::prompt::Prompter;
use crate::utils::Result;

pub enum Kind {
    Confirm,
    Select(&'static [&'static str]),
    Input { default: &'static str },
}

pub struct Question {
    /// Dotted path of the answer inside the configuration.
    pub key: &'static str,
    pub message: &'static str,
    pub kind: Kind,
    pub when: Option<fn(&Value) -> bool>,
}

impl Question {
    pub fn applies(&self, answers: &Value) -> bool {
        self.when.map_or(true, |when| when(answers))
    }

    fn ask(&self, prompter: &mut dyn Prompter) -> Result<Value> {
        let value = match &self.kind {
            Kind::Confirm => Value::Bool(prompter.confirm(self.message, Some(true))?),
            Kind::Select(choices) => Value::String(prompter.select(self.message, choices, None)?),
            Kind::Input { default } => {
                Value::String(prompter.input(self.message, Some(*default))?)
            }
        };
        Ok(value)
    }
}

fn uses_typed_css_modules(answers: &Value) -> bool {
    let enabled = |key: &str| lookup(answers, key).and_then(Value::as_bool) == Some(true);
    enabled("usesCssModule") && enabled("usesTypeScript")
}

pub static QUESTIONS: [Question; 7] = [
    Question {
        key: "usesTypeScript",
        message: "Does this project use TypeScript?",
        kind: Kind::Confirm,
        when: None,
    },
    Question {
        key: "usesCssModule",
        message: "Does this project use CSS modules?",
        kind: Kind::Confirm,
        when: None,
    },
    Question {
        key: "cssPreprocessor",
        message: "Does this project use a CSS Preprocessor?",
        kind: Kind::Select(CssPreprocessor::NAMES),
        when: None,
    },
    Question {
        key: "component.default.path",
        message: "Set the default path directory to where your components will be generated in?",
        kind: Kind::Input {
            default: "src/components",
        },
        when: None,
    },
    Question {
        key: "component.default.withStyle",
        message: "Would you like to create a corresponding stylesheet file with each component you generate?",
        kind: Kind::Confirm,
        when: None,
    },
    Question {
        key: "component.default.withTest",
        message: "Would you like to create a corresponding test file with each component you generate that uses the SolidJs testing library?",
        kind: Kind::Confirm,
        when: None,
    },
    Question {
        key: "component.default.withModel",
        message: "Does this project use typed CSS modules and, if so, would you like to generate a model file?",
        kind: Kind::Confirm,
        when: Some(uses_typed_css_modules),
    },
];

/// Every dotted path leading to a non-object value.
pub fn deep_keys(value: &Value) -> Vec<String> {
    fn walk(value: &Value, prefix: &str, keys: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    walk(child, &path, keys);
                }
            }
            _ if !prefix.is_empty() => keys.push(prefix.to_string()),
            _ => {}
        }
    }
    let mut keys = Vec::new();
    walk(value, "", &mut keys);
    keys
}

pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

/// Inserts `value` at a dotted path, creating intermediate objects.
pub fn set_path(target: &mut Value, path: &str, value: Value) {
    let mut current = target;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let map = current.as_object_mut().expect("value was just made an object");
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Recursively merges `source` into `target`; `source` wins on conflicting leaves.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

/// Questions whose answer is absent from `persisted` and whose predicate holds against it.
pub fn missing(persisted: &Value) -> Vec<&'static Question> {
    let keys = deep_keys(persisted);
    QUESTIONS
        .iter()
        .filter(|question| !keys.iter().any(|key| key == question.key))
        .filter(|question| question.applies(persisted))
        .collect()
}

/// Asks `questions` in order and returns the answers as a nested object.
///
/// Predicates are evaluated at prompt time against `base` merged with the
/// answers given so far.
pub fn ask(
    questions: &[&Question],
    base: &Value,
    prompter: &mut dyn Prompter,
) -> Result<Value> {
    let mut answers = Value::Object(Map::new());
    let mut accumulated = base.clone();
    for question in questions {
        if !question.applies(&accumulated) {
            debug!(key = question.key, "skipping question");
            continue;
        }
        let value = question.ask(prompter)?;
        set_path(&mut accumulated, question.key, value.clone());
        set_path(&mut answers, question.key, value);
    }
    Ok(answers)
}
