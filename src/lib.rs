//! Scaffolding for SolidJS components.
//!
//! [`Config::resolve`] loads (or interactively builds) the project's
//! `generate-solidjs-cli.json`; [`pipeline::generate`] turns a component name
//! and a [`Request`] into files on disk.

pub mod builtin;
pub mod config;
pub mod convertor;
pub mod pipeline;
pub mod prompt;
pub mod question;
pub mod request;
pub mod resolve;
pub mod utils;

pub use config::{ComponentType, Config, CssPreprocessor};
pub use convertor::Convertors;
pub use pipeline::{generate, Outcome};
pub use request::{FileType, Request};
pub use utils::{Error, Result};
