use anyhow::Result;
use clap::Args;
use colored::Colorize;

use solidgen::{Outcome, Request};

use crate::{App, Command};

#[derive(Clone, Args)]
pub(crate) struct Generate {
    #[arg(required = true, help = "Names of the components to generate.")]
    names: Vec<String>,
    #[arg(
        long = "type",
        default_value = "default",
        help = "Component type from the 'component' object of the config file."
    )]
    component_type: String,
    #[arg(
        short,
        long,
        help = "Directory to generate into. Defaults to the component type's path."
    )]
    path: Option<String>,
    #[arg(long, help = "Generate the files without a component directory.")]
    flat: bool,
    #[arg(long = "dry-run", help = "Report what would be generated without writing files.")]
    dry_run: bool,
    #[arg(
        long = "custom-directory",
        help = "Component directory name containing a TemplateName-style token."
    )]
    custom_directory: Option<String>,
    #[arg(
        long = "with-style",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Create a corresponding stylesheet file."
    )]
    with_style: Option<bool>,
    #[arg(
        long = "with-test",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Create a corresponding test file."
    )]
    with_test: Option<bool>,
    #[arg(
        long = "with-model",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Create a corresponding typed CSS module declaration."
    )]
    with_model: Option<bool>,
}

impl App {
    pub(crate) fn generate(&self) -> Result<()> {
        let Command::Component(args) = &self.cli.command;

        let profile = self.config.component_type(&args.component_type)?;
        let mut request = Request::new(&args.component_type, profile);
        if let Some(path) = &args.path {
            request.path = path.clone();
        }
        request.flat = args.flat;
        request.dry_run = args.dry_run;
        request.custom_directory = args.custom_directory.clone();
        request.set_flag("withStyle", args.with_style);
        request.set_flag("withTest", args.with_test);
        request.set_flag("withModel", args.with_model);
        for (flag, value) in &self.custom_flags {
            request.set_flag(flag.clone(), Some(*value));
        }

        for name in &args.names {
            solidgen::generate(&self.root, name, &request, &self.config, print_outcome)?;
        }

        if args.dry_run {
            println!();
            println!(
                "{}",
                "NOTE: The \"dry-run\" flag means no changes were made.".yellow()
            );
        }
        Ok(())
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Created { .. } => println!("{}", outcome.to_string().green()),
        Outcome::Conflict { .. } | Outcome::Failed { .. } => {
            eprintln!("{}", outcome.to_string().red())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use solidgen::request::split_custom_flags;

    use crate::{Cli, Command};

    fn parse(raw: &[&str]) -> Cli {
        let (args, _) = split_custom_flags(raw.iter().map(|arg| arg.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn builtin_flag_takes_separate_value() {
        let cli = parse(&["solidgen", "c", "Card", "--with-style", "false", "--with-test"]);
        let Command::Component(args) = cli.command;
        assert_eq!(args.names, ["Card"]);
        assert_eq!(args.with_style, Some(false));
        assert_eq!(args.with_test, Some(true));
        assert_eq!(args.with_model, None);
    }

    #[test]
    fn builtin_flag_leaves_component_names_alone() {
        let cli = parse(&["solidgen", "component", "--with-model", "Card", "Modal"]);
        let Command::Component(args) = cli.command;
        assert_eq!(args.names, ["Card", "Modal"]);
        assert_eq!(args.with_model, Some(true));
    }
}
