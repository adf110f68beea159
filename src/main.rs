use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::debug;

use lectern::content::{self, ContentDocument};
use lectern::dom::{Head, Page};
use lectern::engine::{Configuration, Engine, Settings};
use lectern::rendering::{validate, Registry, Resolved};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("lectern")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Render educational content documents into interactive HTML pages.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Report what the renderer is doing on standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Check that every topic in the given document can be rendered")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON file containing the content document you want to check."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given document as a static HTML page")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .action(ArgAction::Set)
                        .help("File to write the page to. The default, or \"-\", is standard output."),
                )
                .arg(
                    Arg::new("stylesheet")
                        .short('s')
                        .long("stylesheet")
                        .action(ArgAction::Set)
                        .help("URL of a stylesheet for the page to link to."),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .action(ArgAction::Set)
                        .help("JSON file with renderer settings: subject, theme, and features."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON file containing the content document you want to render."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => missing("filename"),
            };
            debug!(?filename);

            let document = load_and_parse(filename);
            let problems = check(filename, &document);
            if problems > 0 {
                std::process::exit(1);
            }
        }
        Some(("render", submatches)) => {
            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => missing("filename"),
            };
            debug!(?filename);

            let settings = match submatches.get_one::<String>("config") {
                Some(config) => load_settings(Path::new(config)),
                None => Settings::default(),
            };

            let stylesheet = submatches
                .get_one::<String>("stylesheet")
                .cloned();

            let document = load_and_parse(filename);
            let output = render(document, settings, stylesheet);

            match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                None | Some("-") => print!("{}", output),
                Some(target) => {
                    if let Err(error) = std::fs::write(target, output) {
                        eprintln!(
                            "{}: {}: {}",
                            "error".bright_red(),
                            target,
                            error
                        );
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: lectern [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn missing(name: &str) -> ! {
    eprintln!("{}: missing argument {}", "error".bright_red(), name);
    std::process::exit(2);
}

fn load_and_parse(filename: &Path) -> ContentDocument {
    let source = match content::load(filename) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    match content::parse(filename, &source) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("{}", problem::full_parsing_error(&error, &source));
            std::process::exit(1);
        }
    }
}

fn load_settings(filename: &Path) -> Settings {
    let source = match content::load(filename) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    match serde_json::from_str::<Settings>(&source) {
        Ok(settings) => settings,
        Err(error) => {
            let error = content::ParsingError::from_json(filename, &error);
            eprintln!("{}", problem::full_parsing_error(&error, &source));
            std::process::exit(1);
        }
    }
}

/// Report topics which would render as a placeholder, returning how many
/// there were.
fn check(filename: &Path, document: &ContentDocument) -> usize {
    let registry = Registry::new();
    let mut problems = 0;

    for (index, topic) in document
        .topics
        .iter()
        .enumerate()
    {
        let result = match registry.resolve(&topic.kind) {
            Some(Resolved::Builtin(variant)) => validate(variant, topic).map_err(|error| {
                format!("has content which doesn't fit {}: {}", variant, error)
            }),
            Some(Resolved::Custom(_)) => Ok(()),
            None => Err(format!("has unknown type {}", topic.kind)),
        };

        if let Err(message) = result {
            eprintln!("{}", problem::topic_problem(filename, index, topic, &message));
            problems += 1;
        }
    }

    debug!(problems);
    problems
}

fn render(document: ContentDocument, settings: Settings, stylesheet: Option<String>) -> String {
    let head = Head {
        title: document
            .section
            .as_ref()
            .map(|section| {
                section
                    .title
                    .clone()
            })
            .unwrap_or_default(),
        subject: settings
            .subject
            .clone(),
        stylesheet,
        theme: settings.theme_variables(),
    };

    let mut engine = Engine::new(Configuration::from_settings(settings), Page::new());
    engine.init(document);
    let page = engine.into_gateway();

    match page.to_html(&head) {
        Ok(html) => html,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}
