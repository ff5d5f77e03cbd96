// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use pokedex_app::{CatalogController, CatalogSource, PokemonDetails, lookup_key};
use runtime::SourceRuntime;
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `pokedex --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let client = pokedex_api::Client::new(config.api_base_url(), config.api_timeout()?)
        .with_context(|| {
            format!(
                "invalid [api] config in {}; fix base_url/timeout values",
                options.config_path.display()
            )
        })?
        .with_detail_concurrency(config.detail_concurrency());
    let controller_options = config.controller_options()?;
    if options.check_only {
        return Ok(());
    }

    if let Some(key) = options.lookup.as_deref() {
        let details = client
            .details(&lookup_key(key))
            .map_err(|error| anyhow!("lookup {key:?} against {}: {error}", client.base_url()))?;
        print!("{}", render_lookup(&details));
        return Ok(());
    }

    let log_file = config.log_file()?;
    logging::init_logging(&config.log_filter(), &log_file)?;
    info!(
        event_name = "app.started",
        base_url = client.base_url(),
        page_size = controller_options.page_size,
        debounce_ms = controller_options.debounce.as_millis() as u64,
        log_file = %log_file.display(),
        "starting pokedex"
    );

    let mut controller = CatalogController::new(controller_options);
    let mut runtime = SourceRuntime::new(client);
    pokedex_tui::run_app(&mut controller, &mut runtime)
}

fn render_lookup(details: &PokemonDetails) -> String {
    let types = details
        .types
        .iter()
        .map(|tag| tag.label())
        .collect::<Vec<_>>()
        .join(" / ");
    let abilities = details
        .abilities
        .iter()
        .map(|ability| ability.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!(
        "{}  {}  {}\nheight: {:.1} m\nweight: {:.1} kg\nabilities: {}\n",
        details.display_number(),
        details.display_name(),
        types,
        details.height_meters(),
        details.weight_kilograms(),
        abilities,
    );
    for stat in &details.stats {
        out.push_str(&format!("{:<8} {:>3}\n", stat.label(), stat.base));
    }
    out.push_str(&format!("{:<8} {:>3}\n", "Total", details.total_base_stats()));
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    lookup: Option<String>,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        lookup: None,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--lookup" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--lookup requires a pokemon id or name"))?;
                let value = value.as_ref().trim();
                if value.is_empty() {
                    return Err(anyhow!("--lookup requires a pokemon id or name"));
                }
                options.lookup = Some(value.to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("pokedex");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and exit");
    println!("  --lookup <id-or-name>    Print one Pokémon and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args, render_lookup};
    use anyhow::Result;
    use pokedex_testkit::sample_details;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/pokedex-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                print_config_path: false,
                print_example: false,
                check_only: false,
                lookup: None,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_values() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));

        let error = parse_cli_args(vec!["--lookup", "  "], default_options_path())
            .expect_err("blank lookup should fail");
        assert!(error.to_string().contains("--lookup requires"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_flags_and_lookup() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--print-config-path",
                "--print-example-config",
                "--check",
                "--lookup",
                " Pikachu ",
            ],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert_eq!(options.lookup.as_deref(), Some("Pikachu"));
        assert!(!options.show_help);

        let options = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(options.show_help);
        Ok(())
    }

    #[test]
    fn lookup_output_lists_profile_and_stats() {
        let details = sample_details(25);
        let output = render_lookup(&details);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("#025  Pikachu  ELECTRIC"));
        assert!(output.contains(&format!("height: {:.1} m", details.height_meters())));
        assert!(output.contains("HP "));
        assert!(output.ends_with(&format!("Total    {:>3}\n", details.total_base_stats())));
    }
}
