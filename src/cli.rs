use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
    pub help: bool,
}

/// Parse command-line arguments (without the program name).
///
/// Supported forms:
///   trello-github
///   trello-github --config ./sync.toml
///   trello-github --dry-run -v
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i]));
                } else {
                    bail!("Missing value for -c/--config flag");
                }
            }
            "-n" | "--dry-run" => parsed.dry_run = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "-h" | "--help" => parsed.help = true,
            other => bail!("Unknown argument `{other}`. Run with --help for usage."),
        }
        i += 1;
    }

    Ok(parsed)
}

pub fn print_help() {
    println!("trello-github: sync Trello cards to GitHub issues\n");
    println!("USAGE:");
    println!("  trello-github [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -c, --config <path>  Config file (default ~/.trello-github/config.toml)");
    println!("  -n, --dry-run        Log the planned changes without writing to GitHub");
    println!("  -v, --verbose        Debug logging (RUST_LOG takes precedence)");
    println!("  -h, --help           Show this help");
    println!();
    println!("ENVIRONMENT:");
    println!("  TRELLO_API_KEY, TRELLO_TOKEN, GITHUB_TOKEN override the config file");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(parse_args(&args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn parse_config_path() {
        let parsed = parse_args(&args(&["--config", "/tmp/sync.toml"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/sync.toml")));
    }

    #[test]
    fn parse_short_flags() {
        let parsed = parse_args(&args(&["-c", "a.toml", "-n", "-v"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("a.toml")));
        assert!(parsed.dry_run);
        assert!(parsed.verbose);
        assert!(!parsed.help);
    }

    #[test]
    fn parse_help() {
        assert!(parse_args(&args(&["--help"])).unwrap().help);
    }

    #[test]
    fn parse_missing_config_value_fails() {
        let result = parse_args(&args(&["--config"]));
        assert!(result.unwrap_err().to_string().contains("Missing value"));
    }

    #[test]
    fn parse_unknown_flag_fails() {
        let result = parse_args(&args(&["--force"]));
        assert!(result.unwrap_err().to_string().contains("--force"));
    }
}
