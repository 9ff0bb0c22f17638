//! Main CLI application

use crate::cli::completion::print_completions;
use crate::config::{parse_config_auto, parse_config_file, validate_config, Config, Profile};
use crate::error::{ConfigError, LaunchError};
use crate::runner::{
    execute_command, placeholders, render, select_mode, Context, Invocation, Mode, Verbosity,
};
use crate::ui::preset_name;
use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed configuration, built-in presets included
    config: Config,
    /// Config file path, when one was found
    config_path: Option<PathBuf>,
}

impl App {
    /// Create a new app, discovering the configuration file
    pub fn new() -> Result<Self, LaunchError> {
        let (config, config_path) = parse_config_auto()?;
        Self::from_config(config, config_path)
    }

    /// Create app with a specific config file
    pub fn with_config_file(path: PathBuf) -> Result<Self, LaunchError> {
        let config = parse_config_file(&path)?;
        Self::from_config(config, Some(path))
    }

    /// Create app from an already loaded configuration
    pub fn from_config(config: Config, config_path: Option<PathBuf>) -> Result<Self, LaunchError> {
        validate_config(&config)?;
        let command = build_command(&config);

        Ok(App {
            command,
            config,
            config_path,
        })
    }

    /// Run the application with the full argument vector (program name first)
    pub fn run(self, args: Vec<String>) -> Result<(), LaunchError> {
        let preset_key = extract_preset_arg(&args)
            .unwrap_or_else(|| self.config.default_preset_name().to_string());
        let preset = self
            .config
            .presets
            .get(&preset_key)
            .ok_or_else(|| ConfigError::PresetNotFound(preset_key.clone()))?;

        // The mode argument is only recognised in first position and is consumed before clap sees it
        let launcher_args = args.get(1..).unwrap_or_default();
        let mode = select_mode(launcher_args, &preset.debug_flags);
        let mode_arg = mode_argument(&self.command, launcher_args, mode);
        let clap_args = strip_mode_arg(&args, mode_arg.is_some());

        let mut command = self.command.clone();
        let matches = command.clone().get_matches_from(clap_args);

        if let Some(shell) = matches.get_one::<Shell>("completions") {
            print_completions(*shell, &mut command);
            return Ok(());
        }

        if matches.get_flag("list") {
            print_presets(&self.config);
            return Ok(());
        }

        let ctx = Context::new()
            .with_config_path(self.config_path.clone())
            .with_dry_run(matches.get_flag("dry-run"))
            .with_verbosity(get_verbosity(&matches));

        match &ctx.config_path {
            Some(path) => ctx.print_debug(&format!("Using config file: {}", path.display())),
            None => ctx.print_debug("No config file found, using built-in presets"),
        }
        if let (Some(arg), Mode::Release) = (mode_arg, mode) {
            ctx.print_debug(&format!("'{}' is not a debug flag, using release mode", arg));
        }
        if !ctx.dry_run {
            ctx.print_info(&format!("Launching preset '{}' in {} mode", preset_key, mode));
        }

        let profile = mode.profile(preset);
        let overrides = cli_overrides(&matches)?;
        for name in unused_overrides(&overrides, profile) {
            ctx.print_info(&format!(
                "Variable '{}' is not used by the {} profile of preset '{}'",
                name, mode, preset_key
            ));
        }

        let vars = merge_vars(&preset.vars, overrides);
        ctx.print_debug(&format!("Variables: {}", format_vars(&vars)));

        let extra: Vec<String> = matches
            .get_many::<String>("extra")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let invocation = Invocation::resolve(profile, &vars, &extra)?;
        execute_command(&invocation, &ctx)?;

        Ok(())
    }
}

/// Build the clap command from configuration
fn build_command(config: &Config) -> Command {
    let preset_names: Vec<String> = config.presets.keys().cloned().collect();

    Command::new("rlaunch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a cargo project with a debug or release argument preset")
        .override_usage("rlaunch [DEBUG-FLAG] [OPTIONS] [-- <EXTRA>...]")
        .after_help(format!(
            "Pass one of the preset's debug flags as the FIRST argument to run its debug profile \
             (default preset '{}': {}).",
            config.default_preset_name(),
            config
                .presets
                .get(config.default_preset_name())
                .map(|p| p.debug_flags.join(", "))
                .unwrap_or_default()
        ))
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to rlaunch.yml config file"),
        )
        .arg(
            Arg::new("preset")
                .short('p')
                .long("preset")
                .value_name("NAME")
                .value_parser(PossibleValuesParser::new(preset_names))
                .help("Preset to launch"),
        )
        .arg(
            Arg::new("maxloop")
                .long("maxloop")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Override the maxloop variable"),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("MS")
                .value_parser(value_parser!(u64))
                .help("Override the interval variable"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .help("Override a preset variable"),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the command instead of running it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List available presets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Print a shell completion script"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extra")
                .value_name("EXTRA")
                .num_args(0..)
                .last(true)
                .help("Extra arguments appended to the launched command"),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Variable assignments from the command line, in the order they apply
fn cli_overrides(matches: &ArgMatches) -> Result<Vec<(String, String)>, ConfigError> {
    let mut overrides = Vec::new();

    if let Some(n) = matches.get_one::<u64>("maxloop") {
        overrides.push(("maxloop".to_string(), n.to_string()));
    }
    if let Some(ms) = matches.get_one::<u64>("interval") {
        overrides.push(("interval".to_string(), ms.to_string()));
    }

    // --set wins over the shortcuts
    if let Some(assignments) = matches.get_many::<String>("set") {
        for assignment in assignments {
            overrides.push(parse_assignment(assignment)?);
        }
    }

    Ok(overrides)
}

/// Preset variables with overrides applied
fn merge_vars(
    preset_vars: &BTreeMap<String, String>,
    overrides: Vec<(String, String)>,
) -> BTreeMap<String, String> {
    let mut vars = preset_vars.clone();
    vars.extend(overrides);
    vars
}

/// Overridden variable names the profile has no placeholder for
fn unused_overrides(overrides: &[(String, String)], profile: &Profile) -> Vec<String> {
    let used = placeholders(&profile.args);
    let mut unused: Vec<String> = overrides
        .iter()
        .map(|(name, _)| name.clone())
        .filter(|name| !used.contains(name))
        .collect();
    unused.sort();
    unused.dedup();
    unused
}

/// Split a `KEY=VALUE` assignment
fn parse_assignment(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(ConfigError::InvalidVar(s.to_string())),
    }
}

fn format_vars(vars: &BTreeMap<String, String>) -> String {
    vars.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print every preset with its resolved templates
fn print_presets(config: &Config) {
    let default = config.default_preset_name();

    for (name, preset) in &config.presets {
        let marker = if name == default { " (default)" } else { "" };
        println!(
            "{}{}: {}",
            preset_name(name),
            marker,
            preset.usage.as_deref().unwrap_or("")
        );
        println!("    debug flags: {}", preset.debug_flags.join(", "));

        for mode in [Mode::Debug, Mode::Release] {
            let line = match Invocation::resolve(mode.profile(preset), &preset.vars, &[]) {
                Ok(invocation) => render(&invocation),
                Err(e) => format!("<{}>", e),
            };
            println!("    {:<7} {}", mode.to_string(), line);
        }
    }
}

/// The first launcher argument when it is a mode selector rather than a launcher option.
///
/// A debug flag always qualifies. Any other value qualifies unless clap knows it as an
/// option, so `rlaunch foo` runs the release profile like `rlaunch` does.
fn mode_argument<'a>(
    command: &Command,
    launcher_args: &'a [String],
    mode: Mode,
) -> Option<&'a str> {
    let first = launcher_args.first()?;
    match mode {
        Mode::Debug => Some(first.as_str()),
        Mode::Release if is_launcher_option(command, first) => None,
        Mode::Release => Some(first.as_str()),
    }
}

/// Whether `arg` is `--` or one of the command's own options
fn is_launcher_option(command: &Command, arg: &str) -> bool {
    if arg == "--" {
        return true;
    }

    if let Some(long) = arg.strip_prefix("--") {
        let name = long.split_once('=').map_or(long, |(name, _)| name);
        return name == "help"
            || name == "version"
            || command.get_arguments().any(|a| a.get_long() == Some(name));
    }

    match arg.strip_prefix('-').and_then(|rest| rest.chars().next()) {
        Some(c) => {
            c == 'h' || c == 'V' || command.get_arguments().any(|a| a.get_short() == Some(c))
        }
        None => false,
    }
}

/// Drop the consumed mode argument, keeping the program name for clap
fn strip_mode_arg(args: &[String], consumed: bool) -> Vec<String> {
    let skip = if consumed { 2 } else { 1 };
    args.first()
        .cloned()
        .into_iter()
        .chain(args.iter().skip(skip).cloned())
        .collect()
}

/// Find the value of a `--long VALUE`, `--long=VALUE` or `-s VALUE` option before `--`
fn extract_option(args: &[String], short: &str, long: &str) -> Option<String> {
    let long_eq = format!("{}=", long);

    let mut iter = args.iter().skip(1).take_while(|a| a.as_str() != "--");
    while let Some(arg) = iter.next() {
        if arg == short || arg == long {
            return iter.next().cloned();
        }
        if let Some(value) = arg.strip_prefix(&long_eq) {
            return Some(value.to_string());
        }
    }
    None
}

/// Extract --file argument before clap parsing
fn extract_file_arg(args: &[String]) -> Option<PathBuf> {
    extract_option(args, "-f", "--file").map(PathBuf::from)
}

/// Extract --preset argument before clap parsing
fn extract_preset_arg(args: &[String]) -> Option<String> {
    extract_option(args, "-p", "--preset")
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), LaunchError> {
    run_from(std::env::args().collect())
}

/// Run the CLI application with provided arguments (program name first)
pub fn run_from(args: Vec<String>) -> Result<(), LaunchError> {
    let app = match extract_file_arg(&args) {
        Some(path) => App::with_config_file(path)?,
        None => App::new()?,
    };

    app.run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_config;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_verbosity_normal() {
        let cmd = build_command(&builtin_config());
        let matches = cmd.get_matches_from(vec!["rlaunch"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Normal);
    }

    #[test]
    fn test_get_verbosity_silent_wins() {
        let cmd = build_command(&builtin_config());
        let matches = cmd.get_matches_from(vec!["rlaunch", "-v", "-s"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Silent);
    }

    #[test]
    fn test_extract_file_arg() {
        let path = extract_file_arg(&args(&["rlaunch", "--file", "test.yml"]));
        assert_eq!(path, Some(PathBuf::from("test.yml")));
    }

    #[test]
    fn test_extract_file_arg_short() {
        let path = extract_file_arg(&args(&["rlaunch", "-D", "-f", "test.yml"]));
        assert_eq!(path, Some(PathBuf::from("test.yml")));
    }

    #[test]
    fn test_extract_preset_arg_equals_form() {
        let preset = extract_preset_arg(&args(&["rlaunch", "--preset=short"]));
        assert_eq!(preset, Some("short".to_string()));
    }

    #[test]
    fn test_extract_stops_at_double_dash() {
        let preset = extract_preset_arg(&args(&["rlaunch", "--", "-p", "short"]));
        assert_eq!(preset, None);
    }

    #[test]
    fn test_strip_mode_arg() {
        let raw = args(&["rlaunch", "--debug", "-n"]);
        assert_eq!(strip_mode_arg(&raw, true), args(&["rlaunch", "-n"]));
        assert_eq!(strip_mode_arg(&raw, false), raw);
    }

    #[test]
    fn test_mode_argument_debug_flag() {
        let cmd = build_command(&builtin_config());
        let launcher_args = args(&["-D", "-n"]);
        assert_eq!(mode_argument(&cmd, &launcher_args, Mode::Debug), Some("-D"));
    }

    #[test]
    fn test_mode_argument_other_value_selects_release() {
        let cmd = build_command(&builtin_config());
        for first in ["foo", "release", "--release", "-x", ""] {
            let launcher_args = args(&[first, "-n"]);
            assert_eq!(
                mode_argument(&cmd, &launcher_args, Mode::Release),
                Some(first),
                "first argument {:?}",
                first
            );
        }
    }

    #[test]
    fn test_mode_argument_leaves_launcher_options() {
        let cmd = build_command(&builtin_config());
        for first in ["-n", "-nv", "--dry-run", "--preset=short", "-f", "--", "--help", "-V"] {
            let launcher_args = args(&[first]);
            assert_eq!(
                mode_argument(&cmd, &launcher_args, Mode::Release),
                None,
                "first argument {:?}",
                first
            );
        }
        let empty: Vec<String> = Vec::new();
        assert_eq!(mode_argument(&cmd, &empty, Mode::Release), None);
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("maxloop=5").unwrap(),
            ("maxloop".to_string(), "5".to_string())
        );
        assert_eq!(
            parse_assignment("level=").unwrap(),
            ("level".to_string(), String::new())
        );
        assert!(matches!(
            parse_assignment("=5"),
            Err(ConfigError::InvalidVar(_))
        ));
        assert!(matches!(
            parse_assignment("novalue"),
            Err(ConfigError::InvalidVar(_))
        ));
    }

    #[test]
    fn test_cli_overrides_merge() {
        let config = builtin_config();
        let preset = &config.presets["standard"];
        let cmd = build_command(&config);
        let matches = cmd.get_matches_from(vec![
            "rlaunch",
            "--maxloop",
            "10",
            "--set",
            "interval=5",
            "--interval",
            "99",
        ]);

        let overrides = cli_overrides(&matches).unwrap();
        let vars = merge_vars(&preset.vars, overrides);
        assert_eq!(vars["maxloop"], "10");
        assert_eq!(vars["interval"], "5");
        assert_eq!(vars["level"], "trace");
    }

    #[test]
    fn test_unused_overrides() {
        let config = builtin_config();
        let short = &config.presets["short"];
        let overrides = vec![
            ("interval".to_string(), "5".to_string()),
            ("maxloop".to_string(), "9".to_string()),
            ("nosuch".to_string(), "1".to_string()),
            ("interval".to_string(), "6".to_string()),
        ];

        assert_eq!(
            unused_overrides(&overrides, &short.release),
            vec!["interval", "nosuch"]
        );
        assert_eq!(
            unused_overrides(&overrides[1..2], &config.presets["standard"].debug),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_extra_args_after_double_dash() {
        let cmd = build_command(&builtin_config());
        let matches = cmd.get_matches_from(vec!["rlaunch", "--", "--seed", "7"]);
        let extra: Vec<&String> = matches.get_many::<String>("extra").unwrap().collect();
        assert_eq!(extra, vec!["--seed", "7"]);
    }
}
