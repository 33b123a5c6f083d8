use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use ir_lint::checks::CheckId;
use ir_lint::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use ir_lint::config::Config;
use ir_lint::lint::{FileReport, lint_source};
use ir_lint::output::{
    ColorMode, GithubFormatter, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
};
use ir_lint::scanner::{DirectoryScanner, GlobFilter};
use ir_lint::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> ir_lint::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Create GlobFilter from config plus CLI overrides
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.default.extensions.clone());
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;

    // 3. Resolve deactivated checks
    let disabled = resolve_disabled(&config, &args.disable)?;

    // 4. Scan paths
    let scanner = DirectoryScanner::new(filter);
    let mut all_files = Vec::new();
    for path in &args.paths {
        all_files.extend(scanner.scan(path)?);
    }

    // 5. Lint each file (parallel with rayon; each file gets a fresh runner)
    let reports: Vec<FileReport> = all_files
        .par_iter()
        .map(|path| lint_file(path, &disabled))
        .collect::<ir_lint::Result<Vec<_>>>()?;

    // 6. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &reports, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Exit code
    let has_findings = reports.iter().any(|report| !report.passed());
    Ok(if has_findings {
        EXIT_FINDINGS
    } else {
        EXIT_SUCCESS
    })
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> ir_lint::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    config_path.map_or_else(Config::load, Config::load_from_path)
}

fn resolve_disabled(config: &Config, cli_disable: &[String]) -> ir_lint::Result<Vec<CheckId>> {
    let mut disabled = config.disabled_checks();
    for name in cli_disable {
        disabled.push(name.parse::<CheckId>().map_err(ir_lint::IrLintError::Config)?);
    }
    Ok(disabled)
}

fn lint_file(path: &Path, disabled: &[CheckId]) -> ir_lint::Result<FileReport> {
    let source = fs::read_to_string(path).map_err(|source| ir_lint::IrLintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(lint_source(path, &source, disabled))
}

fn format_output(
    format: OutputFormat,
    reports: &[FileReport],
    color_mode: ColorMode,
    verbose: u8,
) -> ir_lint::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
        OutputFormat::Github => GithubFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> ir_lint::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> ir_lint::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ir_lint::IrLintError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# ir-lint configuration file

[default]
# File extensions to check
extensions = ["ir"]

# Checks to deactivate. Valid names:
# empty_line, comment_indent, whitespace, descriptor,
# non_ascii, key_value, key_order
# disabled = ["non_ascii"]

# Exclude patterns (glob syntax)
[exclude]
patterns = [
    # "**/assets/**",
]
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
