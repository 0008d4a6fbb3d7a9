//! slayd - YAML to HTML presentation compiler

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use log::LevelFilter;

use slayd::BuildConfig;
use slayd::export::{build_all, build_file, default_output_path, init_template};

#[derive(Parser)]
#[command(name = "slayd")]
#[command(version, about = "Compile YAML slide decks into HTML presentations", long_about = None)]
#[command(after_help = "EXAMPLES:
    slayd init                       Create presentation.yaml
    slayd init my-talk.yaml          Create my-talk.yaml
    slayd build                      Build every .yaml file in the current directory
    slayd build my-talk.yaml         Build my-talk.html
    slayd build input.yaml out.html  Build to out.html
    slayd my-talk.yaml               Shorthand for build")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Input presentation (shorthand for `slayd build INPUT`)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output HTML file (defaults to INPUT with an .html extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log more detail (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Replace slides that fail to render with an error slide
    #[arg(long, global = true)]
    isolate_failures: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new presentation template
    #[command(visible_alias = "new")]
    Init {
        /// File to create
        #[arg(value_name = "FILE", default_value = "presentation.yaml")]
        file: PathBuf,
    },

    /// Build one presentation, or every YAML file in the current directory
    Build {
        /// Input presentation
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output HTML file
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = BuildConfig::new().with_isolate_failures(cli.isolate_failures);

    let result = match (&cli.command, &cli.input) {
        (Some(Command::Init { file }), _) => init(file, cli.quiet),
        (Some(Command::Build { input: Some(input), output }), _) => {
            build_one(input, output.as_deref(), &config, cli.quiet)
        }
        (Some(Command::Build { input: None, .. }), _) => build_cwd(&config, cli.quiet),
        (None, Some(input)) => build_one(input, cli.output.as_deref(), &config, cli.quiet),
        (None, None) => {
            let _ = Cli::command().print_help();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn init(file: &Path, quiet: bool) -> slayd::Result<ExitCode> {
    init_template(file)?;
    if !quiet {
        println!("Created {}", file.display());
        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your content", file.display());
        println!("  2. Run: slayd {}", file.display());
        println!("  3. Open the generated HTML in your browser");
    }
    Ok(ExitCode::SUCCESS)
}

fn build_one(
    input: &Path,
    output: Option<&Path>,
    config: &BuildConfig,
    quiet: bool,
) -> slayd::Result<ExitCode> {
    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    let report = build_file(input, &output, config)?;
    if !quiet {
        println!("Presentation built: {}", report.output.display());
        println!("  {} slides generated", report.slide_count);
    }
    Ok(ExitCode::SUCCESS)
}

fn build_cwd(config: &BuildConfig, quiet: bool) -> slayd::Result<ExitCode> {
    let report = build_all(Path::new("."), config)?;

    if report.built.is_empty() && report.failed.is_empty() {
        if !quiet {
            println!("No YAML files found in current directory");
        }
        return Ok(ExitCode::SUCCESS);
    }

    if !quiet {
        for built in &report.built {
            println!(
                "Built {} ({} slides)",
                built.output.display(),
                built.slide_count
            );
        }
        println!("{}", "─".repeat(50));
        println!("Successfully built: {}", report.built.len());
    }
    // Per-file failures were already logged by the batch.
    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Failed: {}", report.failed.len());
        Ok(ExitCode::FAILURE)
    }
}
