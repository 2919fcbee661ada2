//! varsubst：从变量文件和命令行收集变量，然后渲染模板。

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use varfile_decoder::{encode, load_file, merge, parse_assignment, VariableSet};

mod render;

#[derive(Parser, Debug)]
#[command(name = "varsubst")]
#[command(about = "Render a template with variables from a file and the command line", long_about = None)]
struct Cli {
    /// File to read variables from
    #[arg(long, short = 'f', env = "VARSUBST_FILE")]
    file: Option<PathBuf>,

    /// Set a variable, value should be in format of key=value
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// Print the resolved variables instead of rendering a template
    #[arg(long)]
    print_vars: bool,

    /// Template file to render
    #[arg(required_unless_present = "print_vars")]
    template: Option<PathBuf>,
}

fn parse_var(input: &str) -> std::result::Result<(String, String), String> {
    parse_assignment(input).map_err(|err| err.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_vars(cli: &Cli) -> Result<VariableSet> {
    let direct: VariableSet = cli.vars.iter().cloned().collect();

    let Some(path) = &cli.file else {
        return Ok(direct);
    };

    let from_file = load_file(path).context("failed to load variables from file")?;
    // Values from the file win over --var for the same key.
    Ok(merge(direct, from_file))
}

fn run(cli: Cli) -> Result<()> {
    let vars = resolve_vars(&cli)?;
    debug!(variables = vars.len(), "resolved variables");

    let mut stdout = io::stdout().lock();

    if cli.print_vars {
        encode(&vars, &mut stdout).context("failed to print variables")?;
        return Ok(());
    }

    let Some(template_path) = cli.template else {
        anyhow::bail!("no template given");
    };

    let template = std::fs::read_to_string(&template_path)
        .with_context(|| format!("failed to read template file {}", template_path.display()))?;
    let output = render::render(&template_path.display().to_string(), &template, &vars)?;

    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("varsubst: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
