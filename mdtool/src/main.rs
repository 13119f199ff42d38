use color_eyre::eyre::{Context, Result};
use log::LevelFilter;
use mdtool::{cli::Cli, options::Invocation};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  // Usage errors exit here, before anything is read or written
  let invocation = Invocation::from_args(&cli.args)
    .unwrap_or_else(|err| Cli::usage_error(&err).exit());

  mdtool::convert(&invocation)
    .wrap_err_with(|| format!("Failed to convert {}", invocation.input))
}
