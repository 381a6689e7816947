use anyhow::Result;
use clap::Parser;
use dts2kt_cli::args::CliArgs;

fn main() -> Result<()> {
    dts2kt_cli::logging::init();
    let args = CliArgs::parse();
    dts2kt_cli::driver::run(&args)?;
    Ok(())
}
