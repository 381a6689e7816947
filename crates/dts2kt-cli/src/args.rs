use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the dts2kt binary.
#[derive(Parser, Debug)]
#[command(
    name = "dts2kt",
    version,
    about = "Translate TypeScript declaration files into Kotlin/JS external declarations"
)]
pub struct CliArgs {
    /// Path to the `.d.ts` declaration file to translate.
    pub input: PathBuf,

    /// Module name used for the @file:JsModule binding.
    /// Defaults to the input file stem (with a trailing `.d` stripped).
    #[arg(short = 'm', long = "module-name")]
    pub module_name: Option<String>,

    /// Directory the generated `.kt` files are written to.
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the generated artifacts as JSON to stdout instead of writing files.
    #[arg(long)]
    pub json: bool,
}
