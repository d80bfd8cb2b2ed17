use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{Command, CommandFactory, FromArgMatches, Parser};
use commands::{migrate_texture_dump, MigrateArgs};
use errors::CliError;
use miette::Result;

mod commands;
mod errors;
mod utils;

/// Copy legacy texture pack images to the filenames used by new texture dumps.
///
/// Every `tex1_{W}x{H}_{HASH}_{FORMAT}_mip{N}.png` in the new dump is matched with
/// the legacy pack entry holding the same texture, which is then copied into the
/// output directory under the new name.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
struct Args {
    /// Directory with the new-format texture dump
    new_dump_dir: Option<Utf8PathBuf>,

    /// Directory with the legacy texture pack
    legacy_pack_dir: Option<Utf8PathBuf>,

    /// Existing directory to write migrated textures to
    output_dir: Option<Utf8PathBuf>,
}

impl Args {
    /// All three directories, or `None` if any positional was left out.
    fn into_migrate_args(self) -> Option<MigrateArgs> {
        Some(MigrateArgs {
            new_dump_dir: self.new_dump_dir?,
            legacy_pack_dir: self.legacy_pack_dir?,
            output_dir: self.output_dir?,
        })
    }
}

fn command() -> Command {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    Args::command().styles(styles).color(ColorChoice::Auto)
}

fn parse_args() -> Result<Args> {
    let matches = command().get_matches();
    Args::from_arg_matches(&matches).map_err(|e| miette::miette!("{}", e))
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ltk_tex_migrate=info,ltk_texture_cache=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let Some(args) = parse_args()?.into_migrate_args() else {
        command().print_help().map_err(CliError::from)?;
        println!();
        return Err(CliError::MissingArguments.into());
    };

    migrate_texture_dump(args)
}
