use camino::Utf8PathBuf;
use colored::Colorize;
use ltk_texture_cache::{EntryOutcome, MigrationProgress, MigrationReport, Migrator};
use miette::Result;

use crate::errors::CliError;
use crate::println_pad;
use crate::utils::print_ansi_boxed_lines;

pub struct MigrateArgs {
    pub new_dump_dir: Utf8PathBuf,
    pub legacy_pack_dir: Utf8PathBuf,
    pub output_dir: Utf8PathBuf,
}

pub fn migrate_texture_dump(args: MigrateArgs) -> Result<()> {
    println_pad!(
        "{} {}",
        "🧵 Migrating texture dump:".bright_blue().bold(),
        args.new_dump_dir.as_str().bright_cyan().bold()
    );
    println_pad!(
        "{} {}",
        "📚 Legacy pack:".bright_yellow(),
        args.legacy_pack_dir.as_str().bright_white()
    );
    println_pad!(
        "{} {}",
        "📁 Output:".bright_yellow(),
        args.output_dir.as_str().bright_white().bold()
    );

    let report = Migrator::new(args.new_dump_dir, args.legacy_pack_dir, args.output_dir)
        .with_progress(print_progress)
        .run()
        .map_err(CliError::from)?;

    print_summary(&report);

    Ok(())
}

fn print_progress(progress: MigrationProgress<'_>) {
    let counter = format!("[{}/{}]", progress.current, progress.total).dimmed();

    match progress.outcome {
        EntryOutcome::Migrated {
            file_name,
            legacy_name,
            ..
        } => println_pad!(
            "{} {} {} {}",
            counter,
            "✅".bright_green(),
            file_name.bright_white(),
            format!("<- {}", legacy_name).dimmed()
        ),
        EntryOutcome::Skipped { file_name, reason } => println_pad!(
            "{} {} {} {}",
            counter,
            "⏭️ ".bright_yellow(),
            file_name.bright_white(),
            format!("({})", reason).dimmed()
        ),
        EntryOutcome::Failed { file_name, error } => println_pad!(
            "{} {} {} {}",
            counter,
            "❌".bright_red(),
            file_name.bright_white(),
            error.to_string().bright_red()
        ),
    }
}

fn print_summary(report: &MigrationReport) {
    println!();
    print_ansi_boxed_lines(&[
        format!(
            "{} {}",
            "Migrated:".bright_green().bold(),
            report.migrated().to_string().bright_white().bold()
        ),
        format!(
            "{} {}",
            "Skipped: ".bright_yellow().bold(),
            report.skipped().to_string().bright_white()
        ),
        format!(
            "{} {}",
            "Failed:  ".bright_red().bold(),
            report.failed().to_string().bright_white()
        ),
    ]);

    if report.failed() == 0 {
        println_pad!("{}", "✅ Migration complete!".bright_green().bold());
    } else {
        println_pad!(
            "{}",
            "⚠️  Migration finished with failures, see the entries above."
                .bright_yellow()
                .bold()
        );
    }
}
