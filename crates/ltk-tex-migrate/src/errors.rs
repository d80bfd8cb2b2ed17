use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Missing required directories")]
    #[diagnostic(
        code(cli::missing_arguments),
        help("Usage: ltk-tex-migrate <new-dump-dir> <legacy-pack-dir> <output-dir>")
    )]
    MissingArguments,

    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(fs::directory_missing),
        help("All three directories must exist. The output directory is not created automatically.")
    )]
    DirectoryNotFound { path: Utf8PathBuf },

    #[error("Failed to read directory: {path}")]
    #[diagnostic(
        code(fs::read_dir_failed),
        help("Check that the directory is readable")
    )]
    ReadDirFailed {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed")]
    #[diagnostic(code(io::operation_failed))]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl From<ltk_texture_cache::Error> for CliError {
    fn from(err: ltk_texture_cache::Error) -> Self {
        match err {
            ltk_texture_cache::Error::MissingDirectory(path) => Self::DirectoryNotFound { path },
            ltk_texture_cache::Error::ReadDir { path, source } => {
                Self::ReadDirFailed { path, source }
            }
        }
    }
}
