//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Project Bootstrap - set up and validate a project working copy
#[derive(Parser, Debug)]
#[command(name = "bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the project's setup routine
    ///
    /// Delegates to the setup script, inheriting its stdio. A non-zero
    /// script status fails the command with the same story.
    ///
    /// Examples:
    ///   bootstrap setup
    ///   bootstrap setup --script ./scripts/setup_dev.sh
    Setup {
        /// Setup script to run
        #[arg(long, default_value = "./scripts/setup.sh")]
        script: String,
    },

    /// Validate file contents against recorded digests
    ///
    /// Runs every check in the document and prints one line per failing
    /// check. Nothing is printed when all checks pass. Failing checks do
    /// not change the exit status; unreadable files and malformed
    /// documents do.
    ///
    /// Examples:
    ///   bootstrap validate --yaml md5sum_checks.yaml
    Validate {
        /// Checks document to run
        #[arg(long)]
        yaml: String,
    },

    /// Clone the repositories a manifest pins
    ///
    /// Each entry names a repository URL, a commit to pin, and an output
    /// path. Already-present destinations are skipped.
    CloneRepos {
        /// Manifest document listing the repositories
        manifest: String,
    },

    /// Create a relative symlink to an existing target
    ///
    /// Examples:
    ///   bootstrap link data/settings.yaml config/settings.yaml
    Link {
        /// Path the link should resolve to
        target: String,

        /// Path of the link to create
        link: String,
    },

    /// Check that required directories exist
    CheckDirs {
        /// Document listing the required directory paths
        dirs: String,
    },

    /// Check the active environment prefix and its interpreters
    ///
    /// Examples:
    ///   bootstrap check-env /opt/conda/envs/proj
    ///   bootstrap check-env /opt/conda/envs/proj --require-secondary
    CheckEnv {
        /// Prefix the environment variable must hold
        expected_prefix: String,

        /// Also require the secondary interpreter inside the prefix
        #[arg(long)]
        require_secondary: bool,

        /// Environment variable holding the active prefix
        #[arg(long, default_value = "CONDA_PREFIX")]
        env_var: String,

        /// Interpreter that must resolve inside the prefix
        #[arg(long, default_value = "python")]
        primary: String,

        /// Interpreter checked only with --require-secondary
        #[arg(long, default_value = "Rscript")]
        secondary: String,
    },
}
