use std::path::PathBuf;

use clap::Parser;

use crate::config::ProjectFlags;

/// Version reported by `--version`: the build-time `CPPGEN_VERSION` when set.
pub const VERSION: &str = match option_env!("CPPGEN_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Long flags that may also be written with a single dash.
const LONG_FLAGS: &[&str] = &[
    "name",
    "type",
    "lang",
    "std",
    "pkgmgr",
    "verbose",
    "dry-run",
    "dir",
    "git",
    "generator",
    "config",
    "help",
    "version",
];

/// Command-line arguments for the project generator.
#[derive(Parser, Debug, Default)]
#[command(
    name = "cppgen",
    about = "Scaffold a CMake-based C or C++ project",
    version = VERSION
)]
pub struct Cli {
    /// Project name, also used as the directory and target name
    #[arg(long)]
    pub name: Option<String>,

    /// Artifact type (executable, library)
    #[arg(long = "type", value_name = "TYPE")]
    pub artifact: Option<String>,

    /// Source language (c, cpp)
    #[arg(long)]
    pub lang: Option<String>,

    /// Language standard, e.g. 11, 17, 20
    #[arg(long = "std", value_name = "STD")]
    pub standard: Option<String>,

    /// Package manager (vcpkg, none)
    #[arg(long)]
    pub pkgmgr: Option<String>,

    /// CMake generator written into the presets file
    #[arg(long)]
    pub generator: Option<String>,

    /// Version control initialization (ask, yes, no)
    #[arg(long)]
    pub git: Option<String>,

    /// Defaults file to use instead of the per-user one
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Parent directory for the new project (default: current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

impl Cli {
    /// Project-shaping flags as given on the command line.
    #[must_use]
    pub fn project_flags(&self) -> ProjectFlags {
        ProjectFlags {
            name: self.name.clone(),
            artifact: self.artifact.clone(),
            language: self.lang.clone(),
            standard: self.standard.clone(),
            package_manager: self.pkgmgr.clone(),
            generator: self.generator.clone(),
            git: self.git.clone(),
        }
    }
}

/// Rewrite single-dash long flags (`-name demo`, `-std=17`) to double-dash form.
///
/// The first argument is the program name and is kept as-is.  Short flags
/// such as `-v` and everything after a bare `--` pass through unchanged.
///
/// # Examples
///
/// ```
/// use cppgen::cli::normalize_args;
///
/// let args = normalize_args(["cppgen", "-name=demo", "-v"].map(String::from));
/// assert_eq!(args, ["cppgen", "--name=demo", "-v"]);
/// ```
#[must_use]
pub fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        out.push(normalize_one(arg));
    }
    out
}

fn normalize_one(arg: String) -> String {
    let Some(rest) = arg.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') || rest.chars().count() < 2 {
        return arg;
    }
    let flag = rest.split_once('=').map_or(rest, |(flag, _)| flag);
    if LONG_FLAGS.contains(&flag) {
        format!("-{arg}")
    } else {
        arg
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let args = std::iter::once("cppgen")
            .chain(args.iter().copied())
            .map(String::from);
        Cli::parse_from(normalize_args(args))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn single_dash_flags_parse() {
        let cli = parse(&["-name", "demo", "-type", "library", "-lang", "c", "-std", "99"]);
        assert_eq!(cli.name.as_deref(), Some("demo"));
        assert_eq!(cli.artifact.as_deref(), Some("library"));
        assert_eq!(cli.lang.as_deref(), Some("c"));
        assert_eq!(cli.standard.as_deref(), Some("99"));
        assert_eq!(cli.pkgmgr, None);
    }

    #[test]
    fn double_dash_flags_parse() {
        let cli = parse(&["--name", "demo", "--pkgmgr", "vcpkg", "--git", "no"]);
        assert_eq!(cli.name.as_deref(), Some("demo"));
        assert_eq!(cli.pkgmgr.as_deref(), Some("vcpkg"));
        assert_eq!(cli.git.as_deref(), Some("no"));
    }

    #[test]
    fn equals_form_is_rewritten() {
        let cli = parse(&["-name=demo", "-std=20"]);
        assert_eq!(cli.name.as_deref(), Some("demo"));
        assert_eq!(cli.standard.as_deref(), Some("20"));
    }

    #[test]
    fn short_flags_untouched() {
        let cli = parse(&["-v", "-d", "-name", "demo"]);
        assert!(cli.verbose);
        assert!(cli.dry_run);
    }

    #[test]
    fn missing_name_is_not_a_usage_error() {
        let cli = Cli::try_parse_from(["cppgen"]).unwrap();
        assert!(cli.name.is_none());
    }

    #[test]
    fn normalize_leaves_unknown_and_values_alone() {
        let args = normalize_args(
            ["cppgen", "-x", "-foo", "demo", "--dir", "/tmp"].map(String::from),
        );
        assert_eq!(args, ["cppgen", "-x", "-foo", "demo", "--dir", "/tmp"]);
    }

    #[test]
    fn normalize_stops_after_double_dash() {
        let args = normalize_args(["cppgen", "-name", "a", "--", "-std"].map(String::from));
        assert_eq!(args, ["cppgen", "--name", "a", "--", "-std"]);
    }

    #[test]
    fn normalize_keeps_program_name() {
        let args = normalize_args(["-name"].map(String::from));
        assert_eq!(args, ["-name"]);
    }

    #[test]
    fn project_flags_copy_cli_values() {
        let cli = parse(&["-name", "demo", "--generator", "Ninja", "--dir", "/tmp/w"]);
        let flags = cli.project_flags();
        assert_eq!(flags.name.as_deref(), Some("demo"));
        assert_eq!(flags.generator.as_deref(), Some("Ninja"));
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/w")));
    }
}
