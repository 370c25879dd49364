use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::cli::{Cli, VERSION};
use crate::config::{
    Defaults, GitPolicy, ProjectDescriptor, ProjectOptions, defaults, validate_name,
};
use crate::error::GenerateError;
use crate::exec::{Executor, SystemExecutor};
use crate::logging::{Log, Logger, RunLog};
use crate::operations::{FileSystemOps, SystemFileSystemOps};
use crate::platform::Platform;
use crate::prompt::{FixedPrompt, Prompt, StdinPrompt};
use crate::tasks::{self, Context};
use crate::tools::{SystemToolchain, Toolchain};

/// Where and how a generation pass runs.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Directory the project directory is created in.
    pub parent_dir: PathBuf,
    /// Report changes without applying them.
    pub dry_run: bool,
    /// Platform the pass targets.
    pub platform: Platform,
}

/// Collaborators a generation pass talks to.
#[derive(Debug, Clone)]
pub struct Services {
    /// External tools.
    pub tools: Arc<dyn Toolchain>,
    /// Filesystem access.
    pub fs_ops: Arc<dyn FileSystemOps>,
    /// Answers the version-control question.
    pub prompt: Arc<dyn Prompt>,
    /// Logger and task summary.
    pub log: Arc<Logger>,
}

/// Run one generation pass and return the project directory.
///
/// Nothing touches the filesystem until the descriptor has been built, so
/// invalid input and a missing build tool leave no trace.  The first failing
/// task stops the pass; its error is returned as-is, so
/// `downcast_ref::<GenerateError>()` recovers the category.
///
/// # Errors
///
/// Returns an error if validation, the version probe, a filesystem write, or
/// an external tool fails.
pub fn generate(
    options: &ProjectOptions,
    settings: &RunSettings,
    services: &Services,
) -> Result<PathBuf> {
    let log = &services.log;

    log.stage("Resolving project");
    let descriptor = ProjectDescriptor::build(options, services.tools.as_ref())?;
    log.open_run_log();
    log.info(&format!(
        "{} {} ({} {}), cmake {}",
        descriptor.language(),
        descriptor.artifact(),
        descriptor.build_tag(),
        descriptor.standard(),
        descriptor.build_tool_version()
    ));
    if let Some(pm) = descriptor.package_manager() {
        log.debug(&format!("package manager: {pm}"));
    }

    let parent_dir = std::path::absolute(&settings.parent_dir).with_context(|| {
        format!(
            "resolving parent directory {}",
            settings.parent_dir.display()
        )
    })?;
    let project_dir = parent_dir.join(descriptor.name());
    log.debug(&format!("project directory: {}", project_dir.display()));

    let name = descriptor.name().to_string();
    let ctx = Context {
        descriptor,
        project_dir: project_dir.clone(),
        platform: settings.platform,
        log: Arc::clone(log) as Arc<dyn Log>,
        dry_run: settings.dry_run,
        tools: Arc::clone(&services.tools),
        fs_ops: Arc::clone(&services.fs_ops),
        prompt: Arc::clone(&services.prompt),
    };

    let result = tasks::execute_all(&tasks::all_generate_tasks(), &ctx);
    log.print_summary();
    result?;

    if settings.dry_run {
        log.info(&format!("Dry run for project {name} complete; nothing was written."));
    } else {
        log.info(&format!("Project {name} created successfully."));
        log.debug(&format!(
            "created at {}",
            dunce::simplified(&project_dir).display()
        ));
    }
    Ok(project_dir)
}

/// Prompt matching a git policy.
#[must_use]
pub fn prompt_for(policy: GitPolicy) -> Arc<dyn Prompt> {
    match policy {
        GitPolicy::Ask => Arc::new(StdinPrompt),
        GitPolicy::Yes => Arc::new(FixedPrompt(true)),
        GitPolicy::No => Arc::new(FixedPrompt(false)),
    }
}

/// Run the generator from parsed command-line arguments.
///
/// The project name is checked first, so a missing or unusable name is
/// reported before the defaults file or any other flag is looked at.
///
/// # Errors
///
/// Returns an error if the name or the defaults file is invalid, or the pass
/// fails.
pub fn run(cli: &Cli, run_log: Option<RunLog>) -> Result<()> {
    let platform = Platform::detect();
    let log = Arc::new(Logger::with_run_log(run_log));
    log.debug(&format!("cppgen {VERSION} on {}", platform.os));

    validate_name(cli.name.as_deref().unwrap_or_default()).map_err(GenerateError::from)?;
    let defaults = Defaults::load(cli.config.as_deref()).map_err(GenerateError::from)?;
    let (options, git) =
        defaults::resolve(&cli.project_flags(), &defaults, &platform).map_err(GenerateError::from)?;

    let executor: Arc<dyn Executor> = Arc::new(SystemExecutor);
    let services = Services {
        tools: Arc::new(SystemToolchain::new(executor, platform)),
        fs_ops: Arc::new(SystemFileSystemOps),
        prompt: prompt_for(git),
        log,
    };
    let settings = RunSettings {
        parent_dir: cli.dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        dry_run: cli.dry_run,
        platform,
    };

    generate(&options, &settings, &services)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::logging::TaskStatus;
    use crate::operations::MockFileSystemOps;
    use crate::platform::Os;
    use crate::tools::test_helpers::FakeToolchain;
    use std::path::Path;

    fn options(name: &str) -> ProjectOptions {
        ProjectOptions {
            name: name.to_string(),
            artifact: "executable".to_string(),
            language: "cpp".to_string(),
            standard: "17".to_string(),
            package_manager: None,
            generator: "Ninja".to_string(),
        }
    }

    fn settings(dry_run: bool) -> RunSettings {
        RunSettings {
            parent_dir: PathBuf::from("/w"),
            dry_run,
            platform: Platform::new(Os::Linux),
        }
    }

    fn services(
        fs: Arc<MockFileSystemOps>,
        tools: Arc<FakeToolchain>,
        answer: bool,
    ) -> Services {
        Services {
            tools,
            fs_ops: fs,
            prompt: Arc::new(FixedPrompt(answer)),
            log: Arc::new(Logger::new()),
        }
    }

    #[test]
    fn full_pass_writes_project() {
        let fs = Arc::new(MockFileSystemOps::new());
        let tools = Arc::new(FakeToolchain::default());
        let svc = services(fs.clone(), tools.clone(), true);
        let dir = generate(&options("demo"), &settings(false), &svc).unwrap();
        assert!(dir.ends_with("demo"));
        for file in [
            "CMakeLists.txt",
            "src/main.cpp",
            "include/pch.hpp",
            ".gitignore",
            ".gitattributes",
        ] {
            assert!(
                fs.file(&dir.join(file)).is_some(),
                "{file} should be written"
            );
        }
        assert_eq!(
            tools.calls(),
            vec!["probe", "init", "add .gitignore .gitattributes"]
        );
        assert_eq!(svc.log.failure_count(), 0);
    }

    #[test]
    fn missing_name_touches_nothing() {
        let fs = Arc::new(MockFileSystemOps::new());
        let tools = Arc::new(FakeToolchain::default());
        let err = generate(&options(""), &settings(false), &services(fs.clone(), tools.clone(), true))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::Config(ConfigError::MissingName))
        ));
        assert!(fs.writes().is_empty());
        assert!(tools.calls().is_empty());
    }

    #[test]
    fn missing_cmake_touches_nothing() {
        let fs = Arc::new(MockFileSystemOps::new());
        let tools = Arc::new(FakeToolchain::without_cmake());
        let err = generate(&options("demo"), &settings(false), &services(fs.clone(), tools, true))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<GenerateError>().map(GenerateError::category),
            Some("EnvironmentError")
        );
        assert!(fs.writes().is_empty());
    }

    #[test]
    fn failure_is_recorded_and_returned() {
        let fs = Arc::new(MockFileSystemOps::new().with_failing("/w/demo/CMakeLists.txt"));
        let svc = services(fs.clone(), Arc::new(FakeToolchain::default()), true);
        let err = generate(&options("demo"), &settings(false), &svc).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GenerateError>().map(GenerateError::category),
            Some("IOError")
        );
        assert_eq!(svc.log.failure_count(), 1);
        assert!(fs.file(Path::new("/w/demo/src/main.cpp")).is_none());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let fs = Arc::new(MockFileSystemOps::new());
        let tools = Arc::new(FakeToolchain::default());
        let svc = services(fs.clone(), tools.clone(), true);
        generate(&options("demo"), &settings(true), &svc).unwrap();
        assert!(fs.writes().is_empty());
        assert_eq!(tools.calls(), vec!["probe"]);
        assert!(
            svc.log
                .task_entries()
                .iter()
                .all(|t| matches!(t.status, TaskStatus::DryRun | TaskStatus::NotApplicable))
        );
    }

    #[test]
    fn run_log_is_created_only_after_validation() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cache").join("generate.log");
        let (run_log, _guard) = crate::logging::pending_run_log(path.clone());
        let fs = Arc::new(MockFileSystemOps::new());
        let mut svc = services(fs, Arc::new(FakeToolchain::default()), false);
        svc.log = Arc::new(Logger::with_run_log(Some(run_log)));

        generate(&options("../escaped"), &settings(false), &svc).unwrap_err();
        assert!(!path.exists());
        assert!(svc.log.log_path().is_none());

        generate(&options("demo"), &settings(false), &svc).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("==> Resolving project"));
        assert!(contents.contains("==> create project layout"));
    }

    #[test]
    fn run_reports_missing_name_before_other_input() {
        let cli = Cli {
            git: Some("maybe".to_string()),
            config: Some(PathBuf::from("/nonexistent/cppgen/config.toml")),
            ..Cli::default()
        };
        let err = run(&cli, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::Config(ConfigError::MissingName))
        ));
    }

    #[test]
    fn run_rejects_escaping_name_before_other_input() {
        let cli = Cli {
            name: Some("../escaped".to_string()),
            git: Some("maybe".to_string()),
            ..Cli::default()
        };
        let err = run(&cli, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::Config(ConfigError::InvalidName { .. }))
        ));
    }

    #[test]
    fn prompt_for_fixed_policies() {
        assert!(prompt_for(GitPolicy::Yes).confirm("?").unwrap());
        assert!(!prompt_for(GitPolicy::No).confirm("?").unwrap());
    }
}
