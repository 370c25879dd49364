use anyhow::Result;

use super::{Context, Task, TaskResult, process_resources};
use crate::config::PackageManager;
use crate::error::GenerateError;
use crate::resources::FileResource;
use crate::templates;
use crate::tools::vcpkg::CHECKOUT_DIR;

fn uses_vcpkg(ctx: &Context) -> bool {
    ctx.descriptor.package_manager() == Some(PackageManager::Vcpkg)
}

/// Clone and bootstrap a project-local vcpkg checkout.
#[derive(Debug)]
pub struct BootstrapVcpkg;

impl Task for BootstrapVcpkg {
    fn name(&self) -> &str {
        "bootstrap vcpkg"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        uses_vcpkg(ctx)
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let checkout = ctx.project_path(CHECKOUT_DIR);
        if ctx.fs_ops.is_dir(&checkout) {
            return Ok(TaskResult::Skipped(format!(
                "{} already exists",
                checkout.display()
            )));
        }

        if ctx.dry_run {
            ctx.log.dry_run(&format!(
                "would clone vcpkg into {} and run {}",
                checkout.display(),
                ctx.platform.vcpkg_bootstrap_script()
            ));
            return Ok(TaskResult::DryRun);
        }

        ctx.log.info("cloning and bootstrapping vcpkg");
        ctx.tools
            .bootstrap_package_manager(&ctx.project_dir, PackageManager::Vcpkg)
            .map_err(GenerateError::from)?;
        Ok(TaskResult::Ok)
    }
}

/// Write `vcpkg.json` and `CMakePresets.json`.
#[derive(Debug)]
pub struct WriteVcpkgManifest;

impl Task for WriteVcpkgManifest {
    fn name(&self) -> &str {
        "write vcpkg manifest"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        uses_vcpkg(ctx)
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = templates::package_manager_files(&ctx.descriptor)
            .into_iter()
            .map(|f| FileResource::new(ctx.project_path(&f.path), f.contents, ctx.fs_ops.as_ref()));
        let stats = process_resources(ctx, resources, "write")?;
        Ok(stats.finish(ctx))
    }
}
