//! Install command: run the fetch-verify-run pipeline.

use anyhow::Result;
use winstall_core::config::{Endpoints, WinstallConfig};
use winstall_core::fetch::CurlFetcher;
use winstall_core::install::ProcessLauncher;
use winstall_core::runner::Runner;

/// Run the full pipeline with the production fetcher and launcher.
pub fn run_install(cfg: WinstallConfig) -> Result<()> {
    let endpoints = Endpoints::from_config(&cfg)?;
    tracing::debug!("resolved endpoints: {:?}", endpoints);

    let runner = Runner::new(cfg, endpoints, CurlFetcher, ProcessLauncher);
    let report = runner.run()?;

    println!(
        "installed {} (sha256 {})",
        report.installer_path.display(),
        report.digest
    );
    if !report.removed {
        println!("installer left at {}", report.installer_path.display());
    }
    Ok(())
}
