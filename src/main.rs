use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::warn;

mod app;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use app::App;
use logging::LoggingConfig;
use ui::components::header::APP_TITLE;

fn main() {
    if let Err(err) = logging::init(&LoggingConfig::default()) {
        eprintln!("failed to initialize logging: {err:#}");
    }

    let mut config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(APP_TITLE));
    match default_webview_data_dir() {
        Ok(dir) => config = config.with_data_directory(dir),
        Err(err) => warn!(error = %format!("{err:#}"), "using the default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "usergrid", "usergrid")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
