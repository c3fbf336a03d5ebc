mod app;
mod article;
mod catalog;
mod config;
mod controls;
mod panel;
mod pointer;
mod state;
mod visibility;

use std::path::PathBuf;

use app::ArticleApp;
use catalog::StyleCatalog;
use config::AppConfig;

const CATALOG_ENV: &str = "ARTICLE_STYLER_CATALOG";

fn resolve_catalog_path(env_value: Option<String>, config: &AppConfig) -> Option<PathBuf> {
    if let Some(raw) = env_value {
        let raw = raw.trim();
        if !raw.is_empty() {
            return Some(PathBuf::from(raw));
        }
    }
    config.catalog_path.clone()
}

fn load_catalog(path: Option<PathBuf>) -> StyleCatalog {
    let Some(path) = path else {
        tracing::info!("using built-in style catalog");
        return StyleCatalog::builtin();
    };
    match StyleCatalog::load(&path) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), "loaded style catalog");
            catalog
        }
        Err(err) => {
            tracing::warn!("{err:#}; falling back to the built-in style catalog");
            StyleCatalog::builtin()
        }
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let catalog = load_catalog(resolve_catalog_path(std::env::var(CATALOG_ENV).ok(), &config));

    let width = config.window_width.unwrap_or(1200.0);
    let height = config.window_height.unwrap_or(800.0);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Article Styler")
            .with_app_id("article_styler")
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "article_styler",
        native_options,
        Box::new(|cc| Ok(Box::new(ArticleApp::new(cc, config, catalog)))),
    )
}
