use seobase::catalog::{AppConfig, CatalogManager, WorkspacePaths};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn catalog_manager(&self) -> CatalogManager {
        let root = self.workspace.path().to_path_buf();
        let catalog_dir = root.join("catalog");
        let stats_dir = root.join("stats");
        fs::create_dir_all(&catalog_dir).expect("failed to create catalog dir");
        fs::create_dir_all(&stats_dir).expect("failed to create stats dir");
        CatalogManager {
            config: AppConfig::default(),
            paths: WorkspacePaths {
                root,
                catalog_dir,
                stats_dir,
            },
        }
    }
}

mod selection_editor;
mod suggestion_fallback;
