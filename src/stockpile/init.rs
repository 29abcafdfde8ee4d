use crate::api::{CmdResult, StockApi, StockPaths};
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub const STORE_DIR_NAME: &str = ".stockpile";

pub struct StockContext {
    pub api: StockApi<FileStore>,
    pub config: StockConfig,
    /// Messages produced while loading the inventory file.
    pub loaded: CmdResult,
}

/// Walk up from cwd looking for a directory that contains `.stockpile`.
/// Returns None if nothing is found before reaching home or the filesystem root.
pub fn find_store_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(STORE_DIR_NAME).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Resolve where the inventory lives.
///
/// An explicit `data_file` wins over everything; its parent directory then
/// doubles as the store directory holding `config.json`.
pub fn resolve_paths(cwd: &Path, use_global: bool, data_file: Option<&Path>) -> Result<StockPaths> {
    if let Some(file) = data_file {
        let file = if file.is_absolute() {
            file.to_path_buf()
        } else {
            cwd.join(file)
        };
        let store_dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        return Ok(StockPaths {
            store_dir,
            data_file: file,
        });
    }

    let store_dir = if use_global {
        ProjectDirs::from("com", "stockpile", "stockpile")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| StockError::Config("Could not determine data directory".into()))?
    } else {
        find_store_root(cwd)
            .unwrap_or_else(|| cwd.to_path_buf())
            .join(STORE_DIR_NAME)
    };

    let config = StockConfig::load(&store_dir)?;
    let data_file = config.data_path(&store_dir);
    Ok(StockPaths {
        store_dir,
        data_file,
    })
}

pub fn initialize(cwd: &Path, use_global: bool, data_file: Option<&Path>) -> Result<StockContext> {
    let paths = resolve_paths(cwd, use_global, data_file)?;
    let config = StockConfig::load(&paths.store_dir)?;
    let store = FileStore::new(paths.data_file.clone());
    let (api, loaded) = StockApi::open(store, paths, config.clone())?;

    Ok(StockContext {
        api,
        config,
        loaded,
    })
}
