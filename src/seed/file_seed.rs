use crate::{
    domain::BoardConfig,
    error::{BoardError, Result},
    seed::SeedSource,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// JSON board configuration read from disk
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub const DEFAULT_FILE: &'static str = "board.json";

    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Seed file at `board.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::DEFAULT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the reference configuration if no seed file exists yet
    pub async fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        if !self.path.exists() {
            let json = serde_json::to_string_pretty(&BoardConfig::default())?;
            fs::write(&self.path, json).await?;
            debug!(path = %self.path.display(), "wrote default board seed");
        }

        Ok(())
    }
}

#[async_trait]
impl SeedSource for FileSeed {
    async fn load_config(&self) -> Result<BoardConfig> {
        if !self.path.exists() {
            return Err(BoardError::SeedNotFound(self.path.display().to_string()));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let config: BoardConfig = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), containers = config.containers.len(), "loaded board seed");

        Ok(config)
    }
}
