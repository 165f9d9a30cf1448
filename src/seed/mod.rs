use crate::{
    domain::{Board, BoardConfig},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "file-seed")]
pub mod file_seed;

#[cfg(feature = "file-seed")]
pub use file_seed::FileSeed;

/// Source of the initial board configuration
///
/// A board is seeded once when it is mounted; item order is never written back.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Loads the board configuration
    async fn load_config(&self) -> Result<BoardConfig>;

    /// Loads the configuration and builds a validated board from it
    async fn load_board(&self) -> Result<Board> {
        let config = self.load_config().await?;
        Board::new(config)
    }
}

/// In-memory seed, defaulting to the four-container reference layout
#[derive(Debug, Clone, Default)]
pub struct StaticSeed {
    config: BoardConfig,
}

impl StaticSeed {
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn load_config(&self) -> Result<BoardConfig> {
        Ok(self.config.clone())
    }
}
