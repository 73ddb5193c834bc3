//! File locations

/// Configuration for the historical dataset
pub struct DatasetConfig {
    /// Default CSV path, relative to the working directory
    pub default_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub dataset: DatasetConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    dataset: DatasetConfig {
        default_path: "master_merged_final.csv",
    },
};
