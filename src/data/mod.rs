mod cache;
mod dataset;

pub use {
    cache::{DatasetCache, dataset_cache, load_dataset},
    dataset::HistoricalDataset,
};
