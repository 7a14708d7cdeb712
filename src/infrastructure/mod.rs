mod clients;
mod scrapers;
mod storage;

pub use clients::{local::LocalDocument, steam::SteamCommunityClient};
pub use scrapers::{extractor::extract_pairs, locator::FragmentLocator};
pub use storage::fs_store::FileSystemStore;
