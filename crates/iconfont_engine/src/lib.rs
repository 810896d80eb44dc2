//! Iconfont engine: fetching, caching, persisting and the HTML transform hook.
mod cache;
mod decode;
mod fetch;
mod persist;
mod plugin;
mod types;

pub use cache::{CachingFetcher, ContentCache};
pub use decode::{decode_text, DecodedText};
pub use fetch::{normalize_url, FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, write_if_changed, PersistError, WriteOutcome};
pub use plugin::{IconfontPlugin, PLUGIN_NAME};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, TransformError};
