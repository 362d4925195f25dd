mod accumulator;
mod fetcher;
mod normalizer;
mod pipeline;
mod pool;
mod traits;
mod whitelist;

pub use accumulator::Accumulator;
pub use fetcher::HttpFetcher;
pub use normalizer::normalize;
pub use pipeline::Pipeline;
pub use pool::{FetchPool, PoolHandle, SourceBatch, SourceResult};
pub use traits::{FetchResponse, SourceFetcher};
pub use whitelist::Whitelist;
