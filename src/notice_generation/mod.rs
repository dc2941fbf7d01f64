/// Domain layer - license bucketing and deduplication
///
/// Pure business logic: package and bucket models, the normalized license
/// hash, and the engine that groups packages into license buckets.
pub mod domain;
pub mod services;
