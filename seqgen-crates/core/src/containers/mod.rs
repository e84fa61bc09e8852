//! Contains the containers which are shared by the streams and rules.
use fnv::FnvBuildHasher;

/// [`std::collections::HashMap`] with a deterministic hasher, so that generation never depends on
/// a per-process random seed.
#[allow(clippy::disallowed_types, reason = "this is how we define our HashMap")]
pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
