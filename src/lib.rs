pub mod algorithm;
pub mod arborescence;
pub mod errors;
pub mod graph;
pub mod io;
pub mod log;
pub mod utils;

/// Commonly used traits and types.
///
/// ```
/// use mwa::prelude::*;
///
/// fn weight_of(file: &str) -> Result<Option<u64>, Box<dyn std::error::Error>> {
///     let instance = MwaInstance::<u64>::try_read_mwa(file.as_bytes())?;
///     instance.is_correct()?;
///     Ok(min_arborescence_weight(&instance.graph, instance.root).ok())
/// }
///
/// assert_eq!(weight_of("p mwa 3 2\n1 2 4\n2 3 1\n").unwrap(), Some(5));
/// ```
pub mod prelude {
    pub use super::algorithm::*;
    pub use super::arborescence::*;
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::io::*;
}

#[cfg(test)]
mod testing;
