use std::path::PathBuf;

/// Failures while loading the product catalog.
///
/// All of them are fatal at startup: the service cannot serve without a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog data")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id `{0}`")]
    DuplicateId(String),
    #[error("product `{0}` has an empty name")]
    EmptyName(String),
    #[error("product `{0}` has a negative price")]
    NegativePrice(String),
}
