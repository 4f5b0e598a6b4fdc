use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{
    catalog::{Catalog, CatalogError},
    product::Product,
};

#[derive(Error, Debug)]
pub enum CatalogRepositoryError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Where the storefront gets its products from.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn load(&self) -> Result<Catalog, CatalogRepositoryError>;
}

/// The built-in five-product catalog.
#[derive(Debug, Default)]
pub struct StaticCatalogRepository;

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn load(&self) -> Result<Catalog, CatalogRepositoryError> {
        debug!("Using built-in catalog");
        Ok(Catalog::default())
    }
}

/// Reads a JSON array of `{ "id", "name", "price" }` objects.
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn load(&self) -> Result<Catalog, CatalogRepositoryError> {
        info!("Loading catalog from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogRepositoryError::Io {
                path: self.path.clone(),
                source,
            })?;

        let products: Vec<Product> = serde_json::from_str(&raw)?;
        let catalog = Catalog::new(products)?;

        info!("Loaded {} products", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::ProductId;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_catalog_loads_defaults() {
        let catalog = StaticCatalogRepository.load().await.unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[tokio::test]
    async fn test_json_catalog_loads_products() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 10, "name": "Webcam", "price": 49.5}}, {{"id": 11, "name": "Hub", "price": 19.99}}]"#
        )
        .unwrap();

        let catalog = JsonCatalogRepository::new(file.path()).load().await.unwrap();
        assert_eq!(catalog.len(), 2);

        let webcam = catalog.find(ProductId(10)).unwrap();
        assert_eq!(webcam.price.to_string(), "49.50");
    }

    #[tokio::test]
    async fn test_json_catalog_rejects_negative_price() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "name": "Broken", "price": -2}}]"#).unwrap();

        let result = JsonCatalogRepository::new(file.path()).load().await;
        assert!(matches!(result, Err(CatalogRepositoryError::Parse(_))));
    }

    #[tokio::test]
    async fn test_json_catalog_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "A", "price": 1}}, {{"id": 1, "name": "B", "price": 2}}]"#
        )
        .unwrap();

        let result = JsonCatalogRepository::new(file.path()).load().await;
        assert!(matches!(
            result,
            Err(CatalogRepositoryError::Invalid(CatalogError::DuplicateId(_)))
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = JsonCatalogRepository::new("/definitely/not/here.json").load().await;
        assert!(matches!(result, Err(CatalogRepositoryError::Io { .. })));
    }
}
