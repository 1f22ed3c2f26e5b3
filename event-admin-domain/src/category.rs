use std::sync::{Arc, Mutex};

use crate::{ServiceError, ServiceResult};

pub type CategoryId = i64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

pub type ArcCategoryRepository = Arc<Box<dyn CategoryRepository + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait CategoryRepository {
    async fn category_exists(&self, id: CategoryId) -> ServiceResult<bool>;
    async fn get_categories(&self) -> ServiceResult<Vec<Category>>;
}

pub type ArcCategoryService = Arc<Box<dyn CategoryService + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait CategoryService {
    async fn list_categories(&self) -> ServiceResult<Vec<Category>>;
}

pub struct CategoryServiceImpl {
    category_repository: ArcCategoryRepository,
}

impl CategoryServiceImpl {
    pub fn new(category_repository: ArcCategoryRepository) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait::async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn list_categories(&self) -> ServiceResult<Vec<Category>> {
        match self.category_repository.get_categories().await {
            Ok(categories) => Ok(categories),
            Err(e) => {
                log::error!("Error fetching categories: {}", e);
                Err(e)
            }
        }
    }
}

/// In-memory category table, optionally unreachable.
#[derive(Clone, Default)]
pub struct MockCategoryRepository {
    pub categories: Arc<Mutex<Vec<Category>>>,
    pub lookups: Arc<Mutex<Vec<CategoryId>>>,
    pub offline: bool,
}

#[allow(unused)]
impl MockCategoryRepository {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(Mutex::new(categories)),
            ..Default::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn get_lookups(&self) -> Vec<CategoryId> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn category_exists(&self, id: CategoryId) -> ServiceResult<bool> {
        self.lookups.lock().unwrap().push(id);
        if self.offline {
            return ServiceError::persistence("connection refused");
        }
        Ok(self.categories.lock().unwrap().iter().any(|c| c.id == id))
    }

    async fn get_categories(&self) -> ServiceResult<Vec<Category>> {
        if self.offline {
            return ServiceError::persistence("connection refused");
        }
        Ok(self.categories.lock().unwrap().clone())
    }
}
