//! 内存版仓储，行为与 PostgreSQL 实现一致（外键、内连接、独立计数）

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog::domain::entities::{Category, CategoryDraft, Product, ProductDraft};
use catalog::domain::repositories::{CategoryRepository, ProductRepository, check_pagination};
use catalog::domain::value_objects::{CategoryId, ProductId};
use catalog::error::{ServiceError, ServiceResult};
use cuba_common::{PagedResult, Pagination};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    products: BTreeMap<i32, (String, i32)>,
    next_category_id: i32,
    next_product_id: i32,
}

/// 两张表共享的内存存储
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            store: self.clone(),
        }
    }

    pub fn products(&self) -> InMemoryProductRepository {
        InMemoryProductRepository {
            store: self.clone(),
        }
    }

    /// 绕过外键写入一个分类不存在的商品
    pub fn seed_orphan(&self, name: &str, category_id: i32) -> ProductId {
        let mut tables = self.tables.lock().unwrap();
        tables.next_product_id += 1;
        let id = tables.next_product_id;
        tables.products.insert(id, (name.to_string(), category_id));
        ProductId(id)
    }

    pub fn product_count(&self) -> usize {
        self.tables.lock().unwrap().products.len()
    }
}

pub struct InMemoryCategoryRepository {
    store: InMemoryStore,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self) -> ServiceResult<Vec<Category>> {
        let tables = self.store.tables.lock().unwrap();
        Ok(tables
            .categories
            .iter()
            .map(|(id, name)| Category::new(CategoryId(*id), name.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> ServiceResult<Option<Category>> {
        let tables = self.store.tables.lock().unwrap();
        Ok(tables
            .categories
            .get(&id.0)
            .map(|name| Category::new(id, name.clone())))
    }

    async fn insert(&self, draft: &CategoryDraft) -> ServiceResult<CategoryId> {
        draft.validate()?;
        let mut tables = self.store.tables.lock().unwrap();
        tables.next_category_id += 1;
        let id = tables.next_category_id;
        tables.categories.insert(id, draft.name.clone());
        Ok(CategoryId(id))
    }

    async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> ServiceResult<()> {
        draft.validate()?;
        let mut tables = self.store.tables.lock().unwrap();
        if let Some(name) = tables.categories.get_mut(&id.0) {
            *name = draft.name.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> ServiceResult<()> {
        let mut tables = self.store.tables.lock().unwrap();
        if tables.products.values().any(|(_, cid)| *cid == id.0) {
            return Err(ServiceError::referential_integrity(format!(
                "Failed to delete category: category {} is still referenced by product",
                id
            )));
        }
        tables.categories.remove(&id.0);
        Ok(())
    }
}

pub struct InMemoryProductRepository {
    store: InMemoryStore,
}

impl InMemoryProductRepository {
    fn joined(tables: &Tables, id: i32, name: &str, category_id: i32) -> Option<Product> {
        tables.categories.get(&category_id).map(|category_name| Product {
            id: ProductId(id),
            name: name.to_string(),
            category_id: CategoryId(category_id),
            category_name: category_name.clone(),
        })
    }

    fn check_category(tables: &Tables, category_id: CategoryId) -> ServiceResult<()> {
        if !tables.categories.contains_key(&category_id.0) {
            return Err(ServiceError::referential_integrity(format!(
                "Failed to write product: category {} does not exist",
                category_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_page(&self, pagination: &Pagination) -> ServiceResult<PagedResult<Product>> {
        check_pagination(pagination)?;
        let tables = self.store.tables.lock().unwrap();
        let total = tables.products.len() as u64;
        let window = pagination.window();

        let items = tables
            .products
            .iter()
            .filter_map(|(id, (name, cid))| Self::joined(&tables, *id, name, *cid))
            .zip(1u64..)
            .filter(|(_, rank)| window.contains(*rank))
            .map(|(product, _)| product)
            .collect();

        Ok(PagedResult::new(items, total, pagination))
    }

    async fn find_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        let tables = self.store.tables.lock().unwrap();
        Ok(tables
            .products
            .get(&id.0)
            .and_then(|(name, cid)| Self::joined(&tables, id.0, name, *cid)))
    }

    async fn insert(&self, draft: &ProductDraft) -> ServiceResult<ProductId> {
        draft.validate()?;
        let mut tables = self.store.tables.lock().unwrap();
        Self::check_category(&tables, draft.category_id)?;
        tables.next_product_id += 1;
        let id = tables.next_product_id;
        tables
            .products
            .insert(id, (draft.name.clone(), draft.category_id.0));
        Ok(ProductId(id))
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> ServiceResult<()> {
        draft.validate()?;
        let mut tables = self.store.tables.lock().unwrap();
        if !tables.products.contains_key(&id.0) {
            return Ok(());
        }
        Self::check_category(&tables, draft.category_id)?;
        tables
            .products
            .insert(id.0, (draft.name.clone(), draft.category_id.0));
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> ServiceResult<()> {
        self.store.tables.lock().unwrap().products.remove(&id.0);
        Ok(())
    }
}
