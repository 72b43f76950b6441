use models::portfolio::{PortfolioItem, PortfolioItemCreate, PortfolioItemUpdate, ALL_CATEGORIES};
use tracing::instrument;

use super::DataService;
use crate::errors::ServiceError;
use crate::storage::{Filter, Sort};

const ORDER: Sort = Sort::ascending("order");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortfolioQuery {
    /// Empty or `All` means every category.
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl PortfolioQuery {
    pub fn featured() -> Self { Self { category: None, featured: Some(true) } }

    fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        if let Some(category) = self.category.as_deref() {
            if !category.is_empty() && category != ALL_CATEGORIES {
                filter = filter.eq("category", category);
            }
        }
        if let Some(featured) = self.featured {
            filter = filter.eq("featured", featured);
        }
        filter
    }
}

impl DataService {
    pub async fn portfolio_items(&self, query: &PortfolioQuery) -> Result<Vec<PortfolioItem>, ServiceError> {
        self.list(query.filter(), ORDER).await
    }

    #[instrument(skip_all, fields(title = %input.title))]
    pub async fn create_portfolio_item(&self, input: PortfolioItemCreate) -> Result<String, ServiceError> {
        self.create(input).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_portfolio_item(&self, id: &str, patch: &PortfolioItemUpdate) -> Result<bool, ServiceError> {
        self.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_portfolio_item(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete::<PortfolioItem>(id).await
    }
}
