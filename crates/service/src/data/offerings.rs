use models::offering::{ServiceOffering, ServiceOfferingCreate, ServiceOfferingUpdate};
use tracing::instrument;

use super::DataService;
use crate::errors::ServiceError;
use crate::storage::{Filter, Sort};

const ORDER: Sort = Sort::ascending("order");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceQuery {
    pub active_only: bool,
}

impl Default for ServiceQuery {
    fn default() -> Self { Self { active_only: true } }
}

impl ServiceQuery {
    pub fn all() -> Self { Self { active_only: false } }

    fn filter(&self) -> Filter {
        if self.active_only { Filter::new().eq("active", true) } else { Filter::new() }
    }
}

impl DataService {
    pub async fn services(&self, query: &ServiceQuery) -> Result<Vec<ServiceOffering>, ServiceError> {
        self.list(query.filter(), ORDER).await
    }

    #[instrument(skip_all, fields(name = %input.name))]
    pub async fn create_service(&self, input: ServiceOfferingCreate) -> Result<String, ServiceError> {
        self.create(input).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_service(&self, id: &str, patch: &ServiceOfferingUpdate) -> Result<bool, ServiceError> {
        self.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_service(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete::<ServiceOffering>(id).await
    }
}
