use models::contact::{ContactMessage, ContactMessageCreate, MessageStatusUpdate};
use tracing::instrument;

use super::{DataService, StatusQuery};
use crate::errors::ServiceError;
use crate::storage::Sort;

const NEWEST_FIRST: Sort = Sort::descending("created_at");

impl DataService {
    pub async fn contact_messages(&self, query: &StatusQuery) -> Result<Vec<ContactMessage>, ServiceError> {
        self.list(query.filter(), NEWEST_FIRST).await
    }

    #[instrument(skip_all, fields(name = %input.name))]
    pub async fn create_contact_message(&self, input: ContactMessageCreate) -> Result<String, ServiceError> {
        self.create(input).await
    }

    #[instrument(skip(self, update), fields(status = %update.status))]
    pub async fn update_message_status(&self, id: &str, update: &MessageStatusUpdate) -> Result<bool, ServiceError> {
        self.update(id, update).await
    }

    #[instrument(skip(self))]
    pub async fn delete_contact_message(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete::<ContactMessage>(id).await
    }
}
