use models::booking::{BookingRequest, BookingRequestCreate, BookingStatusUpdate};
use tracing::instrument;

use super::{DataService, StatusQuery};
use crate::errors::ServiceError;
use crate::storage::Sort;

const NEWEST_FIRST: Sort = Sort::descending("created_at");

impl DataService {
    pub async fn booking_requests(&self, query: &StatusQuery) -> Result<Vec<BookingRequest>, ServiceError> {
        self.list(query.filter(), NEWEST_FIRST).await
    }

    #[instrument(skip_all, fields(name = %input.name, event_type = %input.event_type))]
    pub async fn create_booking_request(&self, input: BookingRequestCreate) -> Result<String, ServiceError> {
        self.create(input).await
    }

    #[instrument(skip(self, update), fields(status = %update.status))]
    pub async fn update_booking_status(&self, id: &str, update: &BookingStatusUpdate) -> Result<bool, ServiceError> {
        self.update(id, update).await
    }

    #[instrument(skip(self))]
    pub async fn delete_booking_request(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete::<BookingRequest>(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{booking_input, memory_service};

    #[tokio::test]
    async fn booking_lifecycle() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let id = svc.create_booking_request(booking_input("2025-06-01")).await?;

        let listed = svc.booking_requests(&StatusQuery::default()).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, "new");

        let booked = BookingStatusUpdate { status: "booked".into() };
        assert!(svc.update_booking_status(&id, &booked).await?);
        assert_eq!(svc.booking_requests(&StatusQuery::status("booked")).await?.len(), 1);
        assert!(svc.booking_requests(&StatusQuery::status("new")).await?.is_empty());

        assert!(svc.delete_booking_request(&id).await?);
        assert!(!svc.update_booking_status(&id, &booked).await?);
        Ok(())
    }

    #[tokio::test]
    async fn unparsable_date_is_rejected() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let err = svc.create_booking_request(booking_input("whenever")).await.unwrap_err();
        assert!(err.to_string().contains("Valid event date is required"));
        assert!(svc.booking_requests(&StatusQuery::default()).await?.is_empty());
        Ok(())
    }
}
