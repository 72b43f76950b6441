use models::testimonial::{Testimonial, TestimonialCreate, TestimonialUpdate};
use tracing::instrument;

use super::DataService;
use crate::errors::ServiceError;
use crate::storage::{Filter, Sort};

const NEWEST_FIRST: Sort = Sort::descending("created_at");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialQuery {
    pub approved_only: bool,
    pub featured: Option<bool>,
}

impl Default for TestimonialQuery {
    fn default() -> Self { Self { approved_only: true, featured: None } }
}

impl TestimonialQuery {
    pub fn featured() -> Self { Self { approved_only: true, featured: Some(true) } }

    fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        if self.approved_only {
            filter = filter.eq("approved", true);
        }
        if let Some(featured) = self.featured {
            filter = filter.eq("featured", featured);
        }
        filter
    }
}

impl DataService {
    pub async fn testimonials(&self, query: &TestimonialQuery) -> Result<Vec<Testimonial>, ServiceError> {
        self.list(query.filter(), NEWEST_FIRST).await
    }

    #[instrument(skip_all, fields(name = %input.name, rating = input.rating))]
    pub async fn create_testimonial(&self, input: TestimonialCreate) -> Result<String, ServiceError> {
        self.create(input).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_testimonial(&self, id: &str, patch: &TestimonialUpdate) -> Result<bool, ServiceError> {
        self.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_testimonial(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete::<Testimonial>(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_service, testimonial_input};

    #[tokio::test]
    async fn approved_and_featured_compose() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        svc.create_testimonial(testimonial_input("A", true, true)).await?;
        svc.create_testimonial(testimonial_input("B", true, false)).await?;
        svc.create_testimonial(testimonial_input("C", false, true)).await?;

        let featured = svc.testimonials(&TestimonialQuery::featured()).await?;
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "A");

        assert_eq!(svc.testimonials(&TestimonialQuery::default()).await?.len(), 2);
        let everything = TestimonialQuery { approved_only: false, featured: None };
        assert_eq!(svc.testimonials(&everything).await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn newest_first() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        for name in ["first", "second", "third"] {
            svc.create_testimonial(testimonial_input(name, true, false)).await?;
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }
        let names: Vec<String> = svc
            .testimonials(&TestimonialQuery::default())
            .await?
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["third", "second", "first"]);
        Ok(())
    }

    #[tokio::test]
    async fn rating_update_and_delete() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let id = svc.create_testimonial(testimonial_input("A", true, false)).await?;
        let good = TestimonialUpdate { rating: Some(4), ..Default::default() };
        assert!(svc.update_testimonial(&id, &good).await?);
        assert_eq!(svc.testimonials(&TestimonialQuery::default()).await?[0].rating, 4);
        assert!(svc.delete_testimonial(&id).await?);
        Ok(())
    }
}
