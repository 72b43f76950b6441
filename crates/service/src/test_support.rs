#![cfg(test)]
use models::booking::BookingRequestCreate;
use models::contact::ContactMessageCreate;
use models::offering::ServiceOfferingCreate;
use models::portfolio::PortfolioItemCreate;
use models::testimonial::TestimonialCreate;

use crate::data::DataService;
use crate::storage::JsonDocumentStore;

/// Fresh data service over an unpersisted store.
pub fn memory_service() -> DataService {
    DataService::new(JsonDocumentStore::in_memory())
}

pub fn portfolio_input(category: &str, featured: bool, order: i64) -> PortfolioItemCreate {
    PortfolioItemCreate {
        title: format!("{category} #{order}"),
        title_en: None,
        category: category.into(),
        image: "/images/sample.jpg".into(),
        description: "sample".into(),
        description_en: None,
        featured,
        order,
    }
}

pub fn service_input(name: &str, active: bool, order: i64) -> ServiceOfferingCreate {
    ServiceOfferingCreate {
        name: name.into(),
        name_en: None,
        description: "sample".into(),
        description_en: None,
        price: "₪1,000".into(),
        duration: "2 hours".into(),
        duration_en: None,
        includes: vec!["photos".into()],
        includes_en: None,
        active,
        order,
    }
}

pub fn testimonial_input(name: &str, approved: bool, featured: bool) -> TestimonialCreate {
    TestimonialCreate {
        name: name.into(),
        name_en: None,
        event: "Bar Mitzvah".into(),
        event_en: None,
        text: "Thank you".into(),
        text_en: None,
        rating: 5,
        approved,
        featured,
    }
}

pub fn contact_input(name: &str) -> ContactMessageCreate {
    ContactMessageCreate {
        name: name.into(),
        phone: "050-000-0000".into(),
        email: None,
        event_type: None,
        event_date: None,
        message: Some("hello".into()),
    }
}

pub fn booking_input(event_date: &str) -> BookingRequestCreate {
    BookingRequestCreate {
        name: "Levy".into(),
        phone: "052-111-2222".into(),
        email: "levy@example.com".into(),
        event_type: "Brit Milah".into(),
        event_date: event_date.into(),
        guest_count: Some(40),
        budget: None,
        venue: None,
        additional_info: None,
    }
}
