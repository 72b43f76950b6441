//! First-run catalog for an empty store.
//!
//! Each collection is seeded only while it is empty and each settings key
//! only while it is absent, so running the loader again is a no-op and a
//! partially seeded store gets completed.

use models::offering::{ServiceOffering, ServiceOfferingCreate};
use models::portfolio::{PortfolioItem, PortfolioItemCreate};
use models::setting::{self, SettingValue};
use models::testimonial::{Testimonial, TestimonialCreate};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::data::DataService;
use crate::errors::ServiceError;

/// Number of documents written per collection by one seeding run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub portfolio: usize,
    pub services: usize,
    pub testimonials: usize,
    pub settings: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.portfolio + self.services + self.testimonials + self.settings == 0
    }
}

#[instrument(skip_all)]
pub async fn seed_initial_data(data: &DataService) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();

    if data.count::<PortfolioItem>().await? == 0 {
        for item in portfolio_catalog() {
            data.create_portfolio_item(item).await?;
            report.portfolio += 1;
        }
    }
    if data.count::<ServiceOffering>().await? == 0 {
        for service in service_catalog() {
            data.create_service(service).await?;
            report.services += 1;
        }
    }
    if data.count::<Testimonial>().await? == 0 {
        for testimonial in testimonial_catalog() {
            data.create_testimonial(testimonial).await?;
            report.testimonials += 1;
        }
    }
    for (key, value) in settings_catalog() {
        if data.setting(key).await?.is_none() {
            data.set_setting(key, value).await?;
            report.settings += 1;
        }
    }

    if report.is_empty() {
        info!("seed_skipped_already_present");
    } else {
        info!(
            portfolio = report.portfolio,
            services = report.services,
            testimonials = report.testimonials,
            settings = report.settings,
            "seed_completed"
        );
    }
    Ok(report)
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?crop=entropy&cs=srgb&fm=jpg&q=85")
}

fn portfolio_catalog() -> Vec<PortfolioItemCreate> {
    let item = |title: &str, title_en: &str, category: &str, photo: &str, description: &str, featured: bool, order: i64| {
        PortfolioItemCreate {
            title: title.into(),
            title_en: Some(title_en.into()),
            category: category.into(),
            image: unsplash(photo),
            description: description.into(),
            description_en: None,
            featured,
            order,
        }
    };
    vec![
        item("בר מצווה של דניאל", "Daniel's Bar Mitzvah", "Bar Mitzvah", "1658889849723-0191c8ac8c61", "חגיגה משפחתית מרגשת בכותל המערבי", true, 1),
        item("ברית מילה של אברהם", "Abraham's Brit Milah", "Brit Milah", "1578154450695-aa2f8d2b10a2", "רגעים קדושים בבוקר יפהפה", true, 2),
        item("בת מצווה של שרה", "Sarah's Bat Mitzvah", "Bat Mitzvah", "1747128976434-625335086fb3", "חגיגה אלגנטית עם המשפחה והחברים", false, 3),
        item("עלייה לתורה מיוחדת", "Special Torah Reading", "Torah Reading", "1661919858163-6d56dc4bec97", "רגע קדוש של קריאה בתורה", true, 4),
        item("טקס דתי משפחתי", "Family Religious Ceremony", "Family Event", "1649351340622-8092aa097b0f", "אירוע משפחתי חם ומרגש", false, 5),
        item("חגיגת בר מצווה בירושלים", "Bar Mitzvah Celebration in Jerusalem", "Bar Mitzvah", "1549575483-5ed15f0353b7", "אב ובן ברגע מיוחד בכותל המערבי", true, 6),
    ]
}

fn service_catalog() -> Vec<ServiceOfferingCreate> {
    let service = |name: &str, name_en: &str, description: &str, description_en: &str, price: &str, hours: u32, includes: [&str; 4], order: i64| {
        ServiceOfferingCreate {
            name: name.into(),
            name_en: Some(name_en.into()),
            description: description.into(),
            description_en: Some(description_en.into()),
            price: price.into(),
            duration: format!("{hours} שעות צילום"),
            duration_en: Some(format!("{hours} hours of photography")),
            includes: includes.iter().map(|s| s.to_string()).collect(),
            includes_en: None,
            active: true,
            order,
        }
    };
    vec![
        service(
            "בר/בת מצווה",
            "Bar/Bat Mitzvah",
            "צילום מקצועי של יום מיוחד זה - מההכנות ועד לחגיגה",
            "Professional photography of this special day - from preparations to celebration",
            "₪2,500 - ₪4,500",
            8,
            ["צילום הטקס בבית הכנסת", "צילום החגיגה", "עריכה מקצועית", "200+ תמונות ערוכות"],
            1,
        ),
        service(
            "ברית מילה",
            "Brit Milah",
            "צילום עדין ומכבד של הטקס המיוחד",
            "Gentle and respectful photography of this special ceremony",
            "₪1,500 - ₪2,500",
            4,
            ["צילום הטקס", "צילום המשפחה", "תמונות קבוצתיות", "100+ תמונות ערוכות"],
            2,
        ),
        service(
            "עלייה לתורה",
            "Torah Reading",
            "צילום רגעים קדושים של קריאה בתורה",
            "Capturing sacred moments of Torah reading",
            "₪1,200 - ₪2,000",
            3,
            ["צילום הטקס", "צילום משפחתי", "תמונות של הזכרון", "80+ תמונות ערוכות"],
            3,
        ),
    ]
}

fn testimonial_catalog() -> Vec<TestimonialCreate> {
    let testimonial = |name: &str, name_en: &str, event: &str, event_en: &str, text: &str, text_en: &str| TestimonialCreate {
        name: name.into(),
        name_en: Some(name_en.into()),
        event: event.into(),
        event_en: Some(event_en.into()),
        text: text.into(),
        text_en: Some(text_en.into()),
        rating: 5,
        approved: true,
        featured: true,
    };
    vec![
        testimonial(
            "משפחת כהן",
            "Cohen Family",
            "בר מצווה",
            "Bar Mitzvah",
            "ידידיה צילם את בר המצווה של הבן שלנו בצורה מקצועית ומרגשת. הוא ידע להיות בזמן הנכון במקום הנכון וללכוד את כל הרגעים המיוחדים",
            "Yedidya photographed our son's Bar Mitzvah professionally and emotionally. He knew how to be at the right time in the right place and capture all the special moments",
        ),
        testimonial(
            "משפחת לוי",
            "Levy Family",
            "ברית מילה",
            "Brit Milah",
            "צילום עדין ומכבד של הברית. ידידיה הקפיד על כל הפרטים ונתן לנו זכרונות יפים לכל החיים",
            "Gentle and respectful photography of the Brit. Yedidya paid attention to all the details and gave us beautiful memories for life",
        ),
        testimonial(
            "משפחת אברהם",
            "Abraham Family",
            "בת מצווה",
            "Bat Mitzvah",
            "השירות המקצועי והחמימות האישית של ידידיה עשו את היום עוד יותר מיוחד. התמונות יפות ומרגשות",
            "Yedidya's professional service and personal warmth made the day even more special. The photos are beautiful and moving",
        ),
    ]
}

fn settings_catalog() -> Vec<(&'static str, SettingValue)> {
    let object = |v: Value| match v {
        Value::Object(map) => map,
        _ => SettingValue::new(),
    };
    vec![
        (
            setting::PHOTOGRAPHER_INFO,
            object(json!({
                "name": "ידידיה מלכא",
                "name_en": "Yedidya Malka",
                "tagline": "צלם אירועים יהודיים מקצועי",
                "tagline_en": "Professional Jewish Event Photographer",
                "description": "מתמחה בצילום אירועי מחזור החיים היהודיים - בר/בת מצווה, בריתות, עליות לתורה ואירועים משפחתיים מיוחדים",
                "description_en": "Specializing in Jewish lifecycle event photography - Bar/Bat Mitzvah, Brit Milah, Torah readings, and special family celebrations",
                "experience": "15+ שנות ניסיון",
                "experience_en": "15+ Years Experience",
                "location": "ירושלים וסביבותיה",
                "location_en": "Jerusalem & Surroundings"
            })),
        ),
        (
            setting::CONTACT_INFO,
            object(json!({
                "phone": "050-123-4567",
                "email": "yedidya@jewishevents.co.il",
                "address": "ירושלים, ישראל",
                "address_en": "Jerusalem, Israel"
            })),
        ),
        (
            setting::SOCIAL_MEDIA,
            object(json!({
                "instagram": "@yedidya_photography",
                "facebook": "YedidyaMalkaPhotography"
            })),
        ),
    ]
}
