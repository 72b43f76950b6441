use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RootResponse { pub message: String, pub status: String }

#[derive(ToSchema)]
pub struct PortfolioItemCreateDoc {
    pub title: String,
    pub title_en: Option<String>,
    /// One of `Bar Mitzvah`, `Bat Mitzvah`, `Brit Milah`, `Torah Reading`, `Family Event`.
    pub category: String,
    pub image: String,
    pub description: String,
    pub description_en: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i64>,
}

#[derive(ToSchema)]
pub struct PortfolioItemUpdateDoc {
    pub title: Option<String>,
    pub title_en: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i64>,
}

#[derive(ToSchema)]
pub struct ServiceOfferingCreateDoc {
    pub name: String,
    pub name_en: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    pub price: String,
    pub duration: String,
    pub duration_en: Option<String>,
    pub includes: Vec<String>,
    pub includes_en: Option<Vec<String>>,
    pub active: Option<bool>,
    pub order: Option<i64>,
}

#[derive(ToSchema)]
pub struct ServiceOfferingUpdateDoc {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub duration_en: Option<String>,
    pub includes: Option<Vec<String>>,
    pub includes_en: Option<Vec<String>>,
    pub active: Option<bool>,
    pub order: Option<i64>,
}

#[derive(ToSchema)]
pub struct TestimonialCreateDoc {
    pub name: String,
    pub name_en: Option<String>,
    pub event: String,
    pub event_en: Option<String>,
    pub text: String,
    pub text_en: Option<String>,
    /// 1 to 5.
    pub rating: i32,
    pub approved: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(ToSchema)]
pub struct TestimonialUpdateDoc {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub event: Option<String>,
    pub event_en: Option<String>,
    pub text: Option<String>,
    pub text_en: Option<String>,
    pub rating: Option<i32>,
    pub approved: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(ToSchema)]
pub struct ContactMessageCreateDoc {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub event_type: Option<String>,
    /// Free-form date; stored as null when it cannot be parsed.
    pub event_date: Option<String>,
    pub message: Option<String>,
}

#[derive(ToSchema)]
pub struct BookingRequestCreateDoc {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    /// `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339.
    pub event_date: String,
    pub guest_count: Option<u32>,
    pub budget: Option<String>,
    pub venue: Option<String>,
    pub additional_info: Option<String>,
}

#[derive(ToSchema)]
pub struct StatusUpdateDoc { pub status: String }

#[derive(ToSchema)]
pub struct SettingUpdateDoc {
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::portfolio::list,
        crate::routes::portfolio::featured,
        crate::routes::portfolio::create,
        crate::routes::portfolio::update,
        crate::routes::portfolio::delete,
        crate::routes::offerings::list,
        crate::routes::offerings::create,
        crate::routes::offerings::update,
        crate::routes::offerings::delete,
        crate::routes::testimonials::list,
        crate::routes::testimonials::featured,
        crate::routes::testimonials::create,
        crate::routes::testimonials::update,
        crate::routes::testimonials::delete,
        crate::routes::inbox::submit_contact,
        crate::routes::inbox::submit_booking,
        crate::routes::inbox::list_messages,
        crate::routes::inbox::update_message,
        crate::routes::inbox::delete_message,
        crate::routes::inbox::list_bookings,
        crate::routes::inbox::update_booking,
        crate::routes::inbox::delete_booking,
        crate::routes::settings::list,
        crate::routes::settings::get,
        crate::routes::settings::put,
    ),
    components(
        schemas(
            HealthResponse,
            RootResponse,
            PortfolioItemCreateDoc,
            PortfolioItemUpdateDoc,
            ServiceOfferingCreateDoc,
            ServiceOfferingUpdateDoc,
            TestimonialCreateDoc,
            TestimonialUpdateDoc,
            ContactMessageCreateDoc,
            BookingRequestCreateDoc,
            StatusUpdateDoc,
            SettingUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "portfolio"),
        (name = "services"),
        (name = "testimonials"),
        (name = "inbox"),
        (name = "settings")
    )
)]
pub struct ApiDoc;
