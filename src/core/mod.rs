//! Domain types and the backend gateway.

pub mod article;
pub mod gateway;

pub use article::{Article, ArticleId, ArticleKind, UNKNOWN_DATE_LABEL, format_published};
pub use gateway::{DEFAULT_API_URL, GatewayError, Health, HttpGateway, NewsGateway};
