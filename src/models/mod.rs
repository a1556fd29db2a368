//! Data models shared by the aggregation and generation stages

pub mod channel;

pub use channel::{
    Channel, Country, LANGUAGE_SEPARATOR, Language, OTHER_CATEGORY, Tvg, UNDEFINED_LANGUAGE,
    create_channel, parse_languages,
};
