use chrono::{Duration, NaiveDate, NaiveDateTime};
use fyyur_core::genres::Genres;
use fyyur_db::models::artist::CreateArtist;
use fyyur_db::models::venue::CreateVenue;

/// Fixed clock reading used by booking tests.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn days_from_now(days: i64) -> NaiveDateTime {
    now() + Duration::days(days)
}

pub fn new_venue(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        image_link: None,
        facebook_link: None,
        genres: Genres::from_delimited("Jazz,Reggae"),
        website: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: Genres::from_delimited("Rock n Roll"),
        image_link: Some(format!("https://img.example/{name}.jpg")),
        facebook_link: None,
        website: None,
        seeking_venue: false,
        seeking_description: None,
    }
}
