// src/venue.rs

use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt, str::FromStr};

use crate::error::ScheduleError;

/// League divisions that have a field-detail table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    Bantam,
    Midget,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Bantam => "Bantam",
            Division::Midget => "Midget",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = ScheduleError;

    /// Case-sensitive: only the exact names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bantam" => Ok(Division::Bantam),
            "Midget" => Ok(Division::Midget),
            _ => Err(ScheduleError::Usage(
                "Division must be either Bantam or Midget".to_string(),
            )),
        }
    }
}

/// Venue → map link. Stored bare; the CSV writer quotes the ones containing commas.
static LOCATION_URLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Chaldecott Park",
            "https://www.google.com/maps/place/Chaldecott+Park/@49.2489543,-123.1943893,17z/data=!3m1!4b1!4m5!3m4!1s0x54867319fdabfed1:0x371c9013ea6c781b!8m2!3d49.2489508!4d-123.1922006",
        ),
        (
            "Hillcrest Park",
            "http://covapp.vancouver.ca/parkfinder/parkdetail.aspx?inparkid=164",
        ),
        (
            "Trafalgar Park",
            "https://www.google.com/maps/place/Trafalgar+Park/@49.2510074,-123.1645553,17z/data=!3m1!4b1!4m5!3m4!1s0x548673a09b6a9b15:0x85643662d26d2056!8m2!3d49.2510039!4d-123.1623666",
        ),
    ])
});

/// Division → venue → where on the site the diamond is.
static FIELD_DETAILS: Lazy<HashMap<Division, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        HashMap::from([
            (
                Division::Midget,
                HashMap::from([
                    ("Hillcrest Park", "Midget Diamond"),
                    ("Trafalgar Park", "SE Corner"),
                ]),
            ),
            (
                Division::Bantam,
                HashMap::from([
                    ("Hillcrest Park", "Bantam Diamond"),
                    ("Chaldecott Park", "North Diamond"),
                ]),
            ),
        ])
    });

pub fn location_url(venue: &str) -> Option<&'static str> {
    LOCATION_URLS.get(venue).copied()
}

pub fn field_detail(division: Division, venue: &str) -> Option<&'static str> {
    FIELD_DETAILS
        .get(&division)
        .and_then(|venues| venues.get(venue))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_is_case_sensitive() {
        assert_eq!("Bantam".parse::<Division>().unwrap(), Division::Bantam);
        assert_eq!("Midget".parse::<Division>().unwrap(), Division::Midget);
        assert!("bantam".parse::<Division>().is_err());

        let err = "Peewee".parse::<Division>().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Division must be either Bantam or Midget");
    }

    #[test]
    fn test_field_details_are_per_division() {
        assert_eq!(
            field_detail(Division::Bantam, "Hillcrest Park"),
            Some("Bantam Diamond")
        );
        assert_eq!(
            field_detail(Division::Midget, "Hillcrest Park"),
            Some("Midget Diamond")
        );
        assert_eq!(
            field_detail(Division::Midget, "Trafalgar Park"),
            Some("SE Corner")
        );
        // Chaldecott only hosts Bantam games.
        assert_eq!(field_detail(Division::Midget, "Chaldecott Park"), None);
    }

    #[test]
    fn test_every_detailed_venue_has_a_url() {
        for venues in FIELD_DETAILS.values() {
            for venue in venues.keys() {
                let url = location_url(venue).expect("missing url");
                assert!(!url.contains('"'), "{} url is pre-quoted", venue);
            }
        }
        assert_eq!(location_url("Nat Bailey"), None);
    }
}
