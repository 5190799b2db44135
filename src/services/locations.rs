// src/services/locations.rs
use reqwest::Url;
use serde::Serialize;

const REALESTATE_BASE: &str = "https://www.realestate.co.nz";
const TRADEME_SEARCH: &str = "https://www.trademe.co.nz/a/property/residential/sale";

/// One of the legacy Auckland cities/districts offered by the form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct City {
    pub key: &'static str,
    pub name: &'static str,
    pub suburbs: &'static [&'static str],
}

pub static AUCKLAND_CITIES: [City; 7] = [
    City {
        key: "auckland-city",
        name: "Auckland City",
        suburbs: &[
            "Auckland Central",
            "Ponsonby",
            "Parnell",
            "Newmarket",
            "Mount Eden",
            "Epsom",
            "Remuera",
            "Orakei",
            "Mission Bay",
            "Kohimarama",
            "St Heliers",
            "Glendowie",
            "Meadowbank",
            "St Johns",
            "Ellerslie",
            "Onehunga",
            "Royal Oak",
            "Mount Roskill",
            "Three Kings",
            "Sandringham",
            "Kingsland",
            "Morningside",
            "Point Chevalier",
            "Western Springs",
            "Grey Lynn",
            "Herne Bay",
            "Freemans Bay",
            "Viaduct Harbour",
            "Wynyard Quarter",
            "Grafton",
            "Domain",
            "Carlton",
        ],
    },
    City {
        key: "north-shore-city",
        name: "North Shore City",
        suburbs: &[
            "Takapuna",
            "Milford",
            "Devonport",
            "Belmont",
            "Hauraki",
            "Westlake",
            "Forrest Hill",
            "Sunnynook",
            "Birkenhead",
            "Northcote",
            "Hillcrest",
            "Glenfield",
            "Beach Haven",
            "Birkdale",
            "Browns Bay",
            "Rothesay Bay",
            "Murrays Bay",
            "Mairangi Bay",
            "Campbells Bay",
            "Castor Bay",
            "Long Bay",
            "Torbay",
            "Waiake",
            "Brown Bay",
            "Albany",
            "Rosedale",
            "Unsworth Heights",
        ],
    },
    City {
        key: "waitakere-city",
        name: "Waitakere City",
        suburbs: &[
            "Henderson",
            "Te Atatu Peninsula",
            "Te Atatu South",
            "Massey",
            "West Harbour",
            "Hobsonville",
            "New Lynn",
            "Glen Eden",
            "Titirangi",
            "Green Bay",
            "Kelston",
            "Avondale",
            "Blockhouse Bay",
            "Lynfield",
            "Hillsborough",
            "Mount Roskill",
            "Ranui",
            "Swanson",
            "Waitakere",
            "Oratia",
        ],
    },
    City {
        key: "manukau-city",
        name: "Manukau City",
        suburbs: &[
            "Manukau",
            "Botany",
            "Howick",
            "Pakuranga",
            "Half Moon Bay",
            "Bucklands Beach",
            "Eastern Beach",
            "Dannemora",
            "Flat Bush",
            "East Tamaki",
            "Otara",
            "Papatoetoe",
            "Mangere",
            "Mangere East",
            "Favona",
            "Otahuhu",
            "Middlemore",
            "Manurewa",
            "Clendon Park",
            "Wattle Downs",
            "Takanini",
            "Papakura",
            "Clevedon",
            "Whitford",
            "Beachlands",
            "Maraetai",
        ],
    },
    City {
        key: "papakura-district",
        name: "Papakura District",
        suburbs: &[
            "Papakura",
            "Takanini",
            "Rosehill",
            "Red Hill",
            "Karaka",
            "Drury",
            "Hingaia",
            "Ardmore",
        ],
    },
    City {
        key: "rodney-district",
        name: "Rodney District",
        suburbs: &[
            "Orewa",
            "Whangaparaoa",
            "Red Beach",
            "Stanmore Bay",
            "Army Bay",
            "Silverdale",
            "Dairy Flat",
            "Albany",
            "Coatesville",
            "Riverhead",
            "Huapai",
            "Kumeu",
            "Waimauku",
            "Helensville",
            "Kaukapakapa",
        ],
    },
    City {
        key: "franklin-district",
        name: "Franklin District",
        suburbs: &[
            "Pukekohe",
            "Waiuku",
            "Tuakau",
            "Pokeno",
            "Bombay",
            "Patumahoe",
            "Buckland",
            "Mauku",
            "Clarks Beach",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearchLinks {
    pub real_estate: String,
    pub trade_me: String,
    pub city_name: Option<&'static str>,
    pub suburb_name: String,
}

pub fn find_city(key: &str) -> Option<&'static City> {
    AUCKLAND_CITIES.iter().find(|city| city.key == key)
}

/// Lowercases and replaces every run of whitespace with a single `-`.
/// Leading and trailing runs are kept as `-` too.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

pub fn property_search_urls(city_key: &str, suburb: &str) -> Option<PropertySearchLinks> {
    if city_key.is_empty() || suburb.is_empty() {
        return None;
    }

    let real_estate = format!(
        "{}/residential/sale/auckland/{}/{}",
        REALESTATE_BASE,
        city_key,
        slugify(suburb)
    );
    let search_string = format!("{}, Auckland", suburb);
    let trade_me = Url::parse_with_params(
        TRADEME_SEARCH,
        &[
            ("search_string", search_string.as_str()),
            ("property_type", "residential"),
            ("listing_type", "sale"),
        ],
    )
    .ok()?;

    Some(PropertySearchLinks {
        real_estate,
        trade_me: trade_me.to_string(),
        city_name: find_city(city_key).map(|city| city.name),
        suburb_name: suburb.to_string(),
    })
}

pub fn suburb_report_url(city_key: &str, suburb: &str) -> Option<String> {
    if city_key.is_empty() || suburb.is_empty() {
        return None;
    }
    Some(format!(
        "{}/insights/auckland/{}/{}",
        REALESTATE_BASE,
        city_key,
        slugify(suburb)
    ))
}
