use once_cell::sync::Lazy;
use regex::Regex;

static PERSON_ROLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.+) \(([\w\s]+)\)").unwrap());
static MOVIE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.+) \(Movie\)").unwrap());

/// Role assumed for a `per_facet` entry with no parenthetical.
const DEFAULT_ROLE: &str = "Actor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonChip {
    pub name: String,
    pub role: String,
}

/// Split one `per_facet` entry into name and role.
pub fn parse_person(entry: &str) -> PersonChip {
    match PERSON_ROLE.captures(entry) {
        Some(caps) => PersonChip {
            name: caps[1].to_string(),
            role: caps[2].to_string(),
        },
        None => PersonChip {
            name: entry.to_string(),
            role: DEFAULT_ROLE.to_string(),
        },
    }
}

pub fn person_chips(per_facet: &[String]) -> Vec<PersonChip> {
    per_facet.iter().map(|entry| parse_person(entry)).collect()
}

/// First `des_facet` entry tagged `(Movie)` names the movie.
pub fn find_movie_name(des_facet: &[String]) -> Option<String> {
    des_facet
        .iter()
        .find_map(|desc| MOVIE_NAME.captures(desc).map(|caps| caps[1].to_string()))
}
