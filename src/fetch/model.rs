use serde::Deserialize;

/// A country as decoded from the wire. Immutable after decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    /// The country's id, unique across the list.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The country's population.
    pub population: u64,
    /// URL of the country's flag image. Absent in older schema versions.
    #[serde(rename = "flagURL", default)]
    pub flag_url: Option<String>,
    /// The attractions a country has.
    pub attractions: Vec<Attraction>,
}

/// A country's attraction. `country_id` points back at the owning country
/// by id, not by reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attraction {
    /// The attraction's id, unique within its country.
    pub id: String,
    /// The owning country's id. `CountryId` on the wire.
    #[serde(rename = "CountryId")]
    pub country_id: String,
    /// Display name.
    pub name: String,
    /// The description of the attraction.
    pub description: String,
    /// URL of the attraction's image. Absent in older schema versions.
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_id_wire_rename() {
        let json = r#"{
            "id": "a1",
            "CountryId": "1",
            "name": "Colosseum",
            "description": "Ancient amphitheatre"
        }"#;
        let attraction: Attraction = serde_json::from_str(json).unwrap();
        assert_eq!(attraction.country_id, "1");
        assert_eq!(attraction.image, None);
    }

    #[test]
    fn test_attraction_rejects_snake_case_country_id() {
        // The wire field is `CountryId`; the model name must not leak back.
        let json = r#"{
            "id": "a1",
            "countryId": "1",
            "name": "Colosseum",
            "description": "Ancient amphitheatre"
        }"#;
        assert!(serde_json::from_str::<Attraction>(json).is_err());
    }

    #[test]
    fn test_country_flag_url_optional() {
        let json = r#"{"id":"1","name":"Italy","population":60000000,"attractions":[]}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.flag_url, None);

        let json = r#"{"id":"1","name":"Italy","population":60000000,
                       "flagURL":"http://x/flag.png","attractions":[]}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.flag_url.as_deref(), Some("http://x/flag.png"));
    }

    #[test]
    fn test_country_missing_required_field_fails() {
        let json = r#"{"id":"1","population":60000000,"attractions":[]}"#;
        assert!(serde_json::from_str::<Country>(json).is_err());
    }
}
