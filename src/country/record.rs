use serde::Deserialize;

/// A spoken language as reported by the countries API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Country data for one lookup. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub native: String,
    pub capital: Option<String>,
    pub emoji: String,
    pub currency: Option<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl CountryRecord {
    pub fn capital_or_na(&self) -> &str {
        self.capital.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A")
    }

    pub fn currency_or_na(&self) -> &str {
        self.currency.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "name": "Brazil",
            "native": "Brasil",
            "capital": "Brasília",
            "emoji": "🇧🇷",
            "currency": "BRL",
            "languages": [{"code": "pt", "name": "Portuguese"}]
        }"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Brazil");
        assert_eq!(record.languages.len(), 1);
        assert_eq!(record.languages[0].code, "pt");
    }

    #[test]
    fn missing_optional_fields_render_as_na() {
        let json = r#"{
            "name": "Antarctica",
            "native": "Antarctica",
            "capital": null,
            "emoji": "🇦🇶",
            "currency": null,
            "languages": []
        }"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.capital_or_na(), "N/A");
        assert_eq!(record.currency_or_na(), "N/A");
    }
}
