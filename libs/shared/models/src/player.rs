use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub club: String,
    pub position: String,
    pub nationality: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shirt_number: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub goals: u64,
    pub assists: u64,
    pub appearances: u64,
    pub social_mentions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerWithStats {
    pub profile: PlayerProfile,
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub profile: PlayerProfile,
    pub match_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_uses_camel_case_and_skips_missing_optionals() {
        let profile = PlayerProfile {
            id: "9".into(),
            name: "Test Player".into(),
            club: "Test FC".into(),
            position: "Defender".into(),
            nationality: "Ireland".into(),
            age: 28,
            photo: None,
            shirt_number: Some(4),
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["shirtNumber"], json!(4));
        assert!(value.get("photo").is_none());
    }

    #[test]
    fn search_result_flattens_profile() {
        let value = json!({
            "id": "2",
            "name": "Cristiano Ronaldo",
            "club": "Al-Nassr",
            "position": "Forward",
            "nationality": "Portugal",
            "age": 39,
            "matchScore": 100
        });

        let result: SearchResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.profile.name, "Cristiano Ronaldo");
        assert_eq!(result.match_score, 100);
        assert_eq!(result.profile.shirt_number, None);
    }
}
