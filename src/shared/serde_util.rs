//! Custom serde helpers for backend wire formats.

/// (De)serializes an optional backend `LocalDateTime`.
///
/// The backend writes zone-less timestamps. Depending on its Jackson setup
/// they arrive as ISO strings (`2024-03-01T09:30:00`), space-separated
/// strings (`2024-03-01 09:30:00`) or arrays (`[2024,3,1,9,30,0]`).
/// Serialization always emits the ISO form.
pub mod local_datetime {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Parts(Vec<u32>),
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Raw::Text(s)) => parse_text(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s))),
            Some(Raw::Parts(parts)) => from_parts(&parts)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {:?}", parts))),
        }
    }

    pub(crate) fn parse_text(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    }

    fn from_parts(parts: &[u32]) -> Option<NaiveDateTime> {
        if parts.len() < 3 {
            return None;
        }
        let part = |i: usize| parts.get(i).copied().unwrap_or(0);
        NaiveDate::from_ymd_opt(parts[0] as i32, parts[1], parts[2])?
            .and_hms_nano_opt(part(3), part(4), part(5), part(6))
    }
}
