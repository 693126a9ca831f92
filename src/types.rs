use std::fmt;
use std::str::FromStr;

use crate::AisError;

/// Four-character airport identifier, normalized to uppercase.
///
/// Created once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icao(String);

impl Icao {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Icao {
    type Err = AisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AisError::InvalidIcao(value.to_string()));
        }
        Ok(Icao(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Weather and sun information for one aerodrome.
///
/// `None` means the site published no text for that field, not that the
/// lookup failed; failures surface as errors before a record is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AerodromeInfo {
    pub metar: Option<String>,
    pub taf: Option<String>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

impl AerodromeInfo {
    pub fn is_empty(&self) -> bool {
        self.metar.is_none() && self.taf.is_none() && self.sunrise.is_none() && self.sunset.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icao_parses_and_uppercases() {
        let icao: Icao = "sbsp".parse().expect("valid icao");
        assert_eq!(icao.as_str(), "SBSP");
        assert_eq!(icao.to_string(), "SBSP");
    }

    #[test]
    fn icao_accepts_surrounding_whitespace() {
        let icao: Icao = " SBGR\n".parse().expect("valid icao");
        assert_eq!(icao.as_str(), "SBGR");
    }

    #[test]
    fn icao_rejects_wrong_length_and_symbols() {
        assert!("SB".parse::<Icao>().is_err());
        assert!("SBSPX".parse::<Icao>().is_err());
        assert!("SB-P".parse::<Icao>().is_err());
        assert!("".parse::<Icao>().is_err());
    }

    #[test]
    fn aerodrome_info_empty_only_when_all_fields_missing() {
        assert!(AerodromeInfo::default().is_empty());

        let partial = AerodromeInfo {
            metar: Some("METAR SBSP 221700Z".to_string()),
            ..AerodromeInfo::default()
        };
        assert!(!partial.is_empty());
    }
}
