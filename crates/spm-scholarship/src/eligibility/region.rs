use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Malaysian state or federal territory of residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Johor,
    Kedah,
    Kelantan,
    Melaka,
    #[serde(rename = "Negeri Sembilan")]
    NegeriSembilan,
    Pahang,
    Penang,
    Perak,
    Perlis,
    Sabah,
    Sarawak,
    Selangor,
    Terengganu,
    #[serde(rename = "W.P. Kuala Lumpur")]
    KualaLumpur,
    #[serde(rename = "W.P. Labuan")]
    Labuan,
    #[serde(rename = "W.P. Putrajaya")]
    Putrajaya,
}

impl Region {
    pub const ALL: [Region; 16] = [
        Region::Johor,
        Region::Kedah,
        Region::Kelantan,
        Region::Melaka,
        Region::NegeriSembilan,
        Region::Pahang,
        Region::Penang,
        Region::Perak,
        Region::Perlis,
        Region::Sabah,
        Region::Sarawak,
        Region::Selangor,
        Region::Terengganu,
        Region::KualaLumpur,
        Region::Labuan,
        Region::Putrajaya,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Johor => "Johor",
            Region::Kedah => "Kedah",
            Region::Kelantan => "Kelantan",
            Region::Melaka => "Melaka",
            Region::NegeriSembilan => "Negeri Sembilan",
            Region::Pahang => "Pahang",
            Region::Penang => "Penang",
            Region::Perak => "Perak",
            Region::Perlis => "Perlis",
            Region::Sabah => "Sabah",
            Region::Sarawak => "Sarawak",
            Region::Selangor => "Selangor",
            Region::Terengganu => "Terengganu",
            Region::KualaLumpur => "W.P. Kuala Lumpur",
            Region::Labuan => "W.P. Labuan",
            Region::Putrajaya => "W.P. Putrajaya",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized state '{0}'")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRegion(raw.to_string()))
    }
}

/// Residency restriction carried by a scholarship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateRequirement {
    All,
    Only(Region),
}

impl StateRequirement {
    /// A student without a declared state only passes unrestricted scholarships.
    pub fn admits(self, state: Option<Region>) -> bool {
        match self {
            StateRequirement::All => true,
            StateRequirement::Only(required) => state == Some(required),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StateRequirement::All => "All",
            StateRequirement::Only(region) => region.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("selangor".parse::<Region>(), Ok(Region::Selangor));
        assert_eq!(
            " W.P. Kuala Lumpur ".parse::<Region>(),
            Ok(Region::KualaLumpur)
        );
        assert!("Singapore".parse::<Region>().is_err());
    }

    #[test]
    fn unrestricted_requirement_admits_everyone() {
        assert!(StateRequirement::All.admits(None));
        assert!(StateRequirement::All.admits(Some(Region::Sabah)));
        assert!(StateRequirement::Only(Region::Sabah).admits(Some(Region::Sabah)));
        assert!(!StateRequirement::Only(Region::Sabah).admits(Some(Region::Johor)));
        assert!(!StateRequirement::Only(Region::Sabah).admits(None));
    }
}
