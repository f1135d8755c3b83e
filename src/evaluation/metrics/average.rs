use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Multiclass aggregation strategy for precision/recall/F-beta.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumMessage,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Average {
    #[default]
    #[strum(
        message = "Micro",
        detailed_message = "Pool true/false positives over all classes before scoring."
    )]
    Micro,
    #[strum(
        message = "Macro",
        detailed_message = "Unweighted mean of the per-class scores."
    )]
    Macro,
    #[strum(
        message = "Weighted",
        detailed_message = "Mean of the per-class scores weighted by class support."
    )]
    Weighted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn parses_and_displays_lowercase() {
        for avg in Average::iter() {
            let s = avg.to_string();
            assert_eq!(s, s.to_lowercase());
            assert_eq!(Average::from_str(&s).unwrap(), avg);
        }
        assert!(Average::from_str("samples").is_err());
    }

    #[test]
    fn serde_uses_same_names_as_strum() {
        let v = serde_json::to_value(Average::Weighted).unwrap();
        assert_eq!(v, serde_json::json!("weighted"));
        let s: &'static str = Average::Weighted.into();
        assert_eq!(s, "weighted");
    }

    #[test]
    fn default_is_micro_and_messages_exist() {
        assert_eq!(Average::default(), Average::Micro);
        assert_eq!(Average::Macro.get_message(), Some("Macro"));
        assert!(Average::Micro.get_detailed_message().is_some());
    }
}
