use serde::{Deserialize, Serialize};

/// Self-reported clinical risk flags that amplify the environmental score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalFactors {
    /// History of severe attacks or hospitalisation.
    #[serde(default)]
    pub severe_attack_history: bool,
    /// Recent symptoms or flare-up.
    #[serde(default)]
    pub recent_flare_up: bool,
    /// Poor control or frequent reliever use.
    #[serde(default)]
    pub poor_control: bool,
}

impl MedicalFactors {
    /// Number of flags set, always in `0..=3`.
    pub fn count(&self) -> u8 {
        [
            self.severe_attack_history,
            self.recent_flare_up,
            self.poor_control,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count() as u8
    }
}
