//! Fixed payloads served by the mock endpoints. Request inputs never change
//! what is returned here.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    pub personality: String,
    pub backstory: String,
    pub appearance: String,
    pub skills: Vec<String>,
    pub flaws: Vec<String>,
    pub goals: String,
}

impl Character {
    pub fn sample() -> Self {
        Self {
            name: "Elara Moonwhisper".to_string(),
            age: 28,
            occupation: "Herbalist".to_string(),
            personality: "Gentle yet determined, with a deep connection to nature".to_string(),
            backstory: "Raised by forest spirits after her village was destroyed".to_string(),
            appearance: "Silver hair that shimmers like moonlight, emerald green eyes".to_string(),
            skills: to_strings(&[
                "Potion brewing",
                "Plant identification",
                "Animal communication",
            ]),
            flaws: to_strings(&["Trusts too easily", "Fears large crowds"]),
            goals: "To restore balance between the human and spirit worlds".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct World {
    pub name: String,
    #[serde(rename = "type")]
    pub world_type: String,
    pub climate: String,
    pub geography: String,
    pub culture: String,
    pub government: String,
    pub magic_system: String,
    pub notable_locations: Vec<String>,
    pub conflicts: String,
}

impl World {
    pub fn sample() -> Self {
        Self {
            name: "Aethermoor".to_string(),
            world_type: "Mystical Realm".to_string(),
            climate: "Temperate with magical seasons".to_string(),
            geography: "Rolling hills dotted with ancient stone circles".to_string(),
            culture: "Peaceful agrarian society with deep magical traditions".to_string(),
            government: "Council of Elders guided by nature spirits".to_string(),
            magic_system: "Elemental magic drawn from natural sources".to_string(),
            notable_locations: to_strings(&[
                "The Whispering Grove - Ancient forest of talking trees",
                "Starfall Lake - Waters that reflect other realms",
                "The Crystal Caverns - Underground city of gem miners",
            ]),
            conflicts: "Ancient darkness stirring beneath the mountains".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistKind {
    Continue,
    Improve,
    Brainstorm,
}

impl AssistKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "continue" => Some(AssistKind::Continue),
            "improve" => Some(AssistKind::Improve),
            "brainstorm" => Some(AssistKind::Brainstorm),
            _ => None,
        }
    }

    /// Unrecognized kinds get the "continue" suggestions.
    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or(AssistKind::Continue)
    }

    pub fn suggestions(&self) -> [&'static str; 3] {
        match self {
            AssistKind::Continue => [
                "The mist began to part, revealing a path she had never seen before...",
                "A gentle voice called her name from somewhere in the distance...",
                "The ancient book in her hands suddenly grew warm to the touch...",
            ],
            AssistKind::Improve => [
                "Consider adding more sensory details to immerse the reader",
                "This dialogue could reveal more about the character's motivation",
                "Try varying your sentence structure for better flow",
            ],
            AssistKind::Brainstorm => [
                "What if your character discovers a hidden talent?",
                "Consider introducing a mysterious mentor figure",
                "Perhaps there's a secret that changes everything",
            ],
        }
    }
}

impl std::fmt::Display for AssistKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistKind::Continue => write!(f, "continue"),
            AssistKind::Improve => write!(f, "improve"),
            AssistKind::Brainstorm => write!(f, "brainstorm"),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
