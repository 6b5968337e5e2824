//! Choices - Pending selections a class or race offers during creation

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceStatus {
    #[default]
    Unset,
    Active,
    Inactive,
    Selected,
}

/// What a choice hands out once made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceType {
    #[default]
    Unset,
    Proficiency,
    Language,
    Equipment,
}

/// Catalog key plus display name of the thing an option points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub key: String,
    pub name: String,
}

/// One selectable entry of a [`Choice`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "option_type", rename_all = "snake_case")]
pub enum ChoiceOption {
    Reference {
        #[serde(default)]
        status: ChoiceStatus,
        reference: ReferenceItem,
    },
    CountedReference {
        #[serde(default)]
        status: ChoiceStatus,
        count: u32,
        reference: ReferenceItem,
    },
    /// A nested choice, e.g. "any one martial weapon"
    Choice(Choice),
    /// A bundle taken as a whole
    Multiple {
        #[serde(default)]
        status: ChoiceStatus,
        items: Vec<ChoiceOption>,
    },
}

impl ChoiceOption {
    pub fn name(&self) -> &str {
        match self {
            ChoiceOption::Reference { reference, .. }
            | ChoiceOption::CountedReference { reference, .. } => &reference.name,
            ChoiceOption::Choice(choice) => &choice.name,
            ChoiceOption::Multiple { .. } => "",
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ChoiceOption::Reference { reference, .. }
            | ChoiceOption::CountedReference { reference, .. } => &reference.key,
            ChoiceOption::Choice(choice) => &choice.key,
            ChoiceOption::Multiple { .. } => "",
        }
    }

    pub fn status(&self) -> ChoiceStatus {
        match self {
            ChoiceOption::Reference { status, .. }
            | ChoiceOption::CountedReference { status, .. }
            | ChoiceOption::Multiple { status, .. } => *status,
            ChoiceOption::Choice(choice) => choice.status,
        }
    }

    pub fn set_status(&mut self, new_status: ChoiceStatus) {
        match self {
            ChoiceOption::Reference { status, .. }
            | ChoiceOption::CountedReference { status, .. }
            | ChoiceOption::Multiple { status, .. } => *status = new_status,
            ChoiceOption::Choice(choice) => choice.status = new_status,
        }
    }

    /// Referenced item, for the two reference variants
    pub fn reference(&self) -> Option<&ReferenceItem> {
        match self {
            ChoiceOption::Reference { reference, .. }
            | ChoiceOption::CountedReference { reference, .. } => Some(reference),
            _ => None,
        }
    }
}

/// "Choose `count` from `options`"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ChoiceType,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub status: ChoiceStatus,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

fn default_count() -> u32 {
    1
}

impl Choice {
    pub fn new(name: impl Into<String>, kind: ChoiceType, count: u32) -> Self {
        Choice {
            name: name.into(),
            kind,
            key: String::new(),
            status: ChoiceStatus::Active,
            count,
            options: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_reference(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.options.push(ChoiceOption::Reference {
            status: ChoiceStatus::Unset,
            reference: ReferenceItem {
                key: key.into(),
                name: name.into(),
            },
        });
        self
    }

    /// Number of options currently selected
    pub fn selected_count(&self) -> u32 {
        self.options
            .iter()
            .filter(|o| o.status() == ChoiceStatus::Selected)
            .count() as u32
    }

    /// Mark the option with `key` as selected
    ///
    /// Returns the selected option, or None if no unselected option matches or
    /// the choice is already complete. The choice itself becomes
    /// `Selected` once `count` options are picked.
    pub fn select(&mut self, key: &str) -> Option<&ChoiceOption> {
        if self.status == ChoiceStatus::Selected || self.selected_count() >= self.count {
            return None;
        }

        let index = self
            .options
            .iter()
            .position(|o| o.key() == key && o.status() != ChoiceStatus::Selected)?;
        self.options[index].set_status(ChoiceStatus::Selected);

        if self.selected_count() >= self.count {
            self.status = ChoiceStatus::Selected;
        }
        self.options.get(index)
    }

    pub fn is_complete(&self) -> bool {
        self.status == ChoiceStatus::Selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> Choice {
        Choice::new("Choose two skills", ChoiceType::Proficiency, 2)
            .with_key("fighter-skills")
            .with_reference("skill-athletics", "Skill: Athletics")
            .with_reference("skill-history", "Skill: History")
            .with_reference("skill-perception", "Skill: Perception")
    }

    #[test]
    fn test_select_until_complete() {
        let mut choice = skills();
        assert!(choice.select("skill-history").is_some());
        assert!(!choice.is_complete());

        let picked = choice.select("skill-athletics").unwrap();
        assert_eq!(picked.name(), "Skill: Athletics");
        assert!(choice.is_complete());

        assert!(choice.select("skill-perception").is_none());
        assert_eq!(choice.selected_count(), 2);
    }

    #[test]
    fn test_select_unknown_or_repeated() {
        let mut choice = skills();
        assert!(choice.select("skill-arcana").is_none());
        assert!(choice.select("skill-history").is_some());
        assert!(choice.select("skill-history").is_none());
        assert_eq!(choice.selected_count(), 1);
    }

    #[test]
    fn test_parse_nested_options() {
        let toml = r#"
name = "Starting weapon"
type = "equipment"
count = 1

[[options]]
option_type = "counted_reference"
count = 2
reference = { key = "handaxe", name = "Handaxe" }

[[options]]
option_type = "choice"
name = "Any martial weapon"
key = "martial-weapons"

[[options]]
option_type = "multiple"
items = [
    { option_type = "reference", reference = { key = "shield", name = "Shield" } },
]
"#;
        let choice: Choice = toml::from_str(toml).unwrap();
        assert_eq!(choice.kind, ChoiceType::Equipment);
        assert_eq!(choice.options.len(), 3);
        assert_eq!(choice.options[0].key(), "handaxe");
        assert_eq!(choice.options[1].name(), "Any martial weapon");
        assert_eq!(choice.options[2].key(), "");
        assert!(choice.options[2].reference().is_none());
    }
}
