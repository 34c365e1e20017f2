//! Field binding table

use crate::{Error, Result};
use profile_vocab::ExtractionMode;
use std::collections::HashMap;

/// The vocabulary and extraction mode governing one constrained leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Vocabulary identifier, resolved by the dictionary loader
    pub vocabulary: &'static str,
    /// How the enumeration is derived from the dictionary
    pub mode: ExtractionMode,
}

/// Maps every constrained leaf path of the profile document to its binding.
///
/// The table is total over the fixed document shape: an unresolved path is
/// a bug in the assembler, not a runtime input condition.
pub struct BindingTable {
    entries: HashMap<&'static str, Binding>,
}

impl BindingTable {
    /// The standard profile document bindings
    #[must_use]
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        let mut flat = |path: &'static str, vocabulary: &'static str| {
            entries.insert(
                path,
                Binding {
                    vocabulary,
                    mode: ExtractionMode::Flat,
                },
            );
        };

        flat("personal.visiting_status", "visiting_status");
        flat("skills.hard.skill", "skills_hard");
        flat("skills.hard.level", "skill_level");
        flat("skills.soft.skill", "skills_soft");
        flat("skills.soft.level", "skill_level");
        flat("industries", "industries_list");
        flat("hobbies", "hobbies_list");
        flat("roles.organization.org_type", "organization_types");
        flat("roles.organization.industries", "industries_list");
        flat("roles.seniority", "seniority_levels");
        flat("roles.engagement.type", "engagement_types");
        flat("roles.engagement.commitment", "engagement_commitments");
        // Historical on-disk name, kept because dictionaries are maintained
        // outside this repository.
        flat("roles.engagement.work_mode", "engagemen_work_modes");
        flat("roles.skills.hard.skill", "skills_hard");
        flat("roles.skills.hard.level", "skill_level");
        flat("roles.skills.soft.skill", "skills_soft");
        flat("roles.skills.soft.level", "skill_level");
        flat("event_context.goals.looking_for", "goal_tags");
        flat("event_context.goals.offering", "goal_tags");

        // One hierarchical dictionary feeds both role category axes.
        entries.insert(
            "roles.category",
            Binding {
                vocabulary: "role_categories",
                mode: ExtractionMode::CategoryNames,
            },
        );
        entries.insert(
            "roles.sub_category",
            Binding {
                vocabulary: "role_categories",
                mode: ExtractionMode::CategoryValues,
            },
        );

        Self { entries }
    }

    /// Resolve the binding for a field path
    pub fn resolve(&self, path: &str) -> Result<Binding> {
        self.entries
            .get(path)
            .copied()
            .ok_or_else(|| Error::UnknownField(path.to_string()))
    }

    /// Distinct vocabulary identifiers across the table, sorted
    #[must_use]
    pub fn vocabularies(&self) -> Vec<&'static str> {
        let mut identifiers: Vec<&'static str> = self
            .entries
            .values()
            .map(|binding| binding.vocabulary)
            .collect();
        identifiers.sort_unstable();
        identifiers.dedup();
        identifiers
    }

    /// Number of bound field paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::standard()
    }
}
