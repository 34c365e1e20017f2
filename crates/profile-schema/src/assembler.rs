//! Recursive schema assembly

use crate::bindings::BindingTable;
use crate::node::{SchemaDocument, SchemaNode};
use crate::Result;
use profile_vocab::{extract, DictionaryLoader, Enumeration};
use tracing::{debug, warn};

/// Which profile document shape to assemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentVariant {
    /// The base profile document
    #[default]
    Standard,
    /// Base document plus the `event_context` block with goal vocabularies
    WithEventContext,
}

/// Assembles the profile validation schema.
///
/// Walks the fixed document shape depth-first; constrained leaves resolve
/// their binding, load the dictionary, extract the enumeration, and (for
/// optional leaves) append the absent marker. A missing or malformed
/// dictionary degrades that one leaf to an empty enumeration — a partial
/// vocabulary still produces a complete schema.
pub struct SchemaAssembler {
    loader: DictionaryLoader,
    bindings: BindingTable,
    variant: DocumentVariant,
}

impl SchemaAssembler {
    /// Create an assembler over a loader and binding table
    pub fn new(loader: DictionaryLoader, bindings: BindingTable, variant: DocumentVariant) -> Self {
        Self {
            loader,
            bindings,
            variant,
        }
    }

    /// Assemble the full schema document
    pub fn assemble(&self) -> Result<SchemaDocument> {
        debug!("Assembling profile schema, variant {:?}", self.variant);

        let mut properties = vec![
            (
                "raw_input",
                SchemaNode::described_text("User's free text or voice transcript"),
            ),
            ("personal", self.personal()?),
            ("skills", self.skills_block("skills")?),
            ("industries", SchemaNode::array(self.item_enum("industries")?)),
            ("hobbies", SchemaNode::array(self.item_enum("hobbies")?)),
            ("roles", self.roles()?),
        ];
        if self.variant == DocumentVariant::WithEventContext {
            properties.push(("event_context", self.event_context()?));
        }
        properties.push(("extra_notes", SchemaNode::nullable_text()));

        Ok(SchemaDocument::new(SchemaNode::object(properties)))
    }

    fn personal(&self) -> Result<SchemaNode> {
        Ok(SchemaNode::object(vec![
            ("name", SchemaNode::nullable_text()),
            ("headline", SchemaNode::nullable_text()),
            (
                "visiting_status",
                self.optional_enum("personal.visiting_status")?,
            ),
        ]))
    }

    /// Hard/soft skill arrays; `prefix` distinguishes the top-level block
    /// from the per-role block, which bind through separate paths.
    fn skills_block(&self, prefix: &str) -> Result<SchemaNode> {
        let pair = |axis: &str| -> Result<SchemaNode> {
            let item = SchemaNode::object(vec![
                ("skill", self.optional_enum(&format!("{prefix}.{axis}.skill"))?),
                ("level", self.optional_enum(&format!("{prefix}.{axis}.level"))?),
            ]);
            Ok(SchemaNode::array(item))
        };
        Ok(SchemaNode::object(vec![
            ("hard", pair("hard")?),
            ("soft", pair("soft")?),
        ]))
    }

    fn roles(&self) -> Result<SchemaNode> {
        let organization = SchemaNode::object(vec![
            (
                "org_type",
                self.optional_enum("roles.organization.org_type")?,
            ),
            ("name", SchemaNode::nullable_text()),
            ("url", SchemaNode::nullable_text()),
            (
                "industries",
                SchemaNode::array(self.item_enum("roles.organization.industries")?),
            ),
        ]);

        let engagement = SchemaNode::object(vec![
            ("type", self.optional_enum("roles.engagement.type")?),
            (
                "commitment",
                self.optional_enum("roles.engagement.commitment")?,
            ),
            (
                "work_mode",
                self.optional_enum("roles.engagement.work_mode")?,
            ),
        ]);

        let role = SchemaNode::object(vec![
            ("organization", organization),
            ("category", self.optional_enum("roles.category")?),
            ("sub_category", self.optional_enum("roles.sub_category")?),
            ("title", SchemaNode::nullable_text()),
            ("seniority", self.optional_enum("roles.seniority")?),
            ("engagement", engagement),
            ("skills", self.skills_block("roles.skills")?),
            ("highlights", SchemaNode::array(SchemaNode::text())),
            ("active", SchemaNode::Flag),
        ]);

        Ok(SchemaNode::array(role))
    }

    fn event_context(&self) -> Result<SchemaNode> {
        let goals = SchemaNode::object(vec![
            (
                "looking_for",
                SchemaNode::array(self.item_enum("event_context.goals.looking_for")?),
            ),
            (
                "offering",
                SchemaNode::array(self.item_enum("event_context.goals.offering")?),
            ),
        ]);
        Ok(SchemaNode::object(vec![
            ("event_id", SchemaNode::text()),
            ("goals", goals),
        ]))
    }

    /// Optional enumerated leaf: resolved values plus the absent marker
    fn optional_enum(&self, path: &str) -> Result<SchemaNode> {
        Ok(SchemaNode::Enum(self.resolve_values(path)?.with_absent()))
    }

    /// Closed list-item scalar: resolved values, no absent marker
    fn item_enum(&self, path: &str) -> Result<SchemaNode> {
        Ok(SchemaNode::StringEnum(self.resolve_values(path)?))
    }

    fn resolve_values(&self, path: &str) -> Result<Enumeration> {
        let binding = self.bindings.resolve(path)?;
        match self.loader.load(binding.vocabulary) {
            Ok(content) => Ok(extract(&content, binding.mode)),
            Err(err) => {
                warn!(
                    "Vocabulary '{}' unavailable for field '{}': {}",
                    binding.vocabulary, path, err
                );
                Ok(Enumeration::new())
            }
        }
    }
}
