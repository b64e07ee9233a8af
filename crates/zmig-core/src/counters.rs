//! Per-rule change counters.
//!
//! Every rewrite the engine performs is attributed to exactly one [`Rule`].
//! A [`ChangeCounters`] value is owned by one file-processing operation; the
//! driver folds the per-file values into a run-wide total once the file is
//! done.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::ops::Index;

/// The fixed rule catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    ImportsRemoved,
    ExtendCallsRemoved,
    ZodImportsMigrated,
    OpenapiToMeta,
    RefToId,
    RefTypeToUnusedIo,
    UnionOneOfToOverride,
    EffectTypeCommented,
    SchemaTypeToIo,
    ComponentRefPath,
    ComponentsToSchemaComponents,
    CreateSchemaUnionOneOfToOverride,
    CreateSchemaDefaultDateSchemaToOverride,
    CreateDocumentUnionOneOfToOverride,
    DefaultDateSchemaToOverride,
}

impl Rule {
    pub const COUNT: usize = 15;

    /// All rules in report order.
    pub const ALL: [Rule; Rule::COUNT] = [
        Rule::ImportsRemoved,
        Rule::ExtendCallsRemoved,
        Rule::ZodImportsMigrated,
        Rule::OpenapiToMeta,
        Rule::RefToId,
        Rule::RefTypeToUnusedIo,
        Rule::UnionOneOfToOverride,
        Rule::EffectTypeCommented,
        Rule::SchemaTypeToIo,
        Rule::ComponentRefPath,
        Rule::ComponentsToSchemaComponents,
        Rule::CreateSchemaUnionOneOfToOverride,
        Rule::CreateSchemaDefaultDateSchemaToOverride,
        Rule::CreateDocumentUnionOneOfToOverride,
        Rule::DefaultDateSchemaToOverride,
    ];

    fn slot(self) -> usize {
        self as usize
    }

    /// Key used in the JSON result record.
    pub fn key(self) -> &'static str {
        match self {
            Rule::ImportsRemoved => "importsRemoved",
            Rule::ExtendCallsRemoved => "extendCallsRemoved",
            Rule::ZodImportsMigrated => "zodImportsMigrated",
            Rule::OpenapiToMeta => "openapiToMetaChanges",
            Rule::RefToId => "refToIdChanges",
            Rule::RefTypeToUnusedIo => "refTypeToUnusedIOChanges",
            Rule::UnionOneOfToOverride => "unionOneOfToOverrideChanges",
            Rule::EffectTypeCommented => "effectTypeCommented",
            Rule::SchemaTypeToIo => "schemaTypeToIOChanges",
            Rule::ComponentRefPath => "componentRefPathChanges",
            Rule::ComponentsToSchemaComponents => "componentsToSchemaComponentsChanges",
            Rule::CreateSchemaUnionOneOfToOverride => "createSchemaUnionOneOfToOverrideChanges",
            Rule::CreateSchemaDefaultDateSchemaToOverride => {
                "createSchemaDefaultDateSchemaToOverrideChanges"
            }
            Rule::CreateDocumentUnionOneOfToOverride => {
                "createDocumentUnionOneOfToOverrideChanges"
            }
            Rule::DefaultDateSchemaToOverride => "defaultDateSchemaToOverrideChanges",
        }
    }

    /// Label for the run summary.
    pub fn label(self) -> &'static str {
        match self {
            Rule::ImportsRemoved => "Imports removed",
            Rule::ExtendCallsRemoved => "Extend calls removed",
            Rule::ZodImportsMigrated => "Zod imports migrated",
            Rule::OpenapiToMeta => "openapi() → meta()",
            Rule::RefToId => "ref → id changes",
            Rule::RefTypeToUnusedIo => "refType → unusedIO changes",
            Rule::UnionOneOfToOverride => "unionOneOf → override changes",
            Rule::EffectTypeCommented => "effectType commented",
            Rule::SchemaTypeToIo => "schemaType → io changes",
            Rule::ComponentRefPath => "componentRefPath → schemaComponentRefPath changes",
            Rule::ComponentsToSchemaComponents => "components → schemaComponents changes",
            Rule::CreateSchemaUnionOneOfToOverride => {
                "createSchema unionOneOf → opts.override changes"
            }
            Rule::CreateSchemaDefaultDateSchemaToOverride => {
                "createSchema defaultDateSchema → opts.override changes"
            }
            Rule::CreateDocumentUnionOneOfToOverride => {
                "createDocument unionOneOf → override changes"
            }
            Rule::DefaultDateSchemaToOverride => "defaultDateSchema → override changes",
        }
    }

    /// One-line description of `count` applications in a single file.
    pub fn describe(self, count: usize) -> String {
        match self {
            Rule::ImportsRemoved => format!("Removed {count} extendZodWithOpenApi imports"),
            Rule::ExtendCallsRemoved => format!("Removed {count} extendZodWithOpenApi calls"),
            Rule::ZodImportsMigrated => format!("Migrated {count} zod imports to 'zod/v4'"),
            Rule::OpenapiToMeta => format!("Changed {count} .openapi() to .meta()"),
            Rule::RefToId => format!("Changed {count} 'ref' to 'id'"),
            Rule::RefTypeToUnusedIo => format!("Changed {count} 'refType' to 'unusedIO'"),
            Rule::UnionOneOfToOverride => format!("Changed {count} 'unionOneOf' to 'override'"),
            Rule::EffectTypeCommented => {
                format!("Commented out {count} 'effectType' properties")
            }
            Rule::SchemaTypeToIo => format!("Changed {count} 'schemaType' to 'io'"),
            Rule::ComponentRefPath => {
                format!("Changed {count} 'componentRefPath' to 'schemaComponentRefPath'")
            }
            Rule::ComponentsToSchemaComponents => {
                format!("Changed {count} 'components' to 'schemaComponents'")
            }
            Rule::CreateSchemaUnionOneOfToOverride => {
                format!("Changed {count} 'unionOneOf' to 'opts.override' in createSchema")
            }
            Rule::CreateSchemaDefaultDateSchemaToOverride => {
                format!("Changed {count} 'defaultDateSchema' to 'opts.override' in createSchema")
            }
            Rule::CreateDocumentUnionOneOfToOverride => {
                format!("Changed {count} 'unionOneOf' to 'override' in createDocument")
            }
            Rule::DefaultDateSchemaToOverride => {
                format!("Changed {count} 'defaultDateSchema' to 'override' in createDocument")
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rule-indexed change counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounters {
    counts: [usize; Rule::COUNT],
}

impl ChangeCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self, rule: Rule) {
        self.counts[rule.slot()] += 1;
    }

    pub fn get(&self, rule: Rule) -> usize {
        self.counts[rule.slot()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// True when at least one rule fired.
    pub fn has_changes(&self) -> bool {
        self.counts.iter().any(|&count| count > 0)
    }

    /// Fold another set of counters into this one.
    pub fn absorb(&mut self, other: &ChangeCounters) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// Rules with a non-zero count, in report order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Rule, usize)> + '_ {
        Rule::ALL
            .iter()
            .map(|&rule| (rule, self.get(rule)))
            .filter(|&(_, count)| count > 0)
    }
}

impl Index<Rule> for ChangeCounters {
    type Output = usize;

    fn index(&self, rule: Rule) -> &usize {
        &self.counts[rule.slot()]
    }
}

impl Serialize for ChangeCounters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Rule::COUNT))?;
        for rule in Rule::ALL {
            map.serialize_entry(rule.key(), &self.get(rule))?;
        }
        map.end()
    }
}
