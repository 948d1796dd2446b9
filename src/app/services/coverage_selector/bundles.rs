//! Free directive families
//!
//! Supporting one length of a numeric field makes its other lengths nearly
//! free, so the selector adopts a whole family as soon as any member is
//! chosen.

use crate::constants::FREE_FAMILIES;

/// A set of mutually substitutable directives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveFamily {
    members: Vec<String>,
}

impl DirectiveFamily {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, directive: &str) -> bool {
        self.members.iter().any(|member| member == directive)
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }
}

/// Lookup table of free families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleTable {
    families: Vec<DirectiveFamily>,
}

impl BundleTable {
    /// A table with no families; every directive stands alone
    pub fn empty() -> Self {
        Self {
            families: Vec::new(),
        }
    }

    /// Year-length and fraction-of-second-length families
    pub fn standard() -> Self {
        Self {
            families: FREE_FAMILIES
                .iter()
                .map(|family| DirectiveFamily::new(family.iter().copied()))
                .collect(),
        }
    }

    pub fn with_family(mut self, family: DirectiveFamily) -> Self {
        self.families.push(family);
        self
    }

    pub fn families(&self) -> &[DirectiveFamily] {
        &self.families
    }

    /// The directive followed by every other member of each family it
    /// belongs to, without repeats
    pub fn free_bundle(&self, directive: &str) -> Vec<String> {
        let mut bundle = vec![directive.to_string()];
        for family in self.families.iter().filter(|f| f.contains(directive)) {
            for member in family.members() {
                if !bundle.contains(member) {
                    bundle.push(member.clone());
                }
            }
        }
        bundle
    }
}

impl Default for BundleTable {
    fn default() -> Self {
        Self::standard()
    }
}
