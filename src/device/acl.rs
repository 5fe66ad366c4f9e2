//! Numbered access control lists.
//!
//! Only the fixed `ip any any` match is modelled, so a rule is just a number
//! and an action. Rules sharing a number form one list, kept in insertion
//! order.

use std::collections::BTreeMap;
use std::fmt;

/// Valid ACL numbers.
pub const ACL_NUMBER_RANGE: std::ops::RangeInclusive<u16> = 1..=199;

/// Numbers at or above this value belong to the extended range.
const EXTENDED_START: u16 = 100;

/// Action taken by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclAction {
    Permit,
    Deny,
}

impl AclAction {
    /// Parses `permit` or `deny`, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "permit" => Some(Self::Permit),
            "deny" => Some(Self::Deny),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Permit => "permit",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for AclAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numbering convention class of an ACL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclKind {
    /// 1-99.
    Standard,
    /// 100-199.
    Extended,
}

impl AclKind {
    pub fn of(number: u16) -> Self {
        if number >= EXTENDED_START {
            Self::Extended
        } else {
            Self::Standard
        }
    }
}

/// A single `<action> ip any any` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AclRule {
    pub number: u16,
    pub action: AclAction,
}

impl AclRule {
    /// Creates a rule, or `None` if the number is outside 1-199.
    pub fn new(number: u16, action: AclAction) -> Option<Self> {
        ACL_NUMBER_RANGE
            .contains(&number)
            .then_some(Self { number, action })
    }

    /// Match clause. Always `ip any any`.
    pub fn pattern(&self) -> &'static str {
        "ip any any"
    }
}

/// All configured rules across every ACL number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AclTable {
    rules: Vec<AclRule>,
}

impl AclTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Duplicates are allowed.
    pub fn push(&mut self, rule: AclRule) {
        self.rules.push(rule);
    }

    /// Rules grouped by number, numbers ascending, rules in insertion order.
    pub fn grouped(&self) -> BTreeMap<u16, Vec<&AclRule>> {
        let mut groups: BTreeMap<u16, Vec<&AclRule>> = BTreeMap::new();
        for rule in &self.rules {
            groups.entry(rule.number).or_default().push(rule);
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
