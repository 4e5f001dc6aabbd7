//! Arrow-syntax property expressions
//!
//! ```text
//! ->name                              outgoing `name`
//! <-[containedInPlace, geoOverlaps]   incoming, two properties
//! <-containedInPlace+{typeOf:City}    linked (transitive) with a filter
//! ```

use crate::direction::Direction;
use crate::error::{CoreError, Result};
use crate::traversal::CLOSURE_MARKER;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which properties an expression names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySelector {
    Single(String),
    List(Vec<String>),
}

/// A parsed property expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyExpression {
    pub direction: Direction,
    pub selector: PropertySelector,

    /// Set by the `+` closure marker
    pub linked: bool,

    /// `{key:value}` constraints, linked expressions only
    pub filter: BTreeMap<String, String>,
}

impl PropertyExpression {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| CoreError::InvalidExpression {
            expression: input.to_string(),
            reason: reason.to_string(),
        };

        let text = input.trim();
        let (direction, mut rest) = if let Some(rest) = text.strip_prefix("->") {
            (Direction::Outgoing, rest)
        } else if let Some(rest) = text.strip_prefix("<-") {
            (Direction::Incoming, rest)
        } else {
            return Err(invalid("must start with '->' or '<-'"));
        };

        let selector = if let Some(list) = rest.strip_prefix('[') {
            let end = list.find(']').ok_or_else(|| invalid("unclosed '['"))?;
            let properties = list[..end]
                .split(',')
                .map(|p| parse_ident(p.trim()).map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid("bad property in list"))?;
            rest = &list[end + 1..];
            PropertySelector::List(properties)
        } else {
            let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
            let property = parse_ident(&rest[..end]).ok_or_else(|| invalid("missing property"))?;
            rest = &rest[end..];
            PropertySelector::Single(property.to_string())
        };

        let linked = match rest.strip_prefix(CLOSURE_MARKER) {
            Some(after) => {
                if matches!(selector, PropertySelector::List(_)) {
                    return Err(invalid("'+' applies to a single property"));
                }
                rest = after;
                true
            }
            None => false,
        };

        let mut filter = BTreeMap::new();
        if let Some(body) = rest.strip_prefix('{') {
            if !linked {
                return Err(invalid("filters require a linked property"));
            }
            let body = body.strip_suffix('}').ok_or_else(|| invalid("unclosed '{'"))?;
            for pair in body.split(',') {
                let (key, value) = pair.split_once(':').ok_or_else(|| invalid("filter must be key:value"))?;
                let key = parse_ident(key.trim()).ok_or_else(|| invalid("bad filter key"))?;
                let value = parse_ident(value.trim()).ok_or_else(|| invalid("bad filter value"))?;
                filter.insert(key.to_string(), value.to_string());
            }
            rest = "";
        }

        if !rest.is_empty() {
            return Err(invalid("unexpected trailing input"));
        }

        Ok(Self {
            direction,
            selector,
            linked,
            filter,
        })
    }

    /// Requested properties in expression order
    pub fn properties(&self) -> Vec<String> {
        match &self.selector {
            PropertySelector::Single(p) => vec![p.clone()],
            PropertySelector::List(list) => list.clone(),
        }
    }

    /// The traversed property of a linked expression
    pub fn linked_property(&self) -> Option<&str> {
        match (&self.selector, self.linked) {
            (PropertySelector::Single(p), true) => Some(p),
            _ => None,
        }
    }
}

impl FromStr for PropertyExpression {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.direction.arrow())?;
        match &self.selector {
            PropertySelector::Single(p) => f.write_str(p)?,
            PropertySelector::List(list) => write!(f, "[{}]", list.join(","))?,
        }
        if self.linked {
            f.write_str(CLOSURE_MARKER)?;
        }
        if !self.filter.is_empty() {
            let pairs: Vec<String> = self.filter.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
            write!(f, "{{{}}}", pairs.join(","))?;
        }
        Ok(())
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '/' | '.')
}

fn parse_ident(s: &str) -> Option<&str> {
    (!s.is_empty() && s.chars().all(is_ident_char)).then_some(s)
}
