//! Operation Set
//!
//! The student operations the router can expose, and the configurable subset
//! that is actually mounted.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::StudentError;

/// One student operation exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// `GET /students`
    List,
    /// `GET /student/:id`
    Get,
    /// `POST /create/student`
    Create,
    /// `PUT /update/student/:id`, `PUT /student/:id`
    Update,
    /// `DELETE /delete/student/:id`, `DELETE /student/:id`
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = StudentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Operation::List),
            "get" => Ok(Operation::Get),
            "create" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            other => Err(StudentError::Config(format!("Unknown operation '{}'", other))),
        }
    }
}

// == Operation Set ==
/// Set of enabled operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSet(BTreeSet<Operation>);

impl OperationSet {
    /// Every operation enabled.
    pub fn all() -> Self {
        Self(Operation::ALL.into_iter().collect())
    }

    /// No operation enabled; only health (and docs, if on) are served.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn with(mut self, op: Operation) -> Self {
        self.0.insert(op);
        self
    }

    pub fn contains(&self, op: Operation) -> bool {
        self.0.contains(&op)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.0.iter().copied()
    }
}

impl Default for OperationSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|op| op.as_str()).collect();
        write!(f, "{}", names.join(","))
    }
}

/// Parses a comma-separated list such as `list,get,create`.
///
/// `all` enables everything; blank entries are skipped.
impl FromStr for OperationSet {
    type Err = StudentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }

        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<Operation>)
            .collect()
    }
}
