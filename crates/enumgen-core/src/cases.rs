//! Parsing of `NAME=value` case lines

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::spec::EnumCase;

/// Result of reading one case line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseLine {
    /// Blank line: no more cases
    End,

    /// A parsed case
    Case(EnumCase),
}

/// Parse one line of case input.
///
/// `NAME=value` splits on the first `=`; a bare `NAME` gets the lowercased
/// name as its value. Blank input ends the list.
pub fn parse_case_line(line: &str) -> Result<CaseLine, ValidationError> {
    if line.trim().is_empty() {
        return Ok(CaseLine::End);
    }

    let (name, value) = match line.split_once('=') {
        Some((name, value)) => (name.trim().to_string(), value.trim().to_string()),
        None => {
            let name = line.trim();
            (name.to_string(), name.to_lowercase())
        }
    };

    EnumCase::new(name, value).map(CaseLine::Case)
}

/// Ordered collection of cases with unique names and values
#[derive(Debug, Clone, Default)]
pub struct CaseSet {
    cases: Vec<EnumCase>,
    names: HashMap<String, usize>,
    values: HashMap<String, usize>,
}

impl CaseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case, rejecting a repeated name or value
    pub fn push(&mut self, case: EnumCase) -> Result<(), ValidationError> {
        if self.names.contains_key(&case.name) {
            return Err(ValidationError::DuplicateCase(case.name));
        }

        if let Some(&index) = self.values.get(&case.value) {
            return Err(ValidationError::DuplicateValue {
                case: case.name,
                value: case.value,
                existing: self.cases[index].name.clone(),
            });
        }

        let index = self.cases.len();
        self.names.insert(case.name.clone(), index);
        self.values.insert(case.value.clone(), index);
        self.cases.push(case);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Case names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.name.as_str())
    }

    /// Consume the set; at least one case is required
    pub fn finish(self) -> Result<Vec<EnumCase>, ValidationError> {
        if self.cases.is_empty() {
            return Err(ValidationError::NoCases);
        }
        Ok(self.cases)
    }
}
