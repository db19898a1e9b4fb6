//! `owner/name` project identifiers

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MkError;

static PROJECT_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+/[A-Za-z0-9._-]+$").unwrap());

/// A validated `owner/name` identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId {
    owner: String,
    name: String,
}

impl ProjectId {
    /// Parse and validate an identifier
    pub fn parse(input: &str) -> Result<Self, MkError> {
        if !PROJECT_ID_REGEX.is_match(input) {
            return Err(MkError::usage(format!(
                "Invalid project name '{}'. Use the format gitUser/projectName without spaces",
                input
            )));
        }

        match input.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(MkError::usage(format!(
                "Could not read the project name from '{}'. Use the format gitUser/projectName",
                input
            ))),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Bare project name, used for the manifest and the directory
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = ProjectId::parse("acme/widget").unwrap();
        assert_eq!(id.owner(), "acme");
        assert_eq!(id.name(), "widget");
        assert_eq!(id.to_string(), "acme/widget");

        let id = ProjectId::parse("Don.Barrigon_1/new-app.v2").unwrap();
        assert_eq!(id.name(), "new-app.v2");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for input in [
            "",
            "widget",
            "acme/",
            "/widget",
            "acme/widget/extra",
            "acme widget/app",
            "acme/wid get",
            "acme/wídget",
            "acme\\widget",
        ] {
            let err = ProjectId::parse(input).unwrap_err();
            assert_eq!(err.exit_code(), 2, "input: {:?}", input);
        }
    }
}
