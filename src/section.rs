//! Page sections of the portfolio.
//!
//! The set of sections is fixed at compile time and ordered. The declared
//! order matters: it is the document order of the page and the tie-break
//! order used when deriving the active section.

use std::fmt;
use std::str::FromStr;


use crate::error::LookupError;

/// One of the five named page regions a visitor can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Returns the element identifier of the section (e.g. `"skills"`).
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Returns the capitalized label shown in navigation.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Position of the section in document order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| LookupError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_parse_known_identifier() {
        assert_eq!("projects".parse::<Section>().unwrap(), Section::Projects);
        assert_eq!(Section::Contact.to_string(), "contact");
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert_eq!(err, LookupError::UnknownSection("blog".to_string()));

        // Identifiers are case sensitive, labels are not identifiers
        assert!("Home".parse::<Section>().is_err());
    }
}
