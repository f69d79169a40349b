use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Menu,
    Cv,
    Letter,
}

pub const ALL_SECTIONS: [Section; 3] = [Section::Menu, Section::Cv, Section::Letter];

pub const CV_CONTENT_SELECTORS: &[&str] = &[".cv-card", ".timeline-item", ".rotary-card", ".gallery-item"];
pub const LETTER_CONTENT_SELECTORS: &[&str] = &[".letter-block"];

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Menu => "menu",
            Section::Cv => "cv",
            Section::Letter => "letter",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Section::Menu => "main-menu",
            Section::Cv => "cv-section",
            Section::Letter => "letter-section",
        }
    }

    // Selector groups are applied in order; matches keep document order within a group.
    pub fn content_selectors(self) -> &'static [&'static str] {
        match self {
            Section::Menu => &[],
            Section::Cv => CV_CONTENT_SELECTORS,
            Section::Letter => LETTER_CONTENT_SELECTORS,
        }
    }

    pub fn parse(value: &str) -> Result<Self, SectionParseError> {
        let trimmed = value.trim();
        ALL_SECTIONS
            .iter()
            .copied()
            .find(|section| section.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SectionParseError::Unknown {
                value: trimmed.to_string(),
            })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl std::str::FromStr for Section {
    type Err = SectionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionParseError {
    Unknown { value: String },
}

impl fmt::Display for SectionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionParseError::Unknown { value } => {
                write!(f, "unknown section '{value}', expected menu, cv or letter")
            }
        }
    }
}

impl std::error::Error for SectionParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!("cv".parse::<Section>(), Ok(Section::Cv));
        assert_eq!(" Letter ".parse::<Section>(), Ok(Section::Letter));
        assert_eq!(Section::Menu.to_string(), "menu");
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "gallery".parse::<Section>().unwrap_err();
        assert_eq!(
            err,
            SectionParseError::Unknown {
                value: "gallery".to_string()
            }
        );
    }

    #[test]
    fn menu_has_no_entrance_content() {
        assert!(Section::Menu.content_selectors().is_empty());
        assert_eq!(Section::Cv.content_selectors().len(), 4);
    }
}
