//! Portfolio content configuration.
//!
//! All copy shown on the page comes from a [`PortfolioContent`] value. The
//! built-in default is used unless a JSON file is supplied on the command line
//! or found at `<config_dir>/folio/content.json`.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONTENT_FILE_NAME: &str = "content.json";

static DEFAULT_CONTENT: Lazy<PortfolioContent> = Lazy::new(builtin_content);

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    /// Name shown in the navigation brand and the hero.
    pub owner: String,
    /// One-line tagline under the hero name.
    pub headline: String,
    /// Paragraphs of the About section.
    pub about: Vec<String>,
    /// Skill names rendered as a grid.
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    /// Footer line; `None` renders "© {owner}. All rights reserved."
    pub footer: Option<String>,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub year: String,
    pub description: String,
    pub url: String,
}

/// Contact section copy and links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub linkedin_url: String,
    pub linkedin_label: String,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        DEFAULT_CONTENT.clone()
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        DEFAULT_CONTENT.contact.clone()
    }
}

impl PortfolioContent {
    /// Reads content from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ContentNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        let content = serde_json::from_str(&json)?;
        tracing::info!(path = %path.display(), "loaded portfolio content");
        Ok(content)
    }

    /// Resolves the content to display.
    ///
    /// Tries `explicit` first, then the default config location. Any failure
    /// is logged and the built-in content is used instead.
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let candidate = explicit
            .map(Path::to_path_buf)
            .or_else(|| default_content_path().filter(|path| path.exists()));

        let Some(path) = candidate else {
            tracing::debug!("no content file, using built-in content");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to built-in content");
                Self::default()
            }
        }
    }

    /// Footer text, derived from the owner when not configured.
    pub fn footer_text(&self) -> String {
        self.footer
            .clone()
            .unwrap_or_else(|| format!("© {}. All rights reserved.", self.owner))
    }
}

/// Location of the user's content file, if a config directory exists.
pub fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join(CONTENT_FILE_NAME))
}

fn builtin_content() -> PortfolioContent {
    PortfolioContent {
        owner: "Syaril".to_string(),
        headline: "A passionate Web Developer | Designer".to_string(),
        about: vec![
            "I am Muhammad Syaril, a Computer Science graduate with a strong foundation in web \
             development and a proven ability to deliver responsive, high-performance websites. \
             My expertise includes WordPress, HTML, CSS, PHP, and Elementor, with additional skills \
             in SEO optimization, secure hosting configurations, and theme customization."
                .to_string(),
            "I have successfully managed website projects from concept to deployment, ensuring \
             alignment with branding objectives, accessibility standards, and optimal user \
             experience. I excel at collaborating with cross-functional teams, applying \
             problem-solving skills to technical challenges, and maintaining meticulous attention \
             to detail in both development and design."
                .to_string(),
        ],
        skills: [
            "HTML5",
            "CSS3",
            "JavaScript",
            "React",
            "Tailwind CSS",
            "Node.js",
            "Wordpress",
            "PhpMyAdmin",
            "Git",
            "Figma",
            "Elementor",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        projects: vec![
            Project {
                title: "Akademiqudwah.com".to_string(),
                year: "2024".to_string(),
                description: "Managed and customized WordPress websites for responsiveness, \
                              performance, and SEO. Created engaging layouts with Elementor and \
                              Canva, integrated HTML/CSS features, and ensured alignment with \
                              branding goals through testing, debugging, and content optimization."
                    .to_string(),
                url: "https://akademiqudwah.com/".to_string(),
            },
            Project {
                title: "Teracell.com.my".to_string(),
                year: "2025".to_string(),
                description: "A corporate website built for Teracell Network Sdn. Bhd., featuring \
                              a modern responsive design, optimized navigation, and SEO-friendly \
                              structure. Developed using WordPress with custom theme adjustments to \
                              enhance brand identity and improve user experience."
                    .to_string(),
                url: "https://teracell.com.my/".to_string(),
            },
        ],
        contact: ContactInfo {
            heading: "Get In Touch".to_string(),
            intro: "Have a project in mind or just want to say hello? Feel free to reach out!"
                .to_string(),
            email: "muhammadsyaril13@gmail.com".to_string(),
            linkedin_url: "https://www.linkedin.com/in/muhammad-syaril-80aab8329/".to_string(),
            linkedin_label: "linkedin.com/in/MuhammadSyaril".to_string(),
        },
        footer: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_builtin_content() {
        let content = PortfolioContent::default();
        assert_eq!(content.owner, "Syaril");
        assert_eq!(content.skills.len(), 11);
        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.footer_text(), "© Syaril. All rights reserved.");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file(
            "folio_partial_content.json",
            r#"{ "owner": "Ada", "skills": ["Rust"], "contact": { "email": "ada@example.com" } }"#,
        );
        let content = PortfolioContent::load(&path).unwrap();
        assert_eq!(content.owner, "Ada");
        assert_eq!(content.skills, ["Rust"]);
        assert_eq!(content.contact.email, "ada@example.com");
        assert_eq!(content.contact.heading, "Get In Touch");
        assert_eq!(content.projects, PortfolioContent::default().projects);
        assert_eq!(content.footer_text(), "© Ada. All rights reserved.");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let path = env::temp_dir().join("folio_definitely_missing.json");
        let err = PortfolioContent::load(&path).unwrap_err();
        assert!(matches!(err, Error::ContentNotFound { .. }));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = temp_file("folio_malformed_content.json", "{ owner: ");
        assert!(matches!(PortfolioContent::load(&path), Err(Error::Json(_))));
        assert_eq!(PortfolioContent::load_or_default(Some(&path)), PortfolioContent::default());
        let _ = fs::remove_file(path);
    }
}
