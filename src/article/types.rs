/// Inputs for one article run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    pub title: String,
    pub tone: String,
    pub tags: Vec<String>,
}

impl ArticleRequest {
    pub fn new(title: impl Into<String>, tone: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            tone: tone.into(),
            tags,
        }
    }

    /// Splits a comma-separated tag list, dropping blank entries.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A section header and the talking points generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub points: Vec<String>,
}

impl Section {
    pub fn new(header: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            header: header.into(),
            points,
        }
    }
}

/// A section with one generated paragraph per talking point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSection {
    pub header: String,
    pub paragraphs: Vec<String>,
}

/// Output of the stepwise strategy before it is flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepwiseDraft {
    pub intro: String,
    pub sections: Vec<WrittenSection>,
    pub conclusion: String,
}

impl StepwiseDraft {
    /// Introduction, then each header followed by its paragraphs, then the conclusion,
    /// separated by blank lines.
    pub fn render(&self) -> String {
        let mut blocks: Vec<&str> = vec![self.intro.trim()];
        for section in &self.sections {
            blocks.push(section.header.trim());
            blocks.extend(section.paragraphs.iter().map(|p| p.trim()));
        }
        blocks.push(self.conclusion.trim());

        let mut text = blocks.join("\n\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_trims_and_skips_blanks() {
        assert_eq!(
            ArticleRequest::parse_tags(" unit testing, tdd ,, "),
            vec!["unit testing", "tdd"]
        );
        assert!(ArticleRequest::parse_tags("").is_empty());
    }

    #[test]
    fn stepwise_draft_renders_in_reading_order() {
        let draft = StepwiseDraft {
            intro: "Intro text.\n".to_string(),
            sections: vec![
                WrittenSection {
                    header: "First".to_string(),
                    paragraphs: vec!["P1.".to_string(), " P2.".to_string()],
                },
                WrittenSection {
                    header: "Second".to_string(),
                    paragraphs: vec!["P3.".to_string()],
                },
            ],
            conclusion: "Done.".to_string(),
        };

        assert_eq!(
            draft.render(),
            "Intro text.\n\nFirst\n\nP1.\n\nP2.\n\nSecond\n\nP3.\n\nDone.\n"
        );
    }
}
