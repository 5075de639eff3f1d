// Section descriptors - the fixed, ordered panels of the deck

#[derive(Clone, Debug, PartialEq)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub index: usize,
    pub tagline: String,
    pub background: Option<String>,
    pub cta: Option<CallToAction>,
}

impl Section {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            index: 0,
            tagline: String::new(),
            background: None,
            cta: None,
        }
    }

    pub fn with_tagline(mut self, tagline: &str) -> Self {
        self.tagline = tagline.to_string();
        self
    }

    pub fn with_background(mut self, uri: &str) -> Self {
        self.background = Some(uri.to_string());
        self
    }

    pub fn with_cta(mut self, label: &str, url: &str) -> Self {
        self.cta = Some(CallToAction {
            label: label.to_string(),
            url: url.to_string(),
        });
        self
    }
}

/// Renumbers sections from their list position so indices are always
/// 0-based, contiguous and unique, whatever the caller put in `index`.
pub fn index_sections(sections: Vec<Section>) -> Vec<Section> {
    sections
        .into_iter()
        .enumerate()
        .map(|(index, section)| Section { index, ..section })
        .collect()
}

pub fn default_sections() -> Vec<Section> {
    index_sections(vec![
        Section::new("hero", "Hero")
            .with_tagline("Depth you can scroll through")
            .with_background("https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1600")
            .with_cta("See our work", "#portfolio"),
        Section::new("services", "Services")
            .with_tagline("Design, motion and engineering under one roof")
            .with_background("https://images.unsplash.com/photo-1518770660439-4636190af475?w=1600"),
        Section::new("portfolio", "Portfolio")
            .with_tagline("Selected work from recent launches")
            .with_background("https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=1600"),
        Section::new("cta", "Contact")
            .with_tagline("Tell us what you want to build")
            .with_background("https://images.unsplash.com/photo-1497366216548-37526070297c?w=1600")
            .with_cta("Get Started", "mailto:hello@example.com"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections_are_contiguous() {
        let sections = default_sections();
        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["hero", "services", "portfolio", "cta"]);
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.index, i);
        }
    }

    #[test]
    fn test_index_sections_overrides_caller_indices() {
        let mut a = Section::new("a", "A");
        a.index = 7;
        let mut b = Section::new("b", "B");
        b.index = 7;
        let sections = index_sections(vec![a, b]);
        assert_eq!(sections[0].index, 0);
        assert_eq!(sections[1].index, 1);
    }

    #[test]
    fn test_default_ctas() {
        let sections = default_sections();
        let with_cta: Vec<&str> = sections
            .iter()
            .filter(|s| s.cta.is_some())
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(with_cta, ["hero", "cta"]);
        assert_eq!(sections[0].cta.as_ref().map(|c| c.url.as_str()), Some("#portfolio"));
        assert_eq!(sections[3].cta.as_ref().map(|c| c.label.as_str()), Some("Get Started"));
    }
}
