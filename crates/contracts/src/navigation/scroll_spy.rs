use super::nav_map::{NavigationMap, HOME_KEY};

/// Vertical extent of a page `<section>` in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open: a point on the boundary belongs to the next section
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Outcome of one scroll-spy evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveSection {
    /// Near the top of the page: home link active, no hash
    Home,
    /// A linked section holds the viewport midpoint
    Section { id: String, hash: String },
    /// Unlinked section or a gap between sections: nothing active, no hash
    Unlinked,
}

impl ActiveSection {
    /// Nav map key of the link to highlight
    pub fn active_key(&self) -> Option<&str> {
        match self {
            ActiveSection::Home => Some(HOME_KEY),
            ActiveSection::Section { id, .. } => Some(id),
            ActiveSection::Unlinked => None,
        }
    }

    /// Hash the address bar should carry
    pub fn hash(&self) -> &str {
        match self {
            ActiveSection::Section { hash, .. } => hash,
            _ => "",
        }
    }
}

/// The header switches style as soon as the page leaves the very top
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > 0.0
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    /// Offsets strictly below this count as "home"
    pub home_threshold: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            home_threshold: 150.0,
        }
    }
}

impl ScrollSpy {
    pub fn new(home_threshold: f64) -> Self {
        Self { home_threshold }
    }

    /// Pick the section under the viewport midpoint. Sections are checked
    /// in document order and the first one containing it wins.
    pub fn evaluate(
        &self,
        scroll_y: f64,
        viewport_height: f64,
        sections: &[SectionBox],
        map: &NavigationMap,
    ) -> ActiveSection {
        if scroll_y < self.home_threshold {
            return ActiveSection::Home;
        }

        let mid_point = scroll_y + viewport_height / 2.0;
        let Some(section) = sections.iter().find(|s| s.contains(mid_point)) else {
            return ActiveSection::Unlinked;
        };

        match map.hash_for(&section.id) {
            Some(hash) => ActiveSection::Section {
                id: section.id.clone(),
                hash: hash.to_string(),
            },
            None => ActiveSection::Unlinked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::nav_map::tests::landing_links;

    fn layout() -> Vec<SectionBox> {
        vec![
            SectionBox::new("beranda", 0.0, 600.0),
            SectionBox::new("layanan", 600.0, 500.0),
            SectionBox::new("testimoni", 1100.0, 300.0),
            // gap 1400..1500
            SectionBox::new("kontak", 1500.0, 800.0),
        ]
    }

    fn spy_at(scroll_y: f64, viewport_height: f64) -> ActiveSection {
        let map = NavigationMap::from_links(&landing_links());
        ScrollSpy::default().evaluate(scroll_y, viewport_height, &layout(), &map)
    }

    #[test]
    fn test_linked_section_under_midpoint() {
        // midpoint 200 + 1400 = 1600 lies in "kontak"
        let active = spy_at(200.0, 2800.0);
        assert_eq!(
            active,
            ActiveSection::Section {
                id: "kontak".to_string(),
                hash: "#/kontak/".to_string()
            }
        );
        assert_eq!(active.active_key(), Some("kontak"));
        assert_eq!(active.hash(), "#/kontak/");
    }

    #[test]
    fn test_near_top_is_home() {
        let active = spy_at(149.0, 2800.0);
        assert_eq!(active, ActiveSection::Home);
        assert_eq!(active.active_key(), Some(HOME_KEY));
        assert_eq!(active.hash(), "");
    }

    #[test]
    fn test_unlinked_section_and_gap() {
        // midpoint 1000 + 200 = 1200 lies in "testimoni", which has no nav link
        assert_eq!(spy_at(1000.0, 400.0), ActiveSection::Unlinked);
        // midpoint 1250 + 200 = 1450 lies in the gap
        let gap = spy_at(1250.0, 400.0);
        assert_eq!(gap, ActiveSection::Unlinked);
        assert_eq!(gap.active_key(), None);
        assert_eq!(gap.hash(), "");
    }

    #[test]
    fn test_boundary_belongs_to_next_section() {
        // midpoint exactly 600
        assert_eq!(
            spy_at(400.0, 400.0).active_key(),
            Some("layanan")
        );
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let map = NavigationMap::from_links(&landing_links());
        let overlapping = vec![
            SectionBox::new("layanan", 0.0, 1000.0),
            SectionBox::new("kontak", 500.0, 1000.0),
        ];
        let active = ScrollSpy::default().evaluate(600.0, 400.0, &overlapping, &map);
        assert_eq!(active.active_key(), Some("layanan"));
    }

    #[test]
    fn test_header_scrolled() {
        assert!(!header_scrolled(0.0));
        assert!(header_scrolled(1.0));
    }
}
