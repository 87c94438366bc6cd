//! Page Routes
//!
//! Static paths of the four pages. Links are plain anchors, no parameters.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Interactive,
    Advanced,
    Network,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Interactive, Page::Advanced, Page::Network];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Interactive => "/test1",
            Page::Advanced => "/test2",
            Page::Network => "/network-test",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Interactive => "Test Page 1",
            Page::Advanced => "Test Page 2",
            Page::Network => "Network Test",
        }
    }

    /// Resolve `location.pathname`; unknown paths fall back to home
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        Page::ALL
            .into_iter()
            .find(|page| page.path().trim_end_matches('/') == trimmed)
            .unwrap_or_default()
    }

    /// Links shown at the bottom of this page
    pub fn nav_targets(&self) -> Vec<Page> {
        Page::ALL.into_iter().filter(|page| page != self).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/test1/"), Page::Interactive);
        assert_eq!(Page::from_path("/network-test"), Page::Network);
        assert_eq!(Page::from_path("/nowhere"), Page::Home);
    }

    #[test]
    fn test_nav_excludes_current_page() {
        let targets = Page::Advanced.nav_targets();
        assert_eq!(targets, vec![Page::Home, Page::Interactive, Page::Network]);
    }
}
