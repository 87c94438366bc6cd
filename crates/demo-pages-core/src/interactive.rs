//! Interactive Page
//!
//! Counter and contact form. Submitting only raises a banner, which the
//! caller clears after `PagesConfig::submit_banner`. A dismissal scheduled
//! by an earlier submit is not cancelled by a later one.

use crate::domain::{Counter, FormDraft, FormField};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractivePage {
    pub counter: Counter,
    pub draft: FormDraft,
    submitted: bool,
}

impl InteractivePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a keystroke to the field named `name`; unknown names are ignored
    pub fn input(&mut self, name: &str, value: String) -> bool {
        match FormField::from_name(name) {
            Some(field) => {
                self.draft.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Raise the banner; the draft is kept as typed
    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn dismiss_banner(&mut self) {
        self.submitted = false;
    }

    /// Banner text while submitted
    pub fn banner(&self) -> Option<String> {
        self.submitted.then(|| {
            format!("Form submitted successfully! Data: {}", self.draft.to_json())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_shows_draft_until_dismissed() {
        let mut page = InteractivePage::new();
        assert!(page.input("name", "Ada".to_string()));
        assert!(!page.input("age", "36".to_string()));
        assert_eq!(page.banner(), None);

        page.submit();
        assert_eq!(
            page.banner().as_deref(),
            Some(r#"Form submitted successfully! Data: {"name":"Ada","email":"","message":""}"#)
        );

        page.dismiss_banner();
        assert_eq!(page.banner(), None);
        assert_eq!(page.draft.name, "Ada");
    }

    #[test]
    fn test_stale_dismiss_is_harmless() {
        let mut page = InteractivePage::new();
        page.dismiss_banner();
        assert_eq!(page.banner(), None);
        page.counter.decrement();
        assert_eq!(page.counter.value, -1);
    }
}
