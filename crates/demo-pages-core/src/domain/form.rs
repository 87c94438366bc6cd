//! Form Draft and Counter

use serde::{Deserialize, Serialize};

/// Field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Match an input's `name` attribute
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "message" => Some(FormField::Message),
            _ => None,
        }
    }
}

/// Unsubmitted form contents, kept as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormDraft {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Compact JSON shown in the confirmation banner
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Unbounded integer counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub value: i64,
}

impl Counter {
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_goes_negative() {
        let mut counter = Counter::default();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value, -2);
        counter.increment();
        assert_eq!(counter.value, -1);
        counter.reset();
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn test_draft_updates_one_field() {
        let mut draft = FormDraft::default();
        let field = FormField::from_name("email").unwrap();
        draft.set(field, "a@b.c".to_string());

        assert_eq!(draft.get(FormField::Email), "a@b.c");
        assert!(draft.name.is_empty());
        assert_eq!(draft.to_json(), r#"{"name":"","email":"a@b.c","message":""}"#);
        assert!(FormField::from_name("phone").is_none());
    }
}
