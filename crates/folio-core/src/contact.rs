//! Local-only contact form. Nothing is sent anywhere.

use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Project Inquiry",
            Self::Message => "Tell me about your project...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill out the '{}' field", .0.label())]
    Missing(Field),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// First field left empty.
    pub fn missing(&self) -> Option<Field> {
        Field::iter().find(|f| self.get(*f).is_empty())
    }

    /// Accepts the message locally: on success the fields are cleared and the
    /// acknowledgment to show is returned. A blank field leaves everything as
    /// entered.
    pub fn submit(&mut self) -> Result<&'static str, FormError> {
        if let Some(field) = self.missing() {
            return Err(FormError::Missing(field));
        }
        log::info!(
            "Contact form submitted by '{}' ({} chars)",
            self.name,
            self.message.len()
        );
        *self = Self::default();
        Ok(ACKNOWLEDGMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_acknowledges_and_resets() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@x.com");
        form.set(Field::Subject, "Hi");
        form.set(Field::Message, "Test");

        assert_eq!(form.submit(), Ok(ACKNOWLEDGMENT));
        for field in Field::iter() {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_blank_field_is_reported() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@x.com");
        form.set(Field::Message, "Test");

        assert_eq!(form.submit(), Err(FormError::Missing(Field::Subject)));
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Test");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Email.to_string(), "email");
        assert_eq!("MESSAGE".parse::<Field>().unwrap(), Field::Message);
        assert_eq!(
            FormError::Missing(Field::Name).to_string(),
            "Please fill out the 'Your Name' field"
        );
    }
}
