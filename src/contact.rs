use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    ServiceType,
    Message,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::ServiceType => "service-type",
            Field::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Phone | Field::Message)
    }
}

/// Live values of the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub message: String,
    pub site_visit: bool,
}

impl ContactFields {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::ServiceType => &self.service_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
            Field::ServiceType => self.service_type = value,
            Field::Message => self.message = value,
        }
    }
}

/// What a successful submit hands on. Keys match the form's JS-facing names.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub message: String,
    pub site_visit: bool,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Vennligst fyll ut alle obligatoriske felt.")]
    MissingRequired,
    #[error("Vennligst oppgi en gyldig e-postadresse.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Required fields first, then the email shape. Stops at the first failure.
pub fn validate(fields: &ContactFields) -> Result<ContactSubmission, ValidationError> {
    let required = [Field::Name, Field::Email, Field::Phone, Field::Message];
    if required.iter().any(|f| fields.value(*f).is_empty()) {
        return Err(ValidationError::MissingRequired);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ContactSubmission {
        name: fields.name.clone(),
        email: fields.email.clone(),
        phone: fields.phone.clone(),
        address: fields.address.clone(),
        service_type: fields.service_type.clone(),
        message: fields.message.clone(),
        site_visit: fields.site_visit,
    })
}

/// Whether a field should be outlined as an error after losing focus.
pub fn needs_attention(required: bool, value: &str) -> bool {
    required && value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Kari Nordmann".into(),
            email: "kari@example.no".into(),
            phone: "123 45 678".into(),
            address: "Storgata 1".into(),
            service_type: "bad".into(),
            message: "Lekker under vasken".into(),
            site_visit: true,
        }
    }

    #[test]
    fn complete_form_produces_record() {
        let submission = validate(&filled()).unwrap();
        assert_eq!(submission.name, "Kari Nordmann");
        assert_eq!(submission.service_type, "bad");
        assert!(submission.site_visit);
    }

    #[test]
    fn record_serializes_with_form_keys() {
        let json = serde_json::to_value(validate(&filled()).unwrap()).unwrap();
        assert_eq!(json["serviceType"], "bad");
        assert_eq!(json["siteVisit"], true);
        assert_eq!(json["phone"], "123 45 678");
    }

    #[test]
    fn any_empty_required_field_rejects() {
        for field in [Field::Name, Field::Email, Field::Phone, Field::Message] {
            let mut fields = filled();
            fields.set(field, String::new());
            assert_eq!(validate(&fields), Err(ValidationError::MissingRequired), "{:?}", field);
        }
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut fields = filled();
        fields.address.clear();
        fields.service_type.clear();
        fields.site_visit = false;
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let mut fields = filled();
        fields.email = "not-an-email".into();
        fields.message.clear();
        assert_eq!(validate(&fields), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn malformed_email_rejects() {
        for email in ["kari", "kari@", "kari@example", "@example.no", "kari@example.", "ka ri@example.no", "kari@@example.no"] {
            let mut fields = filled();
            fields.email = email.into();
            assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("post@flipp-vvs.co.no"));
    }

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(ValidationError::MissingRequired.to_string(), "Vennligst fyll ut alle obligatoriske felt.");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Vennligst oppgi en gyldig e-postadresse.");
    }

    #[test]
    fn blank_required_field_needs_attention() {
        assert!(needs_attention(true, "   "));
        assert!(!needs_attention(true, "Kari"));
        assert!(!needs_attention(false, ""));
    }
}
