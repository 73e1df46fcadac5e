//! Contact form validation with user-facing messages in Argentine Spanish.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// +54 9 379 4281273, 5493794281273, 379-4281273, ...
static PHONE_AR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?54\s?9?\s?)?(\d{2,4}[\s-]?)?\d{6,8}$").expect("valid phone regex")
});

static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-záéíóúüñA-ZÁÉÍÓÚÜÑ\s]{2,}$").expect("valid name regex")
});

pub type FieldResult = Result<(), &'static str>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Email,
    Phone,
    Name,
    Message,
    Custom,
}

#[derive(Debug, Clone)]
pub struct FormField<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub field_type: FieldType,
    pub required: bool,
}

pub fn validate_email(email: &str) -> FieldResult {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err("El email es obligatorio");
    }
    if !EMAIL.is_match(trimmed) {
        return Err("Ingresá un email válido (ej: tu@email.com)");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> FieldResult {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err("El teléfono es obligatorio");
    }

    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 10 {
        return Err("El teléfono debe tener al menos 10 dígitos");
    }
    if digits > 14 {
        return Err("El teléfono tiene demasiados dígitos");
    }
    if !PHONE_AR.is_match(trimmed) {
        return Err("Formato inválido. Ej: 379 4281273 o +54 9 379 4281273");
    }
    Ok(())
}

pub fn validate_name(name: &str) -> FieldResult {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if trimmed.is_empty() {
        return Err("El nombre es obligatorio");
    }
    if len < 2 {
        return Err("El nombre debe tener al menos 2 caracteres");
    }
    if len > 100 {
        return Err("El nombre es demasiado largo");
    }
    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        return Err("El nombre no puede contener números");
    }
    if !NAME.is_match(trimmed) {
        return Err("El nombre solo puede contener letras y espacios");
    }
    Ok(())
}

pub fn validate_message(message: &str) -> FieldResult {
    let trimmed = message.trim();
    let len = trimmed.chars().count();
    if trimmed.is_empty() {
        return Err("El mensaje es obligatorio");
    }
    if len < 10 {
        return Err("Contanos un poco más (mínimo 10 caracteres)");
    }
    if len > 1000 {
        return Err("El mensaje es muy largo (máximo 1000 caracteres)");
    }
    Ok(())
}

pub fn validate_field(field_type: FieldType, value: &str) -> FieldResult {
    match field_type {
        FieldType::Email => validate_email(value),
        FieldType::Phone => validate_phone(value),
        FieldType::Name => validate_name(value),
        FieldType::Message => validate_message(value),
        FieldType::Custom => Ok(()),
    }
}

/// Validates every field and collects the errors by field name. Optional
/// fields left blank are skipped.
pub fn validate_form(fields: &[FormField<'_>]) -> Result<(), BTreeMap<String, String>> {
    let errors: BTreeMap<String, String> = fields
        .iter()
        .filter(|f| f.required || !f.value.trim().is_empty())
        .filter_map(|f| {
            validate_field(f.field_type, f.value)
                .err()
                .map(|e| (f.name.to_string(), e.to_string()))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
