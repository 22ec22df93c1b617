//! Failure message catalog.
//!
//! Messages are an explicit value handed to the engine at construction, so
//! independent validator instances can carry different wording; there is
//! no global registry. The length templates substitute `{min}` / `{max}`.

use crate::rule::Rule;

/// One message template per rule.
///
/// Fields are public so callers can restyle individual messages with struct
/// update syntax: `Messages { required: "...".into(), ..Messages::default() }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub required: String,
    pub email: String,
    pub phone: String,
    pub only_letters: String,
    pub no_numbers: String,
    pub only_numbers: String,
    pub alphanumeric: String,
    pub nit: String,
    pub ci: String,
    pub min_length: String,
    pub max_length: String,
    pub password: String,
    pub mismatch: String,
    pub future_date: String,
    pub past_date: String,
    pub card_number: String,
    pub card_expiry: String,
}

impl Messages {
    /// Render the failure message for `rule`, substituting its parameter.
    pub fn render(&self, rule: &Rule) -> String {
        match rule {
            Rule::Required => self.required.clone(),
            Rule::Email => self.email.clone(),
            Rule::Phone => self.phone.clone(),
            Rule::OnlyLetters => self.only_letters.clone(),
            Rule::NoNumbers => self.no_numbers.clone(),
            Rule::OnlyNumbers => self.only_numbers.clone(),
            Rule::Alphanumeric => self.alphanumeric.clone(),
            Rule::Nit => self.nit.clone(),
            Rule::Ci => self.ci.clone(),
            Rule::MinLength(min) => self.min_length.replace("{min}", &min.to_string()),
            Rule::MaxLength(max) => self.max_length.replace("{max}", &max.to_string()),
            Rule::Password => self.password.clone(),
            Rule::Match(_) => self.mismatch.clone(),
            Rule::FutureDate => self.future_date.clone(),
            Rule::PastDate => self.past_date.clone(),
            Rule::CardNumber => self.card_number.clone(),
            Rule::CardExpiry => self.card_expiry.clone(),
        }
    }

    /// The Spanish wording of the clinic forms this engine grew out of.
    pub fn spanish() -> Self {
        Self {
            required: "Este campo es obligatorio".to_string(),
            email: "Ingresa un correo electrónico válido".to_string(),
            phone: "Ingresa un número de celular válido (8 dígitos)".to_string(),
            only_letters: "Este campo solo puede contener letras".to_string(),
            no_numbers: "Este campo no puede contener números".to_string(),
            only_numbers: "Este campo solo puede contener números".to_string(),
            alphanumeric: "Este campo solo puede contener letras y números".to_string(),
            nit: "Ingresa un NIT válido (7-15 dígitos)".to_string(),
            ci: "Ingresa un CI válido (5-10 dígitos)".to_string(),
            min_length: "Debe tener al menos {min} caracteres".to_string(),
            max_length: "No puede tener más de {max} caracteres".to_string(),
            password: "La contraseña debe tener al menos 6 caracteres, una mayúscula, una minúscula y un número".to_string(),
            mismatch: "Las contraseñas no coinciden".to_string(),
            future_date: "La fecha debe ser futura".to_string(),
            past_date: "La fecha debe ser pasada o actual".to_string(),
            card_number: "Ingresa un número de tarjeta válido".to_string(),
            card_expiry: "Ingresa una fecha de vencimiento válida (MM/AA)".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            email: "Enter a valid email address".to_string(),
            phone: "Enter a valid phone number (8 digits)".to_string(),
            only_letters: "This field may only contain letters".to_string(),
            no_numbers: "This field may not contain numbers".to_string(),
            only_numbers: "This field may only contain numbers".to_string(),
            alphanumeric: "This field may only contain letters and numbers".to_string(),
            nit: "Enter a valid NIT (7-15 digits)".to_string(),
            ci: "Enter a valid CI (5-10 digits)".to_string(),
            min_length: "Must be at least {min} characters".to_string(),
            max_length: "Cannot be longer than {max} characters".to_string(),
            password: "Password needs at least 6 characters, one uppercase letter, one lowercase letter and one number".to_string(),
            mismatch: "Passwords do not match".to_string(),
            future_date: "Date must be today or later".to_string(),
            past_date: "Date must be today or earlier".to_string(),
            card_number: "Enter a valid card number".to_string(),
            card_expiry: "Enter a valid expiry date (MM/YY)".to_string(),
        }
    }
}
