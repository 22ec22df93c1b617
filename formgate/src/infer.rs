//! Rule-spec inference from well-known field names.

/// Infer a rule string for a field from its name alone.
///
/// Covers the common clinic-form names in Spanish and English. Matching is
/// case-insensitive; exact names win, then substring matches, so
/// `telefono_celular` still maps to the phone spec. Short identifiers
/// (`ci`, `nit`) only match exactly.
pub fn infer_spec(field_name: &str) -> Option<&'static str> {
    const EXACT: &[(&str, &str)] = &[
        ("email", "email"),
        ("correo", "email"),
        ("telefono", "phone"),
        ("celular", "phone"),
        ("phone", "phone"),
        ("nombre", "noNumbers|capitalize"),
        ("apellido", "noNumbers|capitalize"),
        ("nombre_completo", "noNumbers|capitalize"),
        ("first_name", "noNumbers|capitalize"),
        ("last_name", "noNumbers|capitalize"),
        ("ci", "ci"),
        ("nit", "nit"),
    ];
    const SUBSTRING: &[(&str, &str)] = &[
        ("email", "email"),
        ("correo", "email"),
        ("telefono", "phone"),
        ("celular", "phone"),
        ("nombre", "noNumbers|capitalize"),
        ("apellido", "noNumbers|capitalize"),
    ];

    let name = field_name.to_ascii_lowercase();
    if let Some((_, spec)) = EXACT.iter().find(|(key, _)| *key == name) {
        return Some(spec);
    }
    SUBSTRING
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, spec)| *spec)
}
