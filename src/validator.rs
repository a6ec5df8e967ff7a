use std::collections::HashMap;

/// Checks that every required field is present and non-empty. Success hands
/// back the complete field map; failure hands back the names of every field
/// that was missing or empty, so the page can mark each of them (and clear
/// marks on the rest). Callers never see a partial map.
pub fn validate(
    values: &HashMap<String, String>,
    required: &[&str],
) -> Result<HashMap<String, String>, Vec<String>> {
    let mut clean = HashMap::new();
    let mut invalid = Vec::new();

    for &field in required {
        match values.get(field) {
            Some(value) if !value.is_empty() => {
                clean.insert(field.to_string(), value.clone());
            }
            _ => invalid.push(field.to_string()),
        }
    }

    if invalid.is_empty() { Ok(clean) } else { Err(invalid) }
}
