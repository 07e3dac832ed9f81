//! Identifier derivation for generated variables and fields.
//!
//! Object and animation names are unique upstream, so nothing here checks
//! for collisions.

/// `hero` → `fHero`.
pub fn public_field_name(name: &str) -> String {
    let mut chars = name.chars();
    let mut field = String::with_capacity(name.len() + 1);
    field.push('f');
    if let Some(first) = chars.next() {
        field.extend(first.to_uppercase());
        field.push_str(chars.as_str());
    }
    field
}

/// `("hero", "walk")` → `hero_walk`.
pub fn animation_var_name(object_name: &str, animation_name: &str) -> String {
    format!("{object_name}_{animation_name}")
}
