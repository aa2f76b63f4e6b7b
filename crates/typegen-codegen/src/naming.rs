//! Identifier conversions.

use typegen_core::RenameRule;

/// Converts a snake_case name to camelCase.
///
/// # Examples
///
/// ```
/// use typegen_codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("get_user"), "getUser");
/// assert_eq!(to_camel_case("create_password_reset_code"), "createPasswordResetCode");
/// assert_eq!(to_camel_case("hello"), "hello");
/// ```
#[must_use]
pub fn to_camel_case(snake_case: &str) -> String {
    let mut result = String::with_capacity(snake_case.len());
    let mut capitalize_next = false;

    for ch in snake_case.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

/// Converts a PascalCase name to SCREAMING_SNAKE_CASE.
///
/// An underscore goes between a non-whitespace character and the uppercase
/// letter right after it. A character consumed as the uppercase half of a
/// pair does not start another pair, so runs of capitals split once per two
/// letters (`"ABC"` becomes `"A_BC"`).
///
/// # Examples
///
/// ```
/// use typegen_codegen::naming::to_loud_snake_case;
///
/// assert_eq!(to_loud_snake_case("RateLimited"), "RATE_LIMITED");
/// assert_eq!(to_loud_snake_case("Online"), "ONLINE");
/// ```
#[must_use]
pub fn to_loud_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        match chars.get(i + 1) {
            Some(&next) if !current.is_whitespace() && next.is_uppercase() => {
                result.push(current);
                result.push('_');
                result.push(next);
                i += 2;
            }
            _ => {
                result.push(current);
                i += 1;
            }
        }
    }

    result.to_uppercase()
}

/// Applies an enum's rename rule to a variant name.
///
/// Only `SCREAMING_SNAKE_CASE` rewrites names; every other rule, and no
/// rule at all, keeps the name as declared.
#[must_use]
pub fn rename_variant(name: &str, rule: Option<&RenameRule>) -> String {
    match rule {
        Some(RenameRule::ScreamingSnakeCase) => to_loud_snake_case(name),
        _ => name.to_string(),
    }
}
