//! Case-style detection and conversion for attribute identifiers.
//!
//! The conversions here are deliberately character-class transforms, not
//! word-boundary heuristics: every uppercase letter is hyphenated
//! individually, so `propID` becomes `prop-i-d`, never `prop-id`. The two
//! directions are not exact inverses for every input; callers always
//! recompute the canonical form from the current raw name instead of
//! round-tripping.

use compact_str::CompactString;

/// Convert an identifier to its hyphenated (kebab-case) form.
///
/// Each ASCII uppercase letter after the first character is replaced by a
/// hyphen followed by its lowercase form. An uppercase first character is
/// lowercased without a leading hyphen. Runs of uppercase letters are not
/// collapsed.
///
/// # Examples
/// ```
/// use burin_trace::casing::hyphenate;
///
/// assert_eq!(hyphenate("myProp"), "my-prop");
/// assert_eq!(hyphenate("MyProp"), "my-prop");
/// assert_eq!(hyphenate("propID"), "prop-i-d");
/// assert_eq!(hyphenate("my-prop"), "my-prop");
/// ```
pub fn hyphenate(name: &str) -> CompactString {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    CompactString::from(out)
}

/// Convert an identifier to its camelCase form.
///
/// Each hyphen immediately followed by a word character is removed and that
/// character uppercased. Hyphens not followed by a word character (trailing
/// or doubled) pass through unchanged. A name with no hyphens is returned
/// as-is.
///
/// # Examples
/// ```
/// use burin_trace::casing::camelize;
///
/// assert_eq!(camelize("my-prop"), "myProp");
/// assert_eq!(camelize("second-custom"), "secondCustom");
/// assert_eq!(camelize("myProp"), "myProp");
/// assert_eq!(camelize("foo-"), "foo-");
/// ```
pub fn camelize(name: &str) -> CompactString {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_alphanumeric() || next == '_' => {
                    chars.next();
                    out.push(next.to_ascii_uppercase());
                }
                _ => out.push('-'),
            }
        } else {
            out.push(c);
        }
    }
    CompactString::from(out)
}

/// Uppercase the first character of an identifier.
///
/// # Examples
/// ```
/// use burin_trace::casing::capitalize;
///
/// assert_eq!(capitalize("myProp"), "MyProp");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(name: &str) -> CompactString {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            CompactString::from(out)
        }
        None => CompactString::default(),
    }
}

/// Check whether an identifier contains a hyphen.
///
/// Hyphen presence is the sole discriminant for the "hyphenated" style;
/// well-formedness of the kebab-case spelling is not validated.
///
/// # Examples
/// ```
/// use burin_trace::casing::is_hyphenated;
///
/// assert!(is_hyphenated("my-prop"));
/// assert!(!is_hyphenated("myProp"));
/// assert!(!is_hyphenated("foo"));
/// ```
#[inline]
pub fn is_hyphenated(name: &str) -> bool {
    name.contains('-')
}

/// Check if a string is in camelCase format.
///
/// Returns true if the string starts with a lowercase letter and contains
/// at least one uppercase letter (excluding the first character).
///
/// # Examples
/// ```
/// use burin_trace::casing::is_camel_case;
///
/// assert!(is_camel_case("myProp"));
/// assert!(!is_camel_case("MyProp")); // PascalCase
/// assert!(!is_camel_case("my-prop")); // kebab-case
/// assert!(!is_camel_case("foo")); // no uppercase
/// ```
#[inline]
pub fn is_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }

    let mut has_uppercase = false;
    for c in chars {
        if c == '-' || c == '_' {
            return false;
        }
        if c.is_ascii_uppercase() {
            has_uppercase = true;
        }
    }
    has_uppercase
}

/// Check if a string is in kebab-case format.
///
/// Must contain at least one hyphen and no uppercase letters.
///
/// # Examples
/// ```
/// use burin_trace::casing::is_kebab_case;
///
/// assert!(is_kebab_case("my-prop"));
/// assert!(!is_kebab_case("myProp"));
/// assert!(!is_kebab_case("foo")); // single word
/// ```
#[inline]
pub fn is_kebab_case(s: &str) -> bool {
    if !s.contains('-') {
        return false;
    }
    s.chars().all(|c| !c.is_ascii_uppercase())
}
