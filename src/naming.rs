/// Converts a snake_case field name to lower camelCase.
///
/// The first underscore-delimited segment is lower-cased; every later
/// segment contributes its first character upper-cased plus the remainder
/// unchanged, concatenated with no separator. Names without underscores
/// come back lower-cased only.
///
/// ```
/// use resultrs::naming::snake_to_lower_camel;
///
/// assert_eq!(snake_to_lower_camel("user_first_name"), "userFirstName");
/// assert_eq!(snake_to_lower_camel("id"), "id");
/// ```
pub fn snake_to_lower_camel(name: &str) -> String {
    let mut segments = name.split('_');
    let mut converted = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        converted.push_str(&first.to_lowercase());
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            converted.extend(head.to_uppercase());
            converted.push_str(chars.as_str());
        }
    }

    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_segment_name() {
        assert_eq!(snake_to_lower_camel("user_first_name"), "userFirstName");
    }

    #[test]
    fn test_single_segment_unchanged() {
        assert_eq!(snake_to_lower_camel("id"), "id");
    }

    #[test]
    fn test_first_segment_is_lowercased() {
        assert_eq!(snake_to_lower_camel("USER_id"), "userId");
    }

    #[test]
    fn test_doubled_underscores_contribute_nothing() {
        assert_eq!(snake_to_lower_camel("user__name"), "userName");
    }

    #[test]
    fn test_trailing_underscore() {
        assert_eq!(snake_to_lower_camel("name_"), "name");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(snake_to_lower_camel(""), "");
    }
}
