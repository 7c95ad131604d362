use icu_properties::props::{BinaryProperty, Uppercase};

/// Converts a PascalCase or camelCase enum name into the snake_case form used in function names.
///
/// Every uppercase letter except the first character starts a new word, so acronyms are split
/// letter by letter (`AO` becomes `a_o`).
pub fn secondary_name(name: &str) -> String {
    let mut string = String::with_capacity(name.len() + name.len() / 2);

    for (index, ch) in name.chars().enumerate() {
        if index > 0 && Uppercase::for_char(ch) {
            string.push('_');
        }

        string.extend(ch.to_lowercase());
    }

    string
}

/// Finds the prefix shared by every member that can be dropped from the generated strings.
///
/// The prefix is cut back to just after its last underscore if it has one, and it is always
/// shorter than each member, so no member ends up with an empty string.
pub fn common_prefix<'a>(members: impl IntoIterator<Item = &'a str>) -> &'a str {
    let mut members = members.into_iter();

    let Some(first) = members.next() else {
        return "";
    };

    let mut prefix = first;
    let mut shortest = first.len();
    let mut count = 1;

    for member in members {
        let shared = prefix
            .char_indices()
            .zip(member.chars())
            .find(|((_, a), b)| a != b)
            .map_or(prefix.len().min(member.len()), |((index, _), _)| index);

        prefix = &prefix[..shared];
        shortest = shortest.min(member.len());
        count += 1;
    }

    if count < 2 {
        return "";
    }

    if let Some(underscore) = prefix.rfind('_') {
        prefix = &prefix[..underscore + 1];
    }

    while prefix.len() >= shortest {
        let mut chars = prefix.chars();
        chars.next_back();
        prefix = chars.as_str();
    }

    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_names() {
        assert_eq!(secondary_name("LightType"), "light_type");
        assert_eq!(secondary_name("PointLight"), "point_light");
        assert_eq!(secondary_name("AO"), "a_o");
        assert_eq!(secondary_name("Color"), "color");
        assert_eq!(secondary_name("lowerCamel"), "lower_camel");
        assert_eq!(secondary_name("Format2D"), "format2_d");
        assert_eq!(secondary_name(""), "");
        // Non-ASCII uppercase letters also start a new word.
        assert_eq!(secondary_name("FooÉ"), "foo_é");
    }

    #[test]
    fn prefix_at_word_boundary() {
        let members = ["VK_FORMAT_R8_UNORM", "VK_FORMAT_R16_UNORM", "VK_FORMAT_R32_SFLOAT"];
        assert_eq!(common_prefix(members), "VK_FORMAT_");
    }

    #[test]
    fn prefix_without_underscore() {
        assert_eq!(common_prefix(["FilterNearest", "FilterLinear"]), "Filter");
    }

    #[test]
    fn prefix_never_consumes_a_member() {
        assert_eq!(common_prefix(["A", "AB"]), "");
        assert_eq!(common_prefix(["Same", "Same"]), "Sam");
        assert_eq!(common_prefix(["KEY_", "KEY_A"]), "KEY");
    }

    #[test]
    fn prefix_needs_two_members() {
        assert_eq!(common_prefix(Vec::<&str>::new()), "");
        assert_eq!(common_prefix(["Only"]), "");
    }

    #[test]
    fn no_shared_prefix() {
        assert_eq!(common_prefix(["Red", "Green", "Blue"]), "");
    }
}
