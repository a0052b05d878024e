//! # Field Paths
//!
//! Violations are addressed by dotted paths built while descending the
//! Schema Definition: `company.address.city` for nested objects,
//! `features[2]` for array elements. The root object has the empty path.

/// Path of the named child of `prefix`.
pub fn child(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Path of element `index` of the array at `prefix`.
pub fn element(prefix: &str, index: usize) -> String {
    format!("{prefix}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_of_root() {
        assert_eq!(child("", "email"), "email");
    }

    #[test]
    fn test_nested_child() {
        let company = child("", "company");
        let address = child(&company, "address");
        assert_eq!(child(&address, "city"), "company.address.city");
    }

    #[test]
    fn test_array_element() {
        assert_eq!(element("features", 2), "features[2]");
        assert_eq!(child(&element("items", 0), "name"), "items[0].name");
    }
}
