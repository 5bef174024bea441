use std::fmt::Display;

/// Which indexing operator is being resolved
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ElementAccessMode {
    /// `x[i]`, possibly selecting many (or no) elements
    #[default]
    Subset,
    /// `x[[i]]`, selecting exactly one element
    Subscript,
}

/// Whether the resolved positions are read from or written to
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Access {
    #[default]
    Extract,
    Replace,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct AccessMode {
    pub element: ElementAccessMode,
    pub access: Access,
}

impl AccessMode {
    pub const SUBSET: AccessMode = AccessMode::new(ElementAccessMode::Subset, Access::Extract);
    pub const SUBSCRIPT: AccessMode = AccessMode::new(ElementAccessMode::Subscript, Access::Extract);

    pub const fn new(element: ElementAccessMode, access: Access) -> Self {
        AccessMode { element, access }
    }

    /// The same operator, used as an assignment target
    pub const fn replace(self) -> Self {
        AccessMode::new(self.element, Access::Replace)
    }

    pub fn is_subset(&self) -> bool {
        self.element == ElementAccessMode::Subset
    }

    pub fn is_subscript(&self) -> bool {
        self.element == ElementAccessMode::Subscript
    }

    pub fn is_replace(&self) -> bool {
        self.access == Access::Replace
    }
}

impl Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.element {
            ElementAccessMode::Subset => "[",
            ElementAccessMode::Subscript => "[[",
        };
        write!(f, "{op} {}", self.access)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn replace_keeps_operator() {
        let mode = AccessMode::SUBSCRIPT.replace();
        assert!(mode.is_subscript());
        assert!(mode.is_replace());
    }

    #[test]
    fn parse_from_str() {
        use std::str::FromStr;
        assert_eq!(
            ElementAccessMode::from_str("subscript"),
            Ok(ElementAccessMode::Subscript)
        );
        assert_eq!(Access::from_str("replace"), Ok(Access::Replace));
    }

    #[test]
    fn display() {
        assert_eq!(AccessMode::SUBSET.to_string(), "[ extract");
        assert_eq!(AccessMode::SUBSCRIPT.replace().to_string(), "[[ replace");
    }
}
