//! Glyphs shown in front of completion entries, by member kind

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Property,
    Class,
    Interface,
    Keyword,
    Constructor,
    Variable,
    Public,
    Private,
}

impl MemberKind {
    pub const ALL: [MemberKind; 9] = [
        MemberKind::Method,
        MemberKind::Property,
        MemberKind::Class,
        MemberKind::Interface,
        MemberKind::Keyword,
        MemberKind::Constructor,
        MemberKind::Variable,
        MemberKind::Public,
        MemberKind::Private,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Label used by the language service
    pub fn label(self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Property => "property",
            MemberKind::Class => "class",
            MemberKind::Interface => "interface",
            MemberKind::Keyword => "keyword",
            MemberKind::Constructor => "constructor",
            MemberKind::Variable => "variable",
            MemberKind::Public => "public",
            MemberKind::Private => "private",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MemberKind::Method => "○",
            MemberKind::Property => "●",
            MemberKind::Class => "♦",
            MemberKind::Interface => "◊",
            MemberKind::Keyword => "∆",
            MemberKind::Constructor => "■",
            MemberKind::Variable => "V",
            MemberKind::Public => "[pub]",
            MemberKind::Private => "[priv]",
        }
    }
}

/// Glyph for a member-kind label, empty for unknown labels
pub fn get_prefix(token: &str) -> &'static str {
    MemberKind::from_label(token).map_or("", MemberKind::glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(get_prefix("method"), "○");
        assert_eq!(get_prefix("interface"), "◊");
        assert_eq!(get_prefix("private"), "[priv]");
    }

    #[test]
    fn test_unknown_prefix_is_empty() {
        assert_eq!(get_prefix("enum"), "");
        assert_eq!(get_prefix("Method"), "");
        assert_eq!(get_prefix(""), "");
    }

    #[test]
    fn test_labels_resolve_back() {
        for kind in MemberKind::ALL {
            assert_eq!(MemberKind::from_label(kind.label()), Some(kind));
        }
    }
}
