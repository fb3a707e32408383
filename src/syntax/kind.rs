use std::fmt;

/// The fixed set of declaration kinds the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Field,
    Constructor,
    Destructor,
    Method,
    Property,
    Indexer,
    Event,
    EventField,
    Operator,
    ConversionOperator,
    Accessor,
    LocalDeclaration,
    LocalFunction,
    Parameter,
    IncompleteMember,
    EnumMember,
    Namespace,
}

impl DeclarationKind {
    /// Whether declarations of this kind own a modifier sequence.
    pub fn has_modifiers(self) -> bool {
        !matches!(self, Self::EnumMember | Self::Namespace)
    }

    /// Class, struct, interface, enum or delegate.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Struct | Self::Interface | Self::Enum | Self::Delegate
        )
    }

    /// Kinds that own a member list.
    pub fn has_members(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Struct | Self::Interface | Self::Enum | Self::Namespace
        )
    }

    /// Kinds that own an accessor list.
    pub fn has_accessors(self) -> bool {
        matches!(self, Self::Property | Self::Indexer | Self::Event)
    }

    /// The keyword that follows the modifiers, for kinds that have a fixed one.
    pub fn keyword(self) -> Option<&'static str> {
        let keyword = match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
            Self::Event | Self::EventField => "event",
            Self::Destructor => "~",
            Self::Namespace => "namespace",
            _ => return None,
        };
        Some(keyword)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Method => "method",
            Self::Property => "property",
            Self::Indexer => "indexer",
            Self::Event => "event",
            Self::EventField => "event field",
            Self::Operator => "operator",
            Self::ConversionOperator => "conversion operator",
            Self::Accessor => "accessor",
            Self::LocalDeclaration => "local declaration",
            Self::LocalFunction => "local function",
            Self::Parameter => "parameter",
            Self::IncompleteMember => "incomplete member",
            Self::EnumMember => "enum member",
            Self::Namespace => "namespace",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
