use super::*;

// ============================================================================
// Fields and events
// ============================================================================

decl_node!(FieldDeclaration, Field);
decl_node!(EventFieldDeclaration, EventField);

impl FieldDeclaration {
    name_method!();
    has_modifier_method!(is_const, Const);
    has_modifier_method!(is_static, Static);
    has_modifier_method!(is_readonly, ReadOnly);
    has_modifier_method!(is_volatile, Volatile);
}

impl EventFieldDeclaration {
    name_method!();
    has_modifier_method!(is_static, Static);
}

// ============================================================================
// Constructors and destructors
// ============================================================================

decl_node!(ConstructorDeclaration, Constructor);
decl_node!(DestructorDeclaration, Destructor);

impl ConstructorDeclaration {
    name_method!();
    has_modifier_method!(is_static, Static);
}

impl DestructorDeclaration {
    name_method!();
}

// ============================================================================
// Methods and operators
// ============================================================================

decl_node!(MethodDeclaration, Method);
decl_node!(OperatorDeclaration, Operator);
decl_node!(ConversionOperatorDeclaration, ConversionOperator);

impl MethodDeclaration {
    name_method!();
    has_modifier_method!(is_static, Static);
    has_modifier_method!(is_abstract, Abstract);
    has_modifier_method!(is_virtual, Virtual);
    has_modifier_method!(is_override, Override);
    has_modifier_method!(is_partial, Partial);
    has_modifier_method!(is_async, Async);

    pub fn explicit_interface(&self) -> Option<&str> {
        self.0.explicit_interface()
    }
}

impl OperatorDeclaration {
    /// Operator token, e.g. `+` or `==`.
    pub fn operator(&self) -> Option<&str> {
        self.0.name_text()
    }
}

impl ConversionOperatorDeclaration {
    /// `implicit` or `explicit`.
    pub fn conversion(&self) -> Option<&str> {
        self.0.head().map(crate::base::Token::text)
    }
}

// ============================================================================
// Properties, indexers, events and their accessors
// ============================================================================

decl_node!(PropertyDeclaration, Property);
decl_node!(IndexerDeclaration, Indexer);
decl_node!(EventDeclaration, Event);
decl_node!(AccessorDeclaration, Accessor);

// Property, indexer or event: the declarations that own accessors.
decl_node!(AccessorOwner, [Property, Indexer, Event]);

impl AccessorOwner {
    pub fn accessors(&self) -> impl Iterator<Item = AccessorDeclaration> + '_ {
        self.0
            .accessors()
            .iter()
            .cloned()
            .filter_map(AccessorDeclaration::cast)
    }
}

impl PropertyDeclaration {
    name_method!();
    has_modifier_method!(is_static, Static);
    has_modifier_method!(is_abstract, Abstract);
    has_modifier_method!(is_virtual, Virtual);
    has_modifier_method!(is_override, Override);

    pub fn explicit_interface(&self) -> Option<&str> {
        self.0.explicit_interface()
    }
}

impl IndexerDeclaration {
    pub fn explicit_interface(&self) -> Option<&str> {
        self.0.explicit_interface()
    }
}

impl EventDeclaration {
    name_method!();

    pub fn explicit_interface(&self) -> Option<&str> {
        self.0.explicit_interface()
    }
}

impl AccessorDeclaration {
    /// `get`, `set`, `init`, `add` or `remove`.
    pub fn keyword(&self) -> Option<&str> {
        self.0.head().map(crate::base::Token::text)
    }
}

// ============================================================================
// Locals and parameters
// ============================================================================

decl_node!(LocalDeclaration, LocalDeclaration);
decl_node!(LocalFunction, LocalFunction);
decl_node!(Parameter, Parameter);
decl_node!(IncompleteMember, IncompleteMember);

impl LocalDeclaration {
    name_method!();
    has_modifier_method!(is_const, Const);
}

impl LocalFunction {
    name_method!();
    has_modifier_method!(is_static, Static);
    has_modifier_method!(is_async, Async);
}

impl Parameter {
    name_method!();
}

has_modifiers!(
    FieldDeclaration,
    EventFieldDeclaration,
    ConstructorDeclaration,
    DestructorDeclaration,
    MethodDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    PropertyDeclaration,
    IndexerDeclaration,
    EventDeclaration,
    AccessorDeclaration,
    AccessorOwner,
    LocalDeclaration,
    LocalFunction,
    Parameter,
    IncompleteMember,
);
