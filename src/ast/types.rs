use super::*;

// ============================================================================
// Type declarations
// ============================================================================

decl_node!(ClassDeclaration, Class);
decl_node!(StructDeclaration, Struct);
decl_node!(InterfaceDeclaration, Interface);
decl_node!(EnumDeclaration, Enum);
decl_node!(DelegateDeclaration, Delegate);

has_modifiers!(
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    DelegateDeclaration,
);

impl ClassDeclaration {
    name_method!();
    has_modifier_method!(is_static, Static);
    has_modifier_method!(is_abstract, Abstract);
    has_modifier_method!(is_sealed, Sealed);
    has_modifier_method!(is_partial, Partial);

    pub fn members(&self) -> &[Declaration] {
        self.0.members()
    }
}

impl StructDeclaration {
    name_method!();
    has_modifier_method!(is_readonly, ReadOnly);
    has_modifier_method!(is_partial, Partial);

    pub fn members(&self) -> &[Declaration] {
        self.0.members()
    }
}

impl InterfaceDeclaration {
    name_method!();
    has_modifier_method!(is_partial, Partial);

    pub fn members(&self) -> &[Declaration] {
        self.0.members()
    }
}

impl EnumDeclaration {
    name_method!();

    pub fn members(&self) -> impl Iterator<Item = EnumMemberDeclaration> + '_ {
        self.0
            .members()
            .iter()
            .cloned()
            .filter_map(EnumMemberDeclaration::cast)
    }
}

impl DelegateDeclaration {
    name_method!();
}

// ============================================================================
// Declarations without a modifier list
// ============================================================================

decl_node!(NamespaceDeclaration, Namespace);
decl_node!(EnumMemberDeclaration, EnumMember);

impl NamespaceDeclaration {
    name_method!();

    pub fn members(&self) -> &[Declaration] {
        self.0.members()
    }
}

impl EnumMemberDeclaration {
    name_method!();
}

// ============================================================================
// Member containers
// ============================================================================

decl_node!(MemberContainer, [Class, Struct, Interface, Namespace]);

impl MemberContainer {
    pub fn members(&self) -> &[Declaration] {
        self.0.members()
    }
}
