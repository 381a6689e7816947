//! CST node definitions.
//!
//! One node kind per grammar rule. Every node records its first and last
//! token index into the scanned stream plus kind-specific data; token fields
//! (`*_token`) hold stream indices so the rewrite pass can address the exact
//! keyword or punctuation a rule needs to edit.

/// Index of a node in the `NodeArena`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    SourceFile,
    ImportDeclaration,
    TypeAlias,
    RestrictedValues,
    Reference,
    FunctionDeclaration,
    ClassContext,
    VariableDefinition,
    NamedType,
    TypeName,
    Identifier,
    StringType,
    Generic,
    GenericParameter,
    UnionType,
    LambdaType,
    Parameter,
    DestructuringParameters,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub first_token: u32,
    pub last_token: u32,
    pub data: NodeData,
}

#[derive(Clone, Debug)]
pub enum NodeData {
    SourceFile(SourceFileData),
    Import,
    TypeAlias(TypeAliasData),
    RestrictedValues(RestrictedValuesData),
    Reference(ReferenceData),
    Function(FunctionData),
    ClassContext(ClassContextData),
    VariableDefinition(VariableDefinitionData),
    NamedType(NamedTypeData),
    TypeName(TypeNameData),
    Identifier(IdentifierData),
    StringType(StringTypeData),
    Generic(GenericData),
    GenericParameter(GenericParameterData),
    UnionType(UnionTypeData),
    LambdaType(LambdaTypeData),
    Parameter(ParameterData),
    Destructuring(DestructuringData),
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub statements: Vec<NodeIndex>,
    /// Stray top-level `;` tokens, deleted by the rewrite pass.
    pub stray_semicolons: Vec<u32>,
}

/// `declare type Name<G> = rhs;` where rhs is not a closed string set.
///
/// The right-hand side is stored pre-sorted for the rewrite rules: object
/// shapes in `classes`, everything else in `types`, `&` joins in
/// `ampersand_tokens`, or a single union in `union`.
#[derive(Clone, Debug)]
pub struct TypeAliasData {
    pub export_token: Option<u32>,
    pub declare_token: u32,
    pub type_token: u32,
    pub name: NodeIndex,
    pub generic: Option<NodeIndex>,
    pub equals_token: u32,
    pub types: Vec<NodeIndex>,
    pub classes: Vec<NodeIndex>,
    pub ampersand_tokens: Vec<u32>,
    pub union: Option<NodeIndex>,
    pub semicolon_token: Option<u32>,
}

/// `declare type Name = "a" | "b";` — a closed set of string literals.
#[derive(Clone, Debug)]
pub struct RestrictedValuesData {
    pub export_token: Option<u32>,
    pub declare_token: u32,
    pub type_token: u32,
    pub name: NodeIndex,
    pub equals_token: u32,
    pub string_tokens: Vec<u32>,
    pub bar_tokens: Vec<u32>,
    pub semicolon_token: Option<u32>,
}

/// `declare const name: T;`
#[derive(Clone, Debug)]
pub struct ReferenceData {
    pub export_token: Option<u32>,
    pub declare_token: u32,
    pub const_token: u32,
    pub name: NodeIndex,
    pub colon_token: u32,
    pub ty: NodeIndex,
    pub semicolon_token: Option<u32>,
}

/// `declare function name<G>(params): T;`
#[derive(Clone, Debug)]
pub struct FunctionData {
    pub export_token: Option<u32>,
    pub declare_token: u32,
    pub function_token: u32,
    pub name: NodeIndex,
    pub generic: Option<NodeIndex>,
    pub open_paren_token: u32,
    pub params: Vec<NodeIndex>,
    pub close_paren_token: u32,
    pub colon_token: u32,
    pub return_type: NodeIndex,
    pub semicolon_token: Option<u32>,
}

/// `{ member* }` — an object-shape type literal.
#[derive(Clone, Debug)]
pub struct ClassContextData {
    pub open_brace_token: u32,
    pub members: Vec<NodeIndex>,
    pub close_brace_token: u32,
}

/// `name?: T;` inside an object shape.
#[derive(Clone, Debug)]
pub struct VariableDefinitionData {
    pub name: NodeIndex,
    pub question_token: Option<u32>,
    pub colon_token: u32,
    pub ty: NodeIndex,
    pub terminator_token: Option<u32>,
}

/// `Name.Space.Type<Args>[]?` — a (possibly qualified, generic, array-
/// suffixed) type reference.
#[derive(Clone, Debug)]
pub struct NamedTypeData {
    pub name: NodeIndex,
    pub generic: Option<NodeIndex>,
    pub open_bracket_token: Option<u32>,
    pub close_bracket_token: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct TypeNameData {
    pub parts: Vec<NodeIndex>,
    pub dot_tokens: Vec<u32>,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub token: u32,
}

/// A string literal used in type position.
#[derive(Clone, Debug)]
pub struct StringTypeData {
    pub token: u32,
}

/// `<param, param>` — a generic parameter/argument list.
#[derive(Clone, Debug)]
pub struct GenericData {
    pub less_than_token: u32,
    pub params: Vec<NodeIndex>,
    pub greater_than_token: u32,
}

/// One entry of a generic list: `T`, `T extends U`, `T extends U = V`.
#[derive(Clone, Debug)]
pub struct GenericParameterData {
    pub base: NodeIndex,
    pub extends_token: Option<u32>,
    pub bound: Option<NodeIndex>,
    pub equals_token: Option<u32>,
    pub default_ty: Option<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct UnionTypeData {
    pub members: Vec<NodeIndex>,
    pub bar_tokens: Vec<u32>,
}

/// `<G>(params) => T`
#[derive(Clone, Debug)]
pub struct LambdaTypeData {
    pub generic: Option<NodeIndex>,
    pub open_paren_token: u32,
    pub params: Vec<NodeIndex>,
    pub close_paren_token: u32,
    pub arrow_token: u32,
    pub return_type: NodeIndex,
}

/// `name?: T` as a function/lambda parameter.
#[derive(Clone, Debug)]
pub struct ParameterData {
    pub name: NodeIndex,
    pub question_token: Option<u32>,
    pub colon_token: u32,
    pub ty: NodeIndex,
}

/// `{a, b}: T` — a destructuring parameter with its declared type.
#[derive(Clone, Debug)]
pub struct DestructuringData {
    pub open_brace_token: u32,
    pub names: Vec<NodeIndex>,
    pub comma_tokens: Vec<u32>,
    pub trailing_comma_token: Option<u32>,
    pub close_brace_token: u32,
    pub colon_token: u32,
    pub ty: Option<NodeIndex>,
    pub class_context: Option<NodeIndex>,
}

/// Arena holding every CST node of one parsed module.
#[derive(Default, Debug)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
}
