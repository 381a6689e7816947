//! NodeArena creation methods (add_* methods).

use super::node::*;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn add(&mut self, kind: NodeKind, first_token: u32, last_token: u32, data: NodeData) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            first_token,
            last_token,
            data,
        });
        index
    }

    pub fn add_source_file(&mut self, first: u32, last: u32, data: SourceFileData) -> NodeIndex {
        self.add(NodeKind::SourceFile, first, last, NodeData::SourceFile(data))
    }

    pub fn add_import(&mut self, first: u32, last: u32) -> NodeIndex {
        self.add(NodeKind::ImportDeclaration, first, last, NodeData::Import)
    }

    pub fn add_type_alias(&mut self, first: u32, last: u32, data: TypeAliasData) -> NodeIndex {
        self.add(NodeKind::TypeAlias, first, last, NodeData::TypeAlias(data))
    }

    pub fn add_restricted_values(
        &mut self,
        first: u32,
        last: u32,
        data: RestrictedValuesData,
    ) -> NodeIndex {
        self.add(
            NodeKind::RestrictedValues,
            first,
            last,
            NodeData::RestrictedValues(data),
        )
    }

    pub fn add_reference(&mut self, first: u32, last: u32, data: ReferenceData) -> NodeIndex {
        self.add(NodeKind::Reference, first, last, NodeData::Reference(data))
    }

    pub fn add_function(&mut self, first: u32, last: u32, data: FunctionData) -> NodeIndex {
        self.add(
            NodeKind::FunctionDeclaration,
            first,
            last,
            NodeData::Function(data),
        )
    }

    pub fn add_class_context(&mut self, first: u32, last: u32, data: ClassContextData) -> NodeIndex {
        self.add(
            NodeKind::ClassContext,
            first,
            last,
            NodeData::ClassContext(data),
        )
    }

    pub fn add_variable_definition(
        &mut self,
        first: u32,
        last: u32,
        data: VariableDefinitionData,
    ) -> NodeIndex {
        self.add(
            NodeKind::VariableDefinition,
            first,
            last,
            NodeData::VariableDefinition(data),
        )
    }

    pub fn add_named_type(&mut self, first: u32, last: u32, data: NamedTypeData) -> NodeIndex {
        self.add(NodeKind::NamedType, first, last, NodeData::NamedType(data))
    }

    pub fn add_type_name(&mut self, first: u32, last: u32, data: TypeNameData) -> NodeIndex {
        self.add(NodeKind::TypeName, first, last, NodeData::TypeName(data))
    }

    pub fn add_identifier(&mut self, token: u32) -> NodeIndex {
        self.add(
            NodeKind::Identifier,
            token,
            token,
            NodeData::Identifier(IdentifierData { token }),
        )
    }

    pub fn add_string_type(&mut self, token: u32) -> NodeIndex {
        self.add(
            NodeKind::StringType,
            token,
            token,
            NodeData::StringType(StringTypeData { token }),
        )
    }

    pub fn add_generic(&mut self, first: u32, last: u32, data: GenericData) -> NodeIndex {
        self.add(NodeKind::Generic, first, last, NodeData::Generic(data))
    }

    pub fn add_generic_parameter(
        &mut self,
        first: u32,
        last: u32,
        data: GenericParameterData,
    ) -> NodeIndex {
        self.add(
            NodeKind::GenericParameter,
            first,
            last,
            NodeData::GenericParameter(data),
        )
    }

    pub fn add_union_type(&mut self, first: u32, last: u32, data: UnionTypeData) -> NodeIndex {
        self.add(NodeKind::UnionType, first, last, NodeData::UnionType(data))
    }

    pub fn add_lambda_type(&mut self, first: u32, last: u32, data: LambdaTypeData) -> NodeIndex {
        self.add(NodeKind::LambdaType, first, last, NodeData::LambdaType(data))
    }

    pub fn add_parameter(&mut self, first: u32, last: u32, data: ParameterData) -> NodeIndex {
        self.add(NodeKind::Parameter, first, last, NodeData::Parameter(data))
    }

    pub fn add_destructuring(&mut self, first: u32, last: u32, data: DestructuringData) -> NodeIndex {
        self.add(
            NodeKind::DestructuringParameters,
            first,
            last,
            NodeData::Destructuring(data),
        )
    }
}
