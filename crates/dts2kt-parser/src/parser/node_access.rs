//! NodeArena access methods: typed data getters and child enumeration.

use super::node::*;

impl NodeArena {
    /// Get a node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0 as usize)
    }

    pub fn kind(&self, index: NodeIndex) -> Option<NodeKind> {
        self.get(index).map(|n| n.kind)
    }

    /// First and last token index covered by a node.
    pub fn token_range(&self, index: NodeIndex) -> (u32, u32) {
        match self.get(index) {
            Some(node) => (node.first_token, node.last_token),
            None => (0, 0),
        }
    }

    pub fn source_file(&self, index: NodeIndex) -> Option<&SourceFileData> {
        match self.get(index)?.data {
            NodeData::SourceFile(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn type_alias(&self, index: NodeIndex) -> Option<&TypeAliasData> {
        match self.get(index)?.data {
            NodeData::TypeAlias(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn restricted_values(&self, index: NodeIndex) -> Option<&RestrictedValuesData> {
        match self.get(index)?.data {
            NodeData::RestrictedValues(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn reference(&self, index: NodeIndex) -> Option<&ReferenceData> {
        match self.get(index)?.data {
            NodeData::Reference(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn function(&self, index: NodeIndex) -> Option<&FunctionData> {
        match self.get(index)?.data {
            NodeData::Function(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn class_context(&self, index: NodeIndex) -> Option<&ClassContextData> {
        match self.get(index)?.data {
            NodeData::ClassContext(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn variable_definition(&self, index: NodeIndex) -> Option<&VariableDefinitionData> {
        match self.get(index)?.data {
            NodeData::VariableDefinition(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn named_type(&self, index: NodeIndex) -> Option<&NamedTypeData> {
        match self.get(index)?.data {
            NodeData::NamedType(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn type_name(&self, index: NodeIndex) -> Option<&TypeNameData> {
        match self.get(index)?.data {
            NodeData::TypeName(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn identifier(&self, index: NodeIndex) -> Option<&IdentifierData> {
        match self.get(index)?.data {
            NodeData::Identifier(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn generic(&self, index: NodeIndex) -> Option<&GenericData> {
        match self.get(index)?.data {
            NodeData::Generic(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn generic_parameter(&self, index: NodeIndex) -> Option<&GenericParameterData> {
        match self.get(index)?.data {
            NodeData::GenericParameter(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn union_type(&self, index: NodeIndex) -> Option<&UnionTypeData> {
        match self.get(index)?.data {
            NodeData::UnionType(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn lambda_type(&self, index: NodeIndex) -> Option<&LambdaTypeData> {
        match self.get(index)?.data {
            NodeData::LambdaType(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn parameter(&self, index: NodeIndex) -> Option<&ParameterData> {
        match self.get(index)?.data {
            NodeData::Parameter(ref data) => Some(data),
            _ => None,
        }
    }

    pub fn destructuring(&self, index: NodeIndex) -> Option<&DestructuringData> {
        match self.get(index)?.data {
            NodeData::Destructuring(ref data) => Some(data),
            _ => None,
        }
    }

    /// Child nodes in source order. Both traversal passes (symbol collection
    /// and rewrite) walk the tree through this.
    pub fn child_nodes(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };
        match &node.data {
            NodeData::SourceFile(data) => data.statements.clone(),
            NodeData::Import => Vec::new(),
            NodeData::TypeAlias(data) => {
                let mut children = vec![data.name];
                children.extend(data.generic);
                // Interleave intersection members back into source order.
                let mut rhs: Vec<NodeIndex> = data
                    .types
                    .iter()
                    .chain(data.classes.iter())
                    .copied()
                    .collect();
                rhs.sort_by_key(|&child| self.token_range(child).0);
                children.extend(rhs);
                children.extend(data.union);
                children
            }
            NodeData::RestrictedValues(data) => vec![data.name],
            NodeData::Reference(data) => vec![data.name, data.ty],
            NodeData::Function(data) => {
                let mut children = vec![data.name];
                children.extend(data.generic);
                children.extend(data.params.iter().copied());
                children.push(data.return_type);
                children
            }
            NodeData::ClassContext(data) => data.members.clone(),
            NodeData::VariableDefinition(data) => vec![data.name, data.ty],
            NodeData::NamedType(data) => {
                let mut children = vec![data.name];
                children.extend(data.generic);
                children
            }
            NodeData::TypeName(data) => data.parts.clone(),
            NodeData::Identifier(_) | NodeData::StringType(_) => Vec::new(),
            NodeData::Generic(data) => data.params.clone(),
            NodeData::GenericParameter(data) => {
                let mut children = vec![data.base];
                children.extend(data.bound);
                children.extend(data.default_ty);
                children
            }
            NodeData::UnionType(data) => data.members.clone(),
            NodeData::LambdaType(data) => {
                let mut children = Vec::new();
                children.extend(data.generic);
                children.extend(data.params.iter().copied());
                children.push(data.return_type);
                children
            }
            NodeData::Parameter(data) => vec![data.name, data.ty],
            NodeData::Destructuring(data) => {
                let mut children = data.names.clone();
                children.extend(data.class_context);
                children.extend(data.ty);
                children
            }
        }
    }
}
