use crate::ast;
use crate::schema::SchemaView;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), input field, or variable.
///
/// Non-nullability is a flag on each level rather than a wrapper, so a
/// non-null type can never wrap another non-null type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// This same annotation with its outermost level marked non-null.
    pub fn as_non_null(&self) -> Self {
        self.with_nullability(false)
    }

    /// This same annotation with its outermost level marked nullable.
    pub fn as_nullable(&self) -> Self {
        self.with_nullability(true)
    }

    pub fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &ast::operation::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(inner, true), nullable),

            ast::operation::Type::NamedType(name) =>
                Self::named(name, nullable),

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the name of the
    /// inner-most named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(list_annot)
                => list_annot.inner_type_annotation.innermost_type_name(),
            Self::Named(named_annot)
                => named_annot.graphql_type_name(),
        }
    }

    /// `sub.is_subtype_of(schema, sup)` is true when a value of type `sub`
    /// may be used wherever a `sup` is expected.
    pub fn is_subtype_of(&self, schema: &dyn SchemaView, other: &Self) -> bool {
        if self == other {
            return true;
        }

        // A nullable type never satisfies a non-null one.
        if !other.nullable() && self.nullable() {
            return false;
        }

        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.inner_type_annotation.is_subtype_of(
                    schema,
                    &other_list.inner_type_annotation,
                ),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_subtype_of(schema, other_named),
            (Self::List(_), Self::Named(_))
                | (Self::Named(_), Self::List(_))
                => false,
        }
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_annotation: Box::new(inner),
            nullable,
        })
    }

    /// The element type if this annotation is a list (of either
    /// nullability).
    pub fn list_item_type(&self) -> Option<&TypeAnnotation> {
        self.as_list_annotation()
            .map(|list_annot| list_annot.inner_type_annotation())
    }

    pub fn named(name: impl AsRef<str>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_name: name.as_ref().to_string(),
        })
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list_annot) => list_annot.nullable,
            Self::Named(named_annot) => named_annot.nullable,
        }
    }

    fn with_nullability(&self, nullable: bool) -> Self {
        match self {
            Self::List(list_annot) => Self::List(ListTypeAnnotation {
                inner_type_annotation: list_annot.inner_type_annotation.clone(),
                nullable,
            }),
            Self::Named(named_annot) => Self::Named(NamedTypeAnnotation {
                nullable,
                type_name: named_annot.type_name.clone(),
            }),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
