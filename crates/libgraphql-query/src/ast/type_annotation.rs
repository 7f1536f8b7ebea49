use std::fmt;

/// Whether a type reference carries a trailing `!`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum Nullability {
    NonNull,
    Nullable,
}

/// A GraphQL
/// [type reference](https://spec.graphql.org/September2025/#sec-Type-References)
/// as written on a variable definition. Names are not resolved against any
/// schema.
///
/// The `NonNullType` production is folded into a [`Nullability`] on each
/// variant rather than being a wrapper variant of its own, so redundant
/// wrapping like `NonNull(NonNull(..))` cannot be represented.
///
/// `Display` renders the reference back as written (e.g. `[Int!]!`).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

/// A named type reference (e.g. `String`, `String!`).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub name: String,
    pub nullability: Nullability,
}

/// A list type reference (e.g. `[String]`, `[String!]!`).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub element_type: Box<TypeAnnotation>,
    pub nullability: Nullability,
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullability: Nullability) -> Self {
        TypeAnnotation::Named(NamedTypeAnnotation {
            name: name.into(),
            nullability,
        })
    }

    pub fn list(element_type: TypeAnnotation, nullability: Nullability) -> Self {
        TypeAnnotation::List(ListTypeAnnotation {
            element_type: Box::new(element_type),
            nullability,
        })
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            TypeAnnotation::List(list) => list.nullability,
            TypeAnnotation::Named(named) => named.nullability,
        }
    }

    /// The innermost named type, with all list wrapping removed.
    pub fn innermost_name(&self) -> &str {
        let mut current = self;
        loop {
            match current {
                TypeAnnotation::List(list) => current = &list.element_type,
                TypeAnnotation::Named(named) => return &named.name,
            }
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Walk down to the named type, remembering each list level's
        // nullability so the closing brackets can be written on the way out.
        let mut list_levels = Vec::new();
        let mut current = self;
        let named = loop {
            match current {
                TypeAnnotation::List(list) => {
                    f.write_str("[")?;
                    list_levels.push(list.nullability);
                    current = &list.element_type;
                }
                TypeAnnotation::Named(named) => break named,
            }
        };
        f.write_str(&named.name)?;
        if named.nullability == Nullability::NonNull {
            f.write_str("!")?;
        }
        for nullability in list_levels.into_iter().rev() {
            f.write_str("]")?;
            if nullability == Nullability::NonNull {
                f.write_str("!")?;
            }
        }
        Ok(())
    }
}
