//! The Slate static type model.

use std::fmt;

/// Type representation for expressions and variables.
///
/// `NoType` is the error/unknown sentinel: it is produced whenever an
/// expression's type cannot be determined because of an earlier diagnostic,
/// and it is compatible with every other type so one error does not cascade
/// into spurious errors in expressions that merely use the bad value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Error/unknown sentinel, compatible with everything
    NoType,
    /// Integer type
    Int,
    /// Boolean type
    Bool,
    /// Void type (statements, value-less returns)
    Void,
    /// Struct type, identified nominally by its declared name
    Struct(String),
    /// Homogeneous list type with its element type
    List(Box<Type>),
    /// Function pointer type with parameter types and return type
    FunctionPointer {
        params: Vec<Type>,
        return_type: Box<Type>,
    },
}

/// A nullary signature may be written with a single `void` placeholder
/// parameter; both spellings denote "no parameters" and must compare equal.
fn normalized_params(params: &[Type]) -> &[Type] {
    match params {
        [Type::Void] => &[],
        other => other,
    }
}

impl Type {
    /// Structural compatibility between two types.
    ///
    /// This is a pure predicate with no diagnostic side effects:
    /// - `NoType` is compatible with everything (error absorption).
    /// - Primitives are compatible with the same primitive.
    /// - Structs are compared nominally, by declared name.
    /// - Lists are compatible when their element types are (recursively).
    /// - Function pointers are compatible when their return types are
    ///   compatible and their parameter lists match pairwise after nullary
    ///   normalization of both operands.
    ///
    /// The predicate is symmetric; call sites that feed it an ordered pair
    /// (assignment source/target, call argument/parameter) document which
    /// operand is which.
    #[must_use]
    pub fn compatible(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::NoType, _) | (_, Type::NoType) => true,
            (Type::Int, Type::Int) | (Type::Bool, Type::Bool) | (Type::Void, Type::Void) => true,
            (Type::Struct(a), Type::Struct(b)) => a == b,
            (Type::List(a), Type::List(b)) => a.compatible(b),
            (
                Type::FunctionPointer {
                    params: p1,
                    return_type: r1,
                },
                Type::FunctionPointer {
                    params: p2,
                    return_type: r2,
                },
            ) => {
                if !r1.compatible(r2) {
                    return false;
                }
                let p1 = normalized_params(p1);
                let p2 = normalized_params(p2);
                p1.len() == p2.len() && p1.iter().zip(p2).all(|(a, b)| a.compatible(b))
            }
            _ => false,
        }
    }

    /// Builds a function pointer type, applying nullary normalization to the
    /// parameter list up front.
    #[must_use]
    pub fn function_pointer(params: Vec<Type>, return_type: Type) -> Self {
        let params = match params.as_slice() {
            [Type::Void] => Vec::new(),
            _ => params,
        };
        Type::FunctionPointer {
            params,
            return_type: Box::new(return_type),
        }
    }

    /// Returns true if this is the error/unknown sentinel.
    #[must_use]
    pub const fn is_no_type(&self) -> bool {
        matches!(self, Type::NoType)
    }

    /// Returns true if this is the Void type.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Returns true if this is a List type.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    /// Returns true if the two types are the same variant, ignoring any
    /// payload. Used by return-statement checking, which compares by case
    /// identity rather than full structure.
    #[must_use]
    pub fn same_case(&self, other: &Type) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::NoType => write!(f, "no-type"),
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::Void => write!(f, "void"),
            Type::Struct(name) => write!(f, "struct {name}"),
            Type::List(element) => write!(f, "list<{element}>"),
            Type::FunctionPointer {
                params,
                return_type,
            } => {
                let params = params
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fptr<({params}) -> {return_type}>")
            }
        }
    }
}
