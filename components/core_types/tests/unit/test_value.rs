//! Unit tests for the Value enum

use core_types::{FunctionData, FunctionKind, ObjectKind, ObjectRef, Symbol, Value};
use num_bigint::BigInt;

fn function(kind: FunctionKind) -> Value {
    Value::Object(ObjectRef::new(
        ObjectKind::Function(FunctionData::new(kind)),
        None,
    ))
}

#[cfg(test)]
mod type_of_tests {
    use super::*;

    #[test]
    fn test_type_of_undefined_and_null() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
    }

    #[test]
    fn test_type_of_primitives() {
        assert_eq!(Value::Boolean(true).type_of(), "boolean");
        assert_eq!(Value::Number(1.0).type_of(), "number");
        assert_eq!(Value::string("").type_of(), "string");
        assert_eq!(Value::Symbol(Symbol::new(None)).type_of(), "symbol");
        assert_eq!(Value::BigInt(BigInt::from(1)).type_of(), "bigint");
    }

    #[test]
    fn test_type_of_objects_and_functions() {
        let obj = Value::Object(ObjectRef::new(ObjectKind::Ordinary, None));
        assert_eq!(obj.type_of(), "object");
        assert_eq!(function(FunctionKind::Arrow).type_of(), "function");
        assert_eq!(function(FunctionKind::Class { derived: false }).type_of(), "function");
    }

    #[test]
    fn test_boxed_primitives_are_objects() {
        let boxed = Value::Object(ObjectRef::new(ObjectKind::String("s".into()), None));
        assert_eq!(boxed.type_of(), "object");
    }
}

#[cfg(test)]
mod accessor_tests {
    use super::*;

    #[test]
    fn test_as_function_only_for_callables() {
        let obj = Value::Object(ObjectRef::new(ObjectKind::Ordinary, None));
        assert!(obj.as_object().is_some());
        assert!(obj.as_function().is_none());
        assert!(function(FunctionKind::Normal).as_function().is_some());
        assert!(Value::Null.as_object().is_none());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::string("abc").as_str(), Some("abc"));
        assert_eq!(Value::Number(1.0).as_str(), None);
    }
}

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_objects_compare_by_identity() {
        let a = ObjectRef::new(ObjectKind::Ordinary, None);
        let b = ObjectRef::new(ObjectKind::Ordinary, None);
        assert_eq!(Value::Object(a.clone()), Value::Object(a.clone()));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn test_symbols_compare_by_identity() {
        let sym = Symbol::new(Some("k"));
        assert_eq!(Value::Symbol(sym.clone()), Value::Symbol(sym));
        assert_ne!(
            Value::Symbol(Symbol::new(Some("k"))),
            Value::Symbol(Symbol::new(Some("k")))
        );
    }

    #[test]
    fn test_mixed_types_are_never_equal() {
        assert_ne!(Value::Undefined, Value::Null);
        assert_ne!(Value::Number(1.0), Value::string("1"));
    }
}
