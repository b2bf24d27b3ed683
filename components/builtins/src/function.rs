//! Function object creation (ES2024 §10.2, §15.7, §20.2.3.2)
//!
//! OrdinaryFunctionCreate, ClassDefinitionEvaluation and BoundFunctionCreate,
//! reduced to what they leave behind on the heap: the `[[Prototype]]` of the
//! function, its `length`/`name`/`prototype` properties and the
//! `constructor` back-link on its prototype object.

use std::rc::Rc;

use core_types::{
    FunctionData, FunctionKind, NativeFn, ObjectError, ObjectKind, ObjectRef, PropertyDescriptor,
    PropertyKey, Value,
};

use crate::realm::{install_name_and_length, Intrinsic, Realm};

/// `prototype` slot of ordinary and generator functions: writable,
/// non-enumerable, non-configurable.
fn prototype_slot(prototype: &ObjectRef) -> PropertyDescriptor {
    PropertyDescriptor::Data {
        value: Value::Object(prototype.clone()),
        writable: true,
        enumerable: false,
        configurable: false,
    }
}

impl Realm {
    /// Create a function of the given syntactic kind with no call behavior.
    pub fn create_function(&self, name: &str, kind: FunctionKind) -> ObjectRef {
        self.make_function(name, FunctionData::new(kind))
    }

    /// Create a function whose `[[Call]]` runs `behavior`.
    pub fn create_function_with(&self, name: &str, kind: FunctionKind, behavior: NativeFn) -> ObjectRef {
        self.make_function(name, FunctionData::with_behavior(kind, behavior))
    }

    fn make_function(&self, name: &str, data: FunctionData) -> ObjectRef {
        let kind = data.kind;
        let parent = match kind {
            FunctionKind::Async | FunctionKind::AsyncArrow => {
                self.intrinsic_prototype(Intrinsic::AsyncFunction)
            }
            FunctionKind::Generator => self.intrinsic_prototype(Intrinsic::GeneratorFunction),
            FunctionKind::AsyncGenerator => {
                self.intrinsic_prototype(Intrinsic::AsyncGeneratorFunction)
            }
            _ => self.intrinsic(Intrinsic::FunctionPrototype),
        };
        let function = ObjectRef::new(ObjectKind::Function(data), Some(parent));
        install_name_and_length(&function, name, 0.0);

        match kind {
            FunctionKind::Normal => {
                let prototype = self.new_object();
                prototype.define_own_property(
                    "constructor".into(),
                    PropertyDescriptor::method(Value::Object(function.clone())),
                );
                function.define_own_property("prototype".into(), prototype_slot(&prototype));
            }
            FunctionKind::Generator => {
                let prototype = self.object_create(Some(&self.intrinsic(Intrinsic::GeneratorPrototype)));
                function.define_own_property("prototype".into(), prototype_slot(&prototype));
            }
            FunctionKind::AsyncGenerator => {
                let prototype =
                    self.object_create(Some(&self.intrinsic(Intrinsic::AsyncGeneratorPrototype)));
                function.define_own_property("prototype".into(), prototype_slot(&prototype));
            }
            _ => {}
        }
        function
    }

    /// `class name {}` or `class name extends heritage {}`.
    ///
    /// The class's `prototype` slot is frozen; a derived class's
    /// `[[Prototype]]` is the parent constructor.
    pub fn create_class(&self, name: &str, heritage: Option<&ObjectRef>) -> Result<ObjectRef, ObjectError> {
        let (constructor_parent, prototype_parent) = match heritage {
            None => (
                self.intrinsic(Intrinsic::FunctionPrototype),
                Some(self.intrinsic(Intrinsic::ObjectPrototype)),
            ),
            Some(parent) => {
                if !parent.is_constructor() {
                    return Err(ObjectError::NotAConstructor);
                }
                let parent_prototype = match parent.get(&"prototype".into(), &Value::Object(parent.clone())) {
                    Value::Object(proto) => Some(proto),
                    Value::Null => None,
                    _ => return Err(ObjectError::NotAConstructor),
                };
                (parent.clone(), parent_prototype)
            }
        };

        let kind = FunctionKind::Class {
            derived: heritage.is_some(),
        };
        let class = ObjectRef::new(
            ObjectKind::Function(FunctionData::new(kind)),
            Some(constructor_parent),
        );
        install_name_and_length(&class, name, 0.0);

        let prototype = self.object_create(prototype_parent.as_ref());
        class.define_own_property(
            "prototype".into(),
            PropertyDescriptor::frozen(Value::Object(prototype.clone())),
        );
        prototype.define_own_property(
            "constructor".into(),
            PropertyDescriptor::method(Value::Object(class.clone())),
        );
        Ok(class)
    }

    /// `target.bind(thisArg)`
    pub fn bind(&self, target: &ObjectRef) -> Result<ObjectRef, ObjectError> {
        if !target.is_callable() {
            return Err(ObjectError::NotCallable);
        }
        let target_name = target
            .get(&"name".into(), &Value::Object(target.clone()))
            .as_str()
            .map(str::to_string)
            .unwrap_or_default();
        let bound = ObjectRef::new(
            ObjectKind::Function(FunctionData::bound(target.clone())),
            target.prototype(),
        );
        install_name_and_length(&bound, &format!("bound {}", target_name), 0.0);
        Ok(bound)
    }

    /// `Object.defineProperty(target, key, { get, configurable: true })`
    /// with a non-enumerable getter. Returns `false` when the definition is
    /// rejected.
    pub fn define_getter(&self, target: &ObjectRef, key: PropertyKey, getter: NativeFn) -> bool {
        let name = format!("get {}", key);
        let getter = self.create_function_with(&name, FunctionKind::Method, getter);
        target.define_own_property(key, PropertyDescriptor::getter(getter, false, true))
    }

    /// Getter returning a fixed value, as installed by a class
    /// `get [Symbol.toStringTag]() { return value }` member.
    pub fn constant_getter(&self, name: &str, value: Value) -> ObjectRef {
        self.create_function_with(
            name,
            FunctionKind::Method,
            Rc::new(move |_: &Value, _: &[Value]| value.clone()),
        )
    }

    /// Invoke a generator function, producing its generator object.
    ///
    /// The generator inherits from the function's own `prototype` when that
    /// is an object, else from the realm's generator prototype.
    pub fn call_generator(&self, function: &ObjectRef) -> Result<ObjectRef, ObjectError> {
        let (kind, fallback) = match function.function_kind() {
            Some(FunctionKind::Generator) => (ObjectKind::Generator, Intrinsic::GeneratorPrototype),
            Some(FunctionKind::AsyncGenerator) => {
                (ObjectKind::AsyncGenerator, Intrinsic::AsyncGeneratorPrototype)
            }
            _ => return Err(ObjectError::NotAGeneratorFunction),
        };
        let prototype = match function.get(&"prototype".into(), &Value::Object(function.clone())) {
            Value::Object(proto) => proto,
            _ => self.intrinsic(fallback),
        };
        Ok(ObjectRef::new(kind, Some(prototype)))
    }
}
