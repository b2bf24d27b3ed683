//! Realm record and intrinsic objects (ES2024 §9.3).
//!
//! A [`Realm`] owns one complete set of intrinsics, built with the property
//! descriptor shapes ECMAScript mandates. Everything the introspection
//! layers observe about builtins (prototype links, `constructor` slots,
//! `@@toStringTag` descriptors) comes from here.

use core_types::{
    ErrorKind, FunctionData, FunctionKind, ObjectError, ObjectKind, ObjectRef, PropertyDescriptor,
    PropertyKey, Symbol, Value,
};
use num_bigint::BigInt;

use crate::reflect::ReflectObject;

/// Names of the intrinsic objects a realm exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `%Object%`
    Object,
    /// `%Object.prototype%`
    ObjectPrototype,
    /// `%Function%`
    Function,
    /// `%Function.prototype%`
    FunctionPrototype,
    /// `%Array%`
    Array,
    /// `%Boolean%`
    Boolean,
    /// `%Number%`
    Number,
    /// `%String%`
    String,
    /// `%Symbol%`
    Symbol,
    /// `%BigInt%`
    BigInt,
    /// `%Date%`
    Date,
    /// `%RegExp%`
    RegExp,
    /// `%Error%` and the native error constructors
    Error(ErrorKind),
    /// `%Map%`
    Map,
    /// `%Set%`
    Set,
    /// `%WeakMap%`
    WeakMap,
    /// `%WeakSet%`
    WeakSet,
    /// `%Promise%`
    Promise,
    /// `%ArrayBuffer%`
    ArrayBuffer,
    /// `%Math%`
    Math,
    /// `%JSON%`
    Json,
    /// `%Reflect%`
    Reflect,
    /// `%Atomics%`
    Atomics,
    /// `%AsyncFunction%`
    AsyncFunction,
    /// `%GeneratorFunction%`
    GeneratorFunction,
    /// `%AsyncGeneratorFunction%`
    AsyncGeneratorFunction,
    /// `%IteratorPrototype%`
    IteratorPrototype,
    /// `%AsyncIteratorPrototype%`
    AsyncIteratorPrototype,
    /// `%GeneratorFunction.prototype.prototype%`
    GeneratorPrototype,
    /// `%AsyncGeneratorFunction.prototype.prototype%`
    AsyncGeneratorPrototype,
}

/// Internal slots given to objects created by `new C()`, decided by the
/// builtin at the root of `C`'s constructor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InstanceTemplate {
    Array,
    Error(ErrorKind),
    Boolean,
    Number,
    String,
    Date,
    RegExp,
    Map,
    Set,
    WeakMap,
    WeakSet,
    Promise,
    ArrayBuffer,
    Function,
    /// `IsConstructor` holds but `[[Construct]]` throws (`Symbol`, `BigInt`)
    Throws,
}

/// One complete set of intrinsics.
pub struct Realm {
    object: ObjectRef,
    object_prototype: ObjectRef,
    function: ObjectRef,
    function_prototype: ObjectRef,
    array: ObjectRef,
    boolean: ObjectRef,
    number: ObjectRef,
    string: ObjectRef,
    symbol: ObjectRef,
    bigint: ObjectRef,
    date: ObjectRef,
    regexp: ObjectRef,
    errors: Vec<(ErrorKind, ObjectRef)>,
    map: ObjectRef,
    set: ObjectRef,
    weak_map: ObjectRef,
    weak_set: ObjectRef,
    promise: ObjectRef,
    array_buffer: ObjectRef,
    math: ObjectRef,
    json: ObjectRef,
    reflect: ObjectRef,
    atomics: ObjectRef,
    async_function: ObjectRef,
    generator_function: ObjectRef,
    async_generator_function: ObjectRef,
    iterator_prototype: ObjectRef,
    async_iterator_prototype: ObjectRef,
    generator_prototype: ObjectRef,
    async_generator_prototype: ObjectRef,
    templates: Vec<(ObjectRef, InstanceTemplate)>,
}

// ---------------------------------------------------------------------------
// Descriptor helpers shared by every intrinsic
// ---------------------------------------------------------------------------

/// Install `length` and `name` with the standard function property shape.
pub(crate) fn install_name_and_length(function: &ObjectRef, name: &str, length: f64) {
    function.define_own_property("length".into(), PropertyDescriptor::readonly(Value::Number(length)));
    function.define_own_property("name".into(), PropertyDescriptor::readonly(Value::string(name)));
}

/// `C.prototype = P` (non-writable) and `P.constructor = C`.
fn link_constructor(constructor: &ObjectRef, prototype: &ObjectRef) {
    constructor.define_own_property(
        "prototype".into(),
        PropertyDescriptor::frozen(Value::Object(prototype.clone())),
    );
    prototype.define_own_property(
        "constructor".into(),
        PropertyDescriptor::method(Value::Object(constructor.clone())),
    );
}

/// Engine-default `@@toStringTag`: read-only, non-enumerable, configurable.
fn install_tag(target: &ObjectRef, tag: &str) {
    target.define_own_property(PropertyKey::to_string_tag(), PropertyDescriptor::readonly(Value::string(tag)));
}

fn builtin_function(proto: &ObjectRef, name: &str, length: f64, constructable: bool) -> ObjectRef {
    let function = ObjectRef::new(
        ObjectKind::Function(FunctionData::new(FunctionKind::Builtin { constructable })),
        Some(proto.clone()),
    );
    install_name_and_length(&function, name, length);
    function
}

/// Builtin constructor with its prototype object.
fn builtin_class(
    function_prototype: &ObjectRef,
    parent_prototype: &ObjectRef,
    name: &str,
    prototype_kind: ObjectKind,
    tag: Option<&str>,
) -> (ObjectRef, ObjectRef) {
    let prototype = ObjectRef::new(prototype_kind, Some(parent_prototype.clone()));
    let constructor = builtin_function(function_prototype, name, 0.0, true);
    link_constructor(&constructor, &prototype);
    if let Some(tag) = tag {
        install_tag(&prototype, tag);
    }
    (constructor, prototype)
}

/// Namespace object such as `Math`: ordinary, with an own tag.
fn namespace_object(object_prototype: &ObjectRef, tag: &str) -> ObjectRef {
    let namespace = ObjectRef::new(ObjectKind::Ordinary, Some(object_prototype.clone()));
    install_tag(&namespace, tag);
    namespace
}

/// `%AsyncFunction%`-style constructor whose `prototype` is an ordinary
/// object inheriting from `%Function.prototype%` (§27.3.3, §27.4.3, §27.7.3).
fn function_family(function: &ObjectRef, function_prototype: &ObjectRef, name: &str) -> (ObjectRef, ObjectRef) {
    let constructor = builtin_function(function, name, 1.0, true);
    let prototype = ObjectRef::new(ObjectKind::Ordinary, Some(function_prototype.clone()));
    constructor.define_own_property(
        "prototype".into(),
        PropertyDescriptor::frozen(Value::Object(prototype.clone())),
    );
    prototype.define_own_property(
        "constructor".into(),
        PropertyDescriptor::readonly(Value::Object(constructor.clone())),
    );
    install_tag(&prototype, name);
    (constructor, prototype)
}

/// `%GeneratorPrototype%`-style object: its `constructor` is the function
/// family's prototype object, not a function.
fn generator_family_prototype(family_prototype: &ObjectRef, iterator_prototype: &ObjectRef, tag: &str) -> ObjectRef {
    let prototype = ObjectRef::new(ObjectKind::Ordinary, Some(iterator_prototype.clone()));
    family_prototype.define_own_property(
        "prototype".into(),
        PropertyDescriptor::readonly(Value::Object(prototype.clone())),
    );
    prototype.define_own_property(
        "constructor".into(),
        PropertyDescriptor::readonly(Value::Object(family_prototype.clone())),
    );
    install_tag(&prototype, tag);
    prototype
}

impl Realm {
    /// CreateRealm + SetDefaultGlobalBindings, limited to the intrinsics
    /// that take part in type identity.
    pub fn new() -> Self {
        let object_prototype = ObjectRef::new(ObjectKind::Ordinary, None);
        let function_prototype = ObjectRef::new(
            ObjectKind::Function(FunctionData::new(FunctionKind::Builtin { constructable: false })),
            Some(object_prototype.clone()),
        );
        install_name_and_length(&function_prototype, "", 0.0);

        let fp = &function_prototype;
        let op = &object_prototype;

        let object = builtin_function(fp, "Object", 1.0, true);
        link_constructor(&object, op);
        let function = builtin_function(fp, "Function", 1.0, true);
        link_constructor(&function, fp);

        let (array, _) = builtin_class(fp, op, "Array", ObjectKind::Array, None);
        let (boolean, _) = builtin_class(fp, op, "Boolean", ObjectKind::Boolean(false), None);
        let (number, _) = builtin_class(fp, op, "Number", ObjectKind::Number(0.0), None);
        let (string, _) = builtin_class(fp, op, "String", ObjectKind::String(String::new()), None);
        let (symbol, _) = builtin_class(fp, op, "Symbol", ObjectKind::Ordinary, Some("Symbol"));
        let (bigint, _) = builtin_class(fp, op, "BigInt", ObjectKind::Ordinary, Some("BigInt"));
        let (date, _) = builtin_class(fp, op, "Date", ObjectKind::Ordinary, None);
        let (regexp, _) = builtin_class(fp, op, "RegExp", ObjectKind::Ordinary, None);
        let (map, _) = builtin_class(fp, op, "Map", ObjectKind::Ordinary, Some("Map"));
        let (set, _) = builtin_class(fp, op, "Set", ObjectKind::Ordinary, Some("Set"));
        let (weak_map, _) = builtin_class(fp, op, "WeakMap", ObjectKind::Ordinary, Some("WeakMap"));
        let (weak_set, _) = builtin_class(fp, op, "WeakSet", ObjectKind::Ordinary, Some("WeakSet"));
        let (promise, promise_prototype) =
            builtin_class(fp, op, "Promise", ObjectKind::Ordinary, Some("Promise"));
        promise_prototype.define_own_property(
            "then".into(),
            PropertyDescriptor::method(Value::Object(builtin_function(fp, "then", 2.0, false))),
        );
        let (array_buffer, _) =
            builtin_class(fp, op, "ArrayBuffer", ObjectKind::Ordinary, Some("ArrayBuffer"));

        let errors = crate::error::create_error_constructors(fp, op);

        let math = namespace_object(op, "Math");
        let json = namespace_object(op, "JSON");
        let reflect = namespace_object(op, "Reflect");
        let atomics = namespace_object(op, "Atomics");

        let iterator_prototype = ObjectRef::new(ObjectKind::Ordinary, Some(op.clone()));
        let async_iterator_prototype = ObjectRef::new(ObjectKind::Ordinary, Some(op.clone()));
        iterator_prototype.define_own_property(
            PropertyKey::Symbol(Symbol::iterator()),
            PropertyDescriptor::method(Value::Object(builtin_function(fp, "[Symbol.iterator]", 0.0, false))),
        );
        async_iterator_prototype.define_own_property(
            PropertyKey::Symbol(Symbol::async_iterator()),
            PropertyDescriptor::method(Value::Object(builtin_function(
                fp,
                "[Symbol.asyncIterator]",
                0.0,
                false,
            ))),
        );

        let (async_function, _) = function_family(&function, fp, "AsyncFunction");
        let (generator_function, generator_function_prototype) =
            function_family(&function, fp, "GeneratorFunction");
        let (async_generator_function, async_generator_function_prototype) =
            function_family(&function, fp, "AsyncGeneratorFunction");
        let generator_prototype =
            generator_family_prototype(&generator_function_prototype, &iterator_prototype, "Generator");
        let async_generator_prototype = generator_family_prototype(
            &async_generator_function_prototype,
            &async_iterator_prototype,
            "AsyncGenerator",
        );

        let mut templates = vec![
            (array.clone(), InstanceTemplate::Array),
            (boolean.clone(), InstanceTemplate::Boolean),
            (number.clone(), InstanceTemplate::Number),
            (string.clone(), InstanceTemplate::String),
            (symbol.clone(), InstanceTemplate::Throws),
            (bigint.clone(), InstanceTemplate::Throws),
            (date.clone(), InstanceTemplate::Date),
            (regexp.clone(), InstanceTemplate::RegExp),
            (map.clone(), InstanceTemplate::Map),
            (set.clone(), InstanceTemplate::Set),
            (weak_map.clone(), InstanceTemplate::WeakMap),
            (weak_set.clone(), InstanceTemplate::WeakSet),
            (promise.clone(), InstanceTemplate::Promise),
            (array_buffer.clone(), InstanceTemplate::ArrayBuffer),
            (function.clone(), InstanceTemplate::Function),
        ];
        templates.extend(
            errors
                .iter()
                .map(|(kind, ctor)| (ctor.clone(), InstanceTemplate::Error(*kind))),
        );

        Realm {
            object,
            object_prototype,
            function,
            function_prototype,
            array,
            boolean,
            number,
            string,
            symbol,
            bigint,
            date,
            regexp,
            errors,
            map,
            set,
            weak_map,
            weak_set,
            promise,
            array_buffer,
            math,
            json,
            reflect,
            atomics,
            async_function,
            generator_function,
            async_generator_function,
            iterator_prototype,
            async_iterator_prototype,
            generator_prototype,
            async_generator_prototype,
            templates,
        }
    }

    /// Look up an intrinsic object by name
    pub fn intrinsic(&self, which: Intrinsic) -> ObjectRef {
        match which {
            Intrinsic::Object => self.object.clone(),
            Intrinsic::ObjectPrototype => self.object_prototype.clone(),
            Intrinsic::Function => self.function.clone(),
            Intrinsic::FunctionPrototype => self.function_prototype.clone(),
            Intrinsic::Array => self.array.clone(),
            Intrinsic::Boolean => self.boolean.clone(),
            Intrinsic::Number => self.number.clone(),
            Intrinsic::String => self.string.clone(),
            Intrinsic::Symbol => self.symbol.clone(),
            Intrinsic::BigInt => self.bigint.clone(),
            Intrinsic::Date => self.date.clone(),
            Intrinsic::RegExp => self.regexp.clone(),
            Intrinsic::Error(kind) => self.error_constructor(kind),
            Intrinsic::Map => self.map.clone(),
            Intrinsic::Set => self.set.clone(),
            Intrinsic::WeakMap => self.weak_map.clone(),
            Intrinsic::WeakSet => self.weak_set.clone(),
            Intrinsic::Promise => self.promise.clone(),
            Intrinsic::ArrayBuffer => self.array_buffer.clone(),
            Intrinsic::Math => self.math.clone(),
            Intrinsic::Json => self.json.clone(),
            Intrinsic::Reflect => self.reflect.clone(),
            Intrinsic::Atomics => self.atomics.clone(),
            Intrinsic::AsyncFunction => self.async_function.clone(),
            Intrinsic::GeneratorFunction => self.generator_function.clone(),
            Intrinsic::AsyncGeneratorFunction => self.async_generator_function.clone(),
            Intrinsic::IteratorPrototype => self.iterator_prototype.clone(),
            Intrinsic::AsyncIteratorPrototype => self.async_iterator_prototype.clone(),
            Intrinsic::GeneratorPrototype => self.generator_prototype.clone(),
            Intrinsic::AsyncGeneratorPrototype => self.async_generator_prototype.clone(),
        }
    }

    fn error_constructor(&self, kind: ErrorKind) -> ObjectRef {
        self.errors
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, ctor)| ctor.clone())
            .unwrap_or_else(|| self.errors[0].1.clone())
    }

    /// The object stored in `C.prototype`, as `GetPrototypeFromConstructor`
    /// reads it; falls back to `fallback` when the slot holds no object.
    pub(crate) fn prototype_from_constructor(&self, constructor: &ObjectRef, fallback: &ObjectRef) -> ObjectRef {
        match constructor.get(&"prototype".into(), &Value::Object(constructor.clone())) {
            Value::Object(prototype) => prototype,
            _ => fallback.clone(),
        }
    }

    /// Prototype of an intrinsic constructor (`Map.prototype`, ...)
    pub fn intrinsic_prototype(&self, which: Intrinsic) -> ObjectRef {
        let constructor = self.intrinsic(which);
        self.prototype_from_constructor(&constructor, &self.object_prototype)
    }

    // -- Reflection over arbitrary values -----------------------------------

    /// `Object.getPrototypeOf(value)` with ToObject applied to primitives;
    /// `None` for `null`/`undefined` and null-prototype objects.
    pub fn prototype_of(&self, value: &Value) -> Option<ObjectRef> {
        match value {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some(self.intrinsic_prototype(Intrinsic::Boolean)),
            Value::Number(_) => Some(self.intrinsic_prototype(Intrinsic::Number)),
            Value::String(_) => Some(self.intrinsic_prototype(Intrinsic::String)),
            Value::Symbol(_) => Some(self.intrinsic_prototype(Intrinsic::Symbol)),
            Value::BigInt(_) => Some(self.intrinsic_prototype(Intrinsic::BigInt)),
            Value::Object(_) => ReflectObject::get_prototype_of(value)
                .ok()
                .and_then(|proto| proto.as_object().cloned()),
        }
    }

    /// `Reflect.getOwnPropertyDescriptor(value, key)`, answering `None` for
    /// primitives instead of throwing: they expose no own properties
    /// relevant to type identity.
    pub fn get_own_property(&self, value: &Value, key: &PropertyKey) -> Option<PropertyDescriptor> {
        ReflectObject::get_own_property_descriptor(value, key)
            .ok()
            .flatten()
    }

    /// `value[key]` - `[[Get]]` with `value` as receiver. Never throws:
    /// `null`/`undefined` produce `undefined`.
    pub fn get(&self, value: &Value, key: &PropertyKey) -> Value {
        match value {
            Value::Object(_) => ReflectObject::get(value, key, None).unwrap_or(Value::Undefined),
            other => match self.prototype_of(other) {
                Some(proto) => proto.get(key, value),
                None => Value::Undefined,
            },
        }
    }

    /// The objects `[[Get]]` consults for `value`, nearest first: the value
    /// itself when it is an object, then its prototype chain.
    pub fn lookup_chain(&self, value: &Value) -> Vec<ObjectRef> {
        let start = match value {
            Value::Object(obj) => Some(obj.clone()),
            other => self.prototype_of(other),
        };
        match start {
            Some(start) => std::iter::once(start.clone())
                .chain(start.prototype_chain())
                .collect(),
            None => Vec::new(),
        }
    }

    // -- Value factories -------------------------------------------------------

    /// `{}`
    pub fn new_object(&self) -> ObjectRef {
        ObjectRef::new(ObjectKind::Ordinary, Some(self.object_prototype.clone()))
    }

    /// `Object.create(proto)`
    pub fn object_create(&self, proto: Option<&ObjectRef>) -> ObjectRef {
        ObjectRef::new(ObjectKind::Ordinary, proto.cloned())
    }

    /// `[]`
    pub fn new_array(&self) -> ObjectRef {
        let array = ObjectRef::new(ObjectKind::Array, Some(self.intrinsic_prototype(Intrinsic::Array)));
        array.define_own_property(
            "length".into(),
            PropertyDescriptor::Data {
                value: Value::Number(0.0),
                writable: true,
                enumerable: false,
                configurable: false,
            },
        );
        array
    }

    /// An unmapped `arguments` object
    pub fn new_arguments(&self) -> ObjectRef {
        let arguments = ObjectRef::new(ObjectKind::Arguments, Some(self.object_prototype.clone()));
        arguments.define_own_property("length".into(), PropertyDescriptor::method(Value::Number(0.0)));
        arguments
    }

    /// `ToObject(value)`: boxes primitives, passes objects through,
    /// `None` for `null`/`undefined`.
    pub fn box_primitive(&self, value: &Value) -> Option<ObjectRef> {
        let (kind, proto) = match value {
            Value::Undefined | Value::Null => return None,
            Value::Object(obj) => return Some(obj.clone()),
            Value::Boolean(b) => (ObjectKind::Boolean(*b), Intrinsic::Boolean),
            Value::Number(n) => (ObjectKind::Number(*n), Intrinsic::Number),
            Value::String(s) => (ObjectKind::String(s.clone()), Intrinsic::String),
            Value::Symbol(sym) => (ObjectKind::Symbol(sym.clone()), Intrinsic::Symbol),
            Value::BigInt(n) => (ObjectKind::BigInt(n.clone()), Intrinsic::BigInt),
        };
        Some(ObjectRef::new(kind, Some(self.intrinsic_prototype(proto))))
    }

    /// `new Map()`
    pub fn new_map(&self) -> ObjectRef {
        ObjectRef::new(ObjectKind::Map, Some(self.intrinsic_prototype(Intrinsic::Map)))
    }

    /// `new Set()`
    pub fn new_set(&self) -> ObjectRef {
        ObjectRef::new(ObjectKind::Set, Some(self.intrinsic_prototype(Intrinsic::Set)))
    }

    /// `new WeakMap()`
    pub fn new_weak_map(&self) -> ObjectRef {
        ObjectRef::new(ObjectKind::WeakMap, Some(self.intrinsic_prototype(Intrinsic::WeakMap)))
    }

    /// `new WeakSet()`
    pub fn new_weak_set(&self) -> ObjectRef {
        ObjectRef::new(ObjectKind::WeakSet, Some(self.intrinsic_prototype(Intrinsic::WeakSet)))
    }

    /// `new Promise(executor)` / `Promise.resolve()`
    pub fn new_promise(&self) -> ObjectRef {
        ObjectRef::new(ObjectKind::Promise, Some(self.intrinsic_prototype(Intrinsic::Promise)))
    }

    /// `new ArrayBuffer(n)`
    pub fn new_array_buffer(&self) -> ObjectRef {
        ObjectRef::new(ObjectKind::ArrayBuffer, Some(self.intrinsic_prototype(Intrinsic::ArrayBuffer)))
    }

    /// `new Date(time)`
    pub fn new_date(&self, time: f64) -> ObjectRef {
        ObjectRef::new(ObjectKind::Date(time), Some(self.intrinsic_prototype(Intrinsic::Date)))
    }

    /// `/source/`
    pub fn new_regexp(&self, source: &str) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::RegExp(source.to_string()),
            Some(self.intrinsic_prototype(Intrinsic::RegExp)),
        )
    }

    /// `new C()` for any constructor `C`.
    ///
    /// The new object inherits from `C.prototype`; its internal slots come
    /// from the builtin at the root of `C`'s constructor chain, so
    /// `class M extends Map {}` instances carry `[[MapData]]`.
    pub fn construct(&self, constructor: &Value) -> Result<ObjectRef, ObjectError> {
        let constructor = constructor
            .as_object()
            .filter(|c| c.is_constructor())
            .ok_or(ObjectError::NotAConstructor)?;
        if let Some(target) = constructor.bound_target() {
            return self.construct(&Value::Object(target));
        }

        let template = self.instance_template(constructor);
        if template == Some(InstanceTemplate::Function) {
            return Ok(self.create_function("anonymous", FunctionKind::Normal));
        }

        let fallback = match template {
            Some(InstanceTemplate::Error(kind)) => {
                self.intrinsic_prototype(Intrinsic::Error(kind))
            }
            _ => self.object_prototype.clone(),
        };
        let prototype = self.prototype_from_constructor(constructor, &fallback);
        let kind = match template {
            None => ObjectKind::Ordinary,
            Some(InstanceTemplate::Throws) => return Err(ObjectError::NotAConstructor),
            Some(InstanceTemplate::Array) => ObjectKind::Array,
            Some(InstanceTemplate::Error(kind)) => ObjectKind::Error(kind),
            Some(InstanceTemplate::Boolean) => ObjectKind::Boolean(false),
            Some(InstanceTemplate::Number) => ObjectKind::Number(0.0),
            Some(InstanceTemplate::String) => ObjectKind::String(String::new()),
            Some(InstanceTemplate::Date) => ObjectKind::Date(0.0),
            Some(InstanceTemplate::RegExp) => ObjectKind::RegExp("(?:)".to_string()),
            Some(InstanceTemplate::Map) => ObjectKind::Map,
            Some(InstanceTemplate::Set) => ObjectKind::Set,
            Some(InstanceTemplate::WeakMap) => ObjectKind::WeakMap,
            Some(InstanceTemplate::WeakSet) => ObjectKind::WeakSet,
            Some(InstanceTemplate::Promise) => ObjectKind::Promise,
            Some(InstanceTemplate::ArrayBuffer) => ObjectKind::ArrayBuffer,
            Some(InstanceTemplate::Function) => ObjectKind::Ordinary,
        };
        Ok(ObjectRef::new(kind, Some(prototype)))
    }

    /// Template of the first builtin found walking `constructor` and its
    /// `[[Prototype]]` chain (`class A extends B` links `A` to `B`).
    fn instance_template(&self, constructor: &ObjectRef) -> Option<InstanceTemplate> {
        std::iter::once(constructor.clone())
            .chain(constructor.prototype_chain())
            .find_map(|candidate| {
                self.templates
                    .iter()
                    .find(|(ctor, _)| ctor.ptr_eq(&candidate))
                    .map(|(_, template)| *template)
            })
    }

    /// `BigInt(n)` as a value
    pub fn bigint(&self, n: i64) -> Value {
        Value::BigInt(BigInt::from(n))
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}
