//! Error constructors and instances (ES2024 §20.5)
//!
//! `%Error%` plus the NativeError family. Each NativeError constructor
//! inherits from `%Error%`, and each NativeError prototype inherits from
//! `%Error.prototype%`. Prototypes are ordinary objects; only instances
//! carry `[[ErrorData]]`.

use core_types::{ErrorKind, FunctionData, FunctionKind, ObjectKind, ObjectRef, PropertyDescriptor, Value};

use crate::realm::{install_name_and_length, Intrinsic, Realm};

fn error_constructor(proto: &ObjectRef, kind: ErrorKind) -> ObjectRef {
    let constructor = ObjectRef::new(
        ObjectKind::Function(FunctionData::new(FunctionKind::Builtin { constructable: true })),
        Some(proto.clone()),
    );
    install_name_and_length(&constructor, kind.name(), 1.0);
    constructor
}

/// Build `%Error%` and every NativeError constructor, in [`ErrorKind::ALL`] order.
pub(crate) fn create_error_constructors(
    function_prototype: &ObjectRef,
    object_prototype: &ObjectRef,
) -> Vec<(ErrorKind, ObjectRef)> {
    let mut constructors = Vec::with_capacity(ErrorKind::ALL.len());
    let mut base: Option<(ObjectRef, ObjectRef)> = None;

    for kind in ErrorKind::ALL {
        let (ctor_parent, proto_parent) = match &base {
            Some((error, error_prototype)) => (error.clone(), error_prototype.clone()),
            None => (function_prototype.clone(), object_prototype.clone()),
        };

        let constructor = error_constructor(&ctor_parent, kind);
        let prototype = ObjectRef::new(ObjectKind::Ordinary, Some(proto_parent));
        constructor.define_own_property(
            "prototype".into(),
            PropertyDescriptor::frozen(Value::Object(prototype.clone())),
        );
        prototype.define_own_property(
            "constructor".into(),
            PropertyDescriptor::method(Value::Object(constructor.clone())),
        );
        prototype.define_own_property("name".into(), PropertyDescriptor::method(Value::string(kind.name())));
        prototype.define_own_property("message".into(), PropertyDescriptor::method(Value::string("")));

        if base.is_none() {
            base = Some((constructor.clone(), prototype));
        }
        constructors.push((kind, constructor));
    }
    constructors
}

impl Realm {
    /// `new <kind>(message)`
    pub fn new_error(&self, kind: ErrorKind, message: &str) -> ObjectRef {
        let error = ObjectRef::new(
            ObjectKind::Error(kind),
            Some(self.intrinsic_prototype(Intrinsic::Error(kind))),
        );
        if !message.is_empty() {
            error.define_own_property("message".into(), PropertyDescriptor::method(Value::string(message)));
        }
        error
    }
}
