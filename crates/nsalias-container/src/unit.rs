use crate::{ContainerError, Descriptor, TypePath, reader, writer};

///
/// Unit
///
/// The fully resolved structural model of one loadable unit. Pool indices do
/// not survive parsing; every reference is materialized as its name so the
/// model can be edited freely and re-encoded with fresh bookkeeping.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    pub version: u16,
    pub self_type: TypePath,
    pub super_type: Option<TypePath>,
    pub interfaces: Vec<TypePath>,
    pub fields: Vec<Member>,
    pub methods: Vec<Member>,
    pub attributes: Vec<Attribute>,
}

impl Unit {
    /// Minimal unit for the given self type, current format version.
    #[must_use]
    pub fn new(self_type: TypePath) -> Self {
        Self {
            version: crate::VERSION,
            self_type,
            super_type: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Strict parse of a wire-form container.
    pub fn parse(bytes: &[u8]) -> Result<Self, ContainerError> {
        reader::parse_unit(bytes)
    }

    /// Re-serialize, rebuilding the constant pool and all length fields.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ContainerError> {
        writer::write_unit(self)
    }

    /// Visit every embedded type reference: self type, super type,
    /// interfaces, and the type paths inside member descriptors.
    ///
    /// Member names and attribute payloads are not type references and are
    /// never visited.
    pub fn for_each_type_path(&mut self, mut f: impl FnMut(&mut TypePath)) {
        f(&mut self.self_type);

        if let Some(super_type) = &mut self.super_type {
            f(super_type);
        }

        for iface in &mut self.interfaces {
            f(iface);
        }

        for member in self.fields.iter_mut().chain(self.methods.iter_mut()) {
            member.descriptor.for_each_type_path(&mut f);
        }
    }

    /// All embedded type paths, in visit order.
    #[must_use]
    pub fn type_paths(&self) -> Vec<TypePath> {
        let mut out = Vec::new();
        let mut copy = self.clone();
        copy.for_each_type_path(|path| out.push(path.clone()));
        out
    }
}

///
/// Member
/// A named field or method with its descriptor.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub name: String,
    pub descriptor: Descriptor,
}

impl Member {
    pub fn new(name: impl Into<String>, descriptor: &str) -> Result<Self, ContainerError> {
        Ok(Self {
            name: name.into(),
            descriptor: Descriptor::parse(descriptor)?,
        })
    }
}

///
/// Attribute
/// A named opaque payload, carried through rewrites byte-for-byte.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub data: Vec<u8>,
}

///
/// TESTS
///
