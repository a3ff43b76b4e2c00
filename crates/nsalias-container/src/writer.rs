//! Re-serialization of the structural model.
//!
//! The writer never reuses a parsed pool: it interns every name reachable
//! from the model into a fresh deduplicated pool and recomputes all counts,
//! lengths, and indices. The body is assembled first so the pool is complete
//! before the header is emitted.

use crate::{
    ContainerError, MAGIC,
    pool::{PoolBuilder, PoolEntry, TAG_TYPE, TAG_UTF8},
    unit::{Attribute, Member, Unit},
};

///
/// ByteWriter
///

#[derive(Default)]
struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    fn u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    fn u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    fn bytes(&mut self, v: &[u8]) {
        self.buf.extend_from_slice(v);
    }
}

fn u16_count(count: usize, kind: &'static str) -> Result<u16, ContainerError> {
    u16::try_from(count).map_err(|_| ContainerError::CountOverflow { kind, count })
}

pub(crate) fn write_unit(unit: &Unit) -> Result<Vec<u8>, ContainerError> {
    let mut pool = PoolBuilder::default();
    let mut body = ByteWriter::default();

    body.u16(pool.type_ref(&unit.self_type)?);

    match &unit.super_type {
        Some(path) => {
            let index = pool.type_ref(path)?;
            body.u16(index);
        }
        None => body.u16(0),
    }

    body.u16(u16_count(unit.interfaces.len(), "interface")?);
    for path in &unit.interfaces {
        let index = pool.type_ref(path)?;
        body.u16(index);
    }

    write_members(&mut body, &mut pool, &unit.fields, "field")?;
    write_members(&mut body, &mut pool, &unit.methods, "method")?;

    body.u16(u16_count(unit.attributes.len(), "attribute")?);
    for Attribute { name, data } in &unit.attributes {
        let name_index = pool.utf8(name)?;
        let len = u32::try_from(data.len())
            .map_err(|_| ContainerError::AttributeTooLarge(data.len()))?;
        body.u16(name_index);
        body.u32(len);
        body.bytes(data);
    }

    let mut out = ByteWriter::default();
    out.u32(MAGIC);
    out.u16(unit.version);
    write_pool(&mut out, &pool)?;
    out.bytes(&body.buf);

    Ok(out.buf)
}

fn write_members(
    body: &mut ByteWriter,
    pool: &mut PoolBuilder,
    members: &[Member],
    kind: &'static str,
) -> Result<(), ContainerError> {
    body.u16(u16_count(members.len(), kind)?);

    for Member { name, descriptor } in members {
        let name_index = pool.utf8(name)?;
        let desc_index = pool.utf8(&descriptor.to_string())?;
        body.u16(name_index);
        body.u16(desc_index);
    }

    Ok(())
}

fn write_pool(out: &mut ByteWriter, pool: &PoolBuilder) -> Result<(), ContainerError> {
    let count = u16_count(pool.entries().len() + 1, "pool")?;
    out.u16(count);

    for entry in pool.entries() {
        match entry {
            PoolEntry::Utf8(s) => {
                out.u8(TAG_UTF8);
                let len = u16::try_from(s.len())
                    .map_err(|_| ContainerError::StringTooLong(s.len()))?;
                out.u16(len);
                out.bytes(s.as_bytes());
            }
            PoolEntry::Type { name_index } => {
                out.u8(TAG_TYPE);
                out.u16(*name_index);
            }
        }
    }

    Ok(())
}
