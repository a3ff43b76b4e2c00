//! Strict wire-format parsing into the structural model.

use crate::{
    ContainerError, Descriptor, MAGIC, VERSION,
    pool::{Pool, PoolEntry, TAG_TYPE, TAG_UTF8},
    unit::{Attribute, Member, Unit},
};

///
/// ByteReader
/// Big-endian cursor over the raw container bytes.
///

pub(crate) struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn u8(&mut self) -> Result<u8, ContainerError> {
        let bytes = self.bytes(1)?;
        Ok(bytes[0])
    }

    pub fn u16(&mut self) -> Result<u16, ContainerError> {
        let bytes = self.bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn u32(&mut self) -> Result<u32, ContainerError> {
        let bytes = self.bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn bytes(&mut self, len: usize) -> Result<&'a [u8], ContainerError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or(ContainerError::Truncated(self.pos))?;

        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

pub(crate) fn parse_unit(bytes: &[u8]) -> Result<Unit, ContainerError> {
    let mut reader = ByteReader::new(bytes);

    let magic = reader.u32()?;
    if magic != MAGIC {
        return Err(ContainerError::BadMagic(magic));
    }

    let version = reader.u16()?;
    if version != VERSION {
        return Err(ContainerError::UnsupportedVersion(version));
    }

    let pool = read_pool(&mut reader)?;

    let self_type = pool.type_path(reader.u16()?)?;

    let super_index = reader.u16()?;
    let super_type = if super_index == 0 {
        None
    } else {
        Some(pool.type_path(super_index)?)
    };

    let iface_count = reader.u16()?;
    let mut interfaces = Vec::with_capacity(usize::from(iface_count));
    for _ in 0..iface_count {
        interfaces.push(pool.type_path(reader.u16()?)?);
    }

    let fields = read_members(&mut reader, &pool)?;
    let methods = read_members(&mut reader, &pool)?;
    let attributes = read_attributes(&mut reader, &pool)?;

    if reader.remaining() > 0 {
        return Err(ContainerError::TrailingBytes(reader.remaining()));
    }

    Ok(Unit {
        version,
        self_type,
        super_type,
        interfaces,
        fields,
        methods,
        attributes,
    })
}

fn read_pool(reader: &mut ByteReader<'_>) -> Result<Pool, ContainerError> {
    let count = reader.u16()?;
    let mut pool = Pool::default();

    // count covers the reserved index 0, so entries run 1..count
    for index in 1..count {
        let tag = reader.u8()?;
        match tag {
            TAG_UTF8 => {
                let len = reader.u16()?;
                let raw = reader.bytes(usize::from(len))?;
                let s = std::str::from_utf8(raw)
                    .map_err(|_| ContainerError::InvalidUtf8(index))?
                    .to_string();
                pool.push(PoolEntry::Utf8(s));
            }
            TAG_TYPE => {
                let name_index = reader.u16()?;
                pool.push(PoolEntry::Type { name_index });
            }
            tag => return Err(ContainerError::UnknownTag { tag, index }),
        }
    }

    pool.validate()?;
    Ok(pool)
}

fn read_members(reader: &mut ByteReader<'_>, pool: &Pool) -> Result<Vec<Member>, ContainerError> {
    let count = reader.u16()?;
    let mut members = Vec::with_capacity(usize::from(count));

    for _ in 0..count {
        let name = pool.utf8(reader.u16()?)?.to_string();
        let descriptor = Descriptor::parse(pool.utf8(reader.u16()?)?)?;
        members.push(Member { name, descriptor });
    }

    Ok(members)
}

fn read_attributes(
    reader: &mut ByteReader<'_>,
    pool: &Pool,
) -> Result<Vec<Attribute>, ContainerError> {
    let count = reader.u16()?;
    let mut attributes = Vec::with_capacity(usize::from(count));

    for _ in 0..count {
        let name = pool.utf8(reader.u16()?)?.to_string();
        let len = reader.u32()?;
        let data = reader.bytes(len as usize)?.to_vec();
        attributes.push(Attribute { name, data });
    }

    Ok(attributes)
}
