//! A simple binary data writer, for tests.

use alloc::vec::Vec;

#[derive(Clone, Copy)]
pub enum TtfType {
    Raw(&'static [u8]),
    UInt16(u16),
    TagStr(&'static str),
}

pub fn convert(values: &[TtfType]) -> Vec<u8> {
    let mut data = Vec::with_capacity(256);
    for value in values {
        convert_type(&mut data, *value);
    }
    data
}

pub fn convert_type(data: &mut Vec<u8>, value: TtfType) {
    match value {
        TtfType::Raw(bytes) => {
            data.extend_from_slice(bytes);
        }
        TtfType::UInt16(n) => {
            data.extend_from_slice(&n.to_be_bytes());
        }
        TtfType::TagStr(tag) => {
            assert_eq!(tag.len(), 4);
            data.extend_from_slice(tag.as_bytes());
        }
    }
}
