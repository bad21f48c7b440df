//! The packed array format, `[CompactBytesArray]` in LSP2 terms.
//!
//! Each element is written as a 2-byte big-endian length followed by that many bytes, and the
//! elements are concatenated with nothing in between. A zero length is a valid, empty element.
//! See [`formats`](crate::formats) for the byte layout.

use alloy_primitives::U256;
use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::MAX_PACKED_ELEMENT_LEN;

/// Walks the elements of a packed array without copying them out.
///
/// Stops after the first error; a truncated array yields its good elements followed by one
/// [`Error::MalformedPackedArray`].
#[derive(Clone, Debug)]
pub struct PackedParser<'a> {
    data: &'a [u8],
    offset: usize,
    errored: bool,
}

impl<'a> PackedParser<'a> {
    pub fn new(data: &'a [u8]) -> PackedParser<'a> {
        Self {
            data,
            offset: 0,
            errored: false,
        }
    }

    /// Byte offset of the next length prefix.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn parse_element(&mut self) -> Result<&'a [u8]> {
        let offset = self.offset;
        let remaining = self.data.len();
        let len = self
            .data
            .read_u16::<BigEndian>()
            .map_err(|_| Error::MalformedPackedArray {
                offset,
                expected: 2,
                actual: remaining,
            })? as usize;
        if len > self.data.len() {
            return Err(Error::MalformedPackedArray {
                offset,
                expected: 2 + len,
                actual: remaining,
            });
        }
        let (elem, data) = self.data.split_at(len);
        self.data = data;
        self.offset += 2 + len;
        Ok(elem)
    }
}

impl<'a> std::iter::Iterator for PackedParser<'a> {
    type Item = Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.errored || self.data.is_empty() {
            return None;
        }
        let result = self.parse_element();
        if result.is_err() {
            self.errored = true;
        }
        Some(result)
    }
}

/// Pack a list of byte strings. Fails if any of them is longer than 65 535 bytes.
pub fn encode_packed<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<u8>> {
    let total = items.iter().map(|i| 2 + i.as_ref().len()).sum();
    let mut buf = Vec::with_capacity(total);
    for item in items {
        let item = item.as_ref();
        if item.len() > MAX_PACKED_ELEMENT_LEN {
            return Err(Error::ValueTooLarge {
                max: MAX_PACKED_ELEMENT_LEN,
                actual: item.len(),
            });
        }
        buf.extend_from_slice(&(item.len() as u16).to_be_bytes());
        buf.extend_from_slice(item);
    }
    Ok(buf)
}

/// Unpack a packed array. The whole input must be consumed exactly.
pub fn decode_packed(blob: &[u8]) -> Result<Vec<Vec<u8>>> {
    PackedParser::new(blob)
        .map(|elem| elem.map(<[u8]>::to_vec))
        .collect()
}

fn check_widths<T: AsRef<[u8]>>(items: &[T], width: usize) -> Result<()> {
    match items
        .iter()
        .enumerate()
        .find(|(_, item)| item.as_ref().len() > width)
    {
        Some((index, item)) => Err(Error::ElementTooLarge {
            index,
            max: width,
            actual: item.as_ref().len(),
        }),
        None => Ok(()),
    }
}

/// Pack `bytesN` elements: each may be at most `width` bytes long.
pub fn encode_packed_fixed<T: AsRef<[u8]>>(items: &[T], width: usize) -> Result<Vec<u8>> {
    check_widths(items, width)?;
    encode_packed(items)
}

/// Unpack `bytesN` elements, rejecting any element longer than `width` bytes.
pub fn decode_packed_fixed(blob: &[u8], width: usize) -> Result<Vec<Vec<u8>>> {
    let items = decode_packed(blob)?;
    check_widths(&items, width)?;
    Ok(items)
}

/// Pack `uintM` elements, each left-padded with zeros to exactly `width` bytes.
pub fn encode_packed_uint(values: &[U256], width: usize) -> Result<Vec<u8>> {
    let mut items = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let needed = value.byte_len().max(1);
        if needed > width {
            return Err(Error::ElementTooLarge {
                index,
                max: width,
                actual: needed,
            });
        }
        items.push(value.to_be_bytes::<32>()[32 - width..].to_vec());
    }
    encode_packed(&items)
}

/// Unpack `uintM` elements. An empty element reads as zero.
pub fn decode_packed_uint(blob: &[u8], width: usize) -> Result<Vec<U256>> {
    PackedParser::new(blob)
        .enumerate()
        .map(|(index, elem)| -> Result<U256> {
            let elem = elem?;
            if elem.len() > width {
                return Err(Error::ElementTooLarge {
                    index,
                    max: width,
                    actual: elem.len(),
                });
            }
            crate::utils::uint_from_be(elem, width)
        })
        .collect()
}

/// Pack strings as their UTF-8 bytes.
pub fn encode_packed_strings<S: AsRef<str>>(values: &[S]) -> Result<Vec<u8>> {
    let items: Vec<&[u8]> = values.iter().map(|s| s.as_ref().as_bytes()).collect();
    encode_packed(&items)
}

/// Unpack strings. Every element must be valid UTF-8.
pub fn decode_packed_strings(blob: &[u8]) -> Result<Vec<String>> {
    PackedParser::new(blob)
        .map(|elem| -> Result<String> { Ok(std::str::from_utf8(elem?)?.to_string()) })
        .collect()
}
