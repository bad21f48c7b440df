//! Solidity ABI encoding for a single parameter, limited to the types LSP2 schemas use.
//!
//! Static types (`bool`, `address`, `uintN`, `bytesN`) take one 32-byte word. Dynamic types
//! (`string`, `bytes`, `T[]`) are written as an offset word pointing at a length word, followed
//! by the payload padded out to a whole number of words.

use alloy_primitives::{Address, U256};

use crate::error::{Error, Result};

const WORD: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamType {
    Bool,
    String,
    Address,
    /// Unsigned integer of the given bit width.
    Uint(usize),
    /// Fixed byte string of the given byte width, 1 through 32.
    FixedBytes(usize),
    Bytes,
    Array(Box<ParamType>),
}

impl ParamType {
    fn is_dynamic(&self) -> bool {
        matches!(self, ParamType::String | ParamType::Bytes | ParamType::Array(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Bool(bool),
    String(String),
    Address(Address),
    Uint(U256),
    /// Fixed bytes are right-padded with zeros when encoded.
    FixedBytes(Vec<u8>),
    Bytes(Vec<u8>),
    Array(Vec<Token>),
}

impl Token {
    fn is_dynamic(&self) -> bool {
        matches!(self, Token::String(_) | Token::Bytes(_) | Token::Array(_))
    }
}

fn word_of(v: U256) -> [u8; WORD] {
    v.to_be_bytes::<WORD>()
}

fn padded_len(len: usize) -> usize {
    (len + WORD - 1) / WORD * WORD
}

fn write_padded(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(data);
    buf.resize(buf.len() + padded_len(data.len()) - data.len(), 0);
}

/// Head/tail encoding of a sequence of tokens, as used inside tuples and arrays.
fn encode_sequence(tokens: &[Token]) -> Vec<u8> {
    let head_len = tokens.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();
    for token in tokens {
        if token.is_dynamic() {
            head.extend_from_slice(&word_of(U256::from(head_len + tail.len())));
            encode_tail(&mut tail, token);
        } else {
            encode_static(&mut head, token);
        }
    }
    head.extend_from_slice(&tail);
    head
}

fn encode_static(buf: &mut Vec<u8>, token: &Token) {
    match token {
        Token::Bool(b) => buf.extend_from_slice(&word_of(U256::from(*b as u8))),
        Token::Address(a) => {
            buf.extend_from_slice(&[0u8; 12]);
            buf.extend_from_slice(a.as_slice());
        }
        Token::Uint(v) => buf.extend_from_slice(&word_of(*v)),
        Token::FixedBytes(b) => {
            let mut word = [0u8; WORD];
            let len = b.len().min(WORD);
            word[..len].copy_from_slice(&b[..len]);
            buf.extend_from_slice(&word);
        }
        Token::String(_) | Token::Bytes(_) | Token::Array(_) => encode_tail(buf, token),
    }
}

fn encode_tail(buf: &mut Vec<u8>, token: &Token) {
    match token {
        Token::String(s) => {
            buf.extend_from_slice(&word_of(U256::from(s.len())));
            write_padded(buf, s.as_bytes());
        }
        Token::Bytes(b) => {
            buf.extend_from_slice(&word_of(U256::from(b.len())));
            write_padded(buf, b);
        }
        Token::Array(items) => {
            buf.extend_from_slice(&word_of(U256::from(items.len())));
            buf.extend_from_slice(&encode_sequence(items));
        }
        _ => encode_static(buf, token),
    }
}

/// Encode one token as a lone function parameter.
pub fn encode(token: &Token) -> Vec<u8> {
    encode_sequence(std::slice::from_ref(token))
}

fn too_short(what: &str, at: usize, data: &[u8]) -> Error {
    Error::InvalidEncoding(format!(
        "ABI data too short reading {} at offset {} (data is {} bytes)",
        what,
        at,
        data.len()
    ))
}

fn read_word<'a>(data: &'a [u8], at: usize, what: &str) -> Result<&'a [u8]> {
    at.checked_add(WORD)
        .and_then(|end| data.get(at..end))
        .ok_or_else(|| too_short(what, at, data))
}

fn read_usize(data: &[u8], at: usize, what: &str) -> Result<usize> {
    let word = read_word(data, at, what)?;
    let v = U256::from_be_slice(word);
    usize::try_from(v).map_err(|_| {
        Error::InvalidEncoding(format!("ABI {} at offset {} is out of range", what, at))
    })
}

fn decode_sequence(kinds: &[&ParamType], data: &[u8]) -> Result<Vec<Token>> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| -> Result<Token> {
            let at = i * WORD;
            if kind.is_dynamic() {
                let offset = read_usize(data, at, "offset")?;
                let tail = data
                    .get(offset..)
                    .ok_or_else(|| too_short("tail", offset, data))?;
                decode_tail(kind, tail)
            } else {
                decode_static(kind, read_word(data, at, "word")?)
            }
        })
        .collect()
}

fn check_padding(padding: &[u8], what: &str) -> Result<()> {
    if padding.iter().any(|b| *b != 0) {
        return Err(Error::InvalidEncoding(format!(
            "ABI {} has non-zero padding",
            what
        )));
    }
    Ok(())
}

fn decode_static(kind: &ParamType, word: &[u8]) -> Result<Token> {
    Ok(match kind {
        ParamType::Bool => {
            check_padding(&word[..WORD - 1], "bool")?;
            match word[WORD - 1] {
                0 => Token::Bool(false),
                1 => Token::Bool(true),
                b => {
                    return Err(Error::InvalidEncoding(format!(
                        "ABI bool word ends in {:#04x}",
                        b
                    )))
                }
            }
        }
        ParamType::Address => {
            check_padding(&word[..12], "address")?;
            Token::Address(Address::from_slice(&word[12..]))
        }
        ParamType::Uint(bits) => {
            let v = U256::from_be_slice(word);
            if *bits < 256 && v.bit_len() > *bits {
                return Err(Error::InvalidEncoding(format!(
                    "ABI value doesn't fit in uint{}",
                    bits
                )));
            }
            Token::Uint(v)
        }
        ParamType::FixedBytes(n) => {
            let n = (*n).min(WORD);
            check_padding(&word[n..], "fixed bytes")?;
            Token::FixedBytes(word[..n].to_vec())
        }
        _ => decode_tail(kind, word)?,
    })
}

fn decode_tail(kind: &ParamType, data: &[u8]) -> Result<Token> {
    match kind {
        ParamType::String | ParamType::Bytes => {
            let len = read_usize(data, 0, "length")?;
            let bytes = WORD
                .checked_add(len)
                .and_then(|end| data.get(WORD..end))
                .ok_or_else(|| too_short("payload", WORD, data))?
                .to_vec();
            if *kind == ParamType::String {
                Ok(Token::String(String::from_utf8(bytes)?))
            } else {
                Ok(Token::Bytes(bytes))
            }
        }
        ParamType::Array(inner) => {
            let len = read_usize(data, 0, "length")?;
            // Every element takes at least one word, so a bigger count can't be real.
            if len > data.len() / WORD {
                return Err(too_short("array elements", WORD, data));
            }
            let kinds = vec![inner.as_ref(); len];
            Ok(Token::Array(decode_sequence(&kinds, &data[WORD..])?))
        }
        _ => decode_static(kind, read_word(data, 0, "word")?),
    }
}

/// Decode data holding one lone function parameter of type `kind`.
pub fn decode(kind: &ParamType, data: &[u8]) -> Result<Token> {
    let mut tokens = decode_sequence(&[kind], data)?;
    tokens
        .pop()
        .ok_or_else(|| Error::InvalidEncoding("ABI data held no value".to_string()))
}
