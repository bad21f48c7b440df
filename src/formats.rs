/*!

Byte layouts of the two formats LSP2 defines on top of the Solidity ABI.

Everything else this crate encodes is plain ABI data (see [`abi`](crate::abi)):
static values take one 32-byte word, dynamic values are an offset word, a length
word, and a payload padded to a whole number of words.

# Packed Arrays

Used by the `[CompactBytesArray]` value types. A packed array is a sequence of
elements, each written as a 2-byte big-endian length followed by that many
bytes. There is no element count and no separator; the decoder reads elements
until the data runs out.

```text
+----------+----------+==========+----------+----------+==========+
| LLLLLLLL | LLLLLLLL | Element  | LLLLLLLL | LLLLLLLL | Element  | ...
+----------+----------+==========+----------+----------+==========+

- LLLLLLLL_LLLLLLLL is a 16-bit big-endian unsigned integer giving the length
    of the element that follows it.
```

A length of zero is an empty element, and is how LSP2 leaves a hole in an array.
Elements are therefore limited to 65 535 bytes. A length that runs past the end
of the data is a malformed array, never a truncated element.

The element types put their own rules on each element:

| Value type                  | Element                                                 |
| --                          | --                                                      |
| `bytes[CompactBytesArray]`  | Any byte string                                         |
| `bytesN[CompactBytesArray]` | At most N bytes, N from 1 to 32                         |
| `uintM[CompactBytesArray]`  | Big-endian, left-padded with zeros to exactly M/8 bytes |
| `string[CompactBytesArray]` | UTF-8 text                                              |

An empty `uintM` element decodes as zero.

As an example, `["0xaabbccdd", "0xff", "0x"]` packs to:

```text
0004 aabbccdd 0001 ff 0000
```

# Verified URLs

Used by `JSONURL` and `AssetURL` value content. The frame commits to the content
behind a URL with a hash, and names the method used to compute it:

```text
+----------+----------+----------+----------+=========+=====+
| SSSSSSSS | SSSSSSSS | SSSSSSSS | SSSSSSSS |  Hash   | URL |
+----------+----------+----------+----------+=========+=====+

- SSSSSSSS_SSSSSSSS_SSSSSSSS_SSSSSSSS is the 4-byte verification method selector
- Hash is exactly 32 bytes
- URL is UTF-8 text running to the end of the data
```

The selector of a method is the first 4 bytes of the keccak256 hash of its name:

| Method             | Selector     |
| --                 | --           |
| `keccak256(utf8)`  | `0x6f357c6a` |
| `keccak256(bytes)` | `0x8019f9b1` |

A frame with no verification uses the selector `0x00000000` and a zeroed hash.
Selectors that aren't in the table decode as the `unknown` method, with the hash
and URL still returned. A frame shorter than its 36-byte header is rejected.

*/
