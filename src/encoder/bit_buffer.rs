/// Append-only bit sequence, packed MSB first into bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low `bit_count` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, bit_count: usize) {
        debug_assert!(bit_count <= 32, "at most 32 bits per put");
        for i in (0..bit_count).rev() {
            self.put_bit((value >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn put_bit(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        if self.bytes.len() <= byte_index {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Packed bytes; a trailing partial byte is zero-filled
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
