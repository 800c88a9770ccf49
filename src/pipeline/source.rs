use crate::pipeline::keymat::KeyMaterial;
use aes::Aes256;
use cipher::{BlockEncrypt, KeyInit};
use generic_array::GenericArray;

/// Feedback width in bytes: two AES blocks encrypted side by side.
pub const FEEDBACK_LEN: usize = 32;

/// AES block size in bytes.
const AES_BLOCK_LEN: usize = 16;

/// An unbounded, stateful, one-byte-at-a-time pseudorandom source.
///
/// Implementations are deterministic functions of their construction
/// state. A source is never restartable in place; a fresh instance is
/// required for a fresh stream position.
pub trait ByteSource {
    fn next_byte(&mut self) -> u8;
}

/// AES-256 output feedback over a 32-byte register.
///
/// Each refill encrypts the register as two independent ECB sub-blocks
/// under the fixed key; the 32-byte ciphertext becomes both the next
/// register and the pending output buffer. Byte requests drain the buffer
/// front to back before triggering the next refill.
pub struct AesOfbSource {
    cipher: Aes256,
    register: [u8; FEEDBACK_LEN],
    pending: [u8; FEEDBACK_LEN],
    cursor: usize,
}

impl AesOfbSource {
    pub fn new(material: &KeyMaterial) -> Self {
        let cipher = Aes256::new(GenericArray::from_slice(&material.key));
        Self {
            cipher,
            register: material.register,
            pending: [0u8; FEEDBACK_LEN],
            // Buffer starts empty; first request forces a refill
            cursor: FEEDBACK_LEN,
        }
    }

    fn refill(&mut self) {
        let mut block = self.register;
        for chunk in block.chunks_exact_mut(AES_BLOCK_LEN) {
            let mut b = GenericArray::clone_from_slice(chunk);
            self.cipher.encrypt_block(&mut b);
            chunk.copy_from_slice(&b);
        }
        self.register = block;
        self.pending = block;
        self.cursor = 0;
    }
}

impl ByteSource for AesOfbSource {
    fn next_byte(&mut self) -> u8 {
        if self.cursor == FEEDBACK_LEN {
            self.refill();
        }
        let b = self.pending[self.cursor];
        self.cursor += 1;
        b
    }
}
