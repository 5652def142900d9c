//! Obfuscation Codec.
//!
//! The invertible on-disk transform protecting stored binaries. Obfuscation
//! XORs every 32-bit little-endian word with a fixed key and then reverses
//! the byte order of the whole buffer; restoration applies the inverse
//! steps in the opposite order. The ordering matters: the reversal permutes
//! bytes across word boundaries, so the XOR must see the original word
//! layout on one side and the restored layout on the other.
//!
//! Both directions reject buffers whose length is not a multiple of four.

use crate::fault::Fault;

/// XOR key applied to every 32-bit word of the image.
pub const OBFUSCATION_KEY: u32 = 0xDEAD_BEEF;

/// Obfuscates a cleartext image: word-XOR, then whole-buffer reversal.
pub fn obfuscate(data: &[u8]) -> Result<Vec<u8>, Fault> {
    if data.len() % 4 != 0 {
        return Err(Fault::MisalignedImage(data.len()));
    }
    let mut out = data.to_vec();
    xor_words(&mut out);
    out.reverse();
    Ok(out)
}

/// Restores an obfuscated image: whole-buffer reversal, then word-XOR.
pub fn deobfuscate(data: &[u8]) -> Result<Vec<u8>, Fault> {
    if data.len() % 4 != 0 {
        return Err(Fault::MisalignedImage(data.len()));
    }
    let mut out = data.to_vec();
    out.reverse();
    xor_words(&mut out);
    Ok(out)
}

/// XORs each 32-bit little-endian word with the key, in place.
fn xor_words(data: &mut [u8]) {
    for chunk in data.chunks_exact_mut(4) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        chunk.copy_from_slice(&(word ^ OBFUSCATION_KEY).to_le_bytes());
    }
}
