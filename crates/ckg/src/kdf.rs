//! ANSI X9.63 key derivation.

use core::fmt;

use digest::Digest;
use zeroize::{Zeroize, Zeroizing};

use crate::{error::CkgError, hash::CkgDigest};

/// Secret derived by both parties at the end of the protocol.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    /// Returns the secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the secret.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the secret is empty, which never happens for a
    /// secret returned by the protocol.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSecret").field(&"[redacted]").finish()
    }
}

/// Derives `len` bytes from the shared value `z` and `shared_info`.
///
/// `K = H(z || 1 || info) || H(z || 2 || info) || ...` with the counter
/// encoded as a 32-bit big-endian integer, truncated to `len` bytes.
pub(crate) fn derive<D: CkgDigest>(
    z: &[u8],
    shared_info: &[u8],
    len: usize,
) -> Result<SharedSecret, CkgError> {
    let block_len = <D as Digest>::output_size();

    if len == 0 {
        return Err(CkgError::parameter("derived secret must not be empty"));
    }

    if len as u64 >= u32::MAX as u64 * block_len as u64 {
        return Err(CkgError::parameter(format!(
            "derived secret is too long: {len} bytes"
        )));
    }

    let mut out = Zeroizing::new(Vec::with_capacity(len));
    let mut counter: u32 = 1;
    while out.len() < len {
        let mut hasher = D::new();
        hasher.update(z);
        hasher.update(counter.to_be_bytes());
        hasher.update(shared_info);
        let mut block = hasher.finalize();

        let take = (len - out.len()).min(block_len);
        out.extend_from_slice(&block[..take]);
        block.as_mut_slice().zeroize();

        counter += 1;
    }

    Ok(SharedSecret(out))
}
