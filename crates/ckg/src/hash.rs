use digest::{Digest, Output};

pub use sha2::{Sha256, Sha384, Sha512};

use crate::DigestId;

/// A digest supported by the protocol.
pub trait CkgDigest: Digest + Clone {
    /// Identifier of the digest.
    const ID: DigestId;
}

impl CkgDigest for Sha256 {
    const ID: DigestId = DigestId::Sha256;
}

impl CkgDigest for Sha384 {
    const ID: DigestId = DigestId::Sha384;
}

impl CkgDigest for Sha512 {
    const ID: DigestId = DigestId::Sha512;
}

/// Hashes the concatenation of `parts`.
pub(crate) fn hash_parts<D: CkgDigest>(parts: &[&[u8]]) -> Output<D> {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}
