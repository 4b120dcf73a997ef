//! # Collaborative Key Generation
//!
//! This crate implements a two-party protocol in which a contributor and an
//! owner jointly generate an elliptic-curve key pair. Only the owner learns
//! the private key, both parties learn the public key, and both derive the
//! same shared secret from it. Neither party can bias the resulting key, as
//! the contributor commits to its contribution before seeing the owner's.
//!
//! The protocol runs in three messages:
//!
//! 1. The contributor samples a scalar `s1` and a nonce, and sends a
//!    [`Commitment`] to both.
//! 2. The owner samples a scalar `s2` and a nonce, and replies with a
//!    [`Share`] containing `s2·G` and its public nonce.
//! 3. The contributor computes the public key `P = s2·G + s1·G`, derives the
//!    shared secret and sends the [`Opening`]. The owner verifies the opening
//!    against the commitment and computes `s1 + s2`.
//!
//! Two versions exist. In [`Version::V1`] the nonces are random byte strings
//! and the KDF shared info is their concatenation. In [`Version::V2`] the
//! nonces are scalars, the public nonces are points and the shared info is the
//! encoded Diffie-Hellman point of the two nonces.
//!
//! Transport is left to the caller. Messages are plain byte strings of known
//! size, see [`CkgParams`].

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod contributor;
mod curve;
mod error;
mod hash;
mod kdf;
#[cfg(feature = "mock")]
pub mod mock;
mod msg;
mod nonce;
mod owner;
#[cfg(test)]
mod test_utils;

pub use config::{CkgParams, CkgParamsBuilder, CkgParamsBuilderError, CurveId, DigestId};
pub use contributor::{Contributor, ContributorOutput};
pub use curve::{CkgCurve, NistP192, NistP224, NistP256, NistP384, NistP521};
pub use error::{CkgError, ErrorKind};
pub use hash::{CkgDigest, Sha256, Sha384, Sha512};
pub use kdf::SharedSecret;
pub use msg::{CkgMessage, Commitment, Opening, Share};
pub use nonce::{EcdhNonce, NonceStrategy, RawNonce};
pub use owner::{Owner, OwnerOutput};

pub use elliptic_curve::{PublicKey, SecretKey};

use serde::{Deserialize, Serialize};

/// Role in the key generation protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Contributes entropy to the key but does not learn the private key.
    Contributor,
    /// Learns the private key.
    Owner,
}

/// Protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// Raw nonces, KDF shared info is `r1 || r2`.
    V1,
    /// Scalar nonces, KDF shared info is the encoding of `r1·r2·G`.
    V2,
}

/// Observable state of a protocol context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Freshly initialized.
    Init,
    /// The contributor has produced its commitment.
    Commit,
    /// The owner has produced its share.
    Share,
    /// The protocol finished successfully. No further operation is allowed.
    Finish,
}

/// Version 1 of the protocol, generic over the curve and digest.
pub mod v1 {
    use crate::RawNonce;

    /// Version 1 contributor.
    pub type Contributor<C, D> = crate::Contributor<C, D, RawNonce>;
    /// Version 1 owner.
    pub type Owner<C, D> = crate::Owner<C, D, RawNonce>;
}

/// Version 2 of the protocol, fixed to P-224 with SHA-256.
///
/// The generic contexts can be instantiated with [`EcdhNonce`] for other
/// curves and digests.
pub mod v2 {
    use crate::{EcdhNonce, NistP224, Sha256};

    /// Version 2 contributor.
    pub type Contributor = crate::Contributor<NistP224, Sha256, EcdhNonce>;
    /// Version 2 owner.
    pub type Owner = crate::Owner<NistP224, Sha256, EcdhNonce>;
}
