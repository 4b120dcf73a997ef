use digest::Digest;
use elliptic_curve::{group::Curve as _, PublicKey, SecretKey};
use rand_core::TryCryptoRng;
use zeroize::Zeroizing;

use crate::{
    curve::{random_scalar, CkgCurve},
    error::CkgError,
    hash::CkgDigest,
    Role, Version,
};

/// Per-version handling of the nonces.
///
/// Each party samples a nonce next to its scalar. The public part of the
/// nonce travels in the commitment preimage and the opening (contributor) or
/// the share (owner), and both nonces feed the KDF shared info.
pub trait NonceStrategy<C: CkgCurve, D: CkgDigest> {
    /// The protocol version this strategy implements.
    const VERSION: Version;

    /// The secret nonce kept by a party.
    type Secret;

    /// Samples a fresh nonce.
    fn generate<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self::Secret, CkgError>;

    /// Returns the length of the public nonce.
    fn public_len() -> usize;

    /// Returns the public nonce sent to the peer.
    fn public_bytes(nonce: &Self::Secret) -> Zeroizing<Vec<u8>>;

    /// Computes the KDF shared info from the own nonce and the peer's public
    /// nonce. Both roles obtain the same value.
    fn shared_info(
        role: Role,
        nonce: &Self::Secret,
        peer: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, CkgError>;
}

/// Version 1 nonces: random byte strings of the digest size.
#[derive(Debug, Clone, Copy)]
pub struct RawNonce;

impl<C: CkgCurve, D: CkgDigest> NonceStrategy<C, D> for RawNonce {
    const VERSION: Version = Version::V1;

    type Secret = Zeroizing<Vec<u8>>;

    fn generate<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self::Secret, CkgError> {
        let mut nonce = Zeroizing::new(vec![0u8; <D as Digest>::output_size()]);
        rng.try_fill_bytes(&mut nonce)
            .map_err(|e| CkgError::rng(e.to_string()))?;

        Ok(nonce)
    }

    fn public_len() -> usize {
        <D as Digest>::output_size()
    }

    fn public_bytes(nonce: &Self::Secret) -> Zeroizing<Vec<u8>> {
        nonce.clone()
    }

    fn shared_info(
        role: Role,
        nonce: &Self::Secret,
        peer: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, CkgError> {
        let (first, second) = match role {
            Role::Contributor => (nonce.as_slice(), peer),
            Role::Owner => (peer, nonce.as_slice()),
        };

        let mut info = Zeroizing::new(Vec::with_capacity(first.len() + second.len()));
        info.extend_from_slice(first);
        info.extend_from_slice(second);

        Ok(info)
    }
}

/// Version 2 nonces: scalars whose public part is `r·G`.
///
/// The shared info is the encoding of `r1·R2 = r2·R1`.
#[derive(Debug, Clone, Copy)]
pub struct EcdhNonce;

impl<C: CkgCurve, D: CkgDigest> NonceStrategy<C, D> for EcdhNonce {
    const VERSION: Version = Version::V2;

    type Secret = SecretKey<C>;

    fn generate<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self::Secret, CkgError> {
        random_scalar::<C, R>(rng).map(SecretKey::from)
    }

    fn public_len() -> usize {
        C::ID.point_len()
    }

    fn public_bytes(nonce: &Self::Secret) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(C::encode_point(&nonce.public_key()))
    }

    fn shared_info(
        _role: Role,
        nonce: &Self::Secret,
        peer: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, CkgError> {
        let peer = C::decode_point(peer)?;
        let shared = (peer.to_projective() * *nonce.to_nonzero_scalar()).to_affine();
        let shared = PublicKey::<C>::from_affine(shared)
            .map_err(|_| CkgError::invalid_input("nonce agreement produced the identity"))?;

        Ok(Zeroizing::new(C::encode_point(&shared)))
    }
}
