use core::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{curve::CkgCurve, error::CkgError, hash::CkgDigest, nonce::NonceStrategy, Version};

/// Supported elliptic curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    /// NIST P-192.
    P192,
    /// NIST P-224.
    P224,
    /// NIST P-256.
    P256,
    /// NIST P-384.
    P384,
    /// NIST P-521.
    P521,
}

impl CurveId {
    /// Returns the size of an encoded field element in bytes.
    pub const fn field_len(&self) -> usize {
        match self {
            CurveId::P192 => 24,
            CurveId::P224 => 28,
            CurveId::P256 => 32,
            CurveId::P384 => 48,
            CurveId::P521 => 66,
        }
    }

    /// Returns the size of an encoded scalar in bytes.
    pub const fn order_len(&self) -> usize {
        // The group order has the same byte length as the field modulus for
        // every supported curve.
        self.field_len()
    }

    /// Returns the size of an uncompressed SEC1 point encoding in bytes.
    pub const fn point_len(&self) -> usize {
        1 + 2 * self.field_len()
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveId::P192 => write!(f, "P-192"),
            CurveId::P224 => write!(f, "P-224"),
            CurveId::P256 => write!(f, "P-256"),
            CurveId::P384 => write!(f, "P-384"),
            CurveId::P521 => write!(f, "P-521"),
        }
    }
}

/// Supported digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestId {
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl DigestId {
    /// Returns the output size of the digest in bytes.
    pub const fn output_len(&self) -> usize {
        match self {
            DigestId::Sha256 => 32,
            DigestId::Sha384 => 48,
            DigestId::Sha512 => 64,
        }
    }
}

impl fmt::Display for DigestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestId::Sha256 => write!(f, "SHA-256"),
            DigestId::Sha384 => write!(f, "SHA-384"),
            DigestId::Sha512 => write!(f, "SHA-512"),
        }
    }
}

/// Protocol parameters.
///
/// Both parties must use the same parameters. They determine the size of
/// every protocol message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct CkgParams {
    /// The protocol version.
    #[builder(default = "Version::V1")]
    version: Version,
    /// The curve of the generated key.
    curve: CurveId,
    /// The digest used for the commitment and the KDF.
    digest: DigestId,
}

impl CkgParams {
    /// Creates a new builder for the protocol parameters.
    pub fn builder() -> CkgParamsBuilder {
        CkgParamsBuilder::default()
    }

    /// Returns version 1 parameters for the given curve and digest.
    pub fn v1(curve: CurveId, digest: DigestId) -> Self {
        Self {
            version: Version::V1,
            curve,
            digest,
        }
    }

    /// Returns the version 2 parameters for P-224 with SHA-256.
    pub fn p224_sha256_v2() -> Self {
        Self {
            version: Version::V2,
            curve: CurveId::P224,
            digest: DigestId::Sha256,
        }
    }

    /// Returns the protocol version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the curve.
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Returns the digest.
    pub fn digest(&self) -> DigestId {
        self.digest
    }

    /// Returns the size of an encoded scalar.
    pub fn order_len(&self) -> usize {
        self.curve.order_len()
    }

    /// Returns the size of an encoded point.
    pub fn point_len(&self) -> usize {
        self.curve.point_len()
    }

    /// Returns the digest output size.
    pub fn digest_len(&self) -> usize {
        self.digest.output_len()
    }

    /// Returns the size of a public nonce.
    pub fn nonce_len(&self) -> usize {
        match self.version {
            Version::V1 => self.digest_len(),
            Version::V2 => self.point_len(),
        }
    }

    /// Returns the size of the commitment message.
    pub fn commitment_len(&self) -> usize {
        self.digest_len()
    }

    /// Returns the size of the share message.
    pub fn share_len(&self) -> usize {
        self.point_len() + self.nonce_len()
    }

    /// Returns the size of the opening message.
    pub fn opening_len(&self) -> usize {
        self.order_len() + self.nonce_len()
    }

    /// Checks that the parameters describe a context instantiated with `C`,
    /// `D` and `N`.
    pub(crate) fn check<C, D, N>(&self) -> Result<(), CkgError>
    where
        C: CkgCurve,
        D: CkgDigest,
        N: NonceStrategy<C, D>,
    {
        if self.version != N::VERSION {
            return Err(CkgError::parameter(format!(
                "expected version {:?}, got {:?}",
                N::VERSION,
                self.version
            )));
        }

        if self.curve != C::ID {
            return Err(CkgError::parameter(format!(
                "expected curve {}, got {}",
                C::ID,
                self.curve
            )));
        }

        if self.digest != D::ID {
            return Err(CkgError::parameter(format!(
                "expected digest {}, got {}",
                D::ID,
                self.digest
            )));
        }

        debug_assert_eq!(N::public_len(), self.nonce_len());

        Ok(())
    }
}
