//! Curve operations used by the protocol.

use elliptic_curve::{
    ff::PrimeField, point::AffineCoordinates, sec1::ToEncodedPoint, CurveArithmetic,
    FieldBytes, NonZeroScalar, PublicKey, SecretKey,
};
use rand_core::TryCryptoRng;
use zeroize::Zeroizing;

pub use p192::NistP192;
pub use p224::NistP224;
pub use p256::NistP256;
pub use p384::NistP384;
pub use p521::NistP521;

use crate::{error::CkgError, CurveId};

/// SEC1 tag of an uncompressed point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Maximum number of candidates drawn when sampling a scalar.
const MAX_SAMPLE_ATTEMPTS: usize = 100;

/// A curve supported by the protocol.
pub trait CkgCurve: CurveArithmetic {
    /// Identifier of the curve.
    const ID: CurveId;

    /// Encodes a point in uncompressed SEC1 form.
    fn encode_point(point: &PublicKey<Self>) -> Vec<u8>;

    /// Decodes an uncompressed SEC1 point.
    ///
    /// Rejects any other encoding, points which are not on the curve and the
    /// identity.
    fn decode_point(bytes: &[u8]) -> Result<PublicKey<Self>, CkgError>;
}

macro_rules! impl_ckg_curve {
    ($curve:ty, $id:expr) => {
        impl CkgCurve for $curve {
            const ID: CurveId = $id;

            fn encode_point(point: &PublicKey<Self>) -> Vec<u8> {
                point.to_encoded_point(false).as_bytes().to_vec()
            }

            fn decode_point(bytes: &[u8]) -> Result<PublicKey<Self>, CkgError> {
                if bytes.len() != Self::ID.point_len() {
                    return Err(CkgError::invalid_input(format!(
                        "point must be {} bytes, got {}",
                        Self::ID.point_len(),
                        bytes.len()
                    )));
                }

                if bytes[0] != UNCOMPRESSED_TAG {
                    return Err(CkgError::invalid_input(format!(
                        "point is not uncompressed, tag: {:#04x}",
                        bytes[0]
                    )));
                }

                PublicKey::from_sec1_bytes(bytes)
                    .map_err(|_| CkgError::invalid_input("point is not on the curve"))
            }
        }
    };
}

impl_ckg_curve!(NistP192, CurveId::P192);
impl_ckg_curve!(NistP224, CurveId::P224);
impl_ckg_curve!(NistP256, CurveId::P256);
impl_ckg_curve!(NistP384, CurveId::P384);
impl_ckg_curve!(NistP521, CurveId::P521);

/// Samples a uniformly random scalar in `[1, n-1]`.
///
/// Candidates are drawn as big-endian byte strings of the order size with the
/// bits above the order's bit length cleared, and rejected if out of range.
pub(crate) fn random_scalar<C, R>(rng: &mut R) -> Result<NonZeroScalar<C>, CkgError>
where
    C: CkgCurve,
    R: TryCryptoRng + ?Sized,
{
    let len = C::ID.order_len();
    let excess_bits = len * 8 - C::Scalar::NUM_BITS as usize;
    let mut candidate = Zeroizing::new(vec![0u8; len]);

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        rng.try_fill_bytes(&mut candidate)
            .map_err(|e| CkgError::rng(e.to_string()))?;
        candidate[0] &= 0xff >> excess_bits;

        if let Ok(scalar) = NonZeroScalar::<C>::try_from(candidate.as_slice()) {
            return Ok(scalar);
        }
    }

    Err(CkgError::rng("failed to sample a scalar"))
}

/// Parses a big-endian scalar, which must be in `[1, n-1]`.
pub(crate) fn parse_scalar<C: CkgCurve>(bytes: &[u8]) -> Result<NonZeroScalar<C>, CkgError> {
    NonZeroScalar::<C>::try_from(bytes)
        .map_err(|_| CkgError::parameter("scalar is out of range"))
}

/// Returns the big-endian encoding of the secret scalar.
pub(crate) fn scalar_bytes<C: CkgCurve>(secret: &SecretKey<C>) -> Zeroizing<FieldBytes<C>> {
    Zeroizing::new(secret.to_bytes())
}

/// Returns the x-coordinate of the point, padded to the field size.
pub(crate) fn x_coordinate<C: CkgCurve>(point: &PublicKey<C>) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(point.as_affine().x().to_vec())
}
