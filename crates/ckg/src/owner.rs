use std::{fmt, marker::PhantomData};

use elliptic_curve::{NonZeroScalar, PublicKey, SecretKey};
use rand_core::TryCryptoRng;
use subtle::ConstantTimeEq;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::{
    curve::{parse_scalar, random_scalar, x_coordinate, CkgCurve},
    error::CkgError,
    hash::{hash_parts, CkgDigest},
    kdf::{self, SharedSecret},
    msg::Share,
    nonce::NonceStrategy,
    CkgParams, Role, State,
};

/// Output of the owner.
#[derive(Debug)]
pub struct OwnerOutput<C: CkgCurve> {
    /// The generated private key.
    pub secret_key: SecretKey<C>,
    /// The derived shared secret.
    pub shared_secret: SharedSecret,
}

impl<C: CkgCurve> OwnerOutput<C> {
    /// Returns the generated public key.
    pub fn public_key(&self) -> PublicKey<C> {
        self.secret_key.public_key()
    }
}

enum Inner<C: CkgCurve, S> {
    Init,
    Shared {
        commitment: Vec<u8>,
        scalar: SecretKey<C>,
        nonce: S,
    },
    Finished,
}

/// The owner of the key generation protocol.
///
/// The owner is the only party which learns the generated private key.
pub struct Owner<C: CkgCurve, D: CkgDigest, N: NonceStrategy<C, D>> {
    params: CkgParams,
    inner: Inner<C, N::Secret>,
    _pd: PhantomData<fn() -> D>,
}

impl<C, D, N> Owner<C, D, N>
where
    C: CkgCurve,
    D: CkgDigest,
    N: NonceStrategy<C, D>,
{
    /// Creates a new owner.
    ///
    /// # Arguments
    ///
    /// * `params` - The protocol parameters, which must match the curve,
    ///   digest and version of this context.
    pub fn new(params: &CkgParams) -> Result<Self, CkgError> {
        params.check::<C, D, N>()?;

        Ok(Self {
            params: *params,
            inner: Inner::Init,
            _pd: PhantomData,
        })
    }

    /// Returns the protocol parameters.
    pub fn params(&self) -> &CkgParams {
        &self.params
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        match self.inner {
            Inner::Init => State::Init,
            Inner::Shared { .. } => State::Share,
            Inner::Finished => State::Finish,
        }
    }

    /// Stores the contributor's commitment and returns the owner's share.
    ///
    /// # Arguments
    ///
    /// * `commitment` - The commitment received from the contributor.
    /// * `rng` - A cryptographically secure random number generator.
    #[instrument(level = "debug", skip_all, err)]
    pub fn generate_share<R>(&mut self, commitment: &[u8], rng: &mut R) -> Result<Share, CkgError>
    where
        R: TryCryptoRng + ?Sized,
    {
        if !matches!(self.inner, Inner::Init) {
            return Err(CkgError::call_sequence(format!(
                "owner can not generate a share in state {:?}",
                self.state()
            )));
        }

        if commitment.len() != self.params.commitment_len() {
            return Err(CkgError::parameter(format!(
                "commitment must be {} bytes, got {}",
                self.params.commitment_len(),
                commitment.len()
            )));
        }

        let scalar = SecretKey::from(random_scalar::<C, R>(rng)?);
        let nonce = N::generate(rng)?;

        let mut share = C::encode_point(&scalar.public_key());
        share.extend_from_slice(&N::public_bytes(&nonce));

        self.inner = Inner::Shared {
            commitment: commitment.to_vec(),
            scalar,
            nonce,
        };
        debug!(
            role = ?Role::Owner,
            version = ?N::VERSION,
            state = ?State::Share,
            "owner generated share"
        );

        Ok(Share::new(share))
    }

    /// Verifies the contributor's opening and completes the protocol.
    ///
    /// On success the owner holds no more secrets and every further call
    /// fails.
    ///
    /// # Arguments
    ///
    /// * `opening` - The opening received from the contributor.
    /// * `secret_len` - The length of the shared secret to derive.
    #[instrument(level = "debug", skip_all, err)]
    pub fn finish(&mut self, opening: &[u8], secret_len: usize) -> Result<OwnerOutput<C>, CkgError> {
        let Inner::Shared {
            commitment,
            scalar,
            nonce,
        } = &self.inner
        else {
            return Err(CkgError::call_sequence(format!(
                "owner can not finish in state {:?}",
                self.state()
            )));
        };

        if opening.len() != self.params.opening_len() {
            return Err(CkgError::parameter(format!(
                "opening must be {} bytes, got {}",
                self.params.opening_len(),
                opening.len()
            )));
        }

        let expected = hash_parts::<D>(&[opening]);
        if !bool::from(expected.as_slice().ct_eq(commitment)) {
            return Err(CkgError::integrity());
        }

        let (contributor_scalar, contributor_nonce) = opening.split_at(C::ID.order_len());
        let contributor_scalar = Zeroizing::new(parse_scalar::<C>(contributor_scalar)?);

        let sum = Zeroizing::new(**contributor_scalar + *scalar.to_nonzero_scalar());
        let secret_key = Option::<NonZeroScalar<C>>::from(NonZeroScalar::new(*sum))
            .map(SecretKey::from)
            .ok_or_else(|| CkgError::invalid_input("private key is zero"))?;

        let shared_info = N::shared_info(Role::Owner, nonce, contributor_nonce)?;
        let shared_secret = kdf::derive::<D>(
            &x_coordinate(&secret_key.public_key()),
            &shared_info,
            secret_len,
        )?;

        self.inner = Inner::Finished;
        debug!(
            role = ?Role::Owner,
            version = ?N::VERSION,
            state = ?State::Finish,
            "owner finished"
        );

        Ok(OwnerOutput {
            secret_key,
            shared_secret,
        })
    }
}

impl<C, D, N> fmt::Debug for Owner<C, D, N>
where
    C: CkgCurve,
    D: CkgDigest,
    N: NonceStrategy<C, D>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owner")
            .field("params", &self.params)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
