use std::{fmt, marker::PhantomData};

use elliptic_curve::{group::Curve as _, PublicKey, SecretKey};
use rand_core::TryCryptoRng;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::{
    curve::{random_scalar, scalar_bytes, x_coordinate, CkgCurve},
    error::CkgError,
    hash::{hash_parts, CkgDigest},
    kdf::{self, SharedSecret},
    msg::{Commitment, Opening},
    nonce::NonceStrategy,
    CkgParams, Role, State,
};

/// Output of the contributor.
#[derive(Debug)]
pub struct ContributorOutput<C: CkgCurve> {
    /// The generated public key.
    pub public_key: PublicKey<C>,
    /// The derived shared secret.
    pub shared_secret: SharedSecret,
    /// The opening which must be sent to the owner.
    pub opening: Opening,
}

enum Inner<C: CkgCurve, S> {
    Init,
    Committed { scalar: SecretKey<C>, nonce: S },
    Finished,
}

/// The contributor of the key generation protocol.
///
/// The contributor contributes a random scalar to the key and learns the
/// public key and the shared secret, but never the private key.
pub struct Contributor<C: CkgCurve, D: CkgDigest, N: NonceStrategy<C, D>> {
    params: CkgParams,
    inner: Inner<C, N::Secret>,
    _pd: PhantomData<fn() -> D>,
}

impl<C, D, N> Contributor<C, D, N>
where
    C: CkgCurve,
    D: CkgDigest,
    N: NonceStrategy<C, D>,
{
    /// Creates a new contributor.
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
            Inner::Committed { .. } => State::Commit,
            Inner::Finished => State::Finish,
        }
    }

    /// Samples the contribution and returns the commitment to it.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator.
    #[instrument(level = "debug", skip_all, err)]
    pub fn commit<R>(&mut self, rng: &mut R) -> Result<Commitment, CkgError>
    where
        R: TryCryptoRng + ?Sized,
    {
        if !matches!(self.inner, Inner::Init) {
            return Err(CkgError::call_sequence(format!(
                "contributor can not commit in state {:?}",
                self.state()
            )));
        }

        let scalar = SecretKey::from(random_scalar::<C, R>(rng)?);
        let nonce = N::generate(rng)?;

        let opening = opening_bytes::<C, D, N>(&scalar, &nonce);
        let commitment = Commitment::new(hash_parts::<D>(&[opening.as_slice()]).to_vec());

        self.inner = Inner::Committed { scalar, nonce };
        debug!(
            role = ?Role::Contributor,
            version = ?N::VERSION,
            state = ?State::Commit,
            "contributor committed"
        );

        Ok(commitment)
    }

    /// Completes the protocol using the owner's share.
    ///
    /// On success the contributor holds no more secrets and every further
    /// call fails.
    ///
    /// # Arguments
    ///
    /// * `share` - The share received from the owner.
    /// * `secret_len` - The length of the shared secret to derive.
    #[instrument(level = "debug", skip_all, err)]
    pub fn finish(
        &mut self,
        share: &[u8],
        secret_len: usize,
    ) -> Result<ContributorOutput<C>, CkgError> {
        let Inner::Committed { scalar, nonce } = &self.inner else {
            return Err(CkgError::call_sequence(format!(
                "contributor can not finish in state {:?}",
                self.state()
            )));
        };

        if share.len() != self.params.share_len() {
            return Err(CkgError::parameter(format!(
                "share must be {} bytes, got {}",
                self.params.share_len(),
                share.len()
            )));
        }

        let (owner_point, owner_nonce) = share.split_at(C::ID.point_len());
        let owner_point = C::decode_point(owner_point)?;

        let public_key = owner_point.to_projective() + scalar.public_key().to_projective();
        let public_key = PublicKey::<C>::from_affine(public_key.to_affine())
            .map_err(|_| CkgError::invalid_input("public key is the identity"))?;

        let shared_info = N::shared_info(Role::Contributor, nonce, owner_nonce)?;
        let shared_secret = kdf::derive::<D>(&x_coordinate(&public_key), &shared_info, secret_len)?;

        let opening = Opening::new(opening_bytes::<C, D, N>(scalar, nonce).to_vec());

        self.inner = Inner::Finished;
        debug!(
            role = ?Role::Contributor,
            version = ?N::VERSION,
            state = ?State::Finish,
            "contributor finished"
        );

        Ok(ContributorOutput {
            public_key,
            shared_secret,
            opening,
        })
    }
}

impl<C, D, N> fmt::Debug for Contributor<C, D, N>
where
    C: CkgCurve,
    D: CkgDigest,
    N: NonceStrategy<C, D>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contributor")
            .field("params", &self.params)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Returns `s || nonce`, which is both the commitment preimage and the
/// opening.
fn opening_bytes<C, D, N>(scalar: &SecretKey<C>, nonce: &N::Secret) -> Zeroizing<Vec<u8>>
where
    C: CkgCurve,
    D: CkgDigest,
    N: NonceStrategy<C, D>,
{
    let mut bytes = Zeroizing::new(Vec::with_capacity(C::ID.order_len() + N::public_len()));
    bytes.extend_from_slice(&scalar_bytes(scalar));
    bytes.extend_from_slice(&N::public_bytes(nonce));
    bytes
}
