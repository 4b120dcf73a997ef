//! Helpers for running the protocol in-process.

use rand_core::TryCryptoRng;

use crate::{
    CkgCurve, CkgDigest, CkgError, CkgParams, Contributor, ContributorOutput, NonceStrategy,
    Owner, OwnerOutput,
};

/// Creates a mock pair of contributor and owner.
pub fn create_mock_ckg_pair<C, D, N>(
    params: &CkgParams,
) -> Result<(Contributor<C, D, N>, Owner<C, D, N>), CkgError>
where
    C: CkgCurve,
    D: CkgDigest,
    N: NonceStrategy<C, D>,
{
    Ok((Contributor::new(params)?, Owner::new(params)?))
}

/// Runs an honest protocol execution between a mock pair, passing the
/// messages directly.
pub fn run_mock_ckg<C, D, N, R>(
    params: &CkgParams,
    secret_len: usize,
    rng: &mut R,
) -> Result<(ContributorOutput<C>, OwnerOutput<C>), CkgError>
where
    C: CkgCurve,
    D: CkgDigest,
    N: NonceStrategy<C, D>,
    R: TryCryptoRng + ?Sized,
{
    let (mut contributor, mut owner) = create_mock_ckg_pair::<C, D, N>(params)?;

    let commitment = contributor.commit(rng)?;
    let share = owner.generate_share(commitment.as_bytes(), rng)?;
    let contributor_output = contributor.finish(share.as_bytes(), secret_len)?;
    let owner_output = owner.finish(contributor_output.opening.as_bytes(), secret_len)?;

    Ok((contributor_output, owner_output))
}
