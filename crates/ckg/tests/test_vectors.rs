//! Known-answer tests for P-224 with SHA-256.

use ckg::{
    v2, CkgCurve, CkgParams, Contributor, CurveId, DigestId, EcdhNonce, NistP224, NonceStrategy,
    Owner, RawNonce, Sha256,
};
use rand_core::{impls, CryptoRng, RngCore};

/// A generator which returns a fixed byte sequence.
struct ScriptedRng {
    bytes: Vec<u8>,
    pos: usize,
}

impl ScriptedRng {
    fn new(parts: &[&str]) -> Self {
        Self {
            bytes: parts.iter().flat_map(|part| hex::decode(part).unwrap()).collect(),
            pos: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let end = self.pos + dst.len();
        dst.copy_from_slice(&self.bytes[self.pos..end]);
        self.pos = end;
    }
}

impl CryptoRng for ScriptedRng {}

struct Vector {
    s1: &'static str,
    r1: &'static str,
    s2: &'static str,
    r2: &'static str,
    commitment: &'static str,
    share: &'static str,
    opening: &'static str,
    public_key: &'static str,
    secret_key: &'static str,
    shared_secret: &'static str,
}

const V1_VECTOR: Vector = Vector {
    s1: "64f11feab6aa7b7f364c61c5ba075d319fb8164b925466fd84efa96c",
    r1: "274675bd4de5ad5fd2d4f811b8d24e6e3a68cf7d822c1245b4ea56621b0a03f9",
    s2: "1b732f46b93c27b15fbe285ae1cc396819064af156544d5efd2edd1b",
    r2: "ca496484ff3370eb60d1a0b83b2f783d0b5168edf7c9f829196dc5185bb00534",
    commitment: "082f77a7dbc44ef421fad864ff5698e1c153b042b058db66de2963947e523f4a",
    share: "047929327d234a167ba7ff1cfe4a7b9c156b1db7a6b281491c4e7694088c9e4e8f1457dba704f3bf3786f01d86926afac726ee48ada54633d0\
            ca496484ff3370eb60d1a0b83b2f783d0b5168edf7c9f829196dc5185bb00534",
    opening: "64f11feab6aa7b7f364c61c5ba075d319fb8164b925466fd84efa96c\
              274675bd4de5ad5fd2d4f811b8d24e6e3a68cf7d822c1245b4ea56621b0a03f9",
    public_key: "049a9a575d1e16e32774b2b323f220002b3d6f272c206370e9eb8fe30684d197acc53f425f11c0e69ac27b87348f89ce5bf51a5a6e113c4eb9",
    secret_key: "80644f316fe6a330960a8a209bd39699b8be613ce8a8b45c821e8687",
    shared_secret: "2d34084f114f39523cb962271fbad282aae95357f3c311ac7545b9a397bc08e1",
};

const V2_VECTOR: Vector = Vector {
    s1: "e1730a180ff96732fc74ed7d85841ec65b6e045da855fccd4deca7dd",
    r1: "1f9b347645e42e3a18a817d4b2ebc5bbf9f57b0831d6ad46e005845a",
    s2: "098378da2e5a5157f6d70f95fbb77614009a81b69ce7146db4c4e9b9",
    r2: "3e17b0468d2aa2dbb52f7e8d22c3f8832a9d0700da6f005cfa2d1447",
    commitment: "006f6684df928695470483f9e51b0218e716bafa1dbedced554f0240f14c1697",
    share: "04a1c254017ab6299d5922ee39a0887e234e03741b1fb6138d1af34965a3f791bbe7765e8f1b2066d52b1256f19b30d486948e4c0fef9642aa\
            040058bc7b471ab9e72a65d83227df91bf48edd4c6740fdb5a5cde872730ddc519acf168aecb12bb9065656704c6183f6244d762e3c8fda8af",
    opening: "e1730a180ff96732fc74ed7d85841ec65b6e045da855fccd4deca7dd\
              0481b02bdb0b9cc8165d09b3e3f1a59714cd1d3434e63106662965fb68ea080630fb0c067d8c359601bbafc492816fd69df4c90e2609fb510a",
    public_key: "04736beb2dd15f2e5ffc5220da572f6ed6176e5aa431e3c50b6c7f572e2b40a0684d1b20ff137cbfbf7d1ea0a40f9c556ca4b2857ee122d5c6",
    secret_key: "eaf682f23e53b88af34bfd13813b94da5c088614453d113b02b19196",
    shared_secret: "9f98d44e0e20c4bb46688e456485ee85c8b703791c52cd85c6051e26e01afecb",
};

fn check_vector<N>(params: &CkgParams, vector: &Vector)
where
    N: NonceStrategy<NistP224, Sha256>,
{
    let mut contributor = Contributor::<NistP224, Sha256, N>::new(params).unwrap();
    let mut owner = Owner::<NistP224, Sha256, N>::new(params).unwrap();

    let mut rng = ScriptedRng::new(&[vector.s1, vector.r1]);
    let commitment = contributor.commit(&mut rng).unwrap();
    assert!(rng.is_exhausted());
    assert_eq!(hex::encode(commitment.as_bytes()), vector.commitment);

    let mut rng = ScriptedRng::new(&[vector.s2, vector.r2]);
    let share = owner.generate_share(commitment.as_bytes(), &mut rng).unwrap();
    assert!(rng.is_exhausted());
    assert_eq!(hex::encode(share.as_bytes()), vector.share);

    let contributor_output = contributor.finish(share.as_bytes(), 32).unwrap();
    assert_eq!(
        hex::encode(contributor_output.opening.as_bytes()),
        vector.opening
    );
    assert_eq!(
        hex::encode(NistP224::encode_point(&contributor_output.public_key)),
        vector.public_key
    );
    assert_eq!(
        hex::encode(contributor_output.shared_secret.as_bytes()),
        vector.shared_secret
    );

    let owner_output = owner
        .finish(contributor_output.opening.as_bytes(), 32)
        .unwrap();
    assert_eq!(
        hex::encode(owner_output.secret_key.to_bytes()),
        vector.secret_key
    );
    assert_eq!(
        hex::encode(NistP224::encode_point(&owner_output.public_key())),
        vector.public_key
    );
    assert_eq!(
        hex::encode(owner_output.shared_secret.as_bytes()),
        vector.shared_secret
    );
}

#[test]
fn test_v1_vector() {
    check_vector::<RawNonce>(&CkgParams::v1(CurveId::P224, DigestId::Sha256), &V1_VECTOR);
}

#[test]
fn test_v2_vector() {
    check_vector::<EcdhNonce>(&CkgParams::p224_sha256_v2(), &V2_VECTOR);
}

#[test]
fn test_v2_aliases() {
    let params = CkgParams::p224_sha256_v2();
    let mut contributor = v2::Contributor::new(&params).unwrap();
    let mut owner = v2::Owner::new(&params).unwrap();

    let mut rng = ScriptedRng::new(&[V2_VECTOR.s1, V2_VECTOR.r1, V2_VECTOR.s2, V2_VECTOR.r2]);
    let commitment = contributor.commit(&mut rng).unwrap();
    let share = owner.generate_share(commitment.as_bytes(), &mut rng).unwrap();
    let contributor_output = contributor.finish(share.as_bytes(), 32).unwrap();
    let owner_output = owner
        .finish(contributor_output.opening.as_bytes(), 32)
        .unwrap();

    assert_eq!(
        hex::encode(owner_output.shared_secret.as_bytes()),
        V2_VECTOR.shared_secret
    );
}
