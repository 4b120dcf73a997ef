//! Protocol messages.

use serde::{Deserialize, Serialize};

macro_rules! message {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name(Vec<u8>);

        impl $name {
            pub(crate) fn new(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }

            /// Returns the encoded message.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Returns the encoded message, consuming `self`.
            pub fn into_bytes(self) -> Vec<u8> {
                self.0
            }

            /// Returns the length of the encoded message.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns `true` if the message is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<$name> for CkgMessage {
            fn from(value: $name) -> Self {
                CkgMessage::$name(value)
            }
        }
    };
}

message!(
    /// Contributor's commitment, `H(s1 || nonce1)`.
    Commitment
);

message!(
    /// Owner's share, `s2·G || nonce2`.
    Share
);

message!(
    /// Contributor's opening of its commitment, `s1 || nonce1`.
    Opening
);

/// A message sent between the parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum CkgMessage {
    Commitment(Commitment),
    Share(Share),
    Opening(Opening),
}
