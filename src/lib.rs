//! # Verifiable Credential JSON
//!
//! An extensible JSON codec for W3C [Verifiable Credentials]: strictly typed
//! schema fields combined with open-world capture of issuer-defined
//! properties, preserved in source order through decode/encode cycles.
//!
//! ```
//! use std::str::FromStr;
//!
//! use vc_json::VerifiableCredential;
//!
//! let vc = VerifiableCredential::from_str(
//!     r#"{"@context":["https://www.w3.org/2018/credentials/v1"],
//!         "type":["VerifiableCredential"],"issuer":"did:sov:issuer",
//!         "issuanceDate":"2022-01-01T12:00:00Z",
//!         "credentialSubject":{"name":"John Doe"},
//!         "extra":"value2","extraList":["OK","MOK"]}"#,
//! )?;
//!
//! let keys: Vec<&String> = vc.extra.keys().collect();
//! assert_eq!(keys, ["extra", "extraList"]);
//! # Ok::<(), vc_json::Error>(())
//! ```
//!
//! [Verifiable Credentials]: https://www.w3.org/TR/vc-data-model

mod codec;
pub mod credential;
pub mod error;
pub mod scalar;
pub mod value;

#[cfg(test)]
mod test_utils;

/// Re-export credential types
pub use crate::credential::{
    CredentialBuilder, CredentialRequest, CredentialRequestWithoutIssuer, CredentialStatus,
    IssuedVerifiableCredential, ListCredentialRequest, ListCredentialSubject, Proof,
    VerifiableCredential,
};
pub use crate::error::Error;
/// Re-export the dynamic value model
pub use crate::value::{Map, ToValue, Value};

/// Result type for credential encoding and decoding.
pub type Result<T, E = Error> = core::result::Result<T, E>;
