//! # Credential Data Model
//!
//! Typed documents for the W3C [Verifiable Credentials Data Model v1.1],
//! carrying a fixed schema core next to an open, order-preserving set of
//! issuer-defined properties. The wire codec for these types is the pair of
//! `Serialize`/`Deserialize` impls on the document types.
//!
//! [Verifiable Credentials Data Model v1.1]: (https://www.w3.org/TR/vc-data-model)

use std::fmt::{self, Display};
use std::str::FromStr;

use anyhow::bail;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::value::{Map, ToValue, Value};
use crate::Result;

/// A credential document as held before or after issuance.
///
/// Decoding accepts any JSON object carrying the mandatory schema fields and
/// captures every other top-level property into [`extra`](Self::extra) in
/// source order. Encoding emits the schema fields first, in declaration
/// order, then the extension properties in their captured order, so a decode
/// followed by an encode reproduces the source property order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerifiableCredential {
    /// The credential's URI, e.g. "`http://example.edu/credentials/3732`".
    ///
    /// An explicit JSON `null` in the source decodes to the literal string
    /// `"null"`, not to an unset id. Stored documents rely on that behavior,
    /// so the codec keeps it.
    pub id: Option<String>,

    /// The `@context` property maps property URIs into short-form aliases.
    /// It is an ordered set where the first item is
    /// "`https://www.w3.org/2018/credentials/v1`".
    pub context: Vec<String>,

    /// Uniquely identifies the type of the credential, i.e. the set of
    /// claims it contains. An ordered set of URIs beginning with
    /// "`VerifiableCredential`".
    pub type_: Vec<String>,

    /// The DID or business partner number of the credential's issuer.
    pub issuer: String,

    /// An RFC 3339 date-time the credential becomes valid,
    /// e.g. `2010-01-01T19:23:24Z`. Carried as text; the codec does not
    /// validate the format.
    pub issuance_date: String,

    /// An RFC 3339 date-time the credential ceases to be valid.
    pub expiration_date: Option<String>,

    /// Claims about the credential subject(s), in source order.
    pub credential_subject: Map,

    /// Describes how the current status of the credential (suspended,
    /// revoked) can be discovered.
    pub credential_status: Option<CredentialStatus>,

    /// A cryptographic proof used to detect tampering and verify authorship.
    /// Absent until issuance; see [`IssuedVerifiableCredential`] for the
    /// post-issuance document, where the proof is mandatory.
    pub proof: Option<Proof>,

    /// Every top-level property outside the fixed schema, in the order first
    /// encountered. Typed payloads embed here through
    /// [`ToValue`](crate::ToValue).
    pub extra: Map,
}

impl VerifiableCredential {
    /// First entry of every credential's `@context`.
    pub const BASE_CONTEXT: &'static str = "https://www.w3.org/2018/credentials/v1";
    /// First entry of every credential's `type`.
    pub const BASE_TYPE: &'static str = "VerifiableCredential";

    /// Returns a new [`CredentialBuilder`], which can be used to build a
    /// [`VerifiableCredential`].
    #[must_use]
    pub fn builder() -> CredentialBuilder {
        CredentialBuilder::new()
    }

    /// Attaches a proof, turning the document into an
    /// [`IssuedVerifiableCredential`].
    #[must_use]
    pub fn issue(self, proof: Proof) -> IssuedVerifiableCredential {
        IssuedVerifiableCredential {
            id: self.id,
            context: self.context,
            type_: self.type_,
            issuer: self.issuer,
            issuance_date: self.issuance_date,
            expiration_date: self.expiration_date,
            credential_subject: self.credential_subject,
            credential_status: self.credential_status,
            proof,
            extra: self.extra,
        }
    }

    /// Serializes the credential to a JSON value.
    ///
    /// # Errors
    ///
    /// Fails with `Error::Json` when serialization fails, e.g. on a
    /// non-finite float in the subject or extension properties.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Into::into)
    }

    /// Serializes the credential to pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// Fails with `Error::Json` when serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

impl Display for VerifiableCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(s) = serde_json::to_string(self) else {
            return Err(fmt::Error);
        };
        write!(f, "{s}")
    }
}

impl FromStr for VerifiableCredential {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wire: serde_json::Value = serde_json::from_str(s)?;
        crate::codec::decode(&wire)
    }
}

/// A credential document carrying its issuer's proof.
///
/// Schema and round-trip behavior match [`VerifiableCredential`]; the only
/// difference is that decoding fails when the `proof` property is absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IssuedVerifiableCredential {
    /// The credential's URI. Same `null` handling as
    /// [`VerifiableCredential::id`].
    pub id: Option<String>,

    /// The `@context` property, an ordered set of context URIs.
    pub context: Vec<String>,

    /// The ordered set of credential type URIs.
    pub type_: Vec<String>,

    /// The DID or business partner number of the credential's issuer.
    pub issuer: String,

    /// An RFC 3339 date-time the credential becomes valid.
    pub issuance_date: String,

    /// An RFC 3339 date-time the credential ceases to be valid.
    pub expiration_date: Option<String>,

    /// Claims about the credential subject(s), in source order.
    pub credential_subject: Map,

    /// Describes how the current status of the credential can be discovered.
    pub credential_status: Option<CredentialStatus>,

    /// The issuer's cryptographic proof.
    pub proof: Proof,

    /// Every top-level property outside the fixed schema, in the order first
    /// encountered.
    pub extra: Map,
}

impl IssuedVerifiableCredential {
    /// Serializes the credential to a JSON value.
    ///
    /// # Errors
    ///
    /// Fails with `Error::Json` when serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Into::into)
    }

    /// Serializes the credential to pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// Fails with `Error::Json` when serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

impl Display for IssuedVerifiableCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(s) = serde_json::to_string(self) else {
            return Err(fmt::Error);
        };
        write!(f, "{s}")
    }
}

impl FromStr for IssuedVerifiableCredential {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wire: serde_json::Value = serde_json::from_str(s)?;
        crate::codec::decode(&wire)
    }
}

impl From<IssuedVerifiableCredential> for VerifiableCredential {
    fn from(issued: IssuedVerifiableCredential) -> Self {
        Self {
            id: issued.id,
            context: issued.context,
            type_: issued.type_,
            issuer: issued.issuer,
            issuance_date: issued.issuance_date,
            expiration_date: issued.expiration_date,
            credential_subject: issued.credential_subject,
            credential_status: issued.credential_status,
            proof: Some(issued.proof),
            extra: issued.extra,
        }
    }
}

/// `CredentialStatus` points at the status list entry used to discover
/// whether the credential is revoked.
///
/// Decoding is lenient: missing fields fall back to their defaults and
/// unknown fields are ignored, so an incomplete status object never fails
/// the enclosing document.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatus {
    /// A URI where credential status information can be retrieved.
    pub id: String,

    /// The status method, e.g. "`StatusList2021Entry`".
    #[serde(rename = "type")]
    pub type_: String,

    /// The purpose of the status entry, e.g. "`revocation`".
    pub status_purpose: String,

    /// The position of the credential in the status list.
    pub status_list_index: String,

    /// A URL resolving to the status list credential.
    pub status_list_credential: String,
}

impl CredentialStatus {
    /// The status method decoding falls back to.
    pub const TYPE: &'static str = "StatusList2021Entry";
    /// The status purpose decoding falls back to.
    pub const PURPOSE: &'static str = "revocation";
}

impl Default for CredentialStatus {
    fn default() -> Self {
        Self {
            id: String::new(),
            type_: Self::TYPE.to_string(),
            status_purpose: Self::PURPOSE.to_string(),
            status_list_index: String::new(),
            status_list_credential: String::new(),
        }
    }
}

/// A Linked Data proof, as attached to a credential at issuance.
///
/// Decoding is lenient like [`CredentialStatus`]; optional fields that are
/// absent stay absent and are omitted on re-encode. An explicit JSON `null`
/// in an optional field decodes to the literal string `"null"`, which keeps
/// it distinguishable from an absent field.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    /// The proof suite, e.g. "`Ed25519Signature2018`".
    #[serde(rename = "type")]
    pub type_: String,

    /// An RFC 3339 date-time the proof was created.
    pub created: String,

    /// The reason the proof was created, e.g. "`assertionMethod`".
    pub proof_purpose: String,

    /// A URI resolving to the verification method needed to check the proof.
    pub verification_method: String,

    /// A detached JSON Web Signature over the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jws: Option<String>,

    /// The proof value for suites that do not use a JWS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_value: Option<String>,

    /// A URI identifying the proof's creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// The domain the proof is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// A challenge from the requesting party, guarding against replay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,

    /// A nonce included in the signed data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// A request to issue a credential, naming the issuer explicitly.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    /// The id of the credential to issue, as a URI-compatible string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The contexts of the credential to issue.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// The types of the credential to issue.
    #[serde(rename = "type")]
    pub type_: Vec<String>,

    /// The DID or business partner number of the issuer.
    pub issuer_identifier: String,

    /// The issuance date in RFC 3339 format. When absent or `null`, the
    /// current time is used; see [`issuance_date_or_now`](Self::issuance_date_or_now).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance_date: Option<String>,

    /// The expiration date in RFC 3339 format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// The credential subject payload.
    pub credential_subject: Map,

    /// The DID or business partner number of the holder. Ignored when the
    /// subject carries its own `id`, otherwise set as the subject's id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_identifier: Option<String>,

    /// Whether the issued credential is revocable. Defaults to true.
    #[serde(default = "revocable")]
    pub is_revocable: bool,
}

impl CredentialRequest {
    /// The requested issuance date, or the current time in RFC 3339 format
    /// when the request left it unset.
    #[must_use]
    pub fn issuance_date_or_now(&self) -> String {
        self.issuance_date.clone().unwrap_or_else(now_rfc3339)
    }
}

/// A request to issue a credential where the issuer is implied by the wallet
/// handling the request.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequestWithoutIssuer {
    /// The id of the credential to issue, as a URI-compatible string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The contexts of the credential to issue.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// The types of the credential to issue.
    #[serde(rename = "type")]
    pub type_: Vec<String>,

    /// The issuance date in RFC 3339 format. When absent or `null`, the
    /// current time is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance_date: Option<String>,

    /// The expiration date in RFC 3339 format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// The credential subject payload.
    pub credential_subject: Map,

    /// The DID or business partner number of the holder, set as the
    /// subject's id when the subject does not carry one.
    pub holder_identifier: String,

    /// Whether the issued credential is revocable. Defaults to true.
    #[serde(default = "revocable")]
    pub is_revocable: bool,

    /// A URL notified when issuance completes, for self-managed wallets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl CredentialRequestWithoutIssuer {
    /// The requested issuance date, or the current time in RFC 3339 format
    /// when the request left it unset.
    #[must_use]
    pub fn issuance_date_or_now(&self) -> String {
        self.issuance_date.clone().unwrap_or_else(now_rfc3339)
    }
}

const fn revocable() -> bool {
    true
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A request to create or update a status list credential.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ListCredentialRequest {
    /// The id of the status list credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The status list payload.
    pub subject: ListCredentialSubject,
}

/// The subject of a status list credential: a compressed bitstring where
/// each position records the status of one issued credential.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListCredentialSubject {
    /// A URI identifying the status list.
    #[serde(default)]
    pub id: String,

    /// The status list type, e.g. "`StatusList2021`".
    #[serde(rename = "type", default = "list_type")]
    pub type_: String,

    /// The purpose of the list, e.g. "`revocation`".
    #[serde(default = "list_purpose")]
    pub status_purpose: String,

    /// The base64-encoded, compressed bitstring.
    #[serde(default)]
    pub encoded_list: String,
}

impl ListCredentialSubject {
    /// The status list type decoding falls back to.
    pub const TYPE: &'static str = "StatusList2021";
    /// The status purpose decoding falls back to.
    pub const PURPOSE: &'static str = "revocation";
}

impl Default for ListCredentialSubject {
    fn default() -> Self {
        Self {
            id: String::new(),
            type_: Self::TYPE.to_string(),
            status_purpose: Self::PURPOSE.to_string(),
            encoded_list: String::new(),
        }
    }
}

fn list_type() -> String {
    ListCredentialSubject::TYPE.to_string()
}

fn list_purpose() -> String {
    ListCredentialSubject::PURPOSE.to_string()
}

impl ToValue for ListCredentialSubject {
    fn to_value(&self) -> Result<Value> {
        let mut object = Map::new();
        object.insert("id".into(), self.id.to_value()?);
        object.insert("type".into(), self.type_.to_value()?);
        object.insert("statusPurpose".into(), self.status_purpose.to_value()?);
        object.insert("encodedList".into(), self.encoded_list.to_value()?);
        Ok(Value::Object(object))
    }
}

/// [`CredentialBuilder`] is used to build a [`VerifiableCredential`].
#[derive(Clone, Debug, Default)]
pub struct CredentialBuilder {
    vc: VerifiableCredential,
}

impl CredentialBuilder {
    /// Returns a new [`CredentialBuilder`].
    #[must_use]
    pub fn new() -> Self {
        tracing::debug!("CredentialBuilder::new");

        let mut builder: Self = Self::default();

        // set some sensible defaults
        builder.vc.context.push(VerifiableCredential::BASE_CONTEXT.into());
        builder.vc.type_.push(VerifiableCredential::BASE_TYPE.into());
        builder.vc.issuance_date = now_rfc3339();

        builder
    }

    /// Sets the `id` property.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.vc.id = Some(id.into());
        self
    }

    /// Adds a `@context` entry after the base context.
    #[must_use]
    pub fn add_context(mut self, context: impl Into<String>) -> Self {
        self.vc.context.push(context.into());
        self
    }

    /// Adds a `type` entry after the base type.
    #[must_use]
    pub fn add_type(mut self, type_: impl Into<String>) -> Self {
        self.vc.type_.push(type_.into());
        self
    }

    /// Sets the `issuer` property.
    #[must_use]
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.vc.issuer = issuer.into();
        self
    }

    /// Sets the `issuanceDate` property, replacing the current-time default.
    #[must_use]
    pub fn issuance_date(mut self, date: impl Into<String>) -> Self {
        self.vc.issuance_date = date.into();
        self
    }

    /// Sets the `expirationDate` property.
    #[must_use]
    pub fn expiration_date(mut self, date: impl Into<String>) -> Self {
        self.vc.expiration_date = Some(date.into());
        self
    }

    /// Adds a claim to the `credentialSubject` property.
    #[must_use]
    pub fn add_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vc.credential_subject.insert(name.into(), value.into());
        self
    }

    /// Sets the `credentialStatus` property.
    #[must_use]
    pub fn status(mut self, status: CredentialStatus) -> Self {
        self.vc.credential_status = Some(status);
        self
    }

    /// Sets the `proof` property.
    #[must_use]
    pub fn proof(mut self, proof: Proof) -> Self {
        self.vc.proof = Some(proof);
        self
    }

    /// Adds a property outside the fixed schema.
    ///
    /// # Errors
    ///
    /// Fails when `key` names a schema property, or when `value` cannot be
    /// projected, e.g. a non-finite float.
    pub fn add_property(
        mut self, key: impl Into<String>, value: &impl ToValue,
    ) -> anyhow::Result<Self> {
        let key = key.into();
        if crate::codec::SCHEMA_KEYS.contains(&key.as_str()) {
            bail!("`{key}` is a schema property");
        }
        self.vc.extra.insert(key, value.to_value()?);
        Ok(self)
    }

    /// Turns this builder into a [`VerifiableCredential`].
    ///
    /// # Errors
    ///
    /// Fails when any of the credential's mandatory properties are not set.
    pub fn build(self) -> anyhow::Result<VerifiableCredential> {
        tracing::debug!("CredentialBuilder::build");

        if self.vc.context.is_empty() {
            bail!("no context set");
        }
        if self.vc.type_.is_empty() {
            bail!("no type set");
        }
        if self.vc.issuer.is_empty() {
            bail!("no issuer set");
        }
        if self.vc.issuance_date.is_empty() {
            bail!("no issuance date set");
        }
        if self.vc.credential_subject.is_empty() {
            bail!("no credential subject set");
        }

        Ok(self.vc)
    }
}

impl TryFrom<CredentialBuilder> for VerifiableCredential {
    type Error = anyhow::Error;

    fn try_from(builder: CredentialBuilder) -> anyhow::Result<Self, Self::Error> {
        tracing::debug!("VerifiableCredential::try_from");
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::init_tracer;

    #[test]
    fn builder() {
        init_tracer();

        let vc = VerifiableCredential::builder()
            .id("https://example.com/credentials/3732")
            .add_context("https://www.w3.org/2018/credentials/examples/v1")
            .add_type("EmployeeIDCredential")
            .issuer("https://example.com/issuers/14")
            .add_claim("employeeId", "1234567890")
            .build()
            .expect("should build");

        assert_eq!(
            vc.context,
            vec![
                "https://www.w3.org/2018/credentials/v1".to_string(),
                "https://www.w3.org/2018/credentials/examples/v1".to_string()
            ]
        );
        assert_eq!(
            vc.type_,
            vec!["VerifiableCredential".to_string(), "EmployeeIDCredential".to_string()]
        );
        assert!(!vc.issuance_date.is_empty(), "issuance date should default to now");
        assert_eq!(
            vc.credential_subject.get("employeeId"),
            Some(&Value::String("1234567890".into()))
        );
    }

    #[test]
    fn builder_mandatory_fields() {
        init_tracer();

        let err = VerifiableCredential::builder()
            .issuer("did:sov:issuer")
            .build()
            .expect_err("should fail");
        assert_eq!(err.to_string(), "no credential subject set");

        let err = VerifiableCredential::builder()
            .add_claim("name", "John Doe")
            .build()
            .expect_err("should fail");
        assert_eq!(err.to_string(), "no issuer set");
    }

    #[test]
    fn issue_attaches_proof() {
        init_tracer();

        let vc = VerifiableCredential::builder()
            .issuer("did:sov:issuer")
            .add_claim("name", "John Doe")
            .build()
            .expect("should build");

        let issued = vc.clone().issue(Proof {
            type_: "Ed25519Signature2018".into(),
            jws: Some("eyJhbGciOiAiRWREU0EifQ..sig".into()),
            ..Proof::default()
        });
        assert_eq!(issued.proof.type_, "Ed25519Signature2018");

        let back: VerifiableCredential = issued.into();
        assert_eq!(back.issuer, vc.issuer);
        assert!(back.proof.is_some());
    }

    #[test]
    fn status_defaults() {
        let status = CredentialStatus::default();
        assert_eq!(status.type_, CredentialStatus::TYPE);
        assert_eq!(status.status_purpose, CredentialStatus::PURPOSE);
        assert!(status.id.is_empty());
    }

    #[test]
    fn request_deserialization() {
        init_tracer();

        // issuanceDate explicitly null, isRevocable absent, one unknown key
        let request: CredentialRequest = serde_json::from_value(json!({
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "type": ["VerifiableCredential", "MembershipCredential"],
            "issuerIdentifier": "did:sov:issuer",
            "issuanceDate": null,
            "credentialSubject": {"memberOf": "Catena-X"},
            "unknown": "ignored"
        }))
        .expect("should deserialize");

        assert!(request.is_revocable, "isRevocable should default to true");
        assert!(request.issuance_date.is_none());
        assert!(!request.issuance_date_or_now().is_empty());
        assert_eq!(
            request.credential_subject.get("memberOf"),
            Some(&Value::String("Catena-X".into()))
        );

        let encoded = serde_json::to_value(&request).expect("should serialize");
        assert!(encoded.get("issuanceDate").is_none(), "unset dates should be omitted");
        assert_eq!(*encoded.get("isRevocable").expect("isRevocable should be set"), json!(true));
    }

    #[test]
    fn holder_request_requires_holder() {
        let err = serde_json::from_value::<CredentialRequestWithoutIssuer>(json!({
            "@context": [],
            "type": [],
            "credentialSubject": {}
        }))
        .expect_err("should fail");
        assert!(err.to_string().contains("holderIdentifier"));
    }

    #[test]
    fn list_subject_projection() {
        let subject = ListCredentialSubject {
            id: "https://example.com/status/1#list".into(),
            encoded_list: "H4sIAAAAAAAA".into(),
            ..ListCredentialSubject::default()
        };

        let value = subject.to_value().expect("should project");
        let object = value.as_object().expect("should be an object");
        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(keys, ["id", "type", "statusPurpose", "encodedList"]);
        assert_eq!(object["type"], Value::String("StatusList2021".into()));

        // projection matches the derived wire form
        let wire = serde_json::to_value(&subject).expect("should serialize");
        assert_eq!(value.to_json().expect("should project"), wire);
    }

    #[test]
    fn list_request_defaults() {
        let request: ListCredentialRequest = serde_json::from_value(json!({
            "subject": {"id": "https://example.com/status/1#list", "encodedList": "H4sI"}
        }))
        .expect("should deserialize");

        assert!(request.id.is_none());
        assert_eq!(request.subject.type_, ListCredentialSubject::TYPE);
        assert_eq!(request.subject.status_purpose, ListCredentialSubject::PURPOSE);
    }
}
