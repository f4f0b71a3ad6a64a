//! # Credential Document Codec
//!
//! Wire codec for [`VerifiableCredential`] and [`IssuedVerifiableCredential`].
//!
//! Decoding walks the top-level object's entries in source order: keys in the
//! fixed schema populate typed fields, everything else is captured into the
//! extension bag in encounter order. Schema fields the active variant
//! requires must be present; nested `credentialStatus` and `proof` objects
//! are decoded leniently, with missing fields falling back to defaults.
//!
//! Encoding is the mirror image: schema fields first, in declared order, with
//! absent optional fields omitted entirely, then the extension bag in its
//! captured order. Decode followed by encode therefore reproduces the source
//! property order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::credential::{
    CredentialStatus, IssuedVerifiableCredential, Proof, VerifiableCredential,
};
use crate::error::Error;
use crate::value::{Map, Value};
use crate::{scalar, Result};

/// Top-level keys belonging to the fixed credential schema, in encode order.
pub(crate) const SCHEMA_KEYS: [&str; 9] = [
    "id",
    "@context",
    "type",
    "issuer",
    "issuanceDate",
    "expirationDate",
    "credentialSubject",
    "credentialStatus",
    "proof",
];

/// Decodes a document from a parsed JSON tree.
///
/// The target type decides which schema fields are mandatory; both document
/// variants share the same field walker.
pub(crate) fn decode<T: FromParts>(wire: &serde_json::Value) -> Result<T> {
    tracing::trace!("codec::decode");

    let Some(entries) = wire.as_object() else {
        return Err(Error::NotAnObject("credential".to_string()));
    };

    let mut parts = Parts::default();
    for (key, value) in entries {
        parts.set(key, value)?;
    }
    T::from_parts(parts)
}

/// Accumulates top-level fields as the walker encounters them. Requiredness
/// is not checked until [`FromParts::from_parts`] assembles a document, so
/// one walker serves both variants.
#[derive(Default)]
pub(crate) struct Parts {
    id: Option<String>,
    context: Option<Vec<String>>,
    type_: Option<Vec<String>>,
    issuer: Option<String>,
    issuance_date: Option<String>,
    expiration_date: Option<String>,
    credential_subject: Option<Map>,
    credential_status: Option<CredentialStatus>,
    proof: Option<Proof>,
    extra: Map,
}

impl Parts {
    /// Dispatches one top-level entry. Unrecognized keys land in the
    /// extension bag; a repeated key keeps its first position with the last
    /// value, matching the behavior of the wire parser's own maps.
    fn set(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        match key {
            "id" => self.id = Some(scalar::content(value)?),
            "@context" => self.context = Some(string_array(value)?),
            "type" => self.type_ = Some(string_array(value)?),
            "issuer" => self.issuer = Some(scalar::content(value)?),
            "issuanceDate" => self.issuance_date = Some(scalar::content(value)?),
            "expirationDate" => self.expiration_date = Some(scalar::content(value)?),
            "credentialSubject" => self.credential_subject = Some(subject(value)?),
            "credentialStatus" => self.credential_status = Some(status_from_json(value)?),
            "proof" => self.proof = Some(proof_from_json(value)?),
            _ => {
                self.extra.insert(key.to_string(), Value::from_json(value)?);
            }
        }
        Ok(())
    }
}

/// Assembly of a document variant from walked [`Parts`], enforcing the
/// variant's mandatory fields.
pub(crate) trait FromParts: Sized {
    fn from_parts(parts: Parts) -> Result<Self>;
}

impl FromParts for VerifiableCredential {
    fn from_parts(parts: Parts) -> Result<Self> {
        Ok(Self {
            id: parts.id,
            context: require(parts.context, "@context")?,
            type_: require(parts.type_, "type")?,
            issuer: require(parts.issuer, "issuer")?,
            issuance_date: require(parts.issuance_date, "issuanceDate")?,
            expiration_date: parts.expiration_date,
            credential_subject: require(parts.credential_subject, "credentialSubject")?,
            credential_status: parts.credential_status,
            proof: parts.proof,
            extra: parts.extra,
        })
    }
}

impl FromParts for IssuedVerifiableCredential {
    fn from_parts(parts: Parts) -> Result<Self> {
        Ok(Self {
            id: parts.id,
            context: require(parts.context, "@context")?,
            type_: require(parts.type_, "type")?,
            issuer: require(parts.issuer, "issuer")?,
            issuance_date: require(parts.issuance_date, "issuanceDate")?,
            expiration_date: parts.expiration_date,
            credential_subject: require(parts.credential_subject, "credentialSubject")?,
            credential_status: parts.credential_status,
            proof: require(parts.proof, "proof")?,
            extra: parts.extra,
        })
    }
}

fn require<T>(field: Option<T>, key: &str) -> Result<T> {
    field.ok_or_else(|| Error::MissingRequiredField(key.to_string()))
}

/// `@context` and `type` must be arrays of strings.
fn string_array(wire: &serde_json::Value) -> Result<Vec<String>> {
    let Some(items) = wire.as_array() else {
        return Err(Error::MalformedLiteral(wire.to_string()));
    };

    let mut array = Vec::with_capacity(items.len());
    for item in items {
        let Some(s) = item.as_str() else {
            return Err(Error::MalformedLiteral(item.to_string()));
        };
        array.push(s.to_string());
    }
    Ok(array)
}

/// `credentialSubject` must be an object; its values are arbitrary.
fn subject(wire: &serde_json::Value) -> Result<Map> {
    let Some(entries) = wire.as_object() else {
        return Err(Error::NotAnObject("credentialSubject".to_string()));
    };

    let mut claims = Map::with_capacity(entries.len());
    for (key, value) in entries {
        claims.insert(key.clone(), Value::from_json(value)?);
    }
    Ok(claims)
}

/// Lenient `credentialStatus` decoding: recognized fields overwrite the
/// defaults, unknown fields are ignored, and nothing is mandatory.
fn status_from_json(wire: &serde_json::Value) -> Result<CredentialStatus> {
    let Some(entries) = wire.as_object() else {
        return Err(Error::NotAnObject("credentialStatus".to_string()));
    };

    let mut status = CredentialStatus::default();
    for (key, value) in entries {
        match key.as_str() {
            "id" => status.id = scalar::content(value)?,
            "type" => status.type_ = scalar::content(value)?,
            "statusPurpose" => status.status_purpose = scalar::content(value)?,
            "statusListIndex" => status.status_list_index = scalar::content(value)?,
            "statusListCredential" => status.status_list_credential = scalar::content(value)?,
            _ => {}
        }
    }
    Ok(status)
}

/// Lenient `proof` decoding. Optional fields stay absent when missing; an
/// explicit `null` decodes to the literal string `"null"`.
fn proof_from_json(wire: &serde_json::Value) -> Result<Proof> {
    let Some(entries) = wire.as_object() else {
        return Err(Error::NotAnObject("proof".to_string()));
    };

    let mut proof = Proof::default();
    for (key, value) in entries {
        match key.as_str() {
            "type" => proof.type_ = scalar::content(value)?,
            "created" => proof.created = scalar::content(value)?,
            "proofPurpose" => proof.proof_purpose = scalar::content(value)?,
            "verificationMethod" => proof.verification_method = scalar::content(value)?,
            "jws" => proof.jws = Some(scalar::content(value)?),
            "proofValue" => proof.proof_value = Some(scalar::content(value)?),
            "creator" => proof.creator = Some(scalar::content(value)?),
            "domain" => proof.domain = Some(scalar::content(value)?),
            "challenge" => proof.challenge = Some(scalar::content(value)?),
            "nonce" => proof.nonce = Some(scalar::content(value)?),
            _ => {}
        }
    }
    Ok(proof)
}

fn deserialize_document<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromParts,
    D: Deserializer<'de>,
{
    struct DocVisitor<T>(PhantomData<fn() -> T>);

    impl<'de, T> Visitor<'de> for DocVisitor<T>
    where
        T: FromParts,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("credential object")
        }

        fn visit_map<M>(self, mut map: M) -> Result<T, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut parts = Parts::default();
            while let Some(key) = map.next_key::<String>()? {
                let value: serde_json::Value = map.next_value()?;
                parts.set(&key, &value).map_err(de::Error::custom)?;
            }
            T::from_parts(parts).map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_map(DocVisitor(PhantomData))
}

impl<'de> Deserialize<'de> for VerifiableCredential {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_document(deserializer)
    }
}

impl<'de> Deserialize<'de> for IssuedVerifiableCredential {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_document(deserializer)
    }
}

impl<'de> Deserialize<'de> for CredentialStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = serde_json::Value::deserialize(deserializer)?;
        status_from_json(&wire).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Proof {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = serde_json::Value::deserialize(deserializer)?;
        proof_from_json(&wire).map_err(de::Error::custom)
    }
}

/// Borrowed view used to emit both document variants through one ordered
/// walker.
struct Fields<'a> {
    id: Option<&'a String>,
    context: &'a [String],
    type_: &'a [String],
    issuer: &'a str,
    issuance_date: &'a str,
    expiration_date: Option<&'a String>,
    credential_subject: &'a Map,
    credential_status: Option<&'a CredentialStatus>,
    proof: Option<&'a Proof>,
    extra: &'a Map,
}

impl Serialize for Fields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = self.id {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry("@context", self.context)?;
        map.serialize_entry("type", self.type_)?;
        map.serialize_entry("issuer", self.issuer)?;
        map.serialize_entry("issuanceDate", self.issuance_date)?;
        if let Some(date) = self.expiration_date {
            map.serialize_entry("expirationDate", date)?;
        }
        map.serialize_entry("credentialSubject", self.credential_subject)?;
        if let Some(status) = self.credential_status {
            map.serialize_entry("credentialStatus", status)?;
        }
        if let Some(proof) = self.proof {
            map.serialize_entry("proof", proof)?;
        }
        for (key, value) in self.extra {
            // a hand-built bag may shadow a schema key; the schema field wins
            if SCHEMA_KEYS.contains(&key.as_str()) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for VerifiableCredential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Fields {
            id: self.id.as_ref(),
            context: &self.context,
            type_: &self.type_,
            issuer: &self.issuer,
            issuance_date: &self.issuance_date,
            expiration_date: self.expiration_date.as_ref(),
            credential_subject: &self.credential_subject,
            credential_status: self.credential_status.as_ref(),
            proof: self.proof.as_ref(),
            extra: &self.extra,
        }
        .serialize(serializer)
    }
}

impl Serialize for IssuedVerifiableCredential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Fields {
            id: self.id.as_ref(),
            context: &self.context,
            type_: &self.type_,
            issuer: &self.issuer,
            issuance_date: &self.issuance_date,
            expiration_date: self.expiration_date.as_ref(),
            credential_subject: &self.credential_subject,
            credential_status: self.credential_status.as_ref(),
            proof: Some(&self.proof),
            extra: &self.extra,
        }
        .serialize(serializer)
    }
}
