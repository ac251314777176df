/// Opaque bearer token presented by a client. Issuance lives in the
/// identity subsystem; this service only resolves tokens to user ids.
pub struct AccessToken(pub String);
