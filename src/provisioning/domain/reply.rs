use crate::shared::{RelayError, RelayResult};
use serde::Serialize;
use serde_json::Value;

/// A reply ready to hand back to the caller: status code plus JSON body.
///
/// Live backends fill this with the upstream status and body untouched;
/// the simulated backend builds it from typed responses.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayReply {
    pub status: u16,
    pub body: Value,
}

impl RelayReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// Serializes a typed response into a 200 reply.
    pub fn from_response<T: Serialize>(response: &T) -> RelayResult<Self> {
        let body = serde_json::to_value(response)
            .map_err(|e| RelayError::internal(format!("Failed to encode response: {}", e)))?;
        Ok(Self::ok(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provisioning::domain::ProjectInitResponse;

    #[test]
    fn test_from_response_is_ok_status() {
        let reply = RelayReply::from_response(&ProjectInitResponse::initialized("./x")).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["workdir"], "./x");
        assert_eq!(reply.body["success"], true);
    }
}
