/// Server error code most nodes use for rejected transactions.
pub const SERVER_ERROR_CODE: i32 = -32000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    #[error("JSON-RPC error {code}: {message}")]
    Call { code: i32, message: String },

    #[error("Transport error: {underlying}")]
    Transport { underlying: String },

    #[error("Failed to decode response: {underlying}")]
    Decode { underlying: String },
}

impl RpcError {
    /// Whether the node rejected a transaction because its nonce is stale
    /// or already taken, in which case the local counter must be resynced.
    pub fn is_nonce_conflict(&self) -> bool {
        match self {
            RpcError::Call { code, message } => {
                *code == SERVER_ERROR_CODE || message.to_ascii_lowercase().contains("nonce")
            }
            _ => false,
        }
    }
}
