use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose closure returned Ok.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit, the normal server behavior.
    #[default]
    CommitOnOk,
    /// Roll back anyway. Store-backed tests set this once so every case
    /// leaves the database exactly as it found it.
    RollbackOnOk,
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or_default()
}

/// First call wins for the lifetime of the process; later calls are
/// ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}
