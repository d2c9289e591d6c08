use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use tracing::Level;

/// Deterministic key: 32 copies of `seed`.
pub fn sample_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

/// Route `tracing` output through the test harness so it only shows for
/// failing tests. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// `(key, is_signer, is_writable)` for each account of `ix`, in order.
pub fn account_flags(ix: &Instruction) -> Vec<(Pubkey, bool, bool)> {
    ix.accounts
        .iter()
        .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
        .collect()
}

/// Little-endian u32 length prefix followed by the string bytes.
pub fn prefixed(s: &str) -> Vec<u8> {
    let mut out = (s.len() as u32).to_le_bytes().to_vec();
    out.extend_from_slice(s.as_bytes());
    out
}
