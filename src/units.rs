//! Conversion between lamports and SOL.
//!
//! The provider reports every amount in lamports; records carry the SOL
//! figure alongside for display.

/// 1 SOL = 10^9 lamports.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Approximate value in SOL as `f64` (useful for display).
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
