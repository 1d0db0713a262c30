//! Layout constants shared by the packer, unpacker and native adapter.

/// Number of bits held by one buffer limb.
pub const LIMB_BITS: u32 = 64;

/// Name of the entry point every native simulation backend must export.
///
/// The symbol has the C ABI `void sim_run_all(uint64_t steps, uint64_t *ibuf, uint64_t *obuf)`.
pub const ENTRY_POINT: &str = "sim_run_all";
