// Stand-in for a compiled QuakeC program. Only the tag is meaningful; the
// engine's progs loader is not expected to accept it.

pub const PROGS_TAG: [u8; 8] = *b"PROGS\0\0\0";
pub const PROGS_STUB_PADDING: usize = 1000;

pub fn encode_progs_stub() -> Vec<u8> {
    let mut out = Vec::with_capacity(PROGS_TAG.len() + PROGS_STUB_PADDING);
    out.extend_from_slice(&PROGS_TAG);
    out.resize(PROGS_TAG.len() + PROGS_STUB_PADDING, 0);
    out
}
