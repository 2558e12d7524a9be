pub(crate) const APE_PREAMBLE: &[u8] = b"APETAGEX";

// Keys that are forbidden from being used as item keys, either because they collide with
// other tag formats that can coexist in the same file, or because they have special meaning
// in the APE tag footer itself.
pub(crate) const INVALID_KEYS: [&str; 4] = ["ID3", "TAG", "OGGS", "MP+"];
