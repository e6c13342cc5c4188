//! Alternative implementations of one text-cleaning function
//!
//! Every variant strips control characters (scalar values below 0x20) from
//! its input and must produce identical output. They differ only in how the
//! result string is grown, which is exactly what the benchmark suite
//! compares. These are workloads fed into the harness, not part of it.

/// True for the characters every variant removes.
#[inline]
pub fn is_ctrl(c: char) -> bool {
    (c as u32) < 0x20
}

/// Naive baseline: a fresh temporary per kept character.
///
/// Deliberately quadratic. Each `+` allocates a new string from the
/// accumulated prefix, which is the behavior the rest of the family
/// progressively removes.
pub fn remove_ctrl_concat(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        if !is_ctrl(c) {
            result = result + &c.to_string();
        }
    }
    result
}

/// Mutating append, no reallocation games beyond amortized growth.
pub fn remove_ctrl_push(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        if !is_ctrl(c) {
            result.push(c);
        }
    }
    result
}

/// `push` with the result capacity reserved up front.
pub fn remove_ctrl_reserve(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if !is_ctrl(c) {
            result.push(c);
        }
    }
    result
}

/// Byte-wise scan.
///
/// Control characters are single bytes in UTF-8 and every byte of a
/// multi-byte sequence is >= 0x80, so filtering bytes below 0x20 keeps the
/// output valid UTF-8.
pub fn remove_ctrl_bytes(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    for &b in s.as_bytes() {
        if b >= 0x20 {
            out.push(b);
        }
    }
    // invariant above: only ASCII controls were dropped
    debug_assert!(std::str::from_utf8(&out).is_ok());
    unsafe { String::from_utf8_unchecked(out) }
}

/// Block append: find maximal clean runs and copy whole slices.
pub fn remove_ctrl_blocks(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len());
    let mut block_start = 0;
    while block_start < bytes.len() {
        let mut i = block_start;
        while i < bytes.len() && bytes[i] >= 0x20 {
            i += 1;
        }
        result.push_str(&s[block_start..i]);
        block_start = i + 1;
    }
    result
}

/// Iterator pipeline: filter and collect.
pub fn remove_ctrl_filter(s: &str) -> String {
    s.chars().filter(|&c| !is_ctrl(c)).collect()
}

/// In-place removal on an owned string via `retain`.
pub fn remove_ctrl_retain(mut s: String) -> String {
    s.retain(|c| !is_ctrl(c));
    s
}

/// Refill a caller-owned output buffer, block-append style.
///
/// Returns nothing; the point of this variant is reusing one allocation
/// across calls. The buffer is cleared here, not by the caller.
pub fn remove_ctrl_into(result: &mut String, s: &str) {
    result.clear();
    result.reserve(s.len());
    let bytes = s.as_bytes();
    let mut block_start = 0;
    while block_start < bytes.len() {
        let mut i = block_start;
        while i < bytes.len() && bytes[i] >= 0x20 {
            i += 1;
        }
        result.push_str(&s[block_start..i]);
        block_start = i + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{sample_clean, sample_text};

    fn all_variants(s: &str) -> Vec<(&'static str, String)> {
        let mut buf = String::from("stale leftovers");
        remove_ctrl_into(&mut buf, s);
        vec![
            ("concat", remove_ctrl_concat(s)),
            ("push", remove_ctrl_push(s)),
            ("reserve", remove_ctrl_reserve(s)),
            ("bytes", remove_ctrl_bytes(s)),
            ("blocks", remove_ctrl_blocks(s)),
            ("filter", remove_ctrl_filter(s)),
            ("retain", remove_ctrl_retain(s.to_string())),
            ("into", buf),
        ]
    }

    #[test]
    fn variants_agree_on_sample_text() {
        let expected = sample_clean(3);
        for (name, got) in all_variants(&sample_text(3)) {
            assert_eq!(got, expected, "variant {name} diverged");
        }
    }

    #[test]
    fn output_has_no_control_characters() {
        for (name, got) in all_variants("a\x07b\r\nc\x1fd\x08") {
            assert_eq!(got, "abcd", "variant {name}");
            assert!(!got.chars().any(is_ctrl));
        }
    }

    #[test]
    fn clean_input_passes_through() {
        let s = "already clean input, nothing to strip";
        for (name, got) in all_variants(s) {
            assert_eq!(got, s, "variant {name}");
        }
    }

    #[test]
    fn empty_and_all_ctrl_inputs() {
        for (name, got) in all_variants("") {
            assert_eq!(got, "", "variant {name} on empty");
        }
        for (name, got) in all_variants("\x00\x01\x1f\n\t") {
            assert_eq!(got, "", "variant {name} on all-control");
        }
    }

    #[test]
    fn multibyte_text_survives() {
        let s = "héllo\x07 wörld\r\n—done";
        for (name, got) in all_variants(s) {
            assert_eq!(got, "héllo wörld—done", "variant {name}");
        }
    }

    #[test]
    fn into_buffer_is_reusable() {
        let mut buf = String::new();
        remove_ctrl_into(&mut buf, "first\x07call");
        assert_eq!(buf, "firstcall");
        remove_ctrl_into(&mut buf, "second");
        assert_eq!(buf, "second");
    }
}
