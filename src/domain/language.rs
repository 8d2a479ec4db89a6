/// Target languages whose translated text blocks must be right-aligned.
pub const RTL_LANGUAGE_CODES: &[&str] = &["fa", "ar", "he"];

pub fn is_rtl(code: &str) -> bool {
    RTL_LANGUAGE_CODES
        .iter()
        .any(|rtl| code.eq_ignore_ascii_case(rtl))
}
