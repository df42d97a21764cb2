/// Returns true iff `phone` is exactly 10 ASCII digits.
///
/// The raw field value is matched verbatim: no trimming, no separators, no
/// country code. Anything else fails validation.
pub fn is_valid(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}
