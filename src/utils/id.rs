/// Generates a random token usable as a per-request identifier.
///
/// The token is 30 characters long, drawn from uppercase English letters
/// (`A-Z`) and digits (`0-9`) with the `nanoid` generator, so it is
/// collision-resistant for the lifetime of a process.
///
/// # Examples
/// ```
/// use crypto_tracker::utils::id::get_id;
/// let id = get_id();
/// assert_eq!(id.len(), 30);
/// ```
pub fn get_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(30, &alphabet)
}
