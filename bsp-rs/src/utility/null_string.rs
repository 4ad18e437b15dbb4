/// Converts a null-padded fixed-length name into a string.
///
/// The name ends at the first null byte; anything after it is padding (or leftover
/// garbage from the tool that wrote the file). Invalid UTF-8 is replaced lossily.
pub(crate) fn trim_null_terminated(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
