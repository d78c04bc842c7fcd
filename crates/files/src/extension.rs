use crate::constants::DEFAULT_EXTENSION;

/// Derives the stored file extension from the filename the client uploaded.
///
/// Returns everything from the last `.` onwards (`"pic.v2.jpg"` gives `".jpg"`), preserving case.
/// Falls back to [`DEFAULT_EXTENSION`] when the name is absent, has no `.`, ends in `.`, or the
/// text after the last `.` holds anything other than ASCII letters and digits. The fallback keeps
/// a hostile name such as `"a.b/../../x"` from ever becoming part of a stored path.
pub fn resolve_extension(original_filename: Option<&str>) -> &str {
    let Some(name) = original_filename else {
        return DEFAULT_EXTENSION;
    };

    match name.rfind('.') {
        Some(idx) => {
            let suffix = &name[idx + 1..];
            if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_alphanumeric()) {
                &name[idx..]
            } else {
                DEFAULT_EXTENSION
            }
        }
        None => DEFAULT_EXTENSION,
    }
}
