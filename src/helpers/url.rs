//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode a value for use as one URL path segment
///
/// # Examples
/// ```ignore
/// encode_segment("a/b c") // -> "a%2Fb%20c"
/// ```
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Local URL of a post detail page
///
/// # Examples
/// ```ignore
/// post_path("abc123") // -> "/post/abc123"
/// ```
pub fn post_path(id: &str) -> String {
    format!("/post/{}", encode_segment(id))
}
