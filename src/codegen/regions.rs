//! Editable regions of a previously generated file.
//!
//! Users may write code between the marker pairs. Regeneration copies what it
//! finds there back into the new output. A hand-edited file can lose markers;
//! in that case the affected region falls back to the placeholder and the rest
//! is still recovered.

use log::warn;

pub const PRE_INIT_BEGIN: &str = "/* --- pre-init-begin --- */";
pub const PRE_INIT_END: &str = "/* --- pre-init-end --- */";
pub const POST_INIT_BEGIN: &str = "/* --- post-init-begin --- */";
pub const POST_INIT_END: &str = "/* --- post-init-end --- */";
pub const END_GENERATED_CODE: &str = "/* --- end generated code --- */";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    pub pre_init: String,
    pub post_init: String,
    pub trailing: String,
}

/// Default contents of a region, e.g. `"\n\t// -- user code here --\n\t"`.
pub fn placeholder(indent: &str, message: &str) -> String {
    format!("\n{indent}// -- {message} --\n{indent}")
}

/// Recover the three regions from `previous`.
///
/// `body_placeholder` fills the pre/post-init regions and
/// `trailing_placeholder` the text after the end marker whenever `previous` is
/// `None` or the corresponding markers are missing.
pub fn extract_regions(
    previous: Option<&str>,
    body_placeholder: &str,
    trailing_placeholder: &str,
) -> Regions {
    let Some(text) = previous else {
        return Regions {
            pre_init: body_placeholder.to_string(),
            post_init: body_placeholder.to_string(),
            trailing: trailing_placeholder.to_string(),
        };
    };

    let pre = between(text, PRE_INIT_BEGIN, PRE_INIT_END);
    let post = between(text, POST_INIT_BEGIN, POST_INIT_END);

    let trailing_from = post.map(|(_, end)| end).unwrap_or(0);
    let trailing = text[trailing_from..]
        .find(END_GENERATED_CODE)
        .map(|i| &text[trailing_from + i + END_GENERATED_CODE.len()..]);

    if pre.is_none() {
        warn!("pre-init markers not found, restoring placeholder");
    }
    if post.is_none() {
        warn!("post-init markers not found, restoring placeholder");
    }
    if trailing.is_none() {
        warn!("end-of-generated-code marker not found, restoring placeholder");
    }

    Regions {
        pre_init: pre
            .map(|(r, _)| r.to_string())
            .unwrap_or_else(|| body_placeholder.to_string()),
        post_init: post
            .map(|(r, _)| r.to_string())
            .unwrap_or_else(|| body_placeholder.to_string()),
        trailing: trailing
            .map(str::to_string)
            .unwrap_or_else(|| trailing_placeholder.to_string()),
    }
}

/// Text strictly between the first `begin` and the first `end` after it.
/// Also returns the byte offset just past `end`.
fn between<'a>(text: &'a str, begin: &str, end: &str) -> Option<(&'a str, usize)> {
    let start = text.find(begin)? + begin.len();
    let stop = start + text[start..].find(end)?;
    Some((&text[start..stop], stop + end.len()))
}
