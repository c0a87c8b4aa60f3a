//! Time verbalizer: και joins the clock fields.
//!
//! `time { hours: "εννέα" minutes: "πέντε" }` → `εννέα και πέντε`.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let hours = set.text("hours")?;
    let minutes = set.text("minutes")?;
    let mut out = format!("{hours} και {minutes}");
    if let Some(seconds) = set.text("seconds") {
        out = format!("{out} και {seconds}");
    }
    if let Some(suffix) = set.text("suffix") {
        out.push(' ');
        out.push_str(suffix);
    }
    Some(out)
}
