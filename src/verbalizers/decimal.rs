//! Decimal verbalizer: κόμμα joins the parts.
//!
//! `decimal { integer_part: "τρία" fractional_part: "ένα τέσσερα" }` →
//! `τρία κόμμα ένα τέσσερα`.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let integer = set.text("integer_part")?;
    let fraction = set.text("fractional_part")?;
    let mut out = format!("{integer} κόμμα {fraction}");
    if let Some(quantity) = set.text("quantity") {
        out.push(' ');
        out.push_str(quantity);
    }
    Some(out)
}
