//! Category display formatting

use crate::models::CategorySet;

/// Numbered list of a category set, numbers usable for selection by index
pub fn format_category_list<C: CategorySet>(title: &str) -> String {
    let mut output = format!("{}\n", title);

    for category in C::ALL {
        output.push_str(&format!("  {:>2}. {}\n", category.position() + 1, category.label()));
    }

    output
}
