//! Category display formatting

use crate::models::{Category, Section};

/// Format categories grouped by section
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'billbrain category seed' to create the defaults."
            .to_string();
    }

    let mut output = String::new();

    for &section in Section::all() {
        let in_section: Vec<_> = categories.iter().filter(|c| c.section == section).collect();
        if in_section.is_empty() {
            continue;
        }

        output.push_str(&format!("{}\n", section));
        for (i, category) in in_section.iter().enumerate() {
            let is_last = i == in_section.len() - 1;
            let prefix = if is_last { "└── " } else { "├── " };
            let seeded = if category.is_default { "" } else { " (custom)" };
            output.push_str(&format!("  {}{}{}\n", prefix, category.name, seeded));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    #[test]
    fn test_empty_list_hints_at_seeding() {
        let text = format_category_list(&[]);
        assert!(text.contains("category seed"));
    }

    #[test]
    fn test_grouped_by_section() {
        let owner = UserId::new();
        let categories = vec![
            Category::new(owner, "Food & Dining", Section::Personal),
            Category::new(owner, "Travel", Section::Business),
        ];

        let text = format_category_list(&categories);
        assert!(text.contains("Personal"));
        assert!(text.contains("Business"));
        assert!(text.contains("Food & Dining"));
        assert!(text.contains("(custom)"));
    }
}
