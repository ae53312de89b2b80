//! Deterministic, network-free substitutes for AI output.

/// Fallback template text built purely from the prompt.
pub fn fallback_template(prompt: &str) -> String {
    format!(
        "Hi [Name],\n\nI hope this message finds you well. {prompt}\n\n\
         I'd love to connect and learn more about your experience.\n\n\
         Best regards,\n[Your Name]"
    )
}

const NETWORKING_IDEAS: [&str; 5] = [
    "Professional introduction to industry peers",
    "Reconnecting with former colleagues",
    "Reaching out to thought leaders in your field",
    "Connecting with potential mentors",
    "Building relationships with industry influencers",
];

const SALES_IDEAS: [&str; 5] = [
    "Product demo request for qualified leads",
    "Case study sharing with prospects",
    "Industry insights sharing with potential clients",
    "Event invitation for prospects",
    "Follow-up after initial contact",
];

const FOLLOW_UP_IDEAS: [&str; 5] = [
    "Following up after a meeting or call",
    "Checking in after sending a proposal",
    "Reconnecting after a networking event",
    "Following up on a job application",
    "Thank you message after a successful project",
];

const GENERIC_IDEAS: [&str; 5] = [
    "Professional introduction message",
    "Industry insights sharing",
    "Event or webinar invitation",
    "Thank you and appreciation message",
    "Follow-up and next steps message",
];

/// Fixed idea list for a category name, matched case-insensitively.
///
/// Only `networking`, `sales`, and `follow-up` have dedicated lists; any
/// other name gets the generic list.
pub fn fallback_ideas(category: &str) -> Vec<String> {
    let ideas = match category.trim().to_lowercase().as_str() {
        "networking" => &NETWORKING_IDEAS,
        "sales" => &SALES_IDEAS,
        "follow-up" => &FOLLOW_UP_IDEAS,
        _ => &GENERIC_IDEAS,
    };
    ideas.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_embeds_prompt_between_fixed_lines() {
        let text = fallback_template("I saw your talk on async Rust.");
        assert_eq!(
            text,
            "Hi [Name],\n\nI hope this message finds you well. I saw your talk on async Rust.\n\n\
             I'd love to connect and learn more about your experience.\n\nBest regards,\n[Your Name]"
        );
    }

    #[test]
    fn known_categories_match_case_insensitively() {
        assert_eq!(fallback_ideas("NETWORKING")[0], NETWORKING_IDEAS[0]);
        assert_eq!(fallback_ideas("Sales")[1], SALES_IDEAS[1]);
        assert_eq!(fallback_ideas("Follow-Up")[4], FOLLOW_UP_IDEAS[4]);
    }

    #[test]
    fn unknown_category_gets_generic_list() {
        assert_eq!(fallback_ideas("Sales Outreach"), GENERIC_IDEAS.to_vec());
        assert_eq!(fallback_ideas(""), GENERIC_IDEAS.to_vec());
    }

    #[test]
    fn every_list_has_five_ideas() {
        for category in ["networking", "sales", "follow-up", "other"] {
            assert_eq!(fallback_ideas(category).len(), 5);
        }
    }
}
