//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Used for log lines that echo free-text labels from the prediction
/// service.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Human-readable form of a model key (`Random_Forest_Prediction` → `Random Forest Prediction`)
pub fn display_model_key(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("Migraine", 10), "Migraine");
        assert_eq!(truncate("Mild Cognitive Impairment (MCI)", 12), "Mild Cogn...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is two bytes; cutting inside it backs up to the boundary
        assert_eq!(truncate("ééééé", 6), "é...");
    }

    #[test]
    fn test_display_model_key() {
        assert_eq!(
            display_model_key("Gradient_Boosting_Prediction"),
            "Gradient Boosting Prediction"
        );
        assert_eq!(display_model_key("GB"), "GB");
    }
}
