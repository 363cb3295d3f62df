use crate::domain::error::ExpansionError;

#[must_use]
pub fn get_suggestions(error: &ExpansionError, base_url: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    match error {
        ExpansionError::Network(msg) => {
            let msg_lower = msg.to_lowercase();
            if msg_lower.contains("connect") || msg_lower.contains("refused") {
                suggestions.push(format!("Is the expansions server running at {base_url}?"));
            }
            if msg_lower.contains("404") {
                suggestions.push("Check base_url in ~/.config/npmx/config.toml".to_string());
            }
            if msg_lower.contains("406") {
                suggestions.push("The server does not serve application/json here".to_string());
            }
            if msg_lower.contains("500") || msg_lower.contains("502") || msg_lower.contains("503")
            {
                suggestions.push("The server failed; try again with r or a".to_string());
            }
        }
        ExpansionError::Parse(_) => {
            suggestions.push(format!(
                "{base_url} answered, but not with the expected JSON; is it the right server?"
            ));
        }
        ExpansionError::Clipboard(_) => {
            suggestions
                .push("Your terminal may not allow OSC 52 clipboard writes".to_string());
        }
        ExpansionError::RenderTargetMissing(target) => {
            suggestions.push(format!(
                "The {target} panel is disabled; set show_banner = true in the config"
            ));
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RenderTarget;

    const BASE: &str = "http://localhost:8000/";

    #[test]
    fn test_suggestions() {
        let s = get_suggestions(
            &ExpansionError::Network("error trying to connect: Connection refused".to_string()),
            BASE,
        );
        assert!(s.contains(&"Is the expansions server running at http://localhost:8000/?".to_string()));

        let s = get_suggestions(
            &ExpansionError::Network("http://localhost:8000/api/all returned 404 Not Found".to_string()),
            BASE,
        );
        assert!(s.contains(&"Check base_url in ~/.config/npmx/config.toml".to_string()));

        let s = get_suggestions(&ExpansionError::RenderTargetMissing(RenderTarget::Banner), BASE);
        assert_eq!(s.len(), 1);
        assert!(s[0].contains("banner"));
    }

    #[test]
    fn test_no_suggestion_for_unknown_network_error() {
        let s = get_suggestions(&ExpansionError::Network("tls handshake eof".to_string()), BASE);
        assert!(s.is_empty());
    }
}
