pub(crate) const PLACEHOLDER: &str = "[secure]";

/// Replace every occurrence of every configured secret with the
/// placeholder. Replacement is sequential in secret-list order, so a
/// secret introduced by an earlier replacement is still caught by a
/// later pass.
pub(crate) fn redact(line: &str, secrets: &[String]) -> String {
    if secrets.is_empty() {
        return line.to_string();
    }

    let mut safe = line.to_string();
    for secret in secrets {
        safe = safe.replace(secret.as_str(), PLACEHOLDER);
    }
    safe
}
