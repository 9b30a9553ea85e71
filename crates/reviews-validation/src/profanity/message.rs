/// Mask a term to its first and last character: `rooster` becomes
/// `r-----r`. A one-character term shows that character twice.
pub fn mask_term(term: &str) -> String {
    let chars: Vec<char> = term.chars().collect();
    match (chars.first(), chars.last()) {
        (Some(first), Some(last)) => {
            let hidden = "-".repeat(chars.len().saturating_sub(2));
            format!("{first}{hidden}{last}")
        }
        _ => String::new(),
    }
}

/// Join items as `a, b and c`.
fn text_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Message shown to a submitter whose comment contains `terms`.
pub fn profanity_message(terms: &[String]) -> String {
    let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", mask_term(t))).collect();
    if quoted.len() == 1 {
        format!("Watch your mouth! The word {} is not allowed here.", text_list(&quoted))
    } else {
        format!("Watch your mouth! The words {} are not allowed here.", text_list(&quoted))
    }
}
