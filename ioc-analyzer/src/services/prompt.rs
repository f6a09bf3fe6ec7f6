/// Wrap an incident description in the analyst instructions sent to the model.
///
/// The wording is fixed; earlier reports were generated from it verbatim.
pub fn incident_prompt(query: &str) -> String {
    format!(
        "Conduct a comprehensive analysis of the following incident data to identify potential security threats. \
         Please pinpoint date, timem any impacted systems and provide a detailed technical analysis of the threat, \
         including the nature of the threat, its potential impact, and recommended mitigation strategies. \
         The incident details are as follows: {}",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_query_at_the_end() {
        let prompt = incident_prompt("Outbound traffic to 203.0.113.7 from host db-02");

        assert!(prompt.starts_with("Conduct a comprehensive analysis"));
        assert!(prompt.ends_with(
            "The incident details are as follows: Outbound traffic to 203.0.113.7 from host db-02"
        ));
    }

    #[test]
    fn mentions_every_report_section() {
        let prompt = incident_prompt("x");
        assert!(prompt.contains("nature of the threat"));
        assert!(prompt.contains("potential impact"));
        assert!(prompt.contains("mitigation strategies"));
    }
}
