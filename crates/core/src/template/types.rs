/// A named prompt with one substitution point for the payload.
///
/// The preamble introduces the payload (e.g. `This is a C code:`) and the
/// instructions tell the model what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Identifier used in logs and verbose output.
    pub name: &'static str,
    /// Line placed before the quoted payload.
    pub preamble: &'static str,
    /// Instruction block placed after the quoted payload.
    pub instructions: &'static str,
}

impl PromptTemplate {
    /// Build the prompt for `payload`.
    ///
    /// The payload is inserted verbatim between double quotes. Only the
    /// template's own trailing whitespace is trimmed.
    pub fn compose(&self, payload: &str) -> String {
        let mut prompt = String::with_capacity(
            self.preamble.len() + payload.len() + self.instructions.len() + 8,
        );

        prompt.push_str(self.preamble.trim_end());
        prompt.push_str("\n\"");
        prompt.push_str(payload);
        prompt.push_str("\"\n\n");
        prompt.push_str(self.instructions.trim_end());

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: PromptTemplate = PromptTemplate {
        name: "test",
        preamble: "This is a payload:\n",
        instructions: "Do something with it\n",
    };

    #[test]
    fn test_compose_layout() {
        assert_eq!(
            TEMPLATE.compose("hello"),
            "This is a payload:\n\"hello\"\n\nDo something with it"
        );
    }

    #[test]
    fn test_compose_keeps_payload_whitespace() {
        let payload = "\n  indented\n\ttabbed  \n";
        let prompt = TEMPLATE.compose(payload);
        assert!(prompt.contains(payload));
    }

    #[test]
    fn test_compose_does_not_expand_placeholders_in_payload() {
        let payload = r#"{payload} ${userInput} "quoted" \n"#;
        let prompt = TEMPLATE.compose(payload);
        assert!(prompt.contains(payload));
        assert_eq!(prompt.matches("{payload}").count(), 1);
    }

    #[test]
    fn test_compose_empty_payload() {
        assert_eq!(
            TEMPLATE.compose(""),
            "This is a payload:\n\"\"\n\nDo something with it"
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let payload = "int main() { return 0; }";
        assert_eq!(TEMPLATE.compose(payload), TEMPLATE.compose(payload));
    }
}
