//! Prompt template assembly.
//!
//! Builds the single natural-language instruction sent to the generation
//! backend. Plain string building, no templating engine: the field set is
//! closed and the output must be byte-identical for identical input.

use zakhmverse_core::PoemRequest;

const PREAMBLE: &str =
    "You are a skilled poet. Generate a poem based on the following prompt and constraints.";

/// Labeled constraint fields in their fixed output order.
fn labeled_fields(request: &PoemRequest) -> [(&'static str, &Option<String>); 6] {
    [
        ("Mood", request.mood()),
        ("Language", request.language()),
        ("Style", request.style()),
        ("Length", request.length()),
        ("Keywords", request.keywords()),
        ("Rhyme", request.rhyme()),
    ]
}

/// Assemble the instruction for a validated request.
///
/// The preamble and prompt line always appear. Each present constraint
/// contributes exactly one `Label: value` line, in the fixed order Mood,
/// Language, Style, Length, Keywords, Rhyme; absent constraints are
/// omitted entirely rather than rendered blank. The instruction closes
/// with a `Poem:` cue.
pub fn assemble(request: &PoemRequest) -> String {
    let mut instruction = String::new();
    instruction.push_str(PREAMBLE);
    instruction.push_str("\n\nPrompt: ");
    instruction.push_str(request.prompt());

    let mut in_label_block = false;
    for (label, value) in labeled_fields(request) {
        if let Some(value) = value {
            if !in_label_block {
                instruction.push('\n');
                in_label_block = true;
            }
            instruction.push('\n');
            instruction.push_str(label);
            instruction.push_str(": ");
            instruction.push_str(value);
        }
    }

    instruction.push_str("\n\nPoem:");
    instruction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_prompt_has_no_constraint_block() {
        let request = PoemRequest::from_prompt("a quiet lake at dawn");
        assert_eq!(
            assemble(&request),
            "You are a skilled poet. Generate a poem based on the following prompt and constraints.\n\nPrompt: a quiet lake at dawn\n\nPoem:"
        );
    }

    #[test]
    fn present_constraints_each_get_one_labeled_line() {
        let request = PoemRequest::builder()
            .prompt("a quiet lake at dawn")
            .mood("reflective")
            .style("haiku")
            .build()
            .unwrap();
        assert_eq!(
            assemble(&request),
            "You are a skilled poet. Generate a poem based on the following prompt and constraints.\n\nPrompt: a quiet lake at dawn\n\nMood: reflective\nStyle: haiku\n\nPoem:"
        );
    }

    #[test]
    fn constraints_keep_their_fixed_order() {
        let request = PoemRequest::builder()
            .prompt("the city")
            .rhyme("AABB")
            .keywords("neon, rain")
            .length("short")
            .style("free verse")
            .language("informal")
            .mood("mysterious")
            .build()
            .unwrap();

        let instruction = assemble(&request);
        let mood = instruction.find("Mood:").unwrap();
        let language = instruction.find("Language:").unwrap();
        let style = instruction.find("Style:").unwrap();
        let length = instruction.find("Length:").unwrap();
        let keywords = instruction.find("Keywords:").unwrap();
        let rhyme = instruction.find("Rhyme:").unwrap();
        assert!(mood < language);
        assert!(language < style);
        assert!(style < length);
        assert!(length < keywords);
        assert!(keywords < rhyme);
    }

    #[test]
    fn absent_constraints_leave_no_trace() {
        let request = PoemRequest::builder()
            .prompt("the city")
            .length("short")
            .build()
            .unwrap();

        let instruction = assemble(&request);
        assert!(instruction.contains("Length: short"));
        assert!(!instruction.contains("Mood:"));
        assert!(!instruction.contains("Language:"));
        assert!(!instruction.contains("Style:"));
        assert!(!instruction.contains("Keywords:"));
        assert!(!instruction.contains("Rhyme:"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let request = PoemRequest::builder()
            .prompt("the city")
            .mood("humorous")
            .keywords("pigeons")
            .build()
            .unwrap();
        assert_eq!(assemble(&request), assemble(&request));
    }
}
