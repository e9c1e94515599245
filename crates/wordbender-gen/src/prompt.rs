//! Prompt assembly shared by the wordlist profiles
//!
//! Every profile's prompt follows the same skeleton: who the model is, the
//! seed words, what to generate and how many, what to focus on, and the output
//! format rules (which restate the validator so the model has a fair chance of
//! complying - enforcement still happens in the pipeline).

/// Static parts of one kind's prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    /// One-sentence expert role for the model
    pub role: &'static str,

    /// What a single output item is, e.g. "potential subdomains"
    pub item_description: &'static str,

    /// Kind-specific generation guidance
    pub focus_areas: &'static [&'static str],

    /// Output format rules, mirroring the kind's validator
    pub output_rules: &'static [&'static str],
}

impl PromptTemplate {
    /// Render the full prompt for a seed set and target length
    pub fn render(&self, seeds: &[String], target_length: usize) -> String {
        let mut prompt = String::new();

        prompt.push_str(self.role);
        prompt.push_str("\n\n");

        prompt.push_str(&format!(
            "Given these seed words: {}\n\n",
            seeds.join(", ")
        ));

        prompt.push_str(&format!(
            "Generate exactly {} {}.\n\n",
            target_length, self.item_description
        ));

        prompt.push_str("Focus on:\n");
        prompt.push_str(&format_list(self.focus_areas));
        prompt.push_str("\n\n");

        prompt.push_str("Output rules:\n");
        prompt.push_str(&format_list(self.output_rules));
        prompt.push('\n');

        prompt
    }
}

/// Format items as a dashed list
pub fn format_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
